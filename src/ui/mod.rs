//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: the session controller: key event loop, command dispatch, idle frames
//! - **[`renderer`]**: the [`StepSink`] that draws algorithm steps to the terminal
//! - **[`panes`]**: stateless render functions for the bar canvas and the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and
//! call [`App::run`] to start the event loop.
//!
//! [`StepSink`]: crate::engine::StepSink
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod renderer;
pub mod theme;

pub use app::{App, Command};
pub use renderer::{RenderOptions, TerminalRenderer};
