//! # Introduction
//!
//! sortty animates six classic comparison sorts over a fixed array of random
//! values, drawing one bar per element in the terminal with
//! [ratatui](https://docs.rs/ratatui) and highlighting the elements each step
//! touches.
//!
//! ## Step pipeline
//!
//! ```text
//! Key → Command → Session → Algorithm → StepSink → Frame
//! ```
//!
//! 1. [`data`]: the working array and the backup it is restored from before
//!    every run.
//! 2. [`engine`]: selection, insertion, bubble, merge, quick and heap sort,
//!    each reporting its steps to an injected [`engine::StepSink`].
//! 3. [`session`]: owns the data and the sorting state; a run borrows it
//!    mutably, so only one can be active.
//! 4. [`ui`]: the controller loop, the terminal step renderer and the panes.
//! 5. [`narrator`]: console introduction, controls menu and banners.
//!
//! [`config`], [`logging`] and [`error`] cover command-line flags, the
//! optional log file and the error type shared by the binary.

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod logging;
pub mod narrator;
pub mod session;
pub mod ui;
