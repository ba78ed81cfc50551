//! TUI pane rendering modules
//!
//! - [`bars`]: the bar canvas, one bar per array element, colored by highlight role
//! - [`status`]: status bar with the sorting state, the latest banner and keybindings
//!
//! [`draw_view`] lays both out for a full frame.

pub mod bars;
pub mod status;

pub use bars::{bar_style, render_bars_pane, BarRole, BarStyle, Fill};
pub use status::render_status_bar;

use crate::engine::StepFrame;
use crate::session::SortState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draw a complete frame: bars on top, status bar on the last row
pub fn draw_view(
    frame: &mut Frame,
    step: &StepFrame<'_>,
    state: SortState,
    message: &str,
    on_bar: &dyn Fn(),
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_bars_pane(frame, chunks[0], step, on_bar);
    render_status_bar(frame, chunks[1], state, message);
}
