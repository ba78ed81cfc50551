//! Status bar rendering with keybindings and state indicators

use crate::session::SortState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &str = " 0 new list | 1-6 sort | q quit ";

/// The badge text and color for a sorting state
pub fn state_badge(state: SortState) -> (String, Color) {
    match state {
        SortState::Unsorted => (" READY ".to_string(), DEFAULT_THEME.idle),
        SortState::Running(alg) => (format!(" RUNNING {} ", alg), DEFAULT_THEME.active),
        SortState::Sorted(alg) => (format!(" SORTED {} ", alg), DEFAULT_THEME.sorted),
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: SortState, message: &str) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let (badge, badge_color) = state_badge(state);
    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    let right = Paragraph::new(Line::from(Span::styled(
        KEY_HINTS,
        Style::default().fg(DEFAULT_THEME.comment),
    )))
    .style(Style::default().bg(DEFAULT_THEME.status_bg))
    .alignment(Alignment::Right);

    frame.render_widget(left, layout[0]);
    frame.render_widget(right, layout[1]);
}
