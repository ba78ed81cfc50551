// Integration tests for what the bar canvas actually paints

use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;
use sortty::data::constants::ARRAY_SIZE;
use sortty::data::Value;
use sortty::engine::{Algorithm, Highlights, StepFrame};
use sortty::session::SortState;
use sortty::ui::panes::draw_view;
use sortty::ui::theme::DEFAULT_THEME;
use std::cell::Cell;

const WIDTHS: [u16; 3] = [80, 120, 200];

/// Draw one frame and report whether any bar-area cell uses `color` as foreground
fn paints_color(width: u16, step: &StepFrame<'_>, color: Color) -> bool {
    let mut terminal = Terminal::new(TestBackend::new(width, 30)).expect("test backend");
    terminal
        .draw(|f| {
            draw_view(
                f,
                step,
                SortState::Running(Algorithm::Heap),
                "HEAP SORT STARTED.",
                &|| {},
            )
        })
        .expect("draw");

    let buffer = terminal.backend().buffer();
    // the last row is the status bar
    (0..buffer.area.height - 1)
        .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
        .any(|pos| buffer[pos].fg == color)
}

fn hidden_indices(width: u16, highlights_for: impl Fn(usize) -> Highlights, color: Color) -> Vec<usize> {
    let values: Vec<Value> = vec![700; ARRAY_SIZE];
    (0..ARRAY_SIZE)
        .filter(|&i| !paints_color(width, &StepFrame::step(&values, highlights_for(i)), color))
        .collect()
}

#[test]
fn test_comparison_highlight_visible_at_every_index() {
    for width in WIDTHS {
        let hidden = hidden_indices(width, Highlights::one, DEFAULT_THEME.comparison);
        assert!(hidden.is_empty(), "width {}: hidden at {:?}", width, hidden);
    }
}

#[test]
fn test_active_highlight_visible_at_every_index() {
    for width in WIDTHS {
        let hidden = hidden_indices(width, Highlights::active, DEFAULT_THEME.active);
        assert!(hidden.is_empty(), "width {}: hidden at {:?}", width, hidden);
    }
}

#[test]
fn test_active_visible_next_to_comparison() {
    // neighbouring roles share a cell at narrow widths; both must still show
    let values: Vec<Value> = vec![700; ARRAY_SIZE];
    for i in 0..ARRAY_SIZE - 2 {
        let step = StepFrame::step(&values, Highlights::two(i, i + 2));
        assert!(paints_color(80, &step, DEFAULT_THEME.comparison), "index {}", i);
        assert!(paints_color(80, &step, DEFAULT_THEME.active), "index {}", i);
    }
}

#[test]
fn test_idle_frame_has_no_highlight_color() {
    let values: Vec<Value> = (0..ARRAY_SIZE as Value).map(|v| v * 5).collect();
    let step = StepFrame::idle(&values, false);
    assert!(!paints_color(120, &step, DEFAULT_THEME.comparison));
    assert!(!paints_color(120, &step, DEFAULT_THEME.active));
    assert!(paints_color(120, &step, DEFAULT_THEME.idle));
}

#[test]
fn test_complete_frame_uses_sorted_color_only() {
    let values: Vec<Value> = vec![700; ARRAY_SIZE];
    let step = StepFrame {
        values: &values,
        highlights: Highlights::three(1, 2, 3),
        complete: true,
    };
    assert!(paints_color(120, &step, DEFAULT_THEME.sorted));
    assert!(!paints_color(120, &step, DEFAULT_THEME.active));
    assert!(!paints_color(120, &step, DEFAULT_THEME.idle));
}

#[test]
fn test_events_pumped_once_per_bar() {
    let values: Vec<Value> = vec![350; ARRAY_SIZE];
    let pumped = Cell::new(0usize);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");

    for frame_no in 1..=3 {
        let step = StepFrame::step(&values, Highlights::two(0, 1));
        terminal
            .draw(|f| {
                draw_view(f, &step, SortState::Unsorted, "", &|| {
                    pumped.set(pumped.get() + 1)
                })
            })
            .expect("draw");
        assert_eq!(pumped.get(), frame_no * ARRAY_SIZE);
    }
}
