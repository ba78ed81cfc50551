//! Bar canvas rendering
//!
//! Bars are laid out on a fixed logical canvas of
//! [`CANVAS_WIDTH`] x [`CANVAS_HEIGHT`] units, one [`BAR_WIDTH`]-wide bar per
//! element, height equal to the value. Ratatui's braille canvas scales that
//! onto whatever area the terminal provides.

use crate::data::constants::{BAR_WIDTH, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::data::Value;
use crate::engine::{Highlights, StepFrame};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
        Block, Borders,
    },
    Frame,
};

/// How a bar is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Outline,
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub color: Color,
    pub fill: Fill,
}

/// What a bar stands for in the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BarRole {
    Idle,
    Sorted,
    Active,
    Comparison,
}

impl BarRole {
    /// First match wins: complete run, comparison role (`a`/`c`), active role (`b`), idle.
    pub fn of(index: usize, highlights: &Highlights, complete: bool) -> Self {
        if complete {
            BarRole::Sorted
        } else if highlights.is_comparison(index) {
            BarRole::Comparison
        } else if highlights.is_active(index) {
            BarRole::Active
        } else {
            BarRole::Idle
        }
    }

    pub fn style(self) -> BarStyle {
        let (color, fill) = match self {
            BarRole::Idle => (DEFAULT_THEME.idle, Fill::Outline),
            BarRole::Sorted => (DEFAULT_THEME.sorted, Fill::Outline),
            BarRole::Active => (DEFAULT_THEME.active, Fill::Solid),
            BarRole::Comparison => (DEFAULT_THEME.comparison, Fill::Solid),
        };
        BarStyle { color, fill }
    }
}

/// Pick the style for the bar at `index`
pub fn bar_style(index: usize, highlights: &Highlights, complete: bool) -> BarStyle {
    BarRole::of(index, highlights, complete).style()
}

/// Render one frame of bars. `on_bar` is invoked once per bar while painting.
///
/// A terminal cell holds one color but covers more than one bar, so bars are
/// painted in role order, lowest first: a highlighted bar always owns the
/// cells it shares with its neighbours.
pub fn render_bars_pane(frame: &mut Frame, area: Rect, step: &StepFrame<'_>, on_bar: &dyn Fn()) {
    let block = Block::default()
        .title(" Sorting Visualizer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(DEFAULT_THEME.bg)
        .x_bounds([0.0, f64::from(CANVAS_WIDTH)])
        .y_bounds([0.0, f64::from(CANVAS_HEIGHT)])
        .paint(|ctx| {
            let mut bars: Vec<(BarRole, usize, Value)> = step
                .values
                .iter()
                .enumerate()
                .map(|(index, &value)| {
                    on_bar();
                    (BarRole::of(index, &step.highlights, step.complete), index, value)
                })
                .collect();
            // stable: equal roles keep left-to-right order
            bars.sort_by_key(|&(role, _, _)| role);

            for (role, index, value) in bars {
                paint_bar(ctx, index, f64::from(value), role.style());
            }
        });

    frame.render_widget(canvas, area);
}

fn paint_bar(ctx: &mut Context<'_>, index: usize, height: f64, style: BarStyle) {
    let x = (index as f64) * f64::from(BAR_WIDTH);
    let width = f64::from(BAR_WIDTH);

    match style.fill {
        Fill::Outline => ctx.draw(&Rectangle {
            x,
            y: 0.0,
            width,
            height,
            color: style.color,
        }),
        Fill::Solid => {
            for column in 0..BAR_WIDTH {
                let cx = x + f64::from(column);
                ctx.draw(&CanvasLine {
                    x1: cx,
                    y1: 0.0,
                    x2: cx,
                    y2: height,
                    color: style.color,
                });
            }
        }
    }
}
