//! The interactive [`StepSink`]: draws each step to the terminal and sleeps
//! between steps.

use crate::engine::{StepFrame, StepSink};
use crate::session::SortState;
use crate::ui::panes::draw_view;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::thread;
use std::time::Duration;

/// Behaviour switches for [`TerminalRenderer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Sleep for the requested pause after each step
    pub delays: bool,
    /// Pump pending terminal events while painting bars
    pub pump_events: bool,
}

impl RenderOptions {
    pub const INTERACTIVE: RenderOptions = RenderOptions {
        delays: true,
        pump_events: true,
    };

    /// No sleeping and no terminal event access; for off-screen backends
    pub const HEADLESS: RenderOptions = RenderOptions {
        delays: false,
        pump_events: false,
    };
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::INTERACTIVE
    }
}

/// Draws algorithm steps to a ratatui terminal.
///
/// Drawing cannot fail from the algorithm's point of view. The first backend
/// error is kept, after which drawing and sleeping stop so the run finishes
/// quickly; the caller collects it with [`TerminalRenderer::finish`].
pub struct TerminalRenderer<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    state: SortState,
    message: String,
    options: RenderOptions,
    frames: usize,
    failure: Option<io::Error>,
}

impl<'t, B: Backend> TerminalRenderer<'t, B> {
    pub fn new(
        terminal: &'t mut Terminal<B>,
        state: SortState,
        message: impl Into<String>,
        options: RenderOptions,
    ) -> Self {
        TerminalRenderer {
            terminal,
            state,
            message: message.into(),
            options,
            frames: 0,
            failure: None,
        }
    }

    /// Number of frames drawn so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// End the run, returning the first drawing failure if there was one
    pub fn finish(self) -> io::Result<usize> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.frames),
        }
    }
}

/// Let crossterm read pending input into its queue without consuming it,
/// so keys pressed mid-sort are still seen by the controller afterwards
fn pump_events() {
    if let Err(err) = event::poll(Duration::ZERO) {
        tracing::trace!(%err, "event pump failed");
    }
}

fn no_pump() {}

impl<B: Backend> StepSink for TerminalRenderer<'_, B> {
    fn render(&mut self, frame: StepFrame<'_>) {
        if self.failure.is_some() {
            return;
        }

        let on_bar: &dyn Fn() = if self.options.pump_events {
            &pump_events
        } else {
            &no_pump
        };
        let state = self.state;
        let message = self.message.as_str();

        match self
            .terminal
            .draw(|f| draw_view(f, &frame, state, message, on_bar))
        {
            Ok(_) => self.frames += 1,
            Err(err) => {
                tracing::error!(%err, frames = self.frames, "frame draw failed");
                self.failure = Some(err);
            }
        }
    }

    fn pause(&mut self, delay: Duration) {
        if self.options.delays && self.failure.is_none() {
            thread::sleep(delay);
        }
    }
}
