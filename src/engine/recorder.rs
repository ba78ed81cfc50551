//! A [`StepSink`] that records steps instead of drawing them

use super::{Highlights, StepFrame, StepSink};
use crate::data::Value;
use std::time::Duration;

/// One rendered step, with a copy of the array as it looked at that moment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedStep {
    pub values: Vec<Value>,
    pub highlights: Highlights,
    pub complete: bool,
}

/// Captures the sequence of frames and pauses an algorithm produces.
/// Pauses are accumulated, never slept.
#[derive(Debug, Default, Clone)]
pub struct StepRecorder {
    pub steps: Vec<RecordedStep>,
    pub pauses: Vec<Duration>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all requested pauses
    pub fn total_pause(&self) -> Duration {
        self.pauses.iter().sum()
    }

    pub fn highlights(&self) -> impl Iterator<Item = Highlights> + '_ {
        self.steps.iter().map(|step| step.highlights)
    }
}

impl StepSink for StepRecorder {
    fn render(&mut self, frame: StepFrame<'_>) {
        self.steps.push(RecordedStep {
            values: frame.values.to_vec(),
            highlights: frame.highlights,
            complete: frame.complete,
        });
    }

    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}
