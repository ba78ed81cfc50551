use super::{Highlights, StepFrame, StepSink};
use crate::data::Value;
use std::time::Duration;

/// Pacing tick after every comparison, swapped or not
pub const COMPARE_DELAY: Duration = Duration::from_millis(1);

/// Bubble sort. Every swap is a step; the third highlight marks the end of the
/// still-unsorted region for the current pass.
pub fn bubble_sort(values: &mut [Value], sink: &mut dyn StepSink) {
    let len = values.len();
    for i in 0..len.saturating_sub(1) {
        for j in 0..(len - 1 - i) {
            if values[j + 1] < values[j] {
                values.swap(j, j + 1);
                sink.render(StepFrame::step(values, Highlights::three(j + 1, j, len - i)));
            }
            sink.pause(COMPARE_DELAY);
        }
    }
}
