use super::{Highlights, StepFrame, StepSink};
use crate::data::Value;
use std::time::Duration;

/// Pause after every comparison
pub const COMPARE_DELAY: Duration = Duration::from_millis(1);

/// Selection sort. A step is rendered only when a new minimum is found; the
/// swap that closes each pass is not rendered on its own.
pub fn selection_sort(values: &mut [Value], sink: &mut dyn StepSink) {
    let len = values.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..len {
            if values[j] < values[min_index] {
                min_index = j;
                sink.render(StepFrame::step(values, Highlights::two(i, min_index)));
            }
            sink.pause(COMPARE_DELAY);
        }
        values.swap(i, min_index);
    }
}
