use super::{Highlights, StepFrame, StepSink};
use crate::data::Value;
use std::time::Duration;

/// Pause after every element copied back from the merge buffer
pub const COPY_DELAY: Duration = Duration::from_millis(15);

/// Top-down merge sort, splitting at the midpoint
pub fn merge_sort(values: &mut [Value], sink: &mut dyn StepSink) {
    let len = values.len();
    merge_sort_range(values, 0, len, sink);
}

/// Sort the half-open range `start..end`
fn merge_sort_range(values: &mut [Value], start: usize, end: usize, sink: &mut dyn StepSink) {
    if end - start <= 1 {
        return;
    }
    // left half keeps the extra element on odd lengths
    let mid = (start + end - 1) / 2 + 1;
    merge_sort_range(values, start, mid, sink);
    merge_sort_range(values, mid, end, sink);
    merge_halves(values, start, mid, end, sink);
}

/// Merge the sorted runs `start..mid` and `mid..end` into `start..end`.
///
/// Emissions are rendered against a temporary buffer, so the array only
/// changes during the copy-back phase. Either run may be empty.
pub fn merge_halves(
    values: &mut [Value],
    start: usize,
    mid: usize,
    end: usize,
    sink: &mut dyn StepSink,
) {
    let mut output = Vec::with_capacity(end - start);
    let (mut left, mut right) = (start, mid);

    while left < mid && right < end {
        sink.render(StepFrame::step(values, Highlights::two(left, right)));
        if values[left] <= values[right] {
            output.push(values[left]);
            left += 1;
        } else {
            output.push(values[right]);
            right += 1;
        }
    }

    for index in (left..mid).chain(right..end) {
        output.push(values[index]);
        sink.render(StepFrame::step(values, Highlights::active(index)));
    }

    for (offset, value) in output.into_iter().enumerate() {
        let index = start + offset;
        values[index] = value;
        sink.render(StepFrame::step(values, Highlights::one(index)));
        sink.pause(COPY_DELAY);
    }
}
