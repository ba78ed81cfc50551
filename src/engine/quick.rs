use super::{Highlights, StepFrame, StepSink};
use crate::data::Value;
use std::time::Duration;

/// Pause after every two-pointer swap
pub const SWAP_DELAY: Duration = Duration::from_millis(70);

/// Quick sort using a rank-counting partition with the first element as pivot
pub fn quick_sort(values: &mut [Value], sink: &mut dyn StepSink) {
    if let Some(last) = values.len().checked_sub(1) {
        quick_sort_range(values, 0, last, sink);
    }
}

/// Sort the inclusive range `start..=end`
fn quick_sort_range(values: &mut [Value], start: usize, end: usize, sink: &mut dyn StepSink) {
    if start >= end {
        return;
    }
    let pivot = partition(values, start, end, sink);
    if pivot > start {
        quick_sort_range(values, start, pivot - 1, sink);
    }
    quick_sort_range(values, pivot + 1, end, sink);
}

/// Partition the inclusive range `start..=end` around `values[start]` and
/// return the pivot's final index.
///
/// The pivot's index is its rank within the range: `start` plus the number of
/// other elements that are `<=` it. The pivot is swapped straight there, then
/// two pointers walk in from both ends and swap every pair sitting on the
/// wrong side. They cannot cross the pivot, which is already in place.
///
/// # Panics
///
/// Panics if the range is empty or reaches past the end of `values`.
pub fn partition(values: &mut [Value], start: usize, end: usize, sink: &mut dyn StepSink) -> usize {
    assert!(
        start <= end && end < values.len(),
        "partition range {start}..={end} invalid for length {}",
        values.len()
    );
    let pivot_value = values[start];
    let smaller = values[start + 1..=end]
        .iter()
        .filter(|&&v| v <= pivot_value)
        .count();
    let pivot = start + smaller;

    values.swap(pivot, start);
    sink.render(StepFrame::step(values, Highlights::two(pivot, start)));

    let (mut left, mut right) = (start, end);
    while left < pivot && right > pivot {
        if values[left] <= pivot_value {
            left += 1;
        } else if values[right] > pivot_value {
            right -= 1;
        } else {
            values.swap(left, right);
            sink.render(StepFrame::step(values, Highlights::two(left, right)));
            sink.pause(SWAP_DELAY);
            left += 1;
            right -= 1;
        }
    }
    pivot
}
