use super::{Highlights, StepFrame, StepSink};
use crate::data::Value;
use std::time::Duration;

/// Pause after every swap, in both phases
pub const SWAP_DELAY: Duration = Duration::from_millis(40);

/// Heap sort: build a max-heap by sifting each element up, then repeatedly
/// move the root behind the shrinking heap boundary and sift the new root down.
pub fn heap_sort(values: &mut [Value], sink: &mut dyn StepSink) {
    let len = values.len();

    for i in 1..len {
        let mut child = i;
        while child > 0 {
            let parent = (child - 1) / 2;
            if values[child] <= values[parent] {
                break;
            }
            values.swap(parent, child);
            sink.render(StepFrame::step(values, Highlights::two(parent, child)));
            sink.pause(SWAP_DELAY);
            child = parent;
        }
    }

    for heap_end in (0..len).rev() {
        values.swap(0, heap_end);
        sift_down(values, heap_end, sink);
    }
}

/// Restore the heap property for `values[..heap_end]` after the root changed
fn sift_down(values: &mut [Value], heap_end: usize, sink: &mut dyn StepSink) {
    let mut parent = 0;
    loop {
        let left = 2 * parent + 1;
        if left >= heap_end {
            break;
        }
        let right = left + 1;

        let mut max = parent;
        if values[left] > values[max] {
            max = left;
        }
        if right < heap_end && values[right] > values[max] {
            max = right;
        }
        if max == parent {
            break;
        }

        values.swap(parent, max);
        sink.render(StepFrame::step(values, Highlights::three(max, parent, heap_end)));
        sink.pause(SWAP_DELAY);
        parent = max;
    }
}
