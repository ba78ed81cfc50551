use super::{Highlights, StepFrame, StepSink};
use crate::data::Value;
use std::time::Duration;

/// Pause after every shift
pub const SHIFT_DELAY: Duration = Duration::from_millis(5);

/// Insertion sort. Each shift of a larger predecessor is a step, highlighting
/// the key's origin and the current insertion point.
pub fn insertion_sort(values: &mut [Value], sink: &mut dyn StepSink) {
    for i in 1..values.len() {
        let key = values[i];
        let mut hole = i;
        while hole > 0 && values[hole - 1] > key {
            values[hole] = values[hole - 1];
            hole -= 1;
            sink.render(StepFrame::step(values, Highlights::two(i, hole)));
            sink.pause(SHIFT_DELAY);
        }
        values[hole] = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StepRecorder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_step_per_shift() {
        let mut values = [3, 2, 1];
        let mut recorder = StepRecorder::new();
        insertion_sort(&mut values, &mut recorder);

        assert_eq!(values, [1, 2, 3]);
        assert_eq!(
            recorder.highlights().collect::<Vec<_>>(),
            vec![
                Highlights::two(1, 0),
                Highlights::two(2, 1),
                Highlights::two(2, 0),
            ]
        );
        assert_eq!(recorder.pauses, vec![SHIFT_DELAY; 3]);
    }

    #[test]
    fn test_equal_keys_are_not_shifted() {
        let mut values = [2, 2, 2];
        let mut recorder = StepRecorder::new();
        insertion_sort(&mut values, &mut recorder);
        assert!(recorder.steps.is_empty());
    }

    #[test]
    fn test_step_shows_array_mid_shift() {
        let mut values = [5, 1];
        let mut recorder = StepRecorder::new();
        insertion_sort(&mut values, &mut recorder);
        // the key is held aside while its slot is overwritten
        assert_eq!(recorder.steps[0].values, vec![5, 5]);
    }
}
