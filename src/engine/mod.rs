//! The algorithm engine: six in-place sorting algorithms decomposed into
//! visible steps.
//!
//! Algorithms never draw or sleep themselves. After every step worth showing
//! they hand a [`StepFrame`] to an injected [`StepSink`] and ask it to
//! [`pause`](StepSink::pause) for an algorithm-specific delay. The interactive
//! build plugs in a terminal renderer that draws and sleeps; tests plug in a
//! [`StepRecorder`] that only records.
//!
//! | Algorithm | Step rendered on                     | Pause        |
//! |-----------|--------------------------------------|--------------|
//! | Selection | new minimum found                    | 1ms / compare|
//! | Insertion | each shift                           | 5ms / shift  |
//! | Bubble    | each swap                            | 1ms / compare|
//! | Merge     | each emission, each copy-back        | 15ms / copy  |
//! | Quick     | pivot placement, each swap           | 70ms / swap  |
//! | Heap      | each swap                            | 40ms / swap  |

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod recorder;
pub mod selection;

pub use merge::merge_halves;
pub use quick::partition;
pub use recorder::{RecordedStep, StepRecorder};

use crate::data::Value;
use std::fmt;
use std::time::Duration;

/// Up to three indices drawn in a distinguishing color.
///
/// `a` and `c` are comparison roles, `b` is the active/pivot role. Which
/// element fills which role is up to each algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlights {
    pub a: Option<usize>,
    pub b: Option<usize>,
    pub c: Option<usize>,
}

impl Highlights {
    pub const NONE: Highlights = Highlights {
        a: None,
        b: None,
        c: None,
    };

    pub fn one(a: usize) -> Self {
        Highlights {
            a: Some(a),
            ..Self::NONE
        }
    }

    pub fn two(a: usize, b: usize) -> Self {
        Highlights {
            a: Some(a),
            b: Some(b),
            c: None,
        }
    }

    pub fn three(a: usize, b: usize, c: usize) -> Self {
        Highlights {
            a: Some(a),
            b: Some(b),
            c: Some(c),
        }
    }

    /// Only the active role is set
    pub fn active(b: usize) -> Self {
        Highlights {
            b: Some(b),
            ..Self::NONE
        }
    }

    pub fn is_comparison(&self, index: usize) -> bool {
        self.a == Some(index) || self.c == Some(index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.b == Some(index)
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct StepFrame<'a> {
    pub values: &'a [Value],
    pub highlights: Highlights,
    pub complete: bool,
}

impl<'a> StepFrame<'a> {
    /// A mid-sort frame
    pub fn step(values: &'a [Value], highlights: Highlights) -> Self {
        StepFrame {
            values,
            highlights,
            complete: false,
        }
    }

    /// A frame with no highlights, drawn between runs
    pub fn idle(values: &'a [Value], complete: bool) -> Self {
        StepFrame {
            values,
            highlights: Highlights::NONE,
            complete,
        }
    }
}

/// Capability injected into every algorithm: show a step, then yield for a while
pub trait StepSink {
    /// Draw the given state. Must not fail from the caller's point of view.
    fn render(&mut self, frame: StepFrame<'_>);

    /// Yield control for `delay` so the last frame stays visible
    fn pause(&mut self, delay: Duration);
}

/// The six supported algorithms, in key order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Insertion,
    Bubble,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// The digit key that starts this algorithm
    pub fn key(self) -> char {
        match self {
            Algorithm::Selection => '1',
            Algorithm::Insertion => '2',
            Algorithm::Bubble => '3',
            Algorithm::Merge => '4',
            Algorithm::Quick => '5',
            Algorithm::Heap => '6',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|alg| alg.key() == key)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// Sort `values` in place, reporting every step to `sink`
    pub fn run(self, values: &mut [Value], sink: &mut dyn StepSink) {
        match self {
            Algorithm::Selection => selection::selection_sort(values, sink),
            Algorithm::Insertion => insertion::insertion_sort(values, sink),
            Algorithm::Bubble => bubble::bubble_sort(values, sink),
            Algorithm::Merge => merge::merge_sort(values, sink),
            Algorithm::Quick => quick::quick_sort(values, sink),
            Algorithm::Heap => heap::heap_sort(values, sink),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
