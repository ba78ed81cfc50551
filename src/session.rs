//! Session state shared by the controller and the algorithm engine.
//!
//! A [`Session`] owns the data store and the sorting state. Starting a run
//! takes `&mut self` for its whole duration, so a second run can never start
//! while one is in progress.

use crate::data::{DataStore, Value};
use crate::engine::{Algorithm, StepFrame, StepSink};
use std::time::Instant;

/// Where the session is in its sort lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState {
    /// Fresh or reset data, nothing sorted yet
    Unsorted,
    Running(Algorithm),
    /// The last run finished; the working array is sorted
    Sorted(Algorithm),
}

impl SortState {
    pub fn is_complete(self) -> bool {
        matches!(self, SortState::Sorted(_))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    store: DataStore,
    state: SortState,
}

impl Session {
    pub fn new() -> Self {
        Self::with_store(DataStore::new())
    }

    pub fn with_store(mut store: DataStore) -> Self {
        store.reset_working();
        Session {
            store,
            state: SortState::Unsorted,
        }
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn working(&self) -> &[Value] {
        self.store.working()
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// The frame drawn while no algorithm is running
    pub fn idle_frame(&self) -> StepFrame<'_> {
        StepFrame::idle(self.store.working(), self.is_complete())
    }

    /// Generate a new random list and make it the working data
    pub fn regenerate(&mut self) {
        self.store.regenerate();
        self.store.reset_working();
        self.state = SortState::Unsorted;
    }

    /// Restore the working data from the backup and sort it with `algorithm`,
    /// reporting every step to `sink`. Returns once the run is finished.
    pub fn run(&mut self, algorithm: Algorithm, sink: &mut dyn StepSink) {
        self.store.reset_working();
        self.state = SortState::Running(algorithm);
        tracing::info!(%algorithm, "sort started");

        let started = Instant::now();
        algorithm.run(self.store.working_mut(), sink);

        self.state = SortState::Sorted(algorithm);
        tracing::info!(
            %algorithm,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "sort complete"
        );
    }

    /// Forget the completed state, as happens when the visualizer is closed
    pub fn clear_complete(&mut self) {
        if self.state.is_complete() {
            self.state = SortState::Unsorted;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StepRecorder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_run_sorts_backup_copy() {
        let mut session = Session::new();
        let backup = session.store().backup().to_vec();
        session.run(Algorithm::Heap, &mut StepRecorder::new());

        let mut expected = backup.clone();
        expected.sort_unstable();
        assert_eq!(session.working(), expected.as_slice());
        assert_eq!(session.store().backup(), backup.as_slice());
        assert_eq!(session.state(), SortState::Sorted(Algorithm::Heap));
    }

    #[test]
    fn test_each_run_starts_from_backup() {
        let mut session = Session::new();
        session.run(Algorithm::Bubble, &mut StepRecorder::new());

        let mut recorder = StepRecorder::new();
        session.run(Algorithm::Insertion, &mut recorder);

        // the second run starts from unsorted data again, so it has work to show
        // unless the random backup happened to be sorted already
        let backup = session.store().backup();
        if backup.windows(2).any(|w| w[0] > w[1]) {
            assert!(!recorder.steps.is_empty());
        }
        assert!(recorder.steps.iter().all(|s| !s.complete));
    }

    #[test]
    fn test_regenerate_clears_complete() {
        let mut session = Session::new();
        session.run(Algorithm::Quick, &mut StepRecorder::new());
        assert!(session.is_complete());
        assert!(session.idle_frame().complete);

        session.regenerate();
        assert_eq!(session.state(), SortState::Unsorted);
        assert_eq!(session.working(), session.store().backup());
    }

    #[test]
    fn test_clear_complete() {
        let mut session = Session::new();
        session.clear_complete();
        assert_eq!(session.state(), SortState::Unsorted);
        session.run(Algorithm::Merge, &mut StepRecorder::new());
        session.clear_complete();
        assert!(!session.idle_frame().complete);
    }
}
