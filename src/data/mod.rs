//! The data store: a working array mutated by the sorting algorithms and a
//! pristine backup that every run starts from.

pub mod constants;

use constants::{ARRAY_SIZE, CANVAS_HEIGHT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single array element. Values lie in `[0, CANVAS_HEIGHT)`.
pub type Value = u32;

/// Holds the working array and the backup it is restored from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStore {
    working: [Value; ARRAY_SIZE],
    backup: [Value; ARRAY_SIZE],
}

impl DataStore {
    /// Create a store filled with fresh random data, seeded from the wall clock.
    /// `working` starts out equal to `backup`.
    pub fn new() -> Self {
        let mut store = DataStore {
            working: [0; ARRAY_SIZE],
            backup: [0; ARRAY_SIZE],
        };
        store.regenerate();
        store.reset_working();
        store
    }

    /// Refill the backup with uniformly random values, reseeding from the current time
    pub fn regenerate(&mut self) {
        self.regenerate_with(&mut StdRng::seed_from_u64(clock_seed()));
    }

    /// Refill the backup from the given generator
    pub fn regenerate_with<R: Rng>(&mut self, rng: &mut R) {
        for slot in self.backup.iter_mut() {
            *slot = rng.gen_range(0..CANVAS_HEIGHT);
        }
        tracing::debug!(len = ARRAY_SIZE, "regenerated backup array");
    }

    /// Copy the backup into the working array
    pub fn reset_working(&mut self) {
        self.working.copy_from_slice(&self.backup);
    }

    pub fn working(&self) -> &[Value] {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut [Value] {
        &mut self.working
    }

    pub fn backup(&self) -> &[Value] {
        &self.backup
    }
}

/// Wall-clock seed with nanosecond resolution, so two lists generated within
/// the same second still differ
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_regenerate_then_reset_matches_backup() {
        let mut store = DataStore::new();
        store.regenerate_with(&mut StdRng::seed_from_u64(7));
        store.reset_working();
        assert_eq!(store.working(), store.backup());
    }

    #[test]
    fn test_values_stay_below_canvas_height() {
        let mut store = DataStore::new();
        for seed in 0..20 {
            store.regenerate_with(&mut StdRng::seed_from_u64(seed));
            assert!(store.backup().iter().all(|&v| v < CANVAS_HEIGHT));
        }
    }

    #[test]
    fn test_reset_discards_working_changes() {
        let mut store = DataStore::new();
        let original = store.backup().to_vec();
        store.working_mut().sort_unstable();
        store.working_mut()[0] = 9999;
        store.reset_working();
        assert_eq!(store.working(), original.as_slice());
    }

    #[test]
    fn test_back_to_back_regenerate_gives_new_list() {
        let mut store = DataStore::new();
        let first = store.backup().to_vec();
        store.regenerate();
        let second = store.backup().to_vec();
        store.regenerate();
        assert_ne!(first, second);
        assert_ne!(second, store.backup());
    }

    #[test]
    fn test_regenerate_leaves_working_untouched() {
        let mut store = DataStore::new();
        store.regenerate_with(&mut StdRng::seed_from_u64(1));
        store.reset_working();
        let before = store.working().to_vec();
        store.regenerate_with(&mut StdRng::seed_from_u64(2));
        assert_eq!(store.working(), before.as_slice());
        assert_eq!(store.working().len(), ARRAY_SIZE);
    }
}
