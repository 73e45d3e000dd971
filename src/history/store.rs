//! Persistence contract for history snapshots.

use super::types::HistorySnapshot;

/// Loads and saves the history snapshot between runs.
///
/// Any medium satisfies this (key-value store, file, remote backend). The
/// engine never performs I/O itself; callers wrap `load → run → save` in a
/// critical section, see [`SeatingSession`](crate::engine::SeatingSession).
pub trait HistoryStore: Send {
    /// Returns the stored snapshot, or an empty one if nothing is stored.
    fn load(&self) -> HistorySnapshot;

    /// Replaces the stored snapshot wholesale.
    fn save(&mut self, snapshot: HistorySnapshot);
}

/// In-memory store, mostly for tests and single-process use.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    snapshot: Option<HistorySnapshot>,
    saves: usize,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `snapshot`.
    pub fn with_snapshot(snapshot: HistorySnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    /// Number of times [`HistoryStore::save`] has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> HistorySnapshot {
        self.snapshot.clone().unwrap_or_default()
    }

    fn save(&mut self, snapshot: HistorySnapshot) {
        self.snapshot = Some(snapshot);
        self.saves += 1;
    }
}
