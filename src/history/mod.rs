//! Record of the previous run, consumed and produced by the engine.
//!
//! The engine reads a [`HistorySnapshot`] and emits a fresh one; it never
//! edits a snapshot in place. Persisting snapshots between runs is the job
//! of a [`HistoryStore`].

mod store;
mod types;

pub use store::{HistoryStore, MemoryHistoryStore};
pub use types::HistorySnapshot;
