//! Constrained seat assignment.
//!
//! Assigns a roster of people to the seats of a structured layout:
//!
//! - **Roster**: people with an identity, a category and an optional
//!   pinned seat.
//! - **Topology**: seats, optionally linked into pair groups that are
//!   filled together; rows and partitions are layout metadata only.
//! - **Policy**: the pairing mode for pair groups (cross-category,
//!   same-category or none) and the avoid-previous-seat and
//!   avoid-previous-partner preferences.
//! - **History**: where everyone sat and with whom last time, read at the
//!   start of a run and replaced wholesale after it.
//! - **Engine**: places fixed people, fills pairs, then singles, relaxing
//!   preferences along a fixed degradation ladder when they cannot all
//!   hold. It always returns a feasible assignment; shortfalls are
//!   reported, not raised.
//!
//! # Architecture
//!
//! Pure and synchronous: no I/O, no shared state, one injectable random
//! source. Persistence and rendering live in the caller; the `wasm`
//! feature exposes the engine to a browser page.

pub mod engine;
pub mod error;
pub mod history;
pub mod policy;
pub mod roster;
pub mod topology;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, SeatingError};
