//! Constrained seat assignment engine.
//!
//! Given a roster, a topology, a constraint policy and the previous run's
//! history, produces a complete assignment (or the best approximation the
//! degradation ladder allows) plus a fresh history snapshot.
//!
//! # Key Components
//!
//! - [`SeatingRunner`]: validation and the placement phases
//! - [`Rung`]: the degradation ladder used for every slot
//! - [`SeatingResult`]: assignment, shortfall report and new history
//! - [`SeatingSession`]: load → run → save around a [`HistoryStore`](crate::history::HistoryStore)
//! - [`SeatingRequest`]: record-shaped input for presentation layers
//! - [`swap_validated`]: manual swaps that respect fixed pins
//!
//! # Design
//!
//! The engine is a pure synchronous computation with no shared state. It
//! never mutates its inputs and performs no I/O; the only randomness is a
//! single shuffle of the free pool, drawn from an injectable generator.

mod config;
mod ladder;
mod pool;
mod request;
mod result;
mod runner;
mod session;
mod swap;
mod types;

pub use config::{EmptyRosterPolicy, EngineConfig};
pub use ladder::Rung;
pub use request::SeatingRequest;
pub use result::{Assignment, Relaxation, SeatingResult};
pub use runner::{create_rng, SeatingRunner};
pub use session::SeatingSession;
pub use swap::swap_validated;
pub use types::SeatingProblem;
