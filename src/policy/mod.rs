//! Which soft constraints are active and how pair groups are filled.

mod config;

pub use config::{ConstraintPolicy, PairMode};
