//! Seat topology: where people can sit and which seats are linked as pairs.
//!
//! # Key Components
//!
//! - [`Position`]: a seat with a stable [`PositionId`] and an active flag
//! - [`PairGroup`]: two positions filled together under the pairing rules
//! - [`Topology`]: validated, immutable set of positions and pair groups
//! - [`GridLayout`]: generator for the usual rows × partitions classroom grid
//!
//! Partitions (columns of desks) are layout bookkeeping only. The engine
//! never reads them.

mod grid;
mod model;
mod types;

pub use grid::GridLayout;
pub use model::Topology;
pub use types::{PairGroup, Position, PositionId};
