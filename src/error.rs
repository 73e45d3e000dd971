//! Error taxonomy for the seating engine.
//!
//! Every variant is raised up front, before any seat is assigned. Seat
//! shortages, category imbalance and unsatisfied avoidance preferences are
//! not errors; they are reported on [`SeatingResult`](crate::engine::SeatingResult).

use crate::topology::PositionId;
use thiserror::Error;

/// Errors raised while validating inputs or applying a manual swap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatingError {
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("position {position} is pinned by both {first} and {second}")]
    DuplicatePin {
        position: PositionId,
        first: String,
        second: String,
    },

    #[error("{identity} is pinned to unknown or inactive position {position}")]
    UnknownPinnedPosition {
        identity: String,
        position: PositionId,
    },

    #[error("identity {identity} appears more than once in the roster")]
    DuplicateIdentity { identity: String },

    #[error("roster is empty")]
    EmptyRoster,

    #[error("unknown position: {0}")]
    UnknownPosition(PositionId),

    #[error("swap rejected: {0}")]
    SwapRejected(String),

    #[error("assignment invariant violated: {0}")]
    InvariantViolation(String),
}

impl SeatingError {
    /// Whether the error comes from the roster rather than the layout.
    pub fn is_roster_error(&self) -> bool {
        matches!(
            self,
            SeatingError::DuplicatePin { .. }
                | SeatingError::UnknownPinnedPosition { .. }
                | SeatingError::DuplicateIdentity { .. }
                | SeatingError::EmptyRoster
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeatingError>;
