//! Inputs of one seating run.

use crate::history::HistorySnapshot;
use crate::policy::ConstraintPolicy;
use crate::roster::Roster;
use crate::topology::Topology;

/// Everything the engine reads. All four parts are treated as immutable
/// values; the engine never edits them.
#[derive(Debug, Clone, Copy)]
pub struct SeatingProblem<'a> {
    pub roster: &'a Roster,
    pub topology: &'a Topology,
    pub policy: &'a ConstraintPolicy,
    pub history: &'a HistorySnapshot,
}

impl<'a> SeatingProblem<'a> {
    pub fn new(
        roster: &'a Roster,
        topology: &'a Topology,
        policy: &'a ConstraintPolicy,
        history: &'a HistorySnapshot,
    ) -> Self {
        Self {
            roster,
            topology,
            policy,
            history,
        }
    }
}
