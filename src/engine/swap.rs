//! Manual swaps applied after a run.
//!
//! A swap exchanges the occupants of two seats. Fixed people never move;
//! category rules are not enforced, since a manual swap is the user
//! overriding the engine on purpose.

use super::result::SeatingResult;
use crate::error::{Result, SeatingError};
use crate::roster::Roster;
use crate::topology::{PositionId, Topology};

/// Returns `result` with the occupants of `a` and `b` exchanged.
///
/// Fails with [`SeatingError::UnknownPosition`] if either seat is not an
/// active position, and with [`SeatingError::SwapRejected`] if the swap
/// would move a fixed person off their pin. The history snapshot and the
/// unfilled list are rebuilt from the swapped assignment so the next run
/// sees what was actually used.
pub fn swap_validated(
    result: &SeatingResult,
    roster: &Roster,
    topology: &Topology,
    a: &PositionId,
    b: &PositionId,
) -> Result<SeatingResult> {
    for id in [a, b] {
        if !topology.is_active(id) {
            return Err(SeatingError::UnknownPosition(id.clone()));
        }
    }

    for id in [a, b] {
        let Some(who) = result.assignment.get(id) else {
            continue;
        };
        if a != b && roster.get(who).is_some_and(|p| p.is_fixed()) {
            return Err(SeatingError::SwapRejected(format!(
                "{who} is pinned to {id}"
            )));
        }
    }

    let mut swapped = result.clone();
    swapped.assignment.swap(a, b)?;

    for relaxation in &mut swapped.relaxations {
        if let Some(pos) = swapped.assignment.position_of(&relaxation.identity) {
            relaxation.position = pos.clone();
        }
    }
    swapped.unfilled_positions = topology
        .active_positions()
        .filter(|id| swapped.assignment.get(id).is_none())
        .cloned()
        .collect();
    swapped.new_history = swapped.assignment.to_history(topology);

    tracing::debug!(%a, %b, "applied manual swap");
    Ok(swapped)
}
