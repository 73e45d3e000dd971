//! Assignment and run result types.

use super::ladder::Rung;
use crate::error::{Result, SeatingError};
use crate::history::HistorySnapshot;
use crate::roster::Roster;
use crate::topology::{PositionId, Topology};
use std::collections::{BTreeMap, HashSet};

/// Occupant of every active position (`None` for an empty seat).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Assignment {
    seats: BTreeMap<PositionId, Option<String>>,
}

impl Assignment {
    /// An assignment with every active position of `topology` empty.
    pub fn empty(topology: &Topology) -> Self {
        Self {
            seats: topology
                .active_positions()
                .map(|id| (id.clone(), None))
                .collect(),
        }
    }

    pub(crate) fn seat(&mut self, position: PositionId, identity: String) {
        self.seats.insert(position, Some(identity));
    }

    /// Occupant of `position`, if any.
    pub fn get(&self, position: &PositionId) -> Option<&str> {
        self.seats.get(position).and_then(|o| o.as_deref())
    }

    pub fn contains(&self, position: &PositionId) -> bool {
        self.seats.contains_key(position)
    }

    pub fn position_of(&self, identity: &str) -> Option<&PositionId> {
        self.occupied()
            .find(|(_, who)| *who == identity)
            .map(|(id, _)| id)
    }

    /// All positions with their occupant, ordered by position id.
    pub fn iter(&self) -> impl Iterator<Item = (&PositionId, Option<&str>)> {
        self.seats.iter().map(|(id, who)| (id, who.as_deref()))
    }

    pub fn occupied(&self) -> impl Iterator<Item = (&PositionId, &str)> {
        self.seats
            .iter()
            .filter_map(|(id, who)| who.as_deref().map(|w| (id, w)))
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.values().filter(|w| w.is_some()).count()
    }

    /// Number of positions, occupied or not.
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Exchanges the occupants of two positions. Either may be empty.
    pub fn swap(&mut self, a: &PositionId, b: &PositionId) -> Result<()> {
        for id in [a, b] {
            if !self.seats.contains_key(id) {
                return Err(SeatingError::UnknownPosition(id.clone()));
            }
        }
        if a == b {
            return Ok(());
        }
        let first = self.seats.insert(a.clone(), None).flatten();
        let second = self.seats.insert(b.clone(), first).flatten();
        self.seats.insert(a.clone(), second);
        Ok(())
    }

    /// Builds the history snapshot this assignment leaves behind.
    ///
    /// Everyone seated gets a last position; only the occupants of fully
    /// filled pair groups get a last partner.
    pub fn to_history(&self, topology: &Topology) -> HistorySnapshot {
        let mut snapshot = HistorySnapshot::new();
        for (id, who) in self.occupied() {
            snapshot.last_position.insert(who.to_string(), id.clone());
        }
        for group in topology.pair_groups() {
            let [a, b] = group.slots();
            if let (Some(x), Some(y)) = (self.get(a), self.get(b)) {
                snapshot = snapshot.with_partners(x, y);
            }
        }
        snapshot
    }
}

/// A free person seated by a relaxed ladder rung.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Relaxation {
    pub identity: String,
    pub position: PositionId,
    pub rung: Rung,
}

/// Outcome of one engine run.
///
/// Always internally consistent, even when degraded: shortfalls show up in
/// `unassigned_people`, `unfilled_positions`, `category_borrowed` and
/// `relaxations`, never as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SeatingResult {
    pub assignment: Assignment,
    /// People left without a seat, in roster order.
    pub unassigned_people: Vec<String>,
    /// Active positions left empty, in declaration order.
    pub unfilled_positions: Vec<PositionId>,
    /// People seated in a pair slot outside its category requirement.
    pub category_borrowed: Vec<String>,
    /// Non-strict placements, in placement order.
    pub relaxations: Vec<Relaxation>,
    pub new_history: HistorySnapshot,
}

impl SeatingResult {
    /// The result of a run with nobody to seat.
    pub fn empty(topology: &Topology) -> Self {
        Self {
            assignment: Assignment::empty(topology),
            unassigned_people: Vec::new(),
            unfilled_positions: topology.active_positions().cloned().collect(),
            category_borrowed: Vec::new(),
            relaxations: Vec::new(),
            new_history: HistorySnapshot::new(),
        }
    }

    /// Whether every person got a seat and every soft rule held.
    pub fn is_complete(&self) -> bool {
        self.unassigned_people.is_empty()
            && self.category_borrowed.is_empty()
            && self.relaxations.is_empty()
    }

    /// Re-checks the structural invariants against the inputs.
    ///
    /// Returns the first violation found: a seat outside the active
    /// topology, a person seated twice or not on the roster, a fixed person
    /// off their pin, or a head count that does not add up.
    pub fn verify(&self, roster: &Roster, topology: &Topology) -> Result<()> {
        let violation = |msg: String| Err(SeatingError::InvariantViolation(msg));

        let mut seen = HashSet::new();
        for (id, who) in self.assignment.occupied() {
            if !topology.is_active(id) {
                return violation(format!("{who} seated at inactive or unknown {id}"));
            }
            if roster.get(who).is_none() {
                return violation(format!("{who} at {id} is not on the roster"));
            }
            if !seen.insert(who) {
                return violation(format!("{who} occupies more than one position"));
            }
        }

        for person in roster.fixed() {
            if let Some(pin) = &person.pinned_position {
                if self.assignment.get(pin) != Some(person.identity.as_str()) {
                    return violation(format!("{} is not at pinned {pin}", person.identity));
                }
            }
        }

        for who in &self.unassigned_people {
            if seen.contains(who.as_str()) {
                return violation(format!("{who} is both seated and unassigned"));
            }
        }

        let occupied = self.assignment.occupied_count();
        if occupied + self.unassigned_people.len() != roster.len() {
            return violation(format!(
                "{occupied} seated + {} unassigned != {} on roster",
                self.unassigned_people.len(),
                roster.len()
            ));
        }
        if occupied > roster.len().min(topology.active_count()) {
            return violation(format!("{occupied} seated exceeds capacity"));
        }
        Ok(())
    }
}
