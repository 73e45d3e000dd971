//! Candidate selection and the degradation ladder.
//!
//! A slot is filled by walking the ladder from the strictest rung down and
//! taking the first pooled person the rung admits. Rungs that cannot differ
//! from an earlier one under the current policy are skipped, so the rung
//! recorded for a placement is always the least relaxed rule that admitted
//! it.

use super::pool::FreePool;
use crate::history::HistorySnapshot;
use crate::policy::{ConstraintPolicy, PairMode};
use crate::roster::{Category, Person};
use crate::topology::PositionId;

/// One step of the degradation ladder, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Rung {
    /// (a) category, previous position and previous partner all respected.
    Strict,
    /// (b) previous partner ignored.
    IgnorePartner,
    /// (c) previous position ignored.
    IgnorePosition,
    /// (d) both soft constraints ignored, category kept.
    CategoryOnly,
    /// (e) category requirement dropped too; borrows from another pool.
    Borrowed,
}

impl Rung {
    pub const LADDER: [Rung; 5] = [
        Rung::Strict,
        Rung::IgnorePartner,
        Rung::IgnorePosition,
        Rung::CategoryOnly,
        Rung::Borrowed,
    ];

    /// Rungs that still honour avoid-previous-position.
    pub(crate) const POSITION_KEEPING: [Rung; 2] = [Rung::Strict, Rung::IgnorePartner];

    pub fn keeps_position(self) -> bool {
        matches!(self, Rung::Strict | Rung::IgnorePartner)
    }

    pub fn keeps_partner(self) -> bool {
        matches!(self, Rung::Strict | Rung::IgnorePosition)
    }

    pub fn keeps_category(self) -> bool {
        self != Rung::Borrowed
    }

    /// The rung a placement deserves once its previous-position rule holds.
    pub(crate) fn keeping_position(self) -> Rung {
        match self {
            Rung::IgnorePosition => Rung::Strict,
            Rung::CategoryOnly => Rung::IgnorePartner,
            rung => rung,
        }
    }

    /// Whether this rung admits exactly the same people as an earlier one.
    fn is_redundant(self, slot: &Slot<'_>, policy: &ConstraintPolicy) -> bool {
        let position_active = policy.avoid_previous_position;
        let partner_active = policy.avoid_previous_partner && slot.co_occupant.is_some();
        match self {
            Rung::Strict => false,
            Rung::IgnorePartner => !partner_active,
            Rung::IgnorePosition => !position_active,
            Rung::CategoryOnly => !(position_active && partner_active),
            Rung::Borrowed => slot.requirement == Requirement::Any,
        }
    }
}

/// Category requirement for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Requirement<'s> {
    Any,
    Is(&'s Category),
    IsNot(&'s Category),
}

impl Requirement<'_> {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Requirement::Any => true,
            Requirement::Is(c) => *c == category,
            Requirement::IsNot(c) => *c != category,
        }
    }
}

/// The requirement for the second slot of a pair, given its co-occupant.
pub(crate) fn co_slot_requirement(mode: PairMode, co: &Person) -> Requirement<'_> {
    match mode {
        PairMode::CrossCategory => Requirement::IsNot(&co.category),
        PairMode::SameCategory => Requirement::Is(&co.category),
        PairMode::None => Requirement::Any,
    }
}

/// A position being filled.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot<'s> {
    pub position: &'s PositionId,
    pub requirement: Requirement<'s>,
    /// The person already seated in the other slot of the pair.
    pub co_occupant: Option<&'s Person>,
}

impl<'s> Slot<'s> {
    pub fn single(position: &'s PositionId) -> Self {
        Self {
            position,
            requirement: Requirement::Any,
            co_occupant: None,
        }
    }
}

fn admits(
    rung: Rung,
    person: &Person,
    slot: &Slot<'_>,
    policy: &ConstraintPolicy,
    history: &HistorySnapshot,
) -> bool {
    if rung.keeps_category() && !slot.requirement.matches(&person.category) {
        return false;
    }
    if rung.keeps_position()
        && policy.avoid_previous_position
        && history.last_position(&person.identity) == Some(slot.position)
    {
        return false;
    }
    if rung.keeps_partner() && policy.avoid_previous_partner {
        if let Some(co) = slot.co_occupant {
            if history.were_partners(&person.identity, &co.identity) {
                return false;
            }
        }
    }
    true
}

/// Takes the first admissible person, trying `rungs` in order.
pub(crate) fn select<'a>(
    pool: &mut FreePool<'a>,
    slot: &Slot<'_>,
    policy: &ConstraintPolicy,
    history: &HistorySnapshot,
    rungs: &[Rung],
) -> Option<(&'a Person, Rung)> {
    for &rung in rungs {
        if rung.is_redundant(slot, policy) {
            continue;
        }
        let admitted = |p: &Person| admits(rung, p, slot, policy, history);
        let taken = match slot.requirement {
            Requirement::Is(category) if rung.keeps_category() => {
                pool.take_first_in(category, admitted)
            }
            _ => pool.take_first(admitted),
        };
        if let Some(person) = taken {
            return Some((person, rung));
        }
    }
    None
}
