//! Position and pair-group records.

use std::fmt;

/// Stable identifier of a seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PositionId(String);

impl PositionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PositionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PositionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A seat.
///
/// Inactive positions stay in the topology (so layouts keep their shape)
/// but are never assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub id: PositionId,
    pub active: bool,
    /// Column/partition index for layout bookkeeping.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub partition: Option<usize>,
}

impl Position {
    /// An active position with no partition metadata.
    pub fn new(id: impl Into<PositionId>) -> Self {
        Self {
            id: id.into(),
            active: true,
            partition: None,
        }
    }

    pub fn inactive(id: impl Into<PositionId>) -> Self {
        Self {
            active: false,
            ..Self::new(id)
        }
    }

    pub fn in_partition(mut self, partition: usize) -> Self {
        self.partition = Some(partition);
        self
    }
}

/// Two positions that are filled together.
///
/// The pair is unordered for constraint purposes, but the engine fills the
/// slots in declaration order so results stay reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PairGroup {
    slots: [PositionId; 2],
}

impl PairGroup {
    pub fn new(a: impl Into<PositionId>, b: impl Into<PositionId>) -> Self {
        Self {
            slots: [a.into(), b.into()],
        }
    }

    pub fn slots(&self) -> &[PositionId; 2] {
        &self.slots
    }

    pub fn contains(&self, id: &PositionId) -> bool {
        self.slots.contains(id)
    }

    /// The co-slot of `id`, if `id` belongs to this pair.
    pub fn partner_of(&self, id: &PositionId) -> Option<&PositionId> {
        if &self.slots[0] == id {
            Some(&self.slots[1])
        } else if &self.slots[1] == id {
            Some(&self.slots[0])
        } else {
            None
        }
    }
}
