//! Validated seat topology.

use super::types::{PairGroup, Position, PositionId};
use crate::error::{Result, SeatingError};
use std::collections::HashMap;

/// Immutable set of positions plus the pair groups linking some of them.
///
/// Construction validates the structure once; afterwards the topology is a
/// value object and is only ever read.
///
/// # Examples
///
/// ```
/// use u_seating::topology::{PairGroup, Position, Topology};
///
/// let topology = Topology::build(
///     vec![Position::new("L"), Position::new("R"), Position::new("S")],
///     vec![PairGroup::new("L", "R")],
/// )
/// .unwrap();
///
/// assert_eq!(topology.pair_groups().len(), 1);
/// assert_eq!(topology.singles().len(), 1);
/// assert!(topology.contains(&"S".into()));
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    positions: Vec<Position>,
    pair_groups: Vec<PairGroup>,
    index: HashMap<PositionId, usize>,
    /// Pair group index for each paired position.
    paired: HashMap<PositionId, usize>,
}

impl Topology {
    /// Builds a topology, rejecting structural contradictions.
    ///
    /// Fails with [`SeatingError::InvalidTopology`] when a position id is
    /// declared twice, a pair links a position to itself, a pair references
    /// an unknown or inactive position, or a position sits in two pairs.
    pub fn build(positions: Vec<Position>, pair_groups: Vec<PairGroup>) -> Result<Self> {
        let mut index = HashMap::with_capacity(positions.len());
        for (i, position) in positions.iter().enumerate() {
            if index.insert(position.id.clone(), i).is_some() {
                return Err(SeatingError::InvalidTopology(format!(
                    "position {} is declared more than once",
                    position.id
                )));
            }
        }

        let mut paired = HashMap::new();
        for (g, group) in pair_groups.iter().enumerate() {
            let [a, b] = group.slots();
            if a == b {
                return Err(SeatingError::InvalidTopology(format!(
                    "pair group links {a} to itself"
                )));
            }
            for id in [a, b] {
                match index.get(id) {
                    None => {
                        return Err(SeatingError::InvalidTopology(format!(
                            "pair group references unknown position {id}"
                        )))
                    }
                    Some(&i) if !positions[i].active => {
                        return Err(SeatingError::InvalidTopology(format!(
                            "pair group references inactive position {id}"
                        )))
                    }
                    Some(_) => {}
                }
                if paired.insert(id.clone(), g).is_some() {
                    return Err(SeatingError::InvalidTopology(format!(
                        "position {id} belongs to more than one pair group"
                    )));
                }
            }
        }

        Ok(Self {
            positions,
            pair_groups,
            index,
            paired,
        })
    }

    /// A topology of active single positions only.
    pub fn singles_only<I, P>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PositionId>,
    {
        Self::build(ids.into_iter().map(Position::new).collect(), Vec::new())
    }

    /// All positions in declaration order, active or not.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn pair_groups(&self) -> &[PairGroup] {
        &self.pair_groups
    }

    /// Active positions outside every pair group, in declaration order.
    pub fn singles(&self) -> Vec<&PositionId> {
        self.positions
            .iter()
            .filter(|p| p.active && !self.paired.contains_key(&p.id))
            .map(|p| &p.id)
            .collect()
    }

    /// Active positions in declaration order.
    pub fn active_positions(&self) -> impl Iterator<Item = &PositionId> {
        self.positions.iter().filter(|p| p.active).map(|p| &p.id)
    }

    pub fn active_count(&self) -> usize {
        self.positions.iter().filter(|p| p.active).count()
    }

    /// Whether the id is declared in this topology (active or not).
    pub fn contains(&self, id: &PositionId) -> bool {
        self.index.contains_key(id)
    }

    pub fn is_active(&self, id: &PositionId) -> bool {
        self.position(id).is_some_and(|p| p.active)
    }

    pub fn position(&self, id: &PositionId) -> Option<&Position> {
        self.index.get(id).map(|&i| &self.positions[i])
    }

    /// The pair group containing `id`, if any.
    pub fn pair_of(&self, id: &PositionId) -> Option<&PairGroup> {
        self.paired.get(id).map(|&g| &self.pair_groups[g])
    }

    /// Number of partitions recorded in position metadata.
    pub fn partition_count(&self) -> usize {
        self.positions
            .iter()
            .filter_map(|p| p.partition)
            .max()
            .map_or(0, |m| m.saturating_add(1))
    }
}
