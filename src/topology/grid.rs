//! Rows × partitions grid generator.

use super::model::Topology;
use super::types::{PairGroup, Position, PositionId};
use crate::error::{Result, SeatingError};

/// A classroom-style grid: `partitions` columns of desks, each `rows` deep,
/// with `seats_per_row` seats per partition row.
///
/// When `paired` is set, adjacent seats inside a partition row are linked
/// as pair groups (seats 0–1, 2–3, …); an odd last seat stays a single.
///
/// # Examples
///
/// ```
/// use u_seating::topology::GridLayout;
///
/// let topology = GridLayout::new(2, 3, 2).with_pairs(true).build().unwrap();
/// assert_eq!(topology.active_count(), 12);
/// assert_eq!(topology.pair_groups().len(), 6);
/// assert_eq!(topology.partition_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GridLayout {
    pub partitions: usize,
    pub rows: usize,
    pub seats_per_row: usize,
    pub paired: bool,
    /// Seats to mark inactive, by generated id.
    pub disabled: Vec<PositionId>,
}

impl GridLayout {
    pub fn new(partitions: usize, rows: usize, seats_per_row: usize) -> Self {
        Self {
            partitions,
            rows,
            seats_per_row,
            paired: false,
            disabled: Vec::new(),
        }
    }

    pub fn with_pairs(mut self, paired: bool) -> Self {
        self.paired = paired;
        self
    }

    /// Marks a seat inactive. A disabled seat never forms a pair.
    pub fn with_disabled(mut self, id: impl Into<PositionId>) -> Self {
        self.disabled.push(id.into());
        self
    }

    /// The id generated for a seat.
    pub fn seat_id(partition: usize, row: usize, seat: usize) -> PositionId {
        PositionId::new(format!("p{partition}-r{row}-s{seat}"))
    }

    /// Generates the topology, rows first then partitions then seats.
    pub fn build(&self) -> Result<Topology> {
        let mut positions = Vec::with_capacity(self.partitions * self.rows * self.seats_per_row);
        let mut pairs = Vec::new();

        for row in 0..self.rows {
            for partition in 0..self.partitions {
                for seat in 0..self.seats_per_row {
                    let id = Self::seat_id(partition, row, seat);
                    let mut position = Position::new(id.clone()).in_partition(partition);
                    position.active = !self.disabled.contains(&id);
                    positions.push(position);
                }

                if self.paired {
                    for seat in (0..self.seats_per_row.saturating_sub(1)).step_by(2) {
                        let a = Self::seat_id(partition, row, seat);
                        let b = Self::seat_id(partition, row, seat + 1);
                        if !self.disabled.contains(&a) && !self.disabled.contains(&b) {
                            pairs.push(PairGroup::new(a, b));
                        }
                    }
                }
            }
        }

        for id in &self.disabled {
            if !positions.iter().any(|p| &p.id == id) {
                return Err(SeatingError::InvalidTopology(format!(
                    "disabled seat {id} is outside the grid"
                )));
            }
        }

        Topology::build(positions, pairs)
    }
}
