//! Seating run: up-front validation, then the placement phases.
//!
//! # Algorithm
//!
//! 0. Validate the roster against the topology (identities, pins)
//! 1. Seat fixed people at their pins
//! 2. Fill pair groups in declaration order, slot by slot, walking the
//!    degradation ladder for each slot
//! 3. Fill single positions in declaration order with the same ladder,
//!    minus the category requirement
//! 4. Emit the history snapshot from the final assignment
//!
//! Later phases never revisit earlier ones. Within a phase, a placement that
//! repeats a previous seat may be exchanged with another seat of the same
//! phase: the two slots of a pair in Phase 2, an earlier single in Phase 3.
//! Randomness comes only from the single shuffle of the free pool at the
//! start of the run.

use super::config::{EmptyRosterPolicy, EngineConfig};
use super::ladder::{co_slot_requirement, select, Requirement, Rung, Slot};
use super::pool::FreePool;
use super::result::{Assignment, Relaxation, SeatingResult};
use super::types::SeatingProblem;
use crate::error::{Result, SeatingError};
use crate::policy::PairMode;
use crate::roster::{Category, Person};
use crate::topology::PositionId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Creates the seeded generator used for a run.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Executes the seating engine.
pub struct SeatingRunner;

impl SeatingRunner {
    /// Runs the engine, seeding from `config.seed` or from entropy.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_seating::engine::{EngineConfig, SeatingProblem, SeatingRunner};
    /// use u_seating::history::HistorySnapshot;
    /// use u_seating::policy::{ConstraintPolicy, PairMode};
    /// use u_seating::roster::{Person, Roster};
    /// use u_seating::topology::GridLayout;
    ///
    /// let roster: Roster = vec![
    ///     Person::new("ana", "A"),
    ///     Person::new("ben", "B"),
    ///     Person::new("cy", "A"),
    ///     Person::new("dee", "B"),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let topology = GridLayout::new(1, 2, 2).with_pairs(true).build().unwrap();
    /// let policy = ConstraintPolicy::default().with_pair_mode(PairMode::CrossCategory);
    /// let history = HistorySnapshot::new();
    ///
    /// let problem = SeatingProblem::new(&roster, &topology, &policy, &history);
    /// let result = SeatingRunner::run(&problem, &EngineConfig::default().with_seed(42)).unwrap();
    ///
    /// assert!(result.unassigned_people.is_empty());
    /// assert_eq!(result.new_history.last_partner.len(), 4);
    /// ```
    pub fn run(problem: &SeatingProblem<'_>, config: &EngineConfig) -> Result<SeatingResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the engine with a caller-supplied random source.
    ///
    /// `config.seed` is ignored; the pool shuffle draws from `rng`.
    pub fn run_with_rng<'a, R: Rng + ?Sized>(
        problem: &SeatingProblem<'a>,
        config: &EngineConfig,
        rng: &mut R,
    ) -> Result<SeatingResult> {
        problem
            .policy
            .validate_for(problem.topology, config.strict_policy)?;

        if problem.roster.is_empty() {
            return match config.empty_roster {
                EmptyRosterPolicy::Reject => Err(SeatingError::EmptyRoster),
                EmptyRosterPolicy::Allow => {
                    debug!("empty roster, returning empty assignment");
                    Ok(SeatingResult::empty(problem.topology))
                }
            };
        }

        validate_roster(problem)?;

        let mut run = RunState::new(*problem, rng);
        run.place_fixed();
        run.fill_pairs();
        run.fill_singles();
        Ok(run.finish())
    }
}

/// Phase 0: identity uniqueness and pin sanity.
fn validate_roster(problem: &SeatingProblem<'_>) -> Result<()> {
    let mut identities = HashSet::new();
    let mut pins: HashMap<&PositionId, &str> = HashMap::new();

    for person in problem.roster.people() {
        if !identities.insert(person.identity.as_str()) {
            return Err(SeatingError::DuplicateIdentity {
                identity: person.identity.clone(),
            });
        }
        let Some(pin) = &person.pinned_position else {
            continue;
        };
        if !problem.topology.is_active(pin) {
            return Err(SeatingError::UnknownPinnedPosition {
                identity: person.identity.clone(),
                position: pin.clone(),
            });
        }
        if let Some(first) = pins.insert(pin, &person.identity) {
            return Err(SeatingError::DuplicatePin {
                position: pin.clone(),
                first: first.to_string(),
                second: person.identity.clone(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Seat<'a> {
    person: &'a Person,
    /// `None` for pinned people.
    rung: Option<Rung>,
}

struct RunState<'a> {
    problem: SeatingProblem<'a>,
    categories: Vec<&'a Category>,
    pool: FreePool<'a>,
    seated: HashMap<&'a PositionId, Seat<'a>>,
    /// Positions filled from the pool, in placement order.
    order: Vec<&'a PositionId>,
}

impl<'a> RunState<'a> {
    fn new<R: Rng + ?Sized>(problem: SeatingProblem<'a>, rng: &mut R) -> Self {
        Self {
            problem,
            categories: problem.roster.categories(),
            pool: FreePool::shuffled(problem.roster, rng),
            seated: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn occupant(&self, position: &PositionId) -> Option<&'a Person> {
        self.seated.get(position).map(|s| s.person)
    }

    /// Phase 1.
    fn place_fixed(&mut self) {
        let roster = self.problem.roster;
        for person in roster.fixed() {
            if let Some(pin) = &person.pinned_position {
                self.seated.insert(pin, Seat { person, rung: None });
            }
        }
        debug!(fixed = self.seated.len(), free = self.pool.len(), "placed fixed people");
    }

    /// Seats the first admissible pooled person at `position`.
    fn place(&mut self, position: &'a PositionId, slot: Slot<'_>, rungs: &[Rung]) -> Option<&'a Person> {
        let (person, rung) = select(
            &mut self.pool,
            &slot,
            self.problem.policy,
            self.problem.history,
            rungs,
        )?;
        if rung == Rung::Borrowed {
            warn!(identity = %person.identity, %position, "category borrowed for pair slot");
        } else if rung != Rung::Strict {
            debug!(identity = %person.identity, %position, ?rung, "placed with relaxed rung");
        }
        self.seated.insert(position, Seat { person, rung: Some(rung) });
        self.order.push(position);
        Some(person)
    }

    /// Phase 2.
    fn fill_pairs(&mut self) {
        let topology = self.problem.topology;
        for group in topology.pair_groups() {
            let [a, b] = group.slots();
            match (self.occupant(a), self.occupant(b)) {
                (Some(_), Some(_)) => continue,
                (Some(co), None) => {
                    self.fill_co_slot(b, co);
                }
                (None, Some(co)) => {
                    self.fill_co_slot(a, co);
                }
                (None, None) => {
                    if let Some(first) = self.fill_first_slot(a) {
                        if self.fill_co_slot(b, first).is_some() {
                            self.settle_pair(a, b);
                        }
                    }
                }
            }

            match (self.occupant(a), self.occupant(b)) {
                (Some(_), None) | (None, Some(_)) => {
                    warn!(first = %a, second = %b, "pair group left half-filled")
                }
                _ => {}
            }
        }
        debug!(remaining = self.pool.len(), "filled pair groups");
    }

    /// Seats the first slot of an empty pair.
    ///
    /// Under a category mode the slot takes whichever category can seat
    /// someone at the strictest rung, largest category first. Categories
    /// that leave the co-slot a same-category (or cross-category) partner are
    /// tried before those that would force a borrow.
    fn fill_first_slot(&mut self, position: &'a PositionId) -> Option<&'a Person> {
        let mode = self.problem.policy.pair_mode;
        if mode == PairMode::None {
            return self.place(position, Slot::single(position), &Rung::LADDER);
        }

        let free = self.pool.len();
        let (viable, rest): (Vec<_>, Vec<_>) = self
            .pool
            .ranked_categories(&self.categories)
            .into_iter()
            .partition(|&(_, n)| match mode {
                PairMode::SameCategory => n >= 2,
                _ => free > n,
            });

        for tier in [viable, rest] {
            for rung in Rung::LADDER {
                for &(category, _) in &tier {
                    let slot = Slot {
                        position,
                        requirement: Requirement::Is(category),
                        co_occupant: None,
                    };
                    if let Some(person) = self.place(position, slot, &[rung]) {
                        return Some(person);
                    }
                }
            }
        }
        None
    }

    fn fill_co_slot(&mut self, position: &'a PositionId, co: &'a Person) -> Option<&'a Person> {
        let slot = Slot {
            position,
            requirement: co_slot_requirement(self.problem.policy.pair_mode, co),
            co_occupant: Some(co),
        };
        self.place(position, slot, &Rung::LADDER)
    }

    /// Exchanges the two pooled occupants of a pair when that takes a repeat
    /// seat away and puts neither back where they sat last time. Category
    /// rules and the partner relation are symmetric, so only the position
    /// part of each rung changes.
    fn settle_pair(&mut self, a: &'a PositionId, b: &'a PositionId) {
        if !self.problem.policy.avoid_previous_position {
            return;
        }
        let (Some(&first), Some(&second)) = (self.seated.get(a), self.seated.get(b)) else {
            return;
        };
        let history = self.problem.history;
        let repeats = |seat: &Seat<'_>, at: &PositionId| {
            history.last_position(&seat.person.identity) == Some(at)
        };
        let repeat_now = repeats(&first, a) || repeats(&second, b);
        let repeat_swapped = repeats(&first, b) || repeats(&second, a);
        if !repeat_now || repeat_swapped {
            return;
        }

        let moved = |seat: Seat<'a>| Seat {
            person: seat.person,
            rung: seat.rung.map(Rung::keeping_position),
        };
        self.seated.insert(a, moved(second));
        self.seated.insert(b, moved(first));
        debug!(first = %a, second = %b, "swapped pair occupants to avoid a repeat seat");
    }

    /// Phase 3.
    ///
    /// With avoid-previous-position on, a single whose only candidates sat
    /// there last time is deferred while more open seats than people
    /// remain, and a forced repeat is traded with an earlier single when
    /// both occupants end up away from their previous seats. That trade
    /// moves a person seated earlier in this phase; pairs and pins are
    /// never touched.
    fn fill_singles(&mut self) {
        let topology = self.problem.topology;
        let open: Vec<&'a PositionId> = topology
            .singles()
            .into_iter()
            .filter(|id| !self.seated.contains_key(id))
            .collect();
        let avoid_position = self.problem.policy.avoid_previous_position;

        let mut deferred = Vec::new();
        let mut placed = Vec::new();
        for (i, &position) in open.iter().enumerate() {
            if self.pool.is_empty() {
                break;
            }
            let later = open.len() - i - 1 + deferred.len();
            if avoid_position && later >= self.pool.len() {
                if self
                    .place(position, Slot::single(position), &Rung::POSITION_KEEPING)
                    .is_some()
                {
                    placed.push(position);
                } else {
                    deferred.push(position);
                }
            } else {
                self.place_single(position, &mut placed);
            }
        }

        for position in deferred {
            if self.pool.is_empty() {
                break;
            }
            self.place_single(position, &mut placed);
        }
        debug!(remaining = self.pool.len(), "filled single positions");
    }

    fn place_single(&mut self, position: &'a PositionId, placed: &mut Vec<&'a PositionId>) {
        let Some(person) = self.place(position, Slot::single(position), &Rung::LADDER) else {
            return;
        };
        placed.push(position);

        let history = self.problem.history;
        if !self.problem.policy.avoid_previous_position
            || history.last_position(&person.identity) != Some(position)
        {
            return;
        }

        let trade = placed.iter().copied().find(|&other| {
            other != position
                && self
                    .occupant(other)
                    .is_some_and(|p| history.last_position(&p.identity) != Some(position))
        });
        if let Some(other) = trade {
            if let Some(moved) = self.occupant(other) {
                let strict = Some(Rung::Strict);
                self.seated.insert(other, Seat { person, rung: strict });
                self.seated.insert(position, Seat { person: moved, rung: strict });
                debug!(%position, %other, "traded singles to avoid a repeat seat");
            }
        }
    }

    /// Phase 4 and the run summary.
    fn finish(self) -> SeatingResult {
        let topology = self.problem.topology;

        let mut assignment = Assignment::empty(topology);
        for (&position, seat) in &self.seated {
            assignment.seat(position.clone(), seat.person.identity.clone());
        }

        let left: HashSet<&str> = self.pool.remaining().map(|p| p.identity.as_str()).collect();
        let unassigned_people: Vec<String> = self
            .problem
            .roster
            .people()
            .iter()
            .filter(|p| left.contains(p.identity.as_str()))
            .map(|p| p.identity.clone())
            .collect();

        let unfilled_positions: Vec<PositionId> = topology
            .active_positions()
            .filter(|id| !self.seated.contains_key(id))
            .cloned()
            .collect();

        let mut relaxations = Vec::new();
        let mut category_borrowed = Vec::new();
        for &position in &self.order {
            let Some(seat) = self.seated.get(position) else {
                continue;
            };
            match seat.rung {
                Some(Rung::Strict) | None => {}
                Some(rung) => {
                    if rung == Rung::Borrowed {
                        category_borrowed.push(seat.person.identity.clone());
                    }
                    relaxations.push(Relaxation {
                        identity: seat.person.identity.clone(),
                        position: position.clone(),
                        rung,
                    });
                }
            }
        }

        let new_history = assignment.to_history(topology);

        info!(
            seated = assignment.occupied_count(),
            unassigned = unassigned_people.len(),
            unfilled = unfilled_positions.len(),
            relaxed = relaxations.len(),
            borrowed = category_borrowed.len(),
            "seating run complete"
        );

        SeatingResult {
            assignment,
            unassigned_people,
            unfilled_positions,
            category_borrowed,
            relaxations,
            new_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistorySnapshot;
    use crate::policy::ConstraintPolicy;
    use crate::roster::Roster;
    use crate::topology::{PairGroup, Position, Topology};

    fn roster(people: &[(&str, &str)]) -> Roster {
        people.iter().map(|&(id, cat)| Person::new(id, cat)).collect()
    }

    fn two_pairs() -> Topology {
        Topology::build(
            vec![
                Position::new("P1"),
                Position::new("P2"),
                Position::new("P3"),
                Position::new("P4"),
            ],
            vec![PairGroup::new("P1", "P2"), PairGroup::new("P3", "P4")],
        )
        .unwrap()
    }

    fn run(
        roster: &Roster,
        topology: &Topology,
        policy: &ConstraintPolicy,
        history: &HistorySnapshot,
        seed: u64,
    ) -> Result<SeatingResult> {
        let problem = SeatingProblem::new(roster, topology, policy, history);
        SeatingRunner::run(&problem, &EngineConfig::default().with_seed(seed))
    }

    fn category_at<'r>(roster: &'r Roster, result: &SeatingResult, pos: &str) -> &'r str {
        let who = result.assignment.get(&pos.into()).unwrap();
        roster.get(who).unwrap().category.as_str()
    }

    #[test]
    fn test_cross_category_pairs_mix() {
        let roster = roster(&[("a1", "A"), ("a2", "A"), ("b1", "B"), ("b2", "B")]);
        let topology = two_pairs();
        let policy = ConstraintPolicy::default().with_pair_mode(PairMode::CrossCategory);

        for seed in 0..20 {
            let result = run(&roster, &topology, &policy, &HistorySnapshot::new(), seed).unwrap();
            assert!(result.unassigned_people.is_empty());
            assert_ne!(category_at(&roster, &result, "P1"), category_at(&roster, &result, "P2"));
            assert_ne!(category_at(&roster, &result, "P3"), category_at(&roster, &result, "P4"));
            assert!(result.is_complete());
        }
    }

    #[test]
    fn test_same_category_pairs_match() {
        let roster = roster(&[("a1", "A"), ("b1", "B"), ("a2", "A"), ("b2", "B")]);
        let topology = two_pairs();
        let policy = ConstraintPolicy::default().with_pair_mode(PairMode::SameCategory);

        for seed in 0..20 {
            let result = run(&roster, &topology, &policy, &HistorySnapshot::new(), seed).unwrap();
            assert_eq!(category_at(&roster, &result, "P1"), category_at(&roster, &result, "P2"));
            assert_eq!(category_at(&roster, &result, "P3"), category_at(&roster, &result, "P4"));
            assert!(result.category_borrowed.is_empty());
        }
    }

    #[test]
    fn test_more_people_than_seats() {
        let roster = roster(&[("x", "A"), ("y", "A"), ("z", "B")]);
        let topology = Topology::singles_only(["S1", "S2"]).unwrap();
        let result = run(
            &roster,
            &topology,
            &ConstraintPolicy::default(),
            &HistorySnapshot::new(),
            42,
        )
        .unwrap();

        assert_eq!(result.unassigned_people.len(), 1);
        assert_eq!(result.assignment.occupied_count(), 2);
        assert!(result.unfilled_positions.is_empty());
        result.verify(&roster, &topology).unwrap();
    }

    #[test]
    fn test_borrowing_reported_when_category_runs_out() {
        let roster = roster(&[("a1", "A"), ("a2", "A"), ("a3", "A"), ("b1", "B")]);
        let topology = two_pairs();
        let policy = ConstraintPolicy::default().with_pair_mode(PairMode::CrossCategory);

        let result = run(&roster, &topology, &policy, &HistorySnapshot::new(), 42).unwrap();
        assert_eq!(result.category_borrowed.len(), 1);
        assert_eq!(result.relaxations.len(), 1);
        assert_eq!(result.relaxations[0].rung, Rung::Borrowed);
        assert!(result.unassigned_people.is_empty());
    }

    #[test]
    fn test_half_filled_pair_has_no_partner_history() {
        let roster = roster(&[("x", "A"), ("y", "B"), ("z", "A")]);
        let topology = two_pairs();
        let result = run(
            &roster,
            &topology,
            &ConstraintPolicy::default(),
            &HistorySnapshot::new(),
            42,
        )
        .unwrap();

        assert_eq!(result.unfilled_positions, vec![PositionId::from("P4")]);
        assert_eq!(result.new_history.last_position.len(), 3);
        assert_eq!(result.new_history.last_partner.len(), 2);
        let lone = result.assignment.get(&"P3".into()).unwrap();
        assert!(result.new_history.last_partner(lone).is_none());
    }

    #[test]
    fn test_fixed_person_sets_pair_requirement() {
        let roster: Roster = vec![
            Person::new("pinned", "A").pinned_to("P1"),
            Person::new("a2", "A"),
            Person::new("b1", "B"),
        ]
        .into_iter()
        .collect();
        let topology = Topology::build(
            vec![Position::new("P1"), Position::new("P2"), Position::new("S")],
            vec![PairGroup::new("P1", "P2")],
        )
        .unwrap();
        let policy = ConstraintPolicy::default().with_pair_mode(PairMode::CrossCategory);

        for seed in 0..10 {
            let result = run(&roster, &topology, &policy, &HistorySnapshot::new(), seed).unwrap();
            assert_eq!(result.assignment.get(&"P1".into()), Some("pinned"));
            assert_eq!(result.assignment.get(&"P2".into()), Some("b1"));
            assert_eq!(result.assignment.get(&"S".into()), Some("a2"));
        }
    }

    #[test]
    fn test_avoid_previous_partner() {
        let roster = roster(&[("a1", "A"), ("b1", "B"), ("a2", "A"), ("b2", "B")]);
        let topology = two_pairs();
        let policy = ConstraintPolicy::default()
            .with_pair_mode(PairMode::CrossCategory)
            .with_avoid_previous_partner(true);
        let history = HistorySnapshot::new()
            .with_partners("a1", "b1")
            .with_partners("a2", "b2");

        for seed in 0..20 {
            let result = run(&roster, &topology, &policy, &history, seed).unwrap();
            assert_eq!(result.new_history.last_partner("a1"), Some("b2"));
            assert_eq!(result.new_history.last_partner("a2"), Some("b1"));
            assert!(result.relaxations.is_empty());
        }
    }

    #[test]
    fn test_avoid_previous_position_defers_seat() {
        let roster = roster(&[("x", "A")]);
        let topology = Topology::singles_only(["P", "Q"]).unwrap();
        let policy = ConstraintPolicy::default().with_avoid_previous_position(true);
        let history = HistorySnapshot::new().with_position("x", "P");

        let result = run(&roster, &topology, &policy, &history, 42).unwrap();
        assert_eq!(result.assignment.get(&"Q".into()), Some("x"));
        assert_eq!(result.unfilled_positions, vec![PositionId::from("P")]);
    }

    #[test]
    fn test_avoid_previous_position_trades_forced_repeat() {
        let roster = roster(&[("x", "A"), ("y", "A")]);
        let topology = Topology::singles_only(["Q", "P"]).unwrap();
        let policy = ConstraintPolicy::default().with_avoid_previous_position(true);
        let history = HistorySnapshot::new().with_position("x", "P");

        for seed in 0..20 {
            let result = run(&roster, &topology, &policy, &history, seed).unwrap();
            assert_eq!(result.assignment.get(&"P".into()), Some("y"));
            assert_eq!(result.assignment.get(&"Q".into()), Some("x"));
            assert!(result.relaxations.is_empty());
        }
    }

    #[test]
    fn test_first_pair_slot_switches_category_to_avoid_repeat() {
        // Tie goes to A, but the only A sat at P1 last time
        let roster = roster(&[("x", "A"), ("y", "B")]);
        let topology = Topology::build(
            vec![Position::new("P1"), Position::new("P2")],
            vec![PairGroup::new("P1", "P2")],
        )
        .unwrap();
        let history = HistorySnapshot::new().with_position("x", "P1");

        for mode in [PairMode::CrossCategory, PairMode::None] {
            let policy = ConstraintPolicy::default()
                .with_pair_mode(mode)
                .with_avoid_previous_position(true);
            for seed in 0..20 {
                let result = run(&roster, &topology, &policy, &history, seed).unwrap();
                assert_eq!(result.assignment.get(&"P1".into()), Some("y"));
                assert_eq!(result.assignment.get(&"P2".into()), Some("x"));
                assert!(result.relaxations.is_empty());
            }
        }
    }

    #[test]
    fn test_pair_occupants_swapped_to_avoid_repeat() {
        // x takes P1 strictly; the only B left sat at P2 last time
        let roster = roster(&[("x", "A"), ("y", "B")]);
        let topology = Topology::build(
            vec![Position::new("P1"), Position::new("P2")],
            vec![PairGroup::new("P1", "P2")],
        )
        .unwrap();
        let policy = ConstraintPolicy::default()
            .with_pair_mode(PairMode::CrossCategory)
            .with_avoid_previous_position(true);
        let history = HistorySnapshot::new().with_position("y", "P2");

        for seed in 0..20 {
            let result = run(&roster, &topology, &policy, &history, seed).unwrap();
            assert_eq!(result.assignment.get(&"P1".into()), Some("y"));
            assert_eq!(result.assignment.get(&"P2".into()), Some("x"));
            assert!(result.relaxations.is_empty());
            assert_eq!(result.new_history.last_partner("x"), Some("y"));
        }
    }

    #[test]
    fn test_same_category_prefers_category_that_can_fill_pair() {
        // A has a strict candidate for P1 but no one to sit beside them
        let roster = roster(&[("a", "A"), ("b1", "B"), ("b2", "B"), ("b3", "B")]);
        let topology = Topology::build(
            vec![Position::new("P1"), Position::new("P2"), Position::new("S")],
            vec![PairGroup::new("P1", "P2")],
        )
        .unwrap();
        let policy = ConstraintPolicy::default()
            .with_pair_mode(PairMode::SameCategory)
            .with_avoid_previous_position(true);
        let history = HistorySnapshot::new()
            .with_position("b1", "P1")
            .with_position("b2", "P1")
            .with_position("b3", "P1");

        for seed in 0..20 {
            let result = run(&roster, &topology, &policy, &history, seed).unwrap();
            assert_eq!(category_at(&roster, &result, "P1"), "B");
            assert_eq!(category_at(&roster, &result, "P2"), "B");
            assert!(result.category_borrowed.is_empty());
        }
    }

    #[test]
    fn test_unavoidable_repeat_is_relaxed_not_error() {
        let roster = roster(&[("x", "A")]);
        let topology = Topology::singles_only(["P"]).unwrap();
        let policy = ConstraintPolicy::default().with_avoid_previous_position(true);
        let history = HistorySnapshot::new().with_position("x", "P");

        let result = run(&roster, &topology, &policy, &history, 42).unwrap();
        assert_eq!(result.assignment.get(&"P".into()), Some("x"));
        assert_eq!(result.relaxations[0].rung, Rung::IgnorePosition);
    }

    #[test]
    fn test_validation_errors() {
        let topology = Topology::build(
            vec![Position::new("P1"), Position::inactive("P2")],
            Vec::new(),
        )
        .unwrap();
        let policy = ConstraintPolicy::default();
        let history = HistorySnapshot::new();

        let dup_pin: Roster = vec![
            Person::new("x", "A").pinned_to("P1"),
            Person::new("y", "A").pinned_to("P1"),
        ]
        .into_iter()
        .collect();
        assert!(matches!(
            run(&dup_pin, &topology, &policy, &history, 1),
            Err(SeatingError::DuplicatePin { .. })
        ));

        let inactive_pin: Roster = vec![Person::new("x", "A").pinned_to("P2")].into_iter().collect();
        assert!(matches!(
            run(&inactive_pin, &topology, &policy, &history, 1),
            Err(SeatingError::UnknownPinnedPosition { .. })
        ));

        let unknown_pin: Roster = vec![Person::new("x", "A").pinned_to("P9")].into_iter().collect();
        assert!(matches!(
            run(&unknown_pin, &topology, &policy, &history, 1),
            Err(SeatingError::UnknownPinnedPosition { .. })
        ));

        let dup_id = roster(&[("x", "A"), ("x", "B")]);
        assert!(matches!(
            run(&dup_id, &topology, &policy, &history, 1),
            Err(SeatingError::DuplicateIdentity { .. })
        ));
    }

    #[test]
    fn test_empty_roster_policies() {
        let topology = Topology::singles_only(["P1", "P2"]).unwrap();
        let empty = Roster::default();
        let policy = ConstraintPolicy::default();
        let history = HistorySnapshot::new();
        let problem = SeatingProblem::new(&empty, &topology, &policy, &history);

        let result = SeatingRunner::run(&problem, &EngineConfig::default()).unwrap();
        assert_eq!(result.assignment.occupied_count(), 0);
        assert_eq!(result.unfilled_positions.len(), 2);
        assert!(result.new_history.is_empty());

        let config = EngineConfig::default().with_empty_roster(EmptyRosterPolicy::Reject);
        assert_eq!(
            SeatingRunner::run(&problem, &config).unwrap_err(),
            SeatingError::EmptyRoster
        );
    }

    #[test]
    fn test_strict_policy_rejects_pair_mode_without_pairs() {
        let roster = roster(&[("x", "A")]);
        let topology = Topology::singles_only(["P1"]).unwrap();
        let policy = ConstraintPolicy::default().with_pair_mode(PairMode::CrossCategory);
        let history = HistorySnapshot::new();
        let problem = SeatingProblem::new(&roster, &topology, &policy, &history);

        assert!(SeatingRunner::run(&problem, &EngineConfig::default()).is_ok());
        let strict = EngineConfig::default().with_strict_policy(true);
        assert!(matches!(
            SeatingRunner::run(&problem, &strict),
            Err(SeatingError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_same_seed_same_result() {
        let roster = roster(&[("a", "A"), ("b", "B"), ("c", "A"), ("d", "B"), ("e", "A")]);
        let topology = Topology::build(
            (1..=6).map(|i| Position::new(format!("P{i}"))).collect(),
            vec![PairGroup::new("P1", "P2")],
        )
        .unwrap();
        let policy = ConstraintPolicy::default().with_pair_mode(PairMode::CrossCategory);
        let history = HistorySnapshot::new();

        let first = run(&roster, &topology, &policy, &history, 7).unwrap();
        let second = run(&roster, &topology, &policy, &history, 7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_injected_rng() {
        let roster = roster(&[("a", "A"), ("b", "B")]);
        let topology = Topology::singles_only(["P1", "P2"]).unwrap();
        let policy = ConstraintPolicy::default();
        let history = HistorySnapshot::new();
        let problem = SeatingProblem::new(&roster, &topology, &policy, &history);

        let mut rng = create_rng(5);
        let injected =
            SeatingRunner::run_with_rng(&problem, &EngineConfig::default(), &mut rng).unwrap();
        let seeded = SeatingRunner::run(&problem, &EngineConfig::default().with_seed(5)).unwrap();
        assert_eq!(injected.assignment, seeded.assignment);
    }

    #[test]
    fn test_inactive_positions_stay_out() {
        let roster = roster(&[("a", "A"), ("b", "B")]);
        let topology = Topology::build(
            vec![Position::inactive("X"), Position::new("P1"), Position::new("P2")],
            Vec::new(),
        )
        .unwrap();
        let result = run(
            &roster,
            &topology,
            &ConstraintPolicy::default(),
            &HistorySnapshot::new(),
            3,
        )
        .unwrap();
        assert!(!result.assignment.contains(&"X".into()));
        assert_eq!(result.assignment.occupied_count(), 2);
    }
}
