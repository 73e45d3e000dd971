//! Plain-data request for one run, as handed over by a presentation layer.

use super::config::EngineConfig;
use super::result::SeatingResult;
use super::runner::SeatingRunner;
use super::types::SeatingProblem;
use crate::error::Result;
use crate::history::HistorySnapshot;
use crate::policy::ConstraintPolicy;
use crate::roster::{Person, Roster};
use crate::topology::{PairGroup, Position, Topology};

/// Roster, layout, policy and history for one run in record form.
///
/// # Examples
///
/// ```
/// use u_seating::engine::SeatingRequest;
/// use u_seating::roster::Person;
/// use u_seating::topology::Position;
///
/// let request = SeatingRequest {
///     roster: vec![Person::new("ana", "A"), Person::new("ben", "B"), Person::new("cy", "A")],
///     positions: vec![Position::new("S1"), Position::new("S2")],
///     seed: Some(1),
///     ..Default::default()
/// };
/// let result = request.execute().unwrap();
/// assert_eq!(result.unassigned_people.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SeatingRequest {
    pub roster: Vec<Person>,
    pub positions: Vec<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pair_groups: Vec<PairGroup>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: ConstraintPolicy,
    #[cfg_attr(feature = "serde", serde(default))]
    pub history: HistorySnapshot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl SeatingRequest {
    /// Builds the topology and runs with default engine settings.
    pub fn execute(&self) -> Result<SeatingResult> {
        let mut config = EngineConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        self.execute_with(&config)
    }

    /// Builds the topology and runs with `config`. A request seed, if set,
    /// overrides `config.seed`.
    pub fn execute_with(&self, config: &EngineConfig) -> Result<SeatingResult> {
        let topology = Topology::build(self.positions.clone(), self.pair_groups.clone())?;
        let roster = Roster::new(self.roster.clone());
        let problem = SeatingProblem::new(&roster, &topology, &self.policy, &self.history);

        match self.seed {
            Some(seed) => SeatingRunner::run(&problem, &config.clone().with_seed(seed)),
            None => SeatingRunner::run(&problem, config),
        }
    }
}
