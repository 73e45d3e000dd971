//! Load → run → save around a history store.

use super::config::EngineConfig;
use super::result::SeatingResult;
use super::runner::SeatingRunner;
use super::types::SeatingProblem;
use crate::error::Result;
use crate::history::{HistorySnapshot, HistoryStore};
use crate::policy::ConstraintPolicy;
use crate::roster::Roster;
use crate::topology::Topology;
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Serializes runs that share one history store.
///
/// Each [`run`](Self::run) holds the store lock from `load` to `save`, so
/// two concurrent runs cannot clobber each other's history. History is
/// saved only when the run succeeds.
pub struct SeatingSession<S: HistoryStore> {
    store: Mutex<S>,
    config: EngineConfig,
}

impl<S: HistoryStore> SeatingSession<S> {
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self {
            store: Mutex::new(store),
            config,
        }
    }

    pub fn run(
        &self,
        roster: &Roster,
        topology: &Topology,
        policy: &ConstraintPolicy,
    ) -> Result<SeatingResult> {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        let history = store.load();
        let problem = SeatingProblem::new(roster, topology, policy, &history);
        let result = SeatingRunner::run(&problem, &self.config).inspect_err(|err| {
            if err.is_roster_error() {
                warn!(error = %err, "roster rejected, history not saved");
            } else {
                warn!(error = %err, "seating run failed, history not saved");
            }
        })?;
        store.save(result.new_history.clone());
        Ok(result)
    }

    /// The snapshot the next run will see.
    pub fn history(&self) -> HistorySnapshot {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .load()
    }

    pub fn into_store(self) -> S {
        self.store.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
