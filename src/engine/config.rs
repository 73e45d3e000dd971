//! Engine configuration.

/// What to do when the roster has nobody in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EmptyRosterPolicy {
    /// Return a trivially empty result.
    #[default]
    Allow,
    /// Fail with [`SeatingError::EmptyRoster`](crate::error::SeatingError::EmptyRoster).
    Reject,
}

/// Configuration for a seating run.
///
/// # Examples
///
/// ```
/// use u_seating::engine::{EmptyRosterPolicy, EngineConfig};
///
/// let config = EngineConfig::default()
///     .with_seed(42)
///     .with_empty_roster(EmptyRosterPolicy::Reject)
///     .with_strict_policy(true);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Random seed for reproducibility. `None` re-seeds every run.
    pub seed: Option<u64>,

    pub empty_roster: EmptyRosterPolicy,

    /// Treat a pairing mode on a pairless topology as an error instead of
    /// a logged no-op.
    pub strict_policy: bool,
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_empty_roster(mut self, policy: EmptyRosterPolicy) -> Self {
        self.empty_roster = policy;
        self
    }

    pub fn with_strict_policy(mut self, strict: bool) -> Self {
        self.strict_policy = strict;
        self
    }
}
