//! Constraint policy configuration.

use crate::error::{Result, SeatingError};
use crate::topology::Topology;

/// How the two slots of a pair group relate by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PairMode {
    /// Pair occupants should have different categories.
    CrossCategory,
    /// Pair occupants should share a category.
    SameCategory,
    /// Pairs are filled without regard to category.
    #[default]
    None,
}

/// Soft-constraint selection for one run.
///
/// # Examples
///
/// ```
/// use u_seating::policy::{ConstraintPolicy, PairMode};
///
/// let policy = ConstraintPolicy::default()
///     .with_pair_mode(PairMode::CrossCategory)
///     .with_avoid_previous_position(true)
///     .with_avoid_previous_partner(true);
/// assert!(policy.has_soft_constraints());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ConstraintPolicy {
    /// Only consulted when the topology has pair groups.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pair_mode: PairMode,

    /// Avoid seating a person where they sat last run.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avoid_previous_position: bool,

    /// Avoid pairing a person with their last partner.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avoid_previous_partner: bool,
}

impl ConstraintPolicy {
    pub fn with_pair_mode(mut self, mode: PairMode) -> Self {
        self.pair_mode = mode;
        self
    }

    pub fn with_avoid_previous_position(mut self, avoid: bool) -> Self {
        self.avoid_previous_position = avoid;
        self
    }

    pub fn with_avoid_previous_partner(mut self, avoid: bool) -> Self {
        self.avoid_previous_partner = avoid;
        self
    }

    /// Whether any avoid-previous preference is switched on.
    pub fn has_soft_constraints(&self) -> bool {
        self.avoid_previous_position || self.avoid_previous_partner
    }

    /// Validates the policy against a topology.
    ///
    /// A category pairing mode on a topology without pair groups has no
    /// effect. With `strict` set this is an [`SeatingError::InvalidPolicy`];
    /// otherwise it is logged and the run proceeds.
    pub fn validate_for(&self, topology: &Topology, strict: bool) -> Result<()> {
        if self.pair_mode != PairMode::None && topology.pair_groups().is_empty() {
            let msg = format!(
                "pair mode {:?} has no effect on a topology without pair groups",
                self.pair_mode
            );
            if strict {
                return Err(SeatingError::InvalidPolicy(msg));
            }
            tracing::warn!("{msg}");
        }
        Ok(())
    }
}
