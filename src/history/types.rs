//! History snapshot record.

use crate::topology::PositionId;
use std::collections::BTreeMap;

/// Where everyone sat and who they sat with in the previous run.
///
/// # Examples
///
/// ```
/// use u_seating::history::HistorySnapshot;
///
/// let history = HistorySnapshot::new()
///     .with_position("ana", "P3")
///     .with_partners("ana", "ben");
///
/// assert_eq!(history.last_position("ana").map(|p| p.as_str()), Some("P3"));
/// assert!(history.were_partners("ben", "ana"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HistorySnapshot {
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_position: BTreeMap<String, PositionId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_partner: BTreeMap<String, String>,
}

impl HistorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, identity: impl Into<String>, position: impl Into<PositionId>) -> Self {
        self.last_position.insert(identity.into(), position.into());
        self
    }

    /// Records `a` and `b` as each other's last partner.
    pub fn with_partners(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        self.last_partner.insert(a.clone(), b.clone());
        self.last_partner.insert(b, a);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.last_position.is_empty() && self.last_partner.is_empty()
    }

    pub fn last_position(&self, identity: &str) -> Option<&PositionId> {
        self.last_position.get(identity)
    }

    pub fn last_partner(&self, identity: &str) -> Option<&str> {
        self.last_partner.get(identity).map(String::as_str)
    }

    /// Whether either person names the other as last partner.
    pub fn were_partners(&self, a: &str, b: &str) -> bool {
        self.last_partner(a) == Some(b) || self.last_partner(b) == Some(a)
    }
}
