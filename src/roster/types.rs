//! Person, category and roster records.

use crate::topology::PositionId;
use std::fmt;

/// A grouping attribute used by the pairing rules (e.g. gender).
///
/// Any number of distinct categories may appear in a roster; the pairing
/// modes only ask whether two people share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A person to be seated.
///
/// A person with `pinned_position` set is *fixed*: the engine always places
/// them exactly there.
///
/// # Examples
///
/// ```
/// use u_seating::roster::Person;
///
/// let p = Person::new("ana", "A").pinned_to("P3");
/// assert!(p.is_fixed());
/// assert_eq!(p.pinned_position.as_ref().map(|p| p.as_str()), Some("P3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Person {
    /// Unique within a roster; also the key into the history snapshot.
    pub identity: String,
    pub category: Category,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pinned_position: Option<PositionId>,
}

impl Person {
    pub fn new(identity: impl Into<String>, category: impl Into<Category>) -> Self {
        Self {
            identity: identity.into(),
            category: category.into(),
            pinned_position: None,
        }
    }

    /// Pins this person to a position.
    pub fn pinned_to(mut self, position: impl Into<PositionId>) -> Self {
        self.pinned_position = Some(position.into());
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.pinned_position.is_some()
    }
}

/// Ordered collection of people.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn push(&mut self, person: Person) {
        self.people.push(person);
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, identity: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.identity == identity)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen: Vec<&Category> = Vec::new();
        for person in &self.people {
            if !seen.contains(&&person.category) {
                seen.push(&person.category);
            }
        }
        seen
    }

    pub fn fixed(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| p.is_fixed())
    }

    pub fn free(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| !p.is_fixed())
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
