//! The people to be seated.
//!
//! A [`Roster`] is an ordered list of [`Person`]s. Order matters only for
//! reporting (unassigned people are listed in roster order) and for
//! tie-breaking between categories of equal size; the engine's single
//! shuffle decides who sits where.

mod types;

pub use types::{Category, Person, Roster};
