//! Shuffled pool of free (unpinned) people.

use crate::roster::{Category, Person, Roster};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;
use std::collections::{HashMap, VecDeque};

/// Free people in one shuffled order.
///
/// The free list is shuffled exactly once per run. Per-category pools are
/// stable filtered views of that order, so each category pool is itself a
/// uniform shuffle and the union pool has a well-defined order too.
///
/// Taking a person marks their slot in the union order and drops their index
/// from the category queue, so lookups stay near the front of each queue.
#[derive(Debug, Clone)]
pub(crate) struct FreePool<'a> {
    order: Vec<&'a Person>,
    taken: Vec<bool>,
    /// Indices into `order`, ascending, for each category still present.
    by_category: HashMap<&'a Category, VecDeque<usize>>,
    /// Every entry of `order` before this index is taken.
    head: usize,
    len: usize,
}

impl<'a> FreePool<'a> {
    pub fn shuffled<R: Rng + ?Sized>(roster: &'a Roster, rng: &mut R) -> Self {
        let mut order: Vec<&'a Person> = roster.free().collect();
        order.shuffle(rng);

        let mut by_category: HashMap<&'a Category, VecDeque<usize>> = HashMap::new();
        for (i, &person) in order.iter().enumerate() {
            by_category.entry(&person.category).or_default().push_back(i);
        }

        Self {
            taken: vec![false; order.len()],
            len: order.len(),
            order,
            by_category,
            head: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn count_in(&self, category: &Category) -> usize {
        self.by_category.get(category).map_or(0, VecDeque::len)
    }

    /// Categories that still have people, largest first. Ties keep the
    /// relative order of `order`.
    pub fn ranked_categories(&self, order: &[&'a Category]) -> Vec<(&'a Category, usize)> {
        let mut ranked: Vec<(&'a Category, usize)> = order
            .iter()
            .map(|&c| (c, self.count_in(c)))
            .filter(|&(_, n)| n > 0)
            .collect();
        ranked.sort_by_key(|&(_, n)| Reverse(n));
        ranked
    }

    /// Removes and returns the first person in pool order matching `pred`.
    pub fn take_first<F>(&mut self, mut pred: F) -> Option<&'a Person>
    where
        F: FnMut(&Person) -> bool,
    {
        let i = (self.head..self.order.len()).find(|&i| !self.taken[i] && pred(self.order[i]))?;
        Some(self.remove(i))
    }

    /// Like [`take_first`](Self::take_first), restricted to one category.
    pub fn take_first_in<F>(&mut self, category: &Category, mut pred: F) -> Option<&'a Person>
    where
        F: FnMut(&Person) -> bool,
    {
        let queue = self.by_category.get(category)?;
        let i = queue.iter().copied().find(|&i| pred(self.order[i]))?;
        Some(self.remove(i))
    }

    fn remove(&mut self, i: usize) -> &'a Person {
        let person = self.order[i];
        if let Some(queue) = self.by_category.get_mut(&person.category) {
            if let Some(at) = queue.iter().position(|&j| j == i) {
                queue.remove(at);
            }
            if queue.is_empty() {
                self.by_category.remove(&person.category);
            }
        }
        self.taken[i] = true;
        self.len -= 1;
        while self.head < self.order.len() && self.taken[self.head] {
            self.head += 1;
        }
        person
    }

    pub fn remaining(&self) -> impl Iterator<Item = &'a Person> + '_ {
        self.order
            .iter()
            .zip(&self.taken)
            .filter(|&(_, &taken)| !taken)
            .map(|(&person, _)| person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::create_rng;

    fn roster() -> Roster {
        vec![
            Person::new("a1", "A"),
            Person::new("b1", "B"),
            Person::new("a2", "A"),
            Person::new("pinned", "B").pinned_to("P1"),
            Person::new("b2", "B"),
            Person::new("b3", "B"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_pool_excludes_fixed_people() {
        let roster = roster();
        let pool = FreePool::shuffled(&roster, &mut create_rng(42));
        assert_eq!(pool.len(), 5);
        assert!(pool.remaining().all(|p| !p.is_fixed()));
    }

    #[test]
    fn test_same_seed_same_order() {
        let roster = roster();
        let a: Vec<&str> = FreePool::shuffled(&roster, &mut create_rng(7))
            .remaining()
            .map(|p| p.identity.as_str())
            .collect();
        let b: Vec<&str> = FreePool::shuffled(&roster, &mut create_rng(7))
            .remaining()
            .map(|p| p.identity.as_str())
            .collect();
        assert_eq!(a, b);
    }

    fn names<'a>(ranked: &[(&'a Category, usize)]) -> Vec<(&'a str, usize)> {
        ranked.iter().map(|&(c, n)| (c.as_str(), n)).collect()
    }

    #[test]
    fn test_ranked_categories_and_ties() {
        let roster = roster();
        let order = roster.categories();
        let mut pool = FreePool::shuffled(&roster, &mut create_rng(1));
        assert_eq!(names(&pool.ranked_categories(&order)), vec![("B", 3), ("A", 2)]);

        pool.take_first(|p| p.identity == "b2");
        // A=2, B=2: tie goes to A, which appears first in the roster
        assert_eq!(names(&pool.ranked_categories(&order)), vec![("A", 2), ("B", 2)]);

        pool.take_first_in(&"A".into(), |_| true);
        pool.take_first_in(&"A".into(), |_| true);
        assert_eq!(names(&pool.ranked_categories(&order)), vec![("B", 2)]);
        assert_eq!(pool.count_in(&"A".into()), 0);
    }

    #[test]
    fn test_take_first_removes() {
        let roster = roster();
        let mut pool = FreePool::shuffled(&roster, &mut create_rng(3));
        let taken = pool.take_first(|p| p.category.as_str() == "A").unwrap();
        assert_eq!(taken.category.as_str(), "A");
        assert_eq!(pool.count_in(&"A".into()), 1);
        assert!(pool.take_first(|p| p.identity == "nobody").is_none());
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_category_and_union_views_agree() {
        let roster = roster();
        let mut pool = FreePool::shuffled(&roster, &mut create_rng(9));
        let union: Vec<&str> = pool.remaining().map(|p| p.identity.as_str()).collect();
        let first_b = union
            .iter()
            .copied()
            .find(|id| id.starts_with('b'))
            .unwrap();

        let taken = pool.take_first_in(&"B".into(), |_| true).unwrap();
        assert_eq!(taken.identity, first_b);
        assert_eq!(pool.count_in(&"B".into()), 2);

        // The union order skips the taken person and keeps the rest in place
        let rest: Vec<&str> = pool.remaining().map(|p| p.identity.as_str()).collect();
        let expected: Vec<&str> = union.into_iter().filter(|&id| id != first_b).collect();
        assert_eq!(rest, expected);

        while pool.take_first(|_| true).is_some() {}
        assert!(pool.is_empty());
        assert_eq!(pool.remaining().count(), 0);
    }
}
