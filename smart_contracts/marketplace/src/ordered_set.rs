//! Append-only collection preserving insertion order with a membership index.
use std::collections::BTreeSet;

/// An append-only ordered sequence paired with a membership set.
///
/// Both halves are updated together by [`OrderedSet::insert`], so `items` never holds an element
/// twice and `members` always contains exactly the elements of `items`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OrderedSet<T: Ord> {
    items: Vec<T>,
    members: BTreeSet<T>,
}

impl<T: Ord> Default for OrderedSet<T> {
    fn default() -> Self {
        OrderedSet {
            items: Vec::new(),
            members: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Clone> OrderedSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` if it is not yet a member.
    ///
    /// Returns `false` and leaves the set untouched if `item` is already present.
    pub fn insert(&mut self, item: T) -> bool {
        if !self.members.insert(item.clone()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Returns `true` if `item` is a member.
    pub fn contains(&self, item: &T) -> bool {
        self.members.contains(item)
    }

    /// Returns the element inserted at position `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
