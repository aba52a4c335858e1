//! OrderedMultiSet: insertion-ordered rows with cross-batch dedup.
//!
//! Each call to `extend` is one batch (one input file). A value is kept only
//! if no earlier batch contained it. Duplicates inside a single batch are all
//! kept, because membership is tested against the seen set as it stood before
//! the batch started.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct OrderedMultiSet<T> {
    seen: HashSet<T>,
    order: Vec<T>,
}

impl<T> Default for OrderedMultiSet<T> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> OrderedMultiSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one batch, returning how many of its values were kept.
    pub fn extend<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let batch: Vec<T> = batch.into_iter().collect();
        let before = self.order.len();

        for value in &batch {
            if !self.seen.contains(value) {
                self.order.push(value.clone());
            }
        }
        self.seen.extend(batch);

        self.order.len() - before
    }

    /// Stable sort of the current order; `key` runs once per element.
    pub fn sort_by_key<K, F>(&mut self, key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.order.sort_by_cached_key(key);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.order
    }
}

impl<T> IntoIterator for OrderedMultiSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedMultiSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
