//! Construction and initialization logic for OrderedIndex.
//!
//! This module contains the constructors, `Default`, and the bulk-building
//! trait implementations (`FromIterator`, `Extend`).

use crate::types::OrderedIndex;

impl<K, V> OrderedIndex<K, V> {
    /// Create an empty index.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlindex::OrderedIndex;
    ///
    /// let index = OrderedIndex::<String, u32>::new();
    /// assert!(index.is_empty());
    /// assert_eq!(index.height(), 0);
    /// ```
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K, V> Default for OrderedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedIndex<K, V> {
    /// Build an index from pairs. Later duplicates are ignored.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedIndex<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
