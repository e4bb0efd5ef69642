//! GET operations for OrderedIndex.
//!
//! This module contains exact-match lookups and their `Result` flavoured
//! variants.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::error::{IndexError, IndexResult, KeyResult};
use crate::types::OrderedIndex;

impl<K: Ord, V> OrderedIndex<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// The key may be any borrowed form of the index's key type, so a
    /// `String`-keyed index can be searched with a `&str`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlindex::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(String::from("12345678900"), "ana");
    /// assert_eq!(index.find("12345678900"), Some(&"ana"));
    /// assert_eq!(index.find("00000000000"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Check if key exists in the index.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Get value for a key, returning `KeyNotFound` if it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlindex::{IndexError, OrderedIndex};
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(1, "one");
    /// assert_eq!(index.try_find(&1), Ok(&"one"));
    /// assert_eq!(index.try_find(&2), Err(IndexError::KeyNotFound));
    /// ```
    pub fn try_find<Q>(&self, key: &Q) -> KeyResult<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).ok_or(IndexError::KeyNotFound)
    }

    /// Get multiple keys at once. Fails with `KeyNotFound` if any is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlindex::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(1, "one");
    /// index.insert(2, "two");
    ///
    /// assert_eq!(index.get_many(&[2, 1]).unwrap(), vec![&"two", &"one"]);
    /// assert!(index.get_many(&[1, 3]).is_err());
    /// ```
    pub fn get_many(&self, keys: &[K]) -> IndexResult<Vec<&V>> {
        keys.iter().map(|key| self.try_find(key)).collect()
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderedIndex<i32, String> {
        [40, 20, 60, 10, 30, 50, 70]
            .into_iter()
            .map(|k| (k, format!("value{}", k)))
            .collect()
    }

    #[test]
    fn test_find_every_inserted_key() {
        let index = sample();
        for key in [10, 20, 30, 40, 50, 60, 70] {
            assert_eq!(index.find(&key), Some(&format!("value{}", key)));
        }
    }

    #[test]
    fn test_find_missing_keys() {
        let index = sample();
        for key in [0, 15, 45, 80] {
            assert_eq!(index.find(&key), None);
            assert!(!index.contains_key(&key));
        }
        let empty: OrderedIndex<i32, i32> = OrderedIndex::new();
        assert_eq!(empty.find(&1), None);
    }

    #[test]
    fn test_first_and_last() {
        let index = sample();
        assert_eq!(index.first().map(|(k, _)| *k), Some(10));
        assert_eq!(index.last().map(|(k, _)| *k), Some(70));

        let empty: OrderedIndex<i32, i32> = OrderedIndex::new();
        assert!(empty.first().is_none());
        assert!(empty.last().is_none());
    }

    #[test]
    fn test_get_many_reports_missing_key() {
        let index = sample();
        assert_eq!(index.get_many(&[10, 70]).map(|v| v.len()), Ok(2));
        assert_eq!(index.get_many(&[10, 11]), Err(IndexError::KeyNotFound));
    }
}
