//! Prefix query operations for OrderedIndex.
//!
//! "Starts with" is not a predicate the tree order can prune on using only
//! `Ord`, so the scan visits every node in pre-order and filters.

use crate::types::{Node, OrderedIndex};

/// Keys that can be tested against a prefix of type `Q`.
pub trait HasPrefix<Q: ?Sized> {
    /// Returns true if `self` begins with `prefix` (case-sensitive).
    fn has_prefix(&self, prefix: &Q) -> bool;
}

impl HasPrefix<str> for String {
    fn has_prefix(&self, prefix: &str) -> bool {
        self.starts_with(prefix)
    }
}

impl HasPrefix<String> for String {
    fn has_prefix(&self, prefix: &String) -> bool {
        self.starts_with(prefix.as_str())
    }
}

impl HasPrefix<str> for &str {
    fn has_prefix(&self, prefix: &str) -> bool {
        self.starts_with(prefix)
    }
}

impl<T: PartialEq> HasPrefix<[T]> for Vec<T> {
    fn has_prefix(&self, prefix: &[T]) -> bool {
        self.starts_with(prefix)
    }
}

impl<K, V> OrderedIndex<K, V> {
    /// Returns the values of every key starting with `prefix`.
    ///
    /// Results come back in pre-order traversal order, not key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlindex::OrderedIndex;
    ///
    /// let mut names = OrderedIndex::new();
    /// for (i, name) in ["ALICE", "ALAN", "BOB"].into_iter().enumerate() {
    ///     names.insert(name.to_string(), i);
    /// }
    ///
    /// let mut hits = names.find_by_prefix("AL");
    /// hits.sort();
    /// assert_eq!(hits, [&0, &1]);
    /// ```
    pub fn find_by_prefix<Q>(&self, prefix: &Q) -> Vec<&V>
    where
        K: HasPrefix<Q>,
        Q: ?Sized,
    {
        let mut results = Vec::new();
        collect_prefix(self.root.as_deref(), prefix, &mut results);
        results
    }
}

fn collect_prefix<'a, K, V, Q>(node: Option<&'a Node<K, V>>, prefix: &Q, results: &mut Vec<&'a V>)
where
    K: HasPrefix<Q>,
    Q: ?Sized,
{
    if let Some(node) = node {
        if node.key.has_prefix(prefix) {
            results.push(&node.value);
        }
        collect_prefix(node.left.as_deref(), prefix, results);
        collect_prefix(node.right.as_deref(), prefix, results);
    }
}
