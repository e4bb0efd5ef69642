//! Range query operations for OrderedIndex.
//!
//! Inclusive `[lo, hi]` scans that prune subtrees which cannot hold a
//! qualifying key.

use crate::types::{Node, OrderedIndex};

// ============================================================================
// RANGE QUERY OPERATIONS
// ============================================================================

impl<K: Ord, V> OrderedIndex<K, V> {
    /// Returns the values of every key `k` with `lo <= k <= hi`.
    ///
    /// Results come back in pre-order traversal order (node before its
    /// children), not key order. An inverted range (`lo > hi`) yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlindex::OrderedIndex;
    ///
    /// let index: OrderedIndex<i32, i32> = (0..10).map(|i| (i, i * 100)).collect();
    ///
    /// let mut hits: Vec<i32> = index.find_by_range(&3, &5).into_iter().copied().collect();
    /// hits.sort();
    /// assert_eq!(hits, vec![300, 400, 500]);
    ///
    /// assert!(index.find_by_range(&5, &3).is_empty());
    /// ```
    pub fn find_by_range(&self, lo: &K, hi: &K) -> Vec<&V> {
        let mut results = Vec::new();
        collect_range(self.root.as_deref(), lo, hi, &mut results);
        results
    }

    /// Count the keys in `[lo, hi]` without collecting them.
    pub fn count_in_range(&self, lo: &K, hi: &K) -> usize {
        count_range(self.root.as_deref(), lo, hi)
    }
}

fn collect_range<'a, K: Ord, V>(
    node: Option<&'a Node<K, V>>,
    lo: &K,
    hi: &K,
    results: &mut Vec<&'a V>,
) {
    let Some(node) = node else {
        return;
    };

    if *lo <= node.key && node.key <= *hi {
        results.push(&node.value);
    }
    if *lo < node.key {
        collect_range(node.left.as_deref(), lo, hi, results);
    }
    if *hi > node.key {
        collect_range(node.right.as_deref(), lo, hi, results);
    }
}

/// Same pruning as `collect_range`, tallying instead of collecting.
fn count_range<K: Ord, V>(node: Option<&Node<K, V>>, lo: &K, hi: &K) -> usize {
    let Some(node) = node else {
        return 0;
    };

    let mut count = usize::from(*lo <= node.key && node.key <= *hi);
    if *lo < node.key {
        count += count_range(node.left.as_deref(), lo, hi);
    }
    if *hi > node.key {
        count += count_range(node.right.as_deref(), lo, hi);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_date_range_picks_middle_entry() {
        let index: OrderedIndex<NaiveDate, &str> = [
            (date(2000, 1, 1), "a"),
            (date(2005, 6, 15), "b"),
            (date(2010, 12, 31), "c"),
        ]
        .into_iter()
        .collect();

        let hits = index.find_by_range(&date(2001, 1, 1), &date(2010, 1, 1));
        assert_eq!(hits, vec![&"b"]);
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let index: OrderedIndex<i32, i32> = (1..=9).map(|i| (i, i)).collect();
        let mut hits: Vec<i32> = index.find_by_range(&3, &6).into_iter().copied().collect();
        hits.sort();
        assert_eq!(hits, vec![3, 4, 5, 6]);
        assert_eq!(index.find_by_range(&4, &4), vec![&4]);
    }

    #[test]
    fn test_range_outside_keys_is_empty() {
        let index: OrderedIndex<i32, i32> = (10..20).map(|i| (i, i)).collect();
        assert!(index.find_by_range(&0, &9).is_empty());
        assert!(index.find_by_range(&20, &30).is_empty());
        assert!(index.find_by_range(&15, &12).is_empty());
    }

    #[test]
    fn test_count_matches_collected_results() {
        let index: OrderedIndex<i32, i32> = (0..200).map(|i| (i * 2, i)).collect();
        for (lo, hi) in [(-5, -1), (0, 0), (1, 1), (3, 77), (150, 500), (90, 10)] {
            assert_eq!(
                index.count_in_range(&lo, &hi),
                index.find_by_range(&lo, &hi).len(),
                "range {}..={}",
                lo,
                hi
            );
        }
        assert_eq!(index.count_in_range(&0, &398), 200);
        let empty: OrderedIndex<i32, i32> = OrderedIndex::new();
        assert_eq!(empty.count_in_range(&0, &10), 0);
    }

    #[test]
    fn test_results_follow_preorder() {
        // 1..=7 ascending builds the perfect tree 4 / (2 / 1 3) (6 / 5 7).
        let index: OrderedIndex<i32, i32> = (1..=7).map(|i| (i, i)).collect();
        let hits: Vec<i32> = index.find_by_range(&1, &7).into_iter().copied().collect();
        assert_eq!(hits, vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(index.count_in_range(&2, &5), 4);
    }
}
