//! Validation and debugging utilities for OrderedIndex.
//!
//! This module contains invariant checking (search order, AVL balance, cached
//! heights, element count) and debug helpers for tests.

use std::fmt::Debug;

use crate::error::{IndexError, IndexResult};
use crate::types::{link_height, Link, OrderedIndex};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord + Debug, V> OrderedIndex<K, V> {
    /// Check if the tree maintains its invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> IndexResult<()> {
        let counted = check_subtree(&self.root, None, None)?.count;
        if counted != self.len {
            return Err(IndexError::corrupted_tree(
                "Length",
                &format!("{} nodes in tree but len() is {}", counted, self.len),
            ));
        }
        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> IndexResult<()> {
        self.check_invariants_detailed()
    }

    /// Prints the tree sideways for debugging, right subtree on top.
    pub fn print_tree(&self) {
        println!("Tree structure ({} keys, height {}):", self.len, self.height());
        print!("{}", self.render_tree());
    }

    /// Renders the tree sideways into a string, one node per line.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        render(&self.root, 0, &mut out);
        out
    }
}

/// Summary of a verified subtree.
struct SubtreeStats {
    height: usize,
    count: usize,
}

/// Recursively verify a subtree whose keys must lie strictly inside
/// `(min_key, max_key)`.
fn check_subtree<K: Ord + Debug, V>(
    link: &Link<K, V>,
    min_key: Option<&K>,
    max_key: Option<&K>,
) -> IndexResult<SubtreeStats> {
    let Some(node) = link else {
        return Ok(SubtreeStats { height: 0, count: 0 });
    };

    if let Some(min) = min_key {
        if node.key <= *min {
            return Err(IndexError::corrupted_tree(
                "Order",
                &format!("key {:?} is not greater than ancestor {:?}", node.key, min),
            ));
        }
    }
    if let Some(max) = max_key {
        if node.key >= *max {
            return Err(IndexError::corrupted_tree(
                "Order",
                &format!("key {:?} is not less than ancestor {:?}", node.key, max),
            ));
        }
    }

    let left = check_subtree(&node.left, min_key, Some(&node.key))?;
    let right = check_subtree(&node.right, Some(&node.key), max_key)?;

    let expected_height = 1 + left.height.max(right.height);
    if node.height != expected_height {
        return Err(IndexError::corrupted_tree(
            "Height",
            &format!(
                "node {:?} caches height {} but subtree height is {}",
                node.key, node.height, expected_height
            ),
        ));
    }

    let balance = left.height as isize - right.height as isize;
    if balance.abs() > 1 {
        return Err(IndexError::corrupted_tree(
            "Balance",
            &format!("node {:?} has balance {}", node.key, balance),
        ));
    }

    Ok(SubtreeStats {
        height: expected_height,
        count: left.count + right.count + 1,
    })
}

fn render<K: Debug, V>(link: &Link<K, V>, depth: usize, out: &mut String) {
    if let Some(node) = link {
        render(&node.right, depth + 1, out);
        out.push_str(&"    ".repeat(depth));
        out.push_str(&format!("{:?} (h={})\n", node.key, link_height(link)));
        render(&node.left, depth + 1, out);
    }
}
