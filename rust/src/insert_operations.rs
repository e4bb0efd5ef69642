//! INSERT operations for OrderedIndex.
//!
//! This module contains key-value insertion and the AVL rebalancing machinery:
//! height maintenance, the four imbalance cases, and single rotations.
//! Subtrees are passed by value and the (possibly new) subtree root is handed
//! back to the caller for reattachment.

use std::cmp::Ordering;

use tracing::trace;

use crate::types::{Link, Node, OrderedIndex};

/// Outcome of inserting into one subtree.
struct Descent<K, V> {
    /// Root of the subtree after rebalancing.
    root: Box<Node<K, V>>,
    /// How the inserted key compared to the key of the node it descended
    /// through at this level. `Equal` for a fresh leaf or a duplicate.
    side: Ordering,
}

impl<K: Ord, V> OrderedIndex<K, V> {
    /// Insert a key-value pair.
    ///
    /// Returns `true` when the key was new. When the key is already present the
    /// index is left untouched and the existing value wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlindex::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// assert!(index.insert("ana", 1));
    /// assert!(!index.insert("ana", 2));
    /// assert_eq!(index.find("ana"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut inserted = false;
        let root = self.root.take();
        self.root = Some(insert_recursive(root, key, value, &mut inserted).root);
        if inserted {
            self.len += 1;
        }
        inserted
    }
}

/// Insert into the subtree rooted at `link` and return the rebalanced root.
fn insert_recursive<K: Ord, V>(
    link: Link<K, V>,
    key: K,
    value: V,
    inserted: &mut bool,
) -> Descent<K, V> {
    let mut node = match link {
        Some(node) => node,
        None => {
            *inserted = true;
            return Descent {
                root: Box::new(Node::leaf(key, value)),
                side: Ordering::Equal,
            };
        }
    };

    let side = key.cmp(&node.key);
    let child_side = match side {
        Ordering::Less => {
            let below = insert_recursive(node.left.take(), key, value, inserted);
            node.left = Some(below.root);
            below.side
        }
        Ordering::Greater => {
            let below = insert_recursive(node.right.take(), key, value, inserted);
            node.right = Some(below.root);
            below.side
        }
        // First write wins; nothing below changed.
        Ordering::Equal => return Descent { root: node, side },
    };

    node.update_height();
    Descent {
        root: rebalance(node, child_side),
        side,
    }
}

/// Restore the AVL balance of `node` after an insertion below it.
///
/// `child_side` is how the inserted key compared to the key of the child on
/// the heavy side, which picks between the single and double rotation cases.
/// If that child was itself rotated its subtree height is unchanged, so
/// `node` cannot be out of balance and `child_side` goes unused.
fn rebalance<K: Ord, V>(mut node: Box<Node<K, V>>, child_side: Ordering) -> Box<Node<K, V>> {
    let balance = node.balance();

    if balance > 1 {
        match child_side {
            Ordering::Less => {
                trace!("LL imbalance, rotating right");
                rotate_right(node)
            }
            Ordering::Greater => {
                trace!("LR imbalance, rotating left then right");
                node.left = node.left.take().map(rotate_left);
                rotate_right(node)
            }
            Ordering::Equal => node,
        }
    } else if balance < -1 {
        match child_side {
            Ordering::Greater => {
                trace!("RR imbalance, rotating left");
                rotate_left(node)
            }
            Ordering::Less => {
                trace!("RL imbalance, rotating right then left");
                node.right = node.right.take().map(rotate_right);
                rotate_left(node)
            }
            Ordering::Equal => node,
        }
    } else {
        node
    }
}

/// Right rotation: the left child becomes the subtree root.
///
/// ```text
///       y            x
///      / \          / \
///     x   C  ==>   A   y
///    / \              / \
///   A   B            B   C
/// ```
pub(crate) fn rotate_right<K, V>(mut y: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Left rotation: the right child becomes the subtree root.
pub(crate) fn rotate_left<K, V>(mut x: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}
