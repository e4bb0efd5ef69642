//! Core types and data structures for OrderedIndex.
//!
//! This module contains the tree and node definitions plus the small height
//! bookkeeping helpers that every other module builds on.

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Owned link to a child subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Ordered index backed by an AVL tree.
///
/// Keys are unique and totally ordered. Values are usually cheap shared handles
/// (`Arc<Record>`), so several indexes over the same records can coexist, each
/// ordered by a different field.
///
/// # Type Parameters
///
/// * `K` - Key type, must implement `Ord`
/// * `V` - Value type stored next to each key
///
/// # Examples
///
/// ```
/// use avlindex::OrderedIndex;
///
/// let mut index = OrderedIndex::new();
/// index.insert(20, "twenty");
/// index.insert(10, "ten");
/// index.insert(30, "thirty");
///
/// assert_eq!(index.find(&10), Some(&"ten"));
/// assert_eq!(index.len(), 3);
///
/// // Inclusive range query, results in traversal order
/// let mut hits = index.find_by_range(&15, &30);
/// hits.sort();
/// assert_eq!(hits, [&"thirty", &"twenty"]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Range queries**: O(log n + k) typical, O(n) worst case
/// - **Prefix queries**: O(n), every node is visited
/// - **Iteration**: O(n)
#[derive(Debug, Clone)]
pub struct OrderedIndex<K, V> {
    /// The root node of the tree.
    pub(crate) root: Link<K, V>,
    /// Number of distinct keys stored.
    pub(crate) len: usize,
}

/// Tree node holding one key-value pair and its two owned subtrees.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
    /// Height of the subtree rooted here; a leaf has height 1.
    pub(crate) height: usize,
}

// ============================================================================
// NODE HELPERS
// ============================================================================

/// Height of an optional subtree, 0 when empty.
pub(crate) fn link_height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<K, V> Node<K, V> {
    /// Creates a leaf node.
    pub(crate) fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    /// Returns the cached subtree height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Recompute the cached height from the children.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + link_height(&self.left).max(link_height(&self.right));
    }

    /// `height(left) - height(right)`.
    pub(crate) fn balance(&self) -> isize {
        link_height(&self.left) as isize - link_height(&self.right) as isize
    }
}
