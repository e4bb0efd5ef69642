//! AVL-tree ordered index in Rust.
//!
//! This crate provides a generic self-balancing binary search tree mapping
//! totally ordered keys to shared values, with exact lookup, prefix scans, and
//! inclusive range scans. On top of it sits a small person directory that keeps
//! three indexes (CPF, name, birth date) over one shared record set.

// Import our modules
mod config;
mod construction;
mod directory;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod prefix_queries;
mod range_queries;
mod record;
mod types;
mod validation;

pub use config::{DirectoryConfig, DEFAULT_DATE_FORMAT, DEFAULT_DELIMITER};
pub use directory::{LoadSummary, PersonDirectory, PersonRef};
pub use error::{IndexError, IndexResult, KeyResult, LoadResult};
pub use iteration::{ItemIterator, KeyIterator, ValueIterator};
pub use prefix_queries::HasPrefix;
pub use record::{parse_date, Person, FIELD_COUNT};
pub use types::{Node, OrderedIndex};

impl<K, V> OrderedIndex<K, V> {
    // ============================================================================
    // OTHER API OPERATIONS
    // ============================================================================

    /// Returns the number of keys in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the tree, 0 when empty.
    pub fn height(&self) -> usize {
        types::link_height(&self.root)
    }

    /// Returns the root node, for structural inspection.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Clear all entries from the index.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}
