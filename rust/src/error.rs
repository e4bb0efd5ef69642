//! Error handling and result types for index operations.
//!
//! The tree itself never fails: "not found" is `None` and duplicate inserts are
//! ignored. Errors show up in the `Result` flavoured lookups, in invariant
//! checking, and when loading person records from delimited text.

/// Error type for index and record-loading operations.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexError {
    /// Key not found in the index.
    KeyNotFound,
    /// A record line could not be turned into a person.
    InvalidRecord {
        /// 1-based line number in the source, 0 when not known.
        line: usize,
        reason: String,
    },
    /// A date did not match the expected format.
    InvalidDate(String),
    /// Reading the record source failed.
    Io(String),
    /// Tree invariant violation detected.
    CorruptedTree(String),
}

impl IndexError {
    /// Create an InvalidRecord error with context
    pub fn invalid_record(line: usize, reason: &str) -> Self {
        Self::InvalidRecord {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidDate error with context
    pub fn invalid_date(text: &str, format: &str) -> Self {
        Self::InvalidDate(format!("'{}' does not match format '{}'", text, format))
    }

    /// Create an Io error with context
    pub fn io_error(operation: &str, err: &std::io::Error) -> Self {
        Self::Io(format!("{} failed: {}", operation, err))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} violation: {}", component, details))
    }

    /// Attach a line number to a record-level error.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::InvalidRecord { reason, .. } => Self::InvalidRecord { line, reason },
            Self::InvalidDate(msg) => Self::InvalidRecord { line, reason: msg },
            other => other,
        }
    }

    /// Check if this error came from malformed input data
    pub fn is_record_error(&self) -> bool {
        matches!(self, Self::InvalidRecord { .. } | Self::InvalidDate(_))
    }

    /// Check if this error is a tree integrity error
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::CorruptedTree(_))
    }
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::KeyNotFound => write!(f, "Key not found in index"),
            IndexError::InvalidRecord { line, reason } => {
                write!(f, "Invalid record on line {}: {}", line, reason)
            }
            IndexError::InvalidDate(msg) => write!(f, "Invalid date: {}", msg),
            IndexError::Io(msg) => write!(f, "I/O error: {}", msg),
            IndexError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for IndexError {}

/// Public result type for index operations that may fail
pub type IndexResult<T> = Result<T, IndexError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, IndexError>;

/// Result type for loading records into a directory
pub type LoadResult<T> = Result<T, IndexError>;
