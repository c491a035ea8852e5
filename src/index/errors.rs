//! Index error types
//!
//! Traversal failures reported through [`IndexError`] abort the whole query;
//! the caller propagates them verbatim and emits no partial output.

use thiserror::Error;

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors reported by the spatial index collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The named index does not exist
    #[error("ERR unknown index '{0}'")]
    UnknownIndex(String),

    /// An index with this name already exists
    #[error("ERR index '{0}' already exists")]
    IndexExists(String),

    /// The bounds payload does not parse under the index's grammar
    #[error("ERR invalid bounds '{0}'")]
    InvalidBounds(String),

    /// Internal store failure
    #[error("ERR internal error: {0}")]
    Internal(String),
}
