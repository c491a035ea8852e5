//! Query error types

use thiserror::Error;

use crate::command::CommandError;
use crate::index::IndexError;

/// Result type for query execution
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors for one spatial query execution
#[derive(Debug, Error)]
pub enum QueryError {
    /// Command parse failure; detected before any transaction is touched
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Reported by the index traversal and propagated unchanged. The
    /// response frame is never started once traversal has failed.
    #[error(transparent)]
    Traversal(#[from] IndexError),

    /// Sink failure while flushing the completed frame
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
