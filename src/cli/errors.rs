//! CLI error types

use thiserror::Error;

use crate::index::SeedError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that terminate the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Seed file failed to load
    #[error("seed load failed: {0}")]
    Seed(#[from] SeedError),

    /// Output or input channel failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
