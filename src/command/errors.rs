//! Command parse errors
//!
//! All variants are detected before any transaction is opened; a failed
//! parse has no side effects.

use thiserror::Error;

/// Result type for command parsing
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors produced while parsing a search command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Unrecognized command variant or unrecognized option keyword
    #[error("ERR syntax error")]
    Syntax,

    /// Required token missing, or an option keyword with no argument
    #[error("ERR wrong number of arguments")]
    WrongArity,

    /// LIMIT/SKIP argument is not a valid non-negative integer
    #[error("ERR value is not an integer or out of range")]
    NotAnInteger(#[from] std::num::ParseIntError),
}
