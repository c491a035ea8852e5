//! CLI module for geokv
//!
//! Provides the command-line interface:
//! - query: load a seed file, execute search commands, emit RESP frames

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{query, run};
pub use errors::{CliError, CliResult};
