//! CLI argument definitions using clap
//!
//! Commands:
//! - geokv query --seed <path> [--command "<tokens>"]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// geokv - read-only spatial queries over a key/value store
#[derive(Parser, Debug)]
#[command(name = "geokv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute search commands against a seeded in-memory store
    Query {
        /// Path to JSON seed file
        #[arg(long)]
        seed: PathBuf,

        /// Single command to execute; omit to read commands from stdin,
        /// one whitespace-tokenized command per line
        #[arg(long)]
        command: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
