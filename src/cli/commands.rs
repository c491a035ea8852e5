//! CLI command dispatch
//!
//! RESP frames go to stdout; structured diagnostics go to stderr. A rejected
//! command becomes an error frame and the loop continues; only a sink I/O
//! failure terminates the run.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::index::{load_seed, MemoryStore};
use crate::observability::Logger;
use crate::protocol::RespWriter;
use crate::query::{QueryError, RectQuery};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parses arguments and dispatches to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Query { seed, command } => query(&seed, command.as_deref()),
    }
}

/// Loads a seed file and executes one command, or a stdin loop
pub fn query(seed: &Path, command: Option<&str>) -> CliResult<()> {
    let store = load_seed(seed)?;

    let stdout = io::stdout();
    let mut out = RespWriter::new(stdout.lock());

    match command {
        Some(line) => run_line(&store, line, &mut out),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                run_line(&store, &line, &mut out)?;
            }
            Ok(())
        }
    }
}

/// Executes one whitespace-tokenized command line
fn run_line<W: Write>(store: &MemoryStore, line: &str, out: &mut RespWriter<W>) -> CliResult<()> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let query = match RectQuery::parse(&tokens) {
        Ok(query) => query,
        Err(e) => return reject(out, &e.to_string()),
    };

    let snapshot = match store.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => return reject(out, &e.to_string()),
    };

    match query.execute(&snapshot, out) {
        Ok(stats) => {
            let returned = stats.returned.to_string();
            let visited = stats.visited.to_string();
            Logger::info(
                "query_executed",
                &[
                    ("index", query.args().index.as_str()),
                    ("returned", returned.as_str()),
                    ("visited", visited.as_str()),
                ],
            );
            Ok(())
        }
        // The sink is gone; nothing left to report to
        Err(QueryError::Io(e)) => Err(e.into()),
        Err(e) => reject(out, &e.to_string()),
    }
}

/// Reports a rejected command as an error frame and keeps going
fn reject<W: Write>(out: &mut RespWriter<W>, msg: &str) -> CliResult<()> {
    Logger::warn("command_rejected", &[("error", msg)]);
    out.write_error(msg);
    out.flush()?;
    Ok(())
}
