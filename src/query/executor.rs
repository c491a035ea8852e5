//! Query executor
//!
//! Ties the collaborators together for one execution: the caller's read
//! snapshot drives the traversal, the visitor filters, the result set sorts,
//! and the protocol writer emits the frame. The executor opens no
//! transactions itself and holds no cross-call state.

use std::io::Write;

use crate::command::{self, RectArgs};
use crate::index::SpatialRead;
use crate::protocol::RespWriter;

use super::errors::QueryResult;
use super::visitor::RectVisitor;

/// Counters for one executed query.
///
/// Reported for logging and tests; never affects the emitted frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Candidates the traversal presented to the filter pipeline
    pub visited: u64,
    /// Items accepted and emitted
    pub returned: usize,
    /// Matching candidates discarded by SKIP
    pub skipped: u64,
}

/// A parsed, ready-to-run rectangle search
#[derive(Debug)]
pub struct RectQuery {
    args: RectArgs,
}

impl RectQuery {
    /// Parses command tokens into a runnable query.
    ///
    /// Fails before any transaction is touched.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> QueryResult<Self> {
        Ok(Self {
            args: command::parse(tokens)?,
        })
    }

    /// Builds a query from an already-parsed descriptor
    pub fn from_args(args: RectArgs) -> Self {
        Self { args }
    }

    /// The parsed descriptor
    pub fn args(&self) -> &RectArgs {
        &self.args
    }

    /// Runs the search inside the caller's read snapshot and emits the
    /// response frame: an array of `2 * k` bulk strings, key then value per
    /// item, ascending by key.
    ///
    /// On a traversal error the accumulated results are discarded and no
    /// output bytes are written. The frame is flushed only once complete.
    pub fn execute<T, W>(&self, tx: &T, out: &mut RespWriter<W>) -> QueryResult<QueryStats>
    where
        T: SpatialRead + ?Sized,
        W: Write,
    {
        let mut visitor = RectVisitor::new(&self.args);
        tx.intersects(&self.args.index, &self.args.bounds, &mut |key, value| {
            visitor.visit(key, value)
        })?;

        let visited = visitor.visited();
        let skipped = visitor.skipped();
        let mut results = visitor.into_results();
        results.sort();

        out.write_array(results.len() * 2);
        for item in results.iter() {
            out.write_bulk(&item.key);
            out.write_bulk(&item.value);
        }
        out.flush()?;

        Ok(QueryStats {
            visited,
            returned: results.len(),
            skipped,
        })
    }
}
