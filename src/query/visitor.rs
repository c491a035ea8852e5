//! Candidate filter pipeline
//!
//! The per-candidate decision function invoked by the index traversal. The
//! check order is load-bearing: each rule is skipped once an earlier one
//! decides, and the limit check must come before the match and skip checks
//! so a full result set stops the traversal immediately.

use crate::command::RectArgs;
use crate::index::is_internal_key;
use crate::pattern;

use super::collector::ResultSet;

/// Traversal-local filter state for one rectangle search.
///
/// Holds the parsed options plus the counters the decision rules read and
/// update. Lives for exactly one traversal; nothing here is shared across
/// queries.
#[derive(Debug)]
pub struct RectVisitor<'a> {
    args: &'a RectArgs,
    results: ResultSet,
    skipped: u64,
    visited: u64,
}

impl<'a> RectVisitor<'a> {
    /// Creates a visitor for one traversal
    pub fn new(args: &'a RectArgs) -> Self {
        Self {
            args,
            results: ResultSet::new(),
            skipped: 0,
            visited: 0,
        }
    }

    /// Decides one candidate. Returns false to stop the traversal.
    ///
    /// Rules, in order:
    /// 1. engine bookkeeping keys are dropped without touching any counter
    /// 2. once `limit` items are accepted, the whole traversal stops; the
    ///    cap applies to an index-order prefix, not a key-ranked one
    /// 3. keys failing the glob are dropped
    /// 4. the first `skip` glob-matching keys are dropped
    /// 5. the candidate is accepted
    pub fn visit(&mut self, key: &str, value: &str) -> bool {
        self.visited += 1;
        if is_internal_key(key) {
            return true;
        }
        if self.args.limit_on && self.results.len() as u64 >= self.args.limit {
            return false;
        }
        if self.args.match_on && !pattern::matches(key, &self.args.pattern) {
            return true;
        }
        if self.args.skip_on && self.skipped < self.args.skip {
            self.skipped += 1;
            return true;
        }
        self.results.push(key, value);
        true
    }

    /// Candidates the traversal presented, including ones dropped or the
    /// one that triggered the stop
    pub fn visited(&self) -> u64 {
        self.visited
    }

    /// Matching candidates discarded by the skip rule
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Consumes the visitor, yielding the accepted items in traversal order
    pub fn into_results(self) -> ResultSet {
        self.results
    }
}
