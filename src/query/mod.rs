//! Rectangle search execution
//!
//! Consumes a parsed command and a read snapshot, producing a deterministic
//! framed response.
//!
//! # Execution flow (strict order)
//!
//! 1. Parse tokens into an immutable descriptor ([`RectQuery::parse`])
//! 2. Traverse the snapshot with [`RectVisitor`] as the per-candidate
//!    visitor
//! 3. Sort accepted items ascending by key, once, after traversal
//! 4. Emit the framed response and flush
//!
//! A parse error aborts before any traversal starts. A traversal error
//! aborts before any output bytes are written.

mod collector;
mod errors;
mod executor;
mod visitor;

pub use collector::{ResultItem, ResultSet};
pub use errors::{QueryError, QueryResult};
pub use executor::{QueryStats, RectQuery};
pub use visitor::RectVisitor;
