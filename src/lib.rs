//! geokv - read-only spatial queries over a key/value store
//!
//! Given a named spatial index and a rectangular bound, return every stored
//! item whose geometry intersects that bound, filtered by an optional key
//! glob (`MATCH`), with optional `SKIP`/`LIMIT`, sorted ascending by key and
//! framed as a RESP array of alternating keys and values:
//!
//! ```text
//! RECT <index> <bounds> [MATCH <pattern>] [LIMIT <n>] [SKIP <n>]
//! ```
//!
//! # Execution flow (strict order)
//!
//! 1. [`command`] parses tokens into an immutable descriptor
//! 2. the caller's read snapshot drives [`index::SpatialRead::intersects`]
//!    with [`query::RectVisitor`] as the per-candidate visitor
//! 3. [`query::ResultSet`] sorts accepted items by key, once, after
//!    traversal
//! 4. [`protocol::RespWriter`] emits the framed response
//!
//! Traversal and snapshot consistency belong to the index collaborator;
//! [`index::MemoryStore`] ships as an embedded implementation for the CLI
//! and tests.

pub mod cli;
pub mod command;
pub mod index;
pub mod observability;
pub mod pattern;
pub mod protocol;
pub mod query;

pub use command::{CommandError, CommandKind, RectArgs};
pub use index::{MemoryStore, SpatialRead};
pub use protocol::RespWriter;
pub use query::{QueryError, QueryStats, RectQuery};
