//! Command parsing for spatial searches
//!
//! Turns a flat token sequence into a validated, immutable descriptor:
//!
//! ```text
//! RECT <index> <bounds> [MATCH <pattern>] [LIMIT <n>] [SKIP <n>]
//! ```
//!
//! Keywords are case-insensitive and consumed strictly left-to-right with no
//! backtracking. A repeated option keyword silently overrides the earlier
//! occurrence; this is long-standing behavior and is covered by tests.

mod args;
mod errors;
mod parser;

pub use args::{CommandKind, RectArgs};
pub use errors::{CommandError, CommandResult};
pub use parser::parse;
