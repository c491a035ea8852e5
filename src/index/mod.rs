//! Spatial index collaborator surface and embedded store
//!
//! The query core never owns an index; it is handed a read snapshot and
//! drives it through [`SpatialRead`]. This module defines that surface plus
//! the pieces a complete deployment needs around it:
//!
//! - [`Rect`]: the bounds grammar (`[x y]` point, `[x y],[x y]` rectangle)
//! - [`MemoryStore`] / [`MemorySnapshot`]: an embedded, snapshot-isolated
//!   store used by the CLI and tests
//! - [`load_seed`]: JSON seed-file loading
//! - internal bookkeeping-key detection ([`is_internal_key`])

mod errors;
mod memory;
mod rect;
mod seed;

pub use errors::{IndexError, IndexResult};
pub use memory::{MemorySnapshot, MemoryStore};
pub use rect::Rect;
pub use seed::{load_seed, SeedError, SeedFile, SeedIndex, SeedItem};

/// Reserved prefix for engine bookkeeping entries.
///
/// The engine stores its own records (index descriptors and the like) in the
/// same keyspace as user data. Keys under this prefix are never user data
/// and are always excluded from query results.
pub const INTERNAL_KEY_PREFIX: &str = "__geo:";

/// Returns true if `key` is an internal bookkeeping key.
pub fn is_internal_key(key: &str) -> bool {
    key.starts_with(INTERNAL_KEY_PREFIX)
}

/// Read-snapshot handle over a set of spatial indexes.
///
/// `intersects` enumerates every stored item whose geometry intersects
/// `bounds` under the named index, invoking `visitor` once per candidate
/// until the visitor returns `false` or enumeration completes. Enumeration
/// order is index-defined and is not required to be key-sorted; callers that
/// need ordered output sort after the traversal.
///
/// Implementations supply their own consistency: a handle must present one
/// stable view for the duration of the call.
pub trait SpatialRead {
    fn intersects(
        &self,
        index: &str,
        bounds: &str,
        visitor: &mut dyn FnMut(&str, &str) -> bool,
    ) -> IndexResult<()>;
}
