//! JSON seed files for the embedded store
//!
//! Format:
//!
//! ```json
//! {
//!   "indexes": [
//!     {
//!       "name": "fleet",
//!       "items": [
//!         {"key": "truck1", "bounds": "[10 10]", "value": "valueA"}
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::errors::IndexError;
use super::memory::MemoryStore;

/// Errors raised while loading a seed file
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file could not be read
    #[error("seed read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file is not valid JSON or does not match the seed schema
    #[error("seed parse failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Seed content was rejected by the store (bad bounds, duplicate index)
    #[error("seed rejected: {0}")]
    Index(#[from] IndexError),
}

/// Top-level seed document
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    pub indexes: Vec<SeedIndex>,
}

/// One spatial index and its items
#[derive(Debug, Clone, Deserialize)]
pub struct SeedIndex {
    pub name: String,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

/// One stored item
#[derive(Debug, Clone, Deserialize)]
pub struct SeedItem {
    pub key: String,
    pub bounds: String,
    pub value: String,
}

/// Loads a seed file into a fresh [`MemoryStore`].
///
/// Items are inserted in file order, which fixes the traversal order of the
/// resulting indexes.
pub fn load_seed(path: &Path) -> Result<MemoryStore, SeedError> {
    let raw = fs::read_to_string(path)?;
    let seed: SeedFile = serde_json::from_str(&raw)?;

    let store = MemoryStore::new();
    for index in &seed.indexes {
        store.create_index(&index.name)?;
        for item in &index.items {
            store.insert(&index.name, &item.key, &item.bounds, &item.value)?;
        }
    }
    Ok(store)
}
