//! In-memory spatial store
//!
//! Embedded collaborator implementation used by the CLI and tests. Reads go
//! through cloned snapshots, so every query sees one stable view and
//! concurrent queries are isolated by construction. Entries enumerate in
//! insertion order, deliberately not key order, matching the
//! unordered-traversal contract of [`SpatialRead`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::errors::{IndexError, IndexResult};
use super::rect::Rect;
use super::{SpatialRead, INTERNAL_KEY_PREFIX};

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    bounds: Rect,
    value: String,
}

#[derive(Debug, Clone, Default)]
struct IndexData {
    entries: Vec<Entry>,
}

impl IndexData {
    /// Keys are unique within an index: inserting an existing key replaces
    /// the entry in place, keeping its traversal position.
    fn upsert(&mut self, key: &str, bounds: Rect, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.bounds = bounds;
            entry.value = value.to_string();
        } else {
            self.entries.push(Entry {
                key: key.to_string(),
                bounds,
                value: value.to_string(),
            });
        }
    }
}

/// In-memory spatial store with snapshot-isolated reads
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, IndexData>>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a named spatial index.
    ///
    /// The engine records the index descriptor as a bookkeeping entry inside
    /// the index's own keyspace, under the reserved internal prefix. That
    /// entry intersects every bound and must never surface in query results.
    pub fn create_index(&self, name: &str) -> IndexResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| IndexError::Internal("lock poisoned".into()))?;
        if inner.contains_key(name) {
            return Err(IndexError::IndexExists(name.to_string()));
        }
        let mut data = IndexData::default();
        data.entries.push(Entry {
            key: format!("{INTERNAL_KEY_PREFIX}index:{name}"),
            bounds: Rect::everything(),
            value: "rect".to_string(),
        });
        inner.insert(name.to_string(), data);
        Ok(())
    }

    /// Inserts or replaces an item under `index`.
    ///
    /// `bounds` uses the `[x y]` / `[x y],[x y]` grammar and is validated
    /// here, at write time.
    pub fn insert(&self, index: &str, key: &str, bounds: &str, value: &str) -> IndexResult<()> {
        let rect = Rect::parse(bounds)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| IndexError::Internal("lock poisoned".into()))?;
        let data = inner
            .get_mut(index)
            .ok_or_else(|| IndexError::UnknownIndex(index.to_string()))?;
        data.upsert(key, rect, value);
        Ok(())
    }

    /// Opens a read snapshot. The snapshot sees no writes made after this
    /// call; this is the transaction handle the query core executes inside.
    pub fn snapshot(&self) -> IndexResult<MemorySnapshot> {
        let inner = self
            .inner
            .read()
            .map_err(|_| IndexError::Internal("lock poisoned".into()))?;
        Ok(MemorySnapshot {
            indexes: inner.clone(),
        })
    }
}

/// A stable read view over a [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MemorySnapshot {
    indexes: HashMap<String, IndexData>,
}

impl SpatialRead for MemorySnapshot {
    fn intersects(
        &self,
        index: &str,
        bounds: &str,
        visitor: &mut dyn FnMut(&str, &str) -> bool,
    ) -> IndexResult<()> {
        let query = Rect::parse(bounds)?;
        let data = self
            .indexes
            .get(index)
            .ok_or_else(|| IndexError::UnknownIndex(index.to_string()))?;
        for entry in &data.entries {
            if !entry.bounds.intersects(&query) {
                continue;
            }
            if !visitor(&entry.key, &entry.value) {
                break;
            }
        }
        Ok(())
    }
}
