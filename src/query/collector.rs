//! Result aggregation
//!
//! Accumulates accepted items during traversal and imposes the final
//! ordering afterwards. The set lives for exactly one query execution:
//! built, sorted, emitted, discarded.

/// A single accepted `(key, value)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub key: String,
    pub value: String,
}

/// Ordered collection of accepted items for one query execution
#[derive(Debug, Default)]
pub struct ResultSet {
    items: Vec<ResultItem>,
}

impl ResultSet {
    /// Creates an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted item in traversal order
    pub fn push(&mut self, key: &str, value: &str) {
        self.items.push(ResultItem {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    /// Number of accepted items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no items were accepted
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sorts ascending by key, byte-wise.
    ///
    /// Applied exactly once, strictly after traversal completes; a no-op for
    /// zero or one items. Keys are unique within an index, so the comparison
    /// never ties. The comparator is pure: no state outside the two items.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| a.key.cmp(&b.key));
    }

    /// Iterates items in their current order
    pub fn iter(&self) -> impl Iterator<Item = &ResultItem> {
        self.items.iter()
    }
}
