//! Rectangle bounds grammar
//!
//! Bounds strings come in two forms: a point `[x y]` (a degenerate
//! rectangle) and a rectangle `[min_x min_y],[max_x max_y]`. Coordinates are
//! whitespace-separated decimal numbers. Intersection is closed-interval
//! overlap per axis, so touching edges intersect.

use super::errors::{IndexError, IndexResult};

/// An axis-aligned rectangle in two dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner `[x, y]`
    pub min: [f64; 2],
    /// Maximum corner `[x, y]`
    pub max: [f64; 2],
}

impl Rect {
    /// Creates a rectangle from its corners
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { min, max }
    }

    /// Parses a bounds string.
    ///
    /// A single point parses as a degenerate rectangle with `min == max`.
    pub fn parse(bounds: &str) -> IndexResult<Self> {
        let invalid = || IndexError::InvalidBounds(bounds.to_string());

        let trimmed = bounds.trim();
        if !trimmed.starts_with('[') || !trimmed.ends_with(']') {
            return Err(invalid());
        }
        let inner = &trimmed[1..trimmed.len() - 1];

        let mut points: Vec<[f64; 2]> = Vec::with_capacity(2);
        for part in inner.split("],[") {
            let coords: Vec<f64> = part
                .split_whitespace()
                .map(|c| c.parse::<f64>())
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?;
            if coords.len() != 2 {
                return Err(invalid());
            }
            points.push([coords[0], coords[1]]);
        }

        match points.as_slice() {
            [point] => Ok(Rect::new(*point, *point)),
            [min, max] => Ok(Rect::new(*min, *max)),
            _ => Err(invalid()),
        }
    }

    /// Returns true if the rectangles overlap, edges included
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min[0] <= other.max[0]
            && self.max[0] >= other.min[0]
            && self.min[1] <= other.max[1]
            && self.max[1] >= other.min[1]
    }

    /// The rectangle covering the whole plane; used for bookkeeping entries
    /// that must show up in every traversal.
    pub(super) fn everything() -> Self {
        Rect::new(
            [f64::NEG_INFINITY, f64::NEG_INFINITY],
            [f64::INFINITY, f64::INFINITY],
        )
    }
}
