//! Axis-aligned rectangle used for footprint collision tests.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in the room plane, anchored at its lower-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Lower-left corner x.
    pub x: f32,
    /// Lower-left corner y.
    pub y: f32,
    /// Extent along x.
    pub width: f32,
    /// Extent along y.
    pub depth: f32,
}

impl Rect {
    /// Create a new rectangle ensuring non-negative extents.
    pub fn new(x: f32, y: f32, width: f32, depth: f32) -> Self {
        debug_assert!(width >= 0.0 && depth >= 0.0);
        Self {
            x,
            y,
            width,
            depth,
        }
    }

    /// Tests overlap with another rectangle.
    ///
    /// Overlap is open-interval: rectangles that merely touch along an edge
    /// do not overlap, so items may sit flush against walls or each other.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.x + self.width <= other.x
            || other.x + other.width <= self.x
            || self.y + self.depth <= other.y
            || other.y + other.depth <= self.y)
    }

    /// Whether this rectangle lies entirely within `outer` (shared edges
    /// allowed).
    pub fn contained_in(&self, outer: &Self) -> bool {
        self.x >= outer.x
            && self.y >= outer.y
            && self.x + self.width <= outer.x + outer.width
            && self.y + self.depth <= outer.y + outer.depth
    }

    /// Centroid of the rectangle, used to anchor labels.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.depth * 0.5)
    }
}
