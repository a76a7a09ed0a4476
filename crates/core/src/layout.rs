//! Room, furniture, and layout data model.
//!
//! A [`Layout`] owns its placed items and is the single point where the
//! pairwise non-overlap invariant is enforced: the only way to add an item is
//! [`Layout::try_insert`], which refuses colliding footprints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rect::Rect;

/// Validation errors for room dimensions.
#[derive(Debug, Error, PartialEq)]
pub enum RoomError {
    /// A room dimension was zero or negative.
    #[error("room {axis} must be positive, got {value}")]
    NonPositiveDimension {
        /// Which dimension failed ("width", "length" or "height").
        axis: &'static str,
        /// The offending value.
        value: f32,
    },
}

/// Room dimensions in feet. Width runs along x, length along y, height
/// along z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Extent along x.
    pub width: f32,
    /// Extent along y.
    pub length: f32,
    /// Extent along z.
    pub height: f32,
}

impl Room {
    /// Create a room without validating; call [`Room::validate`] before
    /// generating layouts.
    pub fn new(width: f32, length: f32, height: f32) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Check that all three dimensions are strictly positive.
    pub fn validate(&self) -> Result<(), RoomError> {
        for (axis, value) in [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
        ] {
            if !(value > 0.0) {
                return Err(RoomError::NonPositiveDimension { axis, value });
            }
        }
        Ok(())
    }

    /// The room's floor rectangle with its lower-left corner at the origin.
    pub fn floor_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.length)
    }
}

/// Dimensions for one furniture type. Immutable per type; placed instances
/// snapshot these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureSpec {
    /// Catalog key (e.g., "Bed").
    pub name: String,
    /// Footprint extent along x.
    pub width: f32,
    /// Footprint extent along y.
    pub depth: f32,
    /// Extent along z.
    pub height: f32,
}

impl FurnitureSpec {
    /// Construct a spec from a catalog entry.
    pub fn new(name: impl Into<String>, width: f32, depth: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            width,
            depth,
            height,
        }
    }
}

/// One furniture item committed to a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Furniture type name, copied from the spec at placement time.
    pub name: String,
    /// Lower-left corner x in room-plane coordinates.
    pub x: f32,
    /// Lower-left corner y in room-plane coordinates.
    pub y: f32,
    /// Rotation in the room plane. Always 0.0 for now; reserved.
    pub rotation: f32,
    /// Footprint extent along x, snapshotted from the spec.
    pub width: f32,
    /// Footprint extent along y, snapshotted from the spec.
    pub depth: f32,
    /// Extent along z, snapshotted from the spec.
    pub height: f32,
}

impl PlacedItem {
    /// Snapshot `spec` at position `(x, y)`.
    pub fn new(spec: &FurnitureSpec, x: f32, y: f32) -> Self {
        Self {
            name: spec.name.clone(),
            x,
            y,
            rotation: 0.0,
            width: spec.width,
            depth: spec.depth,
            height: spec.height,
        }
    }

    /// The item's axis-aligned rectangle in the room plane.
    pub fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.depth)
    }
}

/// Ordered collection of placed items. Insertion order is placement order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    items: Vec<PlacedItem>,
}

impl Layout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` if its footprint overlaps no committed item.
    ///
    /// Returns `false` (leaving the layout untouched) on collision. Committed
    /// items are tested in placement order and the first hit short-circuits.
    pub fn try_insert(&mut self, item: PlacedItem) -> bool {
        let footprint = item.footprint();
        if self.items.iter().any(|p| p.footprint().overlaps(&footprint)) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Placed items in placement order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
