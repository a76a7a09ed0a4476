#![warn(missing_docs)]
//! Core primitives shared across the workspace: room-plane geometry and the
//! layout data model.

pub mod layout;
pub mod rect;
pub mod units;

use rand::{rngs::StdRng, SeedableRng};

// Re-export commonly used types
pub use layout::{FurnitureSpec, Layout, PlacedItem, Room, RoomError};
pub use rect::Rect;

/// Helper to derive a reproducible RNG for one generation request.
///
/// Seeding by plan seed + request counter keeps repeated generations for the
/// same room distinct while staying fully replayable.
pub fn scoped_rng(plan_seed: u64, request: u64) -> StdRng {
    StdRng::seed_from_u64(plan_seed ^ request.rotate_left(17))
}
