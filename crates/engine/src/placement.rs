//! Constrained placement search for a single furniture item.

use rand::Rng;

use roomforge_core::{FurnitureSpec, Layout, PlacedItem, Rect, Room};

use crate::predictor::Hint;

/// Placement attempts granted per item before it is reported unplaced.
pub const MAX_ATTEMPTS: u32 = 50;

/// Sample a coordinate uniformly from the placement envelope `[0, span]`.
///
/// A negative span means the item does not fit on that axis; the envelope is
/// degenerate and collapses deterministically to 0 rather than sampling an
/// inverted range.
fn sample_envelope<R: Rng>(rng: &mut R, span: f32) -> f32 {
    if span > 0.0 {
        rng.gen_range(0.0..=span)
    } else {
        0.0
    }
}

/// Scale a normalized hint coordinate into the room and clamp it so the full
/// item extent stays within `[0, room_extent]`.
fn hint_coord(hint: f32, room_extent: f32, item_extent: f32) -> f32 {
    let scaled = hint.clamp(0.0, 1.0) * room_extent;
    scaled.min(room_extent - item_extent).max(0.0)
}

/// Try to place one item, committing it to `layout` on success.
///
/// The hint is consulted on attempt 0 only; every other attempt samples the
/// envelope uniformly. A candidate is accepted iff its footprint lies inside
/// the room and collides with nothing already committed. Returns the number
/// of attempts consumed, or `None` if the budget ran out.
pub(crate) fn place_item<R: Rng>(
    room: &Room,
    spec: &FurnitureSpec,
    hint: Option<Hint>,
    layout: &mut Layout,
    rng: &mut R,
) -> Option<u32> {
    let floor = room.floor_rect();
    let span_x = room.width - spec.width;
    let span_y = room.length - spec.depth;

    for attempt in 0..MAX_ATTEMPTS {
        let (x, y) = match (attempt, hint) {
            (0, Some([hx, hy])) => (
                hint_coord(hx, room.width, spec.width),
                hint_coord(hy, room.length, spec.depth),
            ),
            _ => (
                sample_envelope(rng, span_x),
                sample_envelope(rng, span_y),
            ),
        };

        let candidate = Rect::new(x, y, spec.width, spec.depth);
        if !candidate.contained_in(&floor) {
            continue;
        }
        if layout.try_insert(PlacedItem::new(spec, x, y)) {
            return Some(attempt + 1);
        }
    }
    None
}
