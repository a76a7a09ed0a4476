//! 2D floor-plan projection: one rectangle per placed item plus a centroid
//! label, with openings flagged for distinct styling.

use serde::{Deserialize, Serialize};

use roomforge_core::{Layout, PlacedItem, Rect, Room};

/// How a footprint should be styled by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Regular furniture; drawn as its icon, or a filled rectangle when the
    /// renderer has no icon for the slug.
    Furniture,
    /// Wall opening (door or window); drawn as a highlighted rectangle.
    Opening,
}

/// One drawable footprint in the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanShape {
    /// Footprint rectangle in room-plane coordinates.
    pub rect: Rect,
    /// Styling class.
    pub kind: ShapeKind,
    /// Icon asset slug derived from the furniture type name
    /// (e.g., "TV Stand" -> "tv_stand"). Renderers fall back to the plain
    /// rectangle when the slug resolves to nothing.
    pub icon: String,
    /// Label text, the furniture type name.
    pub label: String,
    /// Label anchor at the footprint centroid.
    pub label_anchor: [f32; 2],
}

/// Furniture types rendered as wall openings rather than icons.
const OPENINGS: [&str; 2] = ["Door", "Window"];

fn shape_kind(name: &str) -> ShapeKind {
    if OPENINGS.contains(&name) {
        ShapeKind::Opening
    } else {
        ShapeKind::Furniture
    }
}

/// Asset slug for a furniture type name.
fn icon_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

fn shape_for(item: &PlacedItem) -> PlanShape {
    let rect = item.footprint();
    let (cx, cy) = rect.center();
    PlanShape {
        rect,
        kind: shape_kind(&item.name),
        icon: icon_slug(&item.name),
        label: item.name.clone(),
        label_anchor: [cx, cy],
    }
}

/// The room's boundary rectangle.
pub fn room_outline(room: &Room) -> Rect {
    room.floor_rect()
}

/// Drawable footprints for every placed item, in placement order.
pub fn plan_shapes(layout: &Layout) -> impl Iterator<Item = PlanShape> + '_ {
    layout.items().iter().map(shape_for)
}
