//! 3D scene projection: per-item meshes (or fallback boxes) plus the room's
//! wireframe boundary.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use roomforge_core::{Layout, PlacedItem, Room};
use roomforge_mesh::TriMesh;

/// Mesh-asset boundary: resolves an already-parsed mesh for a furniture
/// type. Loading and format parsing happen entirely on the host side.
pub trait MeshSource {
    /// The source mesh for `name`, or `None` when no asset exists.
    fn mesh_for(&self, name: &str) -> Option<&TriMesh>;
}

/// A [`MeshSource`] with no assets; every item falls back to its box.
pub struct NoMeshes;

impl MeshSource for NoMeshes {
    fn mesh_for(&self, _name: &str) -> Option<&TriMesh> {
        None
    }
}

/// Geometry payload of one scene node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeGeometry {
    /// A source mesh scaled into the item's dimensions and anchored on the
    /// floor at the item's position.
    Mesh(TriMesh),
    /// Fallback box sized exactly to the item's dimensions, for types with
    /// no mesh asset.
    Box {
        /// Minimum corner (item position, floor level).
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
}

/// One drawable furniture item in the 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Furniture type name.
    pub name: String,
    /// Mesh or fallback-box geometry, already positioned in room space.
    pub geometry: NodeGeometry,
    /// Label anchor at the item's center, halfway up its height.
    pub label_anchor: Vec3,
}

fn node_for(item: &PlacedItem, source: &dyn MeshSource) -> SceneNode {
    let dims = Vec3::new(item.width, item.depth, item.height);
    let at = Vec2::new(item.x, item.y);
    let geometry = match source.mesh_for(&item.name) {
        Some(mesh) if !mesh.is_empty() => NodeGeometry::Mesh(mesh.fit_to_footprint(dims, at)),
        _ => {
            let min = Vec3::new(item.x, item.y, 0.0);
            NodeGeometry::Box {
                min,
                max: min + dims,
            }
        }
    };
    SceneNode {
        name: item.name.clone(),
        geometry,
        label_anchor: Vec3::new(
            item.x + item.width * 0.5,
            item.y + item.depth * 0.5,
            item.height * 0.5,
        ),
    }
}

/// Scene nodes for every placed item, in placement order.
pub fn scene_nodes<'a>(
    layout: &'a Layout,
    source: &'a dyn MeshSource,
) -> impl Iterator<Item = SceneNode> + 'a {
    layout.items().iter().map(move |item| node_for(item, source))
}

/// The room's wireframe boundary as line segments: the floor rectangle at
/// z = 0, the ceiling rectangle at z = room height, and the four vertical
/// edges.
pub fn room_wireframe(room: &Room) -> Vec<[Vec3; 2]> {
    let w = room.width;
    let l = room.length;
    let h = room.height;
    let corners = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(w, 0.0, 0.0),
        Vec3::new(w, l, 0.0),
        Vec3::new(0.0, l, 0.0),
    ];

    let mut edges = Vec::with_capacity(12);
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        let lift = Vec3::new(0.0, 0.0, h);
        edges.push([a, b]);
        edges.push([a + lift, b + lift]);
        edges.push([a, a + lift]);
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomforge_core::FurnitureSpec;
    use roomforge_mesh::box_primitive;

    fn single_item_layout(name: &str, w: f32, d: f32, h: f32) -> Layout {
        let mut layout = Layout::new();
        let spec = FurnitureSpec::new(name, w, d, h);
        assert!(layout.try_insert(PlacedItem::new(&spec, 1.0, 2.0)));
        layout
    }

    struct SingleMesh(TriMesh);

    impl MeshSource for SingleMesh {
        fn mesh_for(&self, name: &str) -> Option<&TriMesh> {
            (name == "Bed").then_some(&self.0)
        }
    }

    #[test]
    fn missing_mesh_falls_back_to_exact_box() {
        let layout = single_item_layout("Wardrobe", 4.0, 2.0, 7.0);
        let nodes: Vec<SceneNode> = scene_nodes(&layout, &NoMeshes).collect();
        assert_eq!(nodes.len(), 1);
        match &nodes[0].geometry {
            NodeGeometry::Box { min, max } => {
                assert_eq!(*min, Vec3::new(1.0, 2.0, 0.0));
                assert_eq!(*max, Vec3::new(5.0, 4.0, 7.0));
            }
            NodeGeometry::Mesh(_) => panic!("expected fallback box"),
        }
    }

    #[test]
    fn source_mesh_is_scaled_and_anchored() {
        let asset = box_primitive(Vec3::new(20.0, 10.0, 5.0), Vec2::new(-3.0, 9.0));
        let layout = single_item_layout("Bed", 6.67, 5.0, 2.5);
        let nodes: Vec<SceneNode> = scene_nodes(&layout, &SingleMesh(asset)).collect();
        match &nodes[0].geometry {
            NodeGeometry::Mesh(mesh) => {
                let min = mesh.min_corner();
                assert!((min - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-4);
                let extents = mesh.extents();
                for (axis, target) in [(0, 6.67), (1, 5.0), (2, 2.5)] {
                    assert!(extents[axis] <= target + 1e-4);
                }
            }
            NodeGeometry::Box { .. } => panic!("expected scaled mesh"),
        }
    }

    #[test]
    fn label_sits_at_item_center_half_height() {
        let layout = single_item_layout("Sofa", 6.0, 3.0, 3.0);
        let node = scene_nodes(&layout, &NoMeshes).next().unwrap();
        assert_eq!(node.label_anchor, Vec3::new(4.0, 3.5, 1.5));
    }

    #[test]
    fn wireframe_has_twelve_edges_spanning_room_height() {
        let room = Room::new(10.0, 12.0, 8.0);
        let edges = room_wireframe(&room);
        assert_eq!(edges.len(), 12);
        let floor = edges.iter().filter(|[a, b]| a.z == 0.0 && b.z == 0.0).count();
        let ceiling = edges.iter().filter(|[a, b]| a.z == 8.0 && b.z == 8.0).count();
        let vertical = edges
            .iter()
            .filter(|[a, b]| a.x == b.x && a.y == b.y && (a.z - b.z).abs() == 8.0)
            .count();
        assert_eq!((floor, ceiling, vertical), (4, 4, 4));
    }

    #[test]
    fn projection_is_restartable_and_identical() {
        let layout = single_item_layout("Sofa", 6.0, 3.0, 3.0);
        let first: Vec<SceneNode> = scene_nodes(&layout, &NoMeshes).collect();
        let second: Vec<SceneNode> = scene_nodes(&layout, &NoMeshes).collect();
        assert_eq!(first, second);
    }
}
