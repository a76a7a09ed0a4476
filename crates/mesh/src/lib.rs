#![warn(missing_docs)]
//! Triangle-mesh normalization: uniform scaling into a target bounding box
//! and floor alignment at a placed position.
//!
//! Meshes arrive already parsed (the workspace performs no asset I/O). Every
//! transform here returns a new mesh; sources are never mutated.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Extents below this are treated as degenerate when choosing a scale
/// factor.
const DEGENERATE_EXTENT: f32 = 1e-6;

/// Opaque triangle geometry: vertex positions plus triangular faces indexing
/// into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriMesh {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Triangles as triples of vertex indices.
    pub faces: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Construct a mesh from raw buffers.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Whether the mesh has no geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Minimum corner of the axis-aligned bounding box.
    pub fn min_corner(&self) -> Vec3 {
        self.vertices
            .iter()
            .copied()
            .fold(Vec3::splat(f32::INFINITY), Vec3::min)
    }

    /// Axis-aligned bounding-box extents (max − min per axis). Zero for an
    /// empty mesh.
    pub fn extents(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        let max = self
            .vertices
            .iter()
            .copied()
            .fold(Vec3::splat(f32::NEG_INFINITY), Vec3::max);
        max - self.min_corner()
    }

    /// The uniform factor that fits this mesh inside `target` without
    /// exceeding it on any axis: the minimum per-axis ratio.
    ///
    /// Degenerate (near-zero) extents are skipped so flat meshes still scale
    /// by their meaningful axes; a fully degenerate mesh keeps factor 1.0.
    pub fn scale_factor_for(&self, target: Vec3) -> f32 {
        let extents = self.extents();
        let mut factor = f32::INFINITY;
        for axis in 0..3 {
            if extents[axis] > DEGENERATE_EXTENT {
                factor = factor.min(target[axis] / extents[axis]);
            }
        }
        if factor.is_finite() {
            factor
        } else {
            1.0
        }
    }

    /// Return a copy scaled uniformly (about the origin) to fit inside
    /// `target`. Aspect ratio is preserved; the result may undershoot the
    /// target on up to two axes but never exceeds it on any.
    pub fn scale_to_fit(&self, target: Vec3) -> TriMesh {
        let factor = self.scale_factor_for(target);
        TriMesh {
            vertices: self.vertices.iter().map(|v| *v * factor).collect(),
            faces: self.faces.clone(),
        }
    }

    /// Return a copy translated so the footprint's minimum corner sits at
    /// `at` with the base on the floor plane (z = 0).
    pub fn anchor_to_floor(&self, at: Vec2) -> TriMesh {
        if self.is_empty() {
            return self.clone();
        }
        let offset = Vec3::new(at.x, at.y, 0.0) - self.min_corner();
        TriMesh {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
            faces: self.faces.clone(),
        }
    }

    /// Scale into `target` and anchor at `at` in one pass.
    pub fn fit_to_footprint(&self, target: Vec3, at: Vec2) -> TriMesh {
        self.scale_to_fit(target).anchor_to_floor(at)
    }
}

/// Build the fallback box primitive sized exactly to `dims`, with its
/// minimum corner at `at` and base at z = 0.
///
/// Substituted by callers when no mesh asset exists for a furniture type.
pub fn box_primitive(dims: Vec3, at: Vec2) -> TriMesh {
    let min = Vec3::new(at.x, at.y, 0.0);
    let max = min + dims;
    let vertices = vec![
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ];
    let faces = vec![
        // bottom
        [0, 2, 1],
        [0, 3, 2],
        // top
        [4, 5, 6],
        [4, 6, 7],
        // front (y = min)
        [0, 1, 5],
        [0, 5, 4],
        // back (y = max)
        [2, 3, 7],
        [2, 7, 6],
        // left (x = min)
        [3, 0, 4],
        [3, 4, 7],
        // right (x = max)
        [1, 2, 6],
        [1, 6, 5],
    ];
    TriMesh::new(vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    /// 2 x 4 x 1 box with its minimum corner away from the origin.
    fn sample_mesh() -> TriMesh {
        box_primitive(Vec3::new(2.0, 4.0, 1.0), Vec2::new(3.0, 5.0))
    }

    #[test]
    fn extents_measure_the_bounding_box() {
        let mesh = sample_mesh();
        assert!((mesh.extents() - Vec3::new(2.0, 4.0, 1.0)).length() < EPS);
        assert!((mesh.min_corner() - Vec3::new(3.0, 5.0, 0.0)).length() < EPS);
    }

    #[test]
    fn scale_to_fit_never_exceeds_target_and_is_tight() {
        let mesh = sample_mesh();
        let target = Vec3::new(6.67, 5.0, 2.5);
        let scaled = mesh.scale_to_fit(target);
        let extents = scaled.extents();
        let mut touched = false;
        for axis in 0..3 {
            assert!(extents[axis] <= target[axis] + EPS, "axis {axis} exceeds target");
            if (extents[axis] - target[axis]).abs() < EPS {
                touched = true;
            }
        }
        // Uniform-scale tightness: at least one axis reaches the target.
        assert!(touched);
    }

    #[test]
    fn scale_preserves_aspect_ratio() {
        let mesh = sample_mesh();
        let scaled = mesh.scale_to_fit(Vec3::new(1.0, 1.0, 1.0));
        let before = mesh.extents();
        let after = scaled.extents();
        assert!((after.x / before.x - after.y / before.y).abs() < EPS);
        assert!((after.x / before.x - after.z / before.z).abs() < EPS);
    }

    #[test]
    fn flat_meshes_scale_by_their_meaningful_axes() {
        // A z-degenerate quad: a rug.
        let mesh = TriMesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(4.0, 0.0, 0.0),
                Vec3::new(4.0, 2.0, 0.0),
                Vec3::new(0.0, 2.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        );
        let scaled = mesh.scale_to_fit(Vec3::new(2.0, 2.0, 1.0));
        assert!((scaled.extents().x - 2.0).abs() < EPS);
    }

    #[test]
    fn fully_degenerate_mesh_keeps_unit_factor() {
        let mesh = TriMesh::new(vec![Vec3::splat(1.0)], vec![]);
        assert_eq!(mesh.scale_factor_for(Vec3::splat(5.0)), 1.0);
        assert!(TriMesh::new(vec![], vec![]).scale_to_fit(Vec3::ONE).is_empty());
    }

    #[test]
    fn anchor_to_floor_moves_min_corner_to_position() {
        let mesh = sample_mesh();
        let anchored = mesh.anchor_to_floor(Vec2::new(1.5, 2.5));
        assert!((anchored.min_corner() - Vec3::new(1.5, 2.5, 0.0)).length() < EPS);
        // Source mesh untouched.
        assert!((mesh.min_corner() - Vec3::new(3.0, 5.0, 0.0)).length() < EPS);
    }

    #[test]
    fn fit_to_footprint_scales_then_anchors() {
        let mesh = sample_mesh();
        let target = Vec3::new(1.0, 2.0, 0.5);
        let fitted = mesh.fit_to_footprint(target, Vec2::new(7.0, 8.0));
        assert!((fitted.min_corner() - Vec3::new(7.0, 8.0, 0.0)).length() < EPS);
        let extents = fitted.extents();
        for axis in 0..3 {
            assert!(extents[axis] <= target[axis] + EPS);
        }
    }

    #[test]
    fn box_primitive_matches_dims_exactly() {
        let mesh = box_primitive(Vec3::new(3.0, 0.1, 7.0), Vec2::new(0.0, 0.0));
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.faces.len(), 12);
        assert!((mesh.extents() - Vec3::new(3.0, 0.1, 7.0)).length() < EPS);
    }
}
