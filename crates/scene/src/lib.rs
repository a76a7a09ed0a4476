#![warn(missing_docs)]
//! Layout projection: turns a placed [`Layout`](roomforge_core::Layout) into
//! drawable records for an external 2D or 3D rendering surface.
//!
//! Projection is pure over borrowed layouts. Every function here returns a
//! finite iterator (or plain value) that can be requested again without side
//! effects, yielding structurally identical records.

pub mod plan2d;
pub mod scene3d;

pub use plan2d::{plan_shapes, room_outline, PlanShape, ShapeKind};
pub use scene3d::{room_wireframe, scene_nodes, MeshSource, NoMeshes, NodeGeometry, SceneNode};
