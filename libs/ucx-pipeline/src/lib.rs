//! # UCX Pipeline
//!
//! Orchestration of collision proxy generation over abstract host
//! capabilities.
//!
//! ## Architecture
//!
//! ```text
//! ucx-naming (names) ─┐
//! ucx-partition (groups) ─┼→ ucx-pipeline (actions) → MeshKernel / SceneRegistry
//! ```
//!
//! The host supplies an immutable [`SelectionSnapshot`] and two
//! capabilities: a [`MeshKernel`] that builds convex hulls and a
//! [`SceneRegistry`] that owns containers and entities. Each action runs to
//! completion synchronously on the caller's thread; a failed action returns
//! a [`PipelineError`] and leaves the registry exactly as it found it.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use ucx_pipeline::{
//!     actions, CollisionMesh, EntitySnapshot, GenerationConfig, MemoryScene, MeshKernel,
//!     PipelineError, SceneRegistry, SelectionSnapshot,
//! };
//!
//! struct StubKernel;
//!
//! impl MeshKernel for StubKernel {
//!     fn build_convex_hull(&self, points: &[DVec3]) -> Result<CollisionMesh, PipelineError> {
//!         let mut mesh = CollisionMesh::new();
//!         for p in points {
//!             mesh.add_vertex(*p);
//!         }
//!         Ok(mesh)
//!     }
//! }
//!
//! let mut scene = MemoryScene::new();
//! let container = scene.create_container("UCX_Collision_Profiles");
//!
//! let mut crate_mesh = EntitySnapshot::mesh("Crate");
//! crate_mesh.vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
//! let selection = SelectionSnapshot::single(crate_mesh, container);
//!
//! let report = actions::create_from_objects(
//!     &mut scene,
//!     &StubKernel,
//!     &selection,
//!     &GenerationConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(report.created, ["UCX_Crate_00"]);
//! ```

pub mod actions;
pub mod bounds;
pub mod error;
pub mod kernel;
pub mod mesh;
pub mod observer;
pub mod scene;
pub mod snapshot;

pub use actions::{
    ActionReport, CleanOutcome, GenerationConfig, GenerationMode, GroupAssignment, Stage,
};
pub use bounds::Aabb;
pub use error::{PipelineError, Severity};
pub use kernel::MeshKernel;
pub use mesh::CollisionMesh;
pub use observer::{GroupListModel, SelectionObserver};
pub use scene::{MemoryScene, SceneRegistry, StoredEntity};
pub use snapshot::{EntityKind, EntitySnapshot, SelectionSnapshot, Transform};

#[cfg(test)]
mod tests;
