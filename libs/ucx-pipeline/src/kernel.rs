//! # Mesh Kernel Capability
//!
//! The convex-hull construction seam. The algorithm itself belongs to the
//! host's mesh kernel; the pipeline only hands it point sets and links the
//! result once it succeeds.

use glam::DVec3;

use crate::error::PipelineError;
use crate::mesh::CollisionMesh;

/// Host mesh-kernel capability consumed by the generation actions.
///
/// Implementations are expected to signal
/// [`PipelineError::DegenerateGeometry`] when given fewer than 3 affinely
/// independent points, and must not have observable side effects: the
/// pipeline buffers the returned mesh and links it into the scene only
/// after the whole action has succeeded.
pub trait MeshKernel {
    /// Builds the convex hull enclosing `points`.
    fn build_convex_hull(&self, points: &[DVec3]) -> Result<CollisionMesh, PipelineError>;
}
