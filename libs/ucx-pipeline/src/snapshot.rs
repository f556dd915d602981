//! # Scene Snapshots
//!
//! Immutable views of the host's current selection state.
//!
//! Every action takes an explicit snapshot instead of reading editor
//! globals, so behavior depends only on the arguments of the call and not
//! on mode switches or call order. The host assembles a fresh snapshot per
//! invocation; the pipeline never mutates it.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use ucx_partition::{MembershipMap, VertexGroup};

/// What kind of scene entity a snapshot describes.
///
/// Only meshes are operable; everything else trips `NotAMesh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// A polygon mesh.
    Mesh,
    /// Any non-mesh entity (curve, camera, light, empty, ...).
    Other,
}

/// Location / rotation / scale copied from the source object onto each
/// generated proxy, so the proxy overlays its render mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World location.
    pub location: DVec3,
    /// Euler rotation, radians.
    pub rotation_euler: DVec3,
    /// Per-axis scale.
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            location: DVec3::ZERO,
            rotation_euler: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

/// Read-only view of one scene entity at call time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Entity name in the scene registry.
    pub name: String,
    /// Entity kind; only [`EntityKind::Mesh`] is operable.
    pub kind: EntityKind,
    /// Object transform, copied onto generated proxies.
    pub transform: Transform,
    /// All vertex positions of the mesh.
    pub vertices: Vec<DVec3>,
    /// Indices of the vertices selected in edit mode.
    pub selected_vertices: Vec<u32>,
    /// The mesh's vertex groups, in host index order.
    pub groups: Vec<VertexGroup>,
    /// Vertex-to-group membership relation.
    pub memberships: MembershipMap,
}

impl EntitySnapshot {
    /// Creates an empty mesh snapshot with the given name.
    pub fn mesh(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Mesh,
            transform: Transform::default(),
            vertices: Vec::new(),
            selected_vertices: Vec::new(),
            groups: Vec::new(),
            memberships: MembershipMap::new(),
        }
    }

    /// Whether the entity can be fed to the mesh kernel.
    #[inline]
    pub fn is_mesh(&self) -> bool {
        self.kind == EntityKind::Mesh
    }

    /// Positions of the vertices selected in edit mode.
    ///
    /// Indices outside the vertex array are skipped rather than panicking;
    /// the snapshot is host-supplied and assumed, not enforced, consistent.
    pub fn selected_positions(&self) -> Vec<DVec3> {
        self.selected_vertices
            .iter()
            .filter_map(|index| self.vertices.get(*index as usize).copied())
            .collect()
    }

    /// Positions of the vertices belonging to group `group_index`.
    pub fn group_positions(&self, group_index: u32) -> Vec<DVec3> {
        ucx_partition::partition_vertices(&self.memberships, group_index)
            .into_iter()
            .filter_map(|index| self.vertices.get(index as usize).copied())
            .collect()
    }
}

/// The whole selection state one action runs against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    /// Selected entities, in selection order.
    pub selected: Vec<EntitySnapshot>,
    /// Index of the active entity within `selected`, if any.
    pub active_index: Option<usize>,
    /// Name of the target container, if one is configured.
    pub container: Option<String>,
}

impl SelectionSnapshot {
    /// Builds a snapshot with one active entity.
    pub fn single(entity: EntitySnapshot, container: impl Into<String>) -> Self {
        Self {
            selected: vec![entity],
            active_index: Some(0),
            container: Some(container.into()),
        }
    }

    /// The active entity, if any.
    pub fn active(&self) -> Option<&EntitySnapshot> {
        self.selected.get(self.active_index?)
    }
}

// =============================================================================
// TESTS
// =============================================================================
