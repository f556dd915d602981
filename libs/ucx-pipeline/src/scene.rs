//! # Scene Registry Capability
//!
//! The scene-graph seam: containers, entity linking, renames, visibility.
//! [`MemoryScene`] is an in-memory registry with the same name-dedup
//! behavior as the host, used by tests and as a dry-run target.

use std::collections::HashMap;

use config::constants::DEDUP_SUFFIX_WIDTH;

use crate::mesh::CollisionMesh;
use crate::snapshot::Transform;

/// Host scene-registry capability consumed by the actions.
///
/// Names are unique per container; on collision the registry appends a
/// `.NNN` suffix instead of failing, exactly like the host document model.
/// Renames are the one place uniqueness is enforced by refusal.
pub trait SceneRegistry {
    /// Whether a container with this name exists.
    fn has_container(&self, container: &str) -> bool;

    /// Creates a container, deduplicating its name if taken; returns the
    /// stored name.
    fn create_container(&mut self, name: &str) -> String;

    /// Names of the entities currently linked into `container`, in link
    /// order. Empty for an unknown container.
    fn entity_names(&self, container: &str) -> Vec<String>;

    /// Links a built mesh into `container`. The stored name may gain a
    /// dedup suffix; the actual name is returned.
    fn link_entity(
        &mut self,
        container: &str,
        name: &str,
        mesh: CollisionMesh,
        transform: Transform,
    ) -> String;

    /// Renames an entity within `container`. Returns `false` (and changes
    /// nothing) when `target` is already taken or `current` is unknown.
    fn rename_entity(&mut self, container: &str, current: &str, target: &str) -> bool;

    /// Sets the viewport-hidden flag of an entity.
    fn set_hidden(&mut self, container: &str, name: &str, hidden: bool);
}

/// An entity stored in a [`MemoryScene`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntity {
    /// Stored (possibly dedup-suffixed) name.
    pub name: String,
    /// The linked mesh.
    pub mesh: CollisionMesh,
    /// Transform copied from the source object.
    pub transform: Transform,
    /// Viewport-hidden flag.
    pub hidden: bool,
}

/// In-memory [`SceneRegistry`] mirroring the host's naming behavior.
///
/// # Example
///
/// ```rust
/// use ucx_pipeline::{CollisionMesh, MemoryScene, SceneRegistry, Transform};
///
/// let mut scene = MemoryScene::new();
/// let container = scene.create_container("UCX_Collision_Profiles");
/// let stored = scene.link_entity(
///     &container,
///     "UCX_Wall_00",
///     CollisionMesh::new(),
///     Transform::default(),
/// );
/// assert_eq!(stored, "UCX_Wall_00");
///
/// // A second link under the same name gains a dedup suffix
/// let dup = scene.link_entity(
///     &container,
///     "UCX_Wall_00",
///     CollisionMesh::new(),
///     Transform::default(),
/// );
/// assert_eq!(dup, "UCX_Wall_00.001");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    containers: HashMap<String, Vec<StoredEntity>>,
}

impl MemoryScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entities linked into `container`, in link order.
    pub fn entities(&self, container: &str) -> &[StoredEntity] {
        self.containers
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Looks up one entity by name.
    pub fn entity(&self, container: &str, name: &str) -> Option<&StoredEntity> {
        self.entities(container).iter().find(|e| e.name == name)
    }

    fn dedup_name(entities: &[StoredEntity], want: &str) -> String {
        let taken = |name: &str| entities.iter().any(|e| e.name == name);
        if !taken(want) {
            return want.to_string();
        }
        // Host convention: Name.001, Name.002, ...
        let mut counter = 1u32;
        loop {
            let candidate = format!("{want}.{counter:0width$}", width = DEDUP_SUFFIX_WIDTH);
            if !taken(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

impl SceneRegistry for MemoryScene {
    fn has_container(&self, container: &str) -> bool {
        self.containers.contains_key(container)
    }

    fn create_container(&mut self, name: &str) -> String {
        let mut stored = name.to_string();
        let mut counter = 1u32;
        while self.containers.contains_key(&stored) {
            stored = format!("{name}.{counter:0width$}", width = DEDUP_SUFFIX_WIDTH);
            counter += 1;
        }
        self.containers.insert(stored.clone(), Vec::new());
        stored
    }

    fn entity_names(&self, container: &str) -> Vec<String> {
        self.entities(container)
            .iter()
            .map(|e| e.name.clone())
            .collect()
    }

    fn link_entity(
        &mut self,
        container: &str,
        name: &str,
        mesh: CollisionMesh,
        transform: Transform,
    ) -> String {
        let entities = self.containers.entry(container.to_string()).or_default();
        let stored = Self::dedup_name(entities, name);
        entities.push(StoredEntity {
            name: stored.clone(),
            mesh,
            transform,
            hidden: false,
        });
        stored
    }

    fn rename_entity(&mut self, container: &str, current: &str, target: &str) -> bool {
        let Some(entities) = self.containers.get_mut(container) else {
            return false;
        };
        if entities.iter().any(|e| e.name == target) {
            return false;
        }
        match entities.iter_mut().find(|e| e.name == current) {
            Some(entity) => {
                entity.name = target.to_string();
                true
            }
            None => false,
        }
    }

    fn set_hidden(&mut self, container: &str, name: &str, hidden: bool) {
        if let Some(entities) = self.containers.get_mut(container) {
            if let Some(entity) = entities.iter_mut().find(|e| e.name == name) {
                entity.hidden = hidden;
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn link(scene: &mut MemoryScene, container: &str, name: &str) -> String {
        scene.link_entity(container, name, CollisionMesh::new(), Transform::default())
    }

    #[test]
    fn test_dedup_counts_upward() {
        let mut scene = MemoryScene::new();
        scene.create_container("C");
        assert_eq!(link(&mut scene, "C", "Box"), "Box");
        assert_eq!(link(&mut scene, "C", "Box"), "Box.001");
        assert_eq!(link(&mut scene, "C", "Box"), "Box.002");
    }

    #[test]
    fn test_rename_refuses_taken_target() {
        let mut scene = MemoryScene::new();
        scene.create_container("C");
        link(&mut scene, "C", "A");
        link(&mut scene, "C", "B");
        assert!(!scene.rename_entity("C", "A", "B"));
        assert!(scene.rename_entity("C", "A", "A2"));
        assert_eq!(scene.entity_names("C"), vec!["A2", "B"]);
    }

    #[test]
    fn test_container_name_dedup() {
        let mut scene = MemoryScene::new();
        assert_eq!(scene.create_container("C"), "C");
        assert_eq!(scene.create_container("C"), "C.001");
    }

    #[test]
    fn test_hidden_flag() {
        let mut scene = MemoryScene::new();
        scene.create_container("C");
        let name = link(&mut scene, "C", "Box");
        scene.set_hidden("C", &name, true);
        assert!(scene.entity("C", &name).unwrap().hidden);
    }
}
