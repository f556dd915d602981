//! # Tests for the Generation Pipeline
//!
//! End-to-end action tests against [`MemoryScene`] and a fake kernel that
//! mimics the host's degenerate-input behavior.

use glam::DVec3;

use crate::actions::{
    assign_selection_to_group, clean_names, create_container, create_from_objects,
    create_from_selected_vertices, create_from_vertex_groups,
};
use crate::{
    CollisionMesh, EntityKind, EntitySnapshot, GenerationConfig, GenerationMode, MemoryScene,
    MeshKernel, PipelineError, SceneRegistry, SelectionSnapshot, Severity,
};
use ucx_partition::{MembershipMap, PartitionFilter, VertexGroup};

/// Fake host kernel: fan-triangulates its input and rejects point sets
/// with fewer than 3 affinely independent members, like the real one.
struct FakeKernel;

impl MeshKernel for FakeKernel {
    fn build_convex_hull(&self, points: &[DVec3]) -> Result<CollisionMesh, PipelineError> {
        let mut distinct: Vec<DVec3> = Vec::new();
        for p in points {
            if !distinct.iter().any(|q| q.distance(*p) < 1e-12) {
                distinct.push(*p);
            }
        }
        let spans_plane = distinct.len() >= 3
            && distinct[2..].iter().any(|p| {
                (distinct[1] - distinct[0])
                    .cross(*p - distinct[0])
                    .length_squared()
                    > 1e-24
            });
        if !spans_plane {
            return Err(PipelineError::degenerate("fewer than 3 independent points"));
        }

        let mut mesh = CollisionMesh::with_capacity(distinct.len(), distinct.len() - 2);
        for p in &distinct {
            mesh.add_vertex(*p);
        }
        for i in 2..distinct.len() as u32 {
            mesh.add_triangle(0, i - 1, i);
        }
        Ok(mesh)
    }
}

fn tetra_vertices() -> Vec<DVec3> {
    vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z]
}

fn scene_with_container() -> (MemoryScene, String) {
    let mut scene = MemoryScene::new();
    let container = create_container(&mut scene);
    (scene, container)
}

fn mesh_entity(name: &str) -> EntitySnapshot {
    let mut entity = EntitySnapshot::mesh(name);
    entity.vertices = tetra_vertices();
    entity
}

// =============================================================================
// FROM OBJECTS
// =============================================================================

#[test]
fn test_create_from_object_links_named_hidden_proxy() {
    let (mut scene, container) = scene_with_container();
    let selection = SelectionSnapshot::single(mesh_entity("Crate"), container.clone());

    let report = create_from_objects(
        &mut scene,
        &FakeKernel,
        &selection,
        &GenerationConfig::default(),
    )
    .unwrap();

    assert_eq!(report.created, ["UCX_Crate_00"]);
    let stored = scene.entity(&container, "UCX_Crate_00").unwrap();
    assert!(stored.hidden);
    assert_eq!(stored.mesh.vertex_count(), 4);
}

#[test]
fn test_sequence_advances_across_actions() {
    let (mut scene, container) = scene_with_container();
    let selection = SelectionSnapshot::single(mesh_entity("Crate"), container.clone());
    let config = GenerationConfig::default();

    create_from_objects(&mut scene, &FakeKernel, &selection, &config).unwrap();
    let report = create_from_objects(&mut scene, &FakeKernel, &selection, &config).unwrap();

    assert_eq!(report.created, ["UCX_Crate_01"]);
}

#[test]
fn test_same_base_names_planned_apart_within_one_action() {
    let (mut scene, container) = scene_with_container();
    let selection = SelectionSnapshot {
        selected: vec![mesh_entity("Crate"), mesh_entity("Crate")],
        active_index: Some(0),
        container: Some(container),
    };

    let report = create_from_objects(
        &mut scene,
        &FakeKernel,
        &selection,
        &GenerationConfig::default(),
    )
    .unwrap();

    assert_eq!(report.created, ["UCX_Crate_00", "UCX_Crate_01"]);
}

#[test]
fn test_non_mesh_selection_aborts_before_linking() {
    let (mut scene, container) = scene_with_container();
    let mut lamp = EntitySnapshot::mesh("Lamp");
    lamp.kind = EntityKind::Other;
    let selection = SelectionSnapshot {
        selected: vec![mesh_entity("Crate"), lamp],
        active_index: Some(0),
        container: Some(container.clone()),
    };

    let err = create_from_objects(
        &mut scene,
        &FakeKernel,
        &selection,
        &GenerationConfig::default(),
    )
    .unwrap_err();

    assert_eq!(err, PipelineError::not_a_mesh("Lamp"));
    assert!(scene.entities(&container).is_empty());
}

#[test]
fn test_missing_container_is_rejected() {
    let mut scene = MemoryScene::new();
    let no_container = SelectionSnapshot {
        selected: vec![mesh_entity("Crate")],
        active_index: Some(0),
        container: None,
    };
    let gone_container = SelectionSnapshot {
        container: Some("Deleted".to_string()),
        ..no_container.clone()
    };
    let config = GenerationConfig::default();

    for selection in [no_container, gone_container] {
        let err = create_from_objects(&mut scene, &FakeKernel, &selection, &config).unwrap_err();
        assert_eq!(err, PipelineError::NoContainerSelected);
    }
}

#[test]
fn test_empty_selection_is_rejected() {
    let (mut scene, container) = scene_with_container();
    let selection = SelectionSnapshot {
        selected: Vec::new(),
        active_index: None,
        container: Some(container),
    };

    let err = create_from_objects(
        &mut scene,
        &FakeKernel,
        &selection,
        &GenerationConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, PipelineError::NoSelection);
}

// =============================================================================
// FROM SELECTED VERTICES
// =============================================================================

#[test]
fn test_selected_vertices_require_minimum_three() {
    let (mut scene, container) = scene_with_container();
    let mut entity = mesh_entity("Crate");
    entity.selected_vertices = vec![0, 1];
    let selection = SelectionSnapshot::single(entity, container.clone());

    let err = create_from_selected_vertices(
        &mut scene,
        &FakeKernel,
        &selection,
        &GenerationConfig::default(),
    )
    .unwrap_err();

    assert_eq!(err, PipelineError::insufficient(3, 2));
    assert!(scene.entities(&container).is_empty());
}

#[test]
fn test_selected_vertices_build_subset_hull() {
    let (mut scene, container) = scene_with_container();
    let mut entity = mesh_entity("Crate");
    entity.selected_vertices = vec![0, 1, 2];
    let selection = SelectionSnapshot::single(entity, container.clone());

    let report = create_from_selected_vertices(
        &mut scene,
        &FakeKernel,
        &selection,
        &GenerationConfig::default(),
    )
    .unwrap();

    assert_eq!(report.created, ["UCX_Crate_00"]);
    let stored = scene.entity(&container, "UCX_Crate_00").unwrap();
    assert_eq!(stored.mesh.vertex_count(), 3);
}

// =============================================================================
// FROM VERTEX GROUPS
// =============================================================================

/// Crate with two 4-vertex groups (`UCX_Top`, `UCX_Bottom`) and one
/// 2-vertex group (`Tiny`), over a cube's 8 corners.
fn grouped_entity() -> EntitySnapshot {
    let mut entity = EntitySnapshot::mesh("Crate");
    entity.vertices = (0..8)
        .map(|i| {
            DVec3::new(
                (i & 1) as f64,
                ((i >> 1) & 1) as f64,
                ((i >> 2) & 1) as f64,
            )
        })
        .collect();
    entity.memberships = MembershipMap::from_rows(vec![
        vec![1],    // 0: bottom
        vec![1],    // 1: bottom
        vec![1, 2], // 2: bottom + tiny
        vec![1],    // 3: bottom
        vec![0],    // 4: top
        vec![0],    // 5: top
        vec![0, 2], // 6: top + tiny
        vec![0],    // 7: top
    ]);
    let counts = ucx_partition::group_vertex_counts(&entity.memberships, 3);
    entity.groups = vec![
        VertexGroup::new("UCX_Top", counts[0]),
        VertexGroup::new("UCX_Bottom", counts[1]),
        VertexGroup::new("Tiny", counts[2]),
    ];
    entity
}

#[test]
fn test_groups_generate_one_proxy_each() {
    let (mut scene, container) = scene_with_container();
    let selection = SelectionSnapshot::single(grouped_entity(), container.clone());

    let report = create_from_vertex_groups(
        &mut scene,
        &FakeKernel,
        &selection,
        &GenerationConfig::default(),
    )
    .unwrap();

    // Tiny fails both the count threshold and the prefix filter
    assert_eq!(report.created, ["UCX_Crate_00", "UCX_Crate_01"]);
    for name in &report.created {
        assert_eq!(scene.entity(&container, name).unwrap().mesh.vertex_count(), 4);
    }
}

#[test]
fn test_allowlist_restricts_groups() {
    let (mut scene, container) = scene_with_container();
    let selection = SelectionSnapshot::single(grouped_entity(), container);
    let config = GenerationConfig {
        filter: PartitionFilter {
            allowlist: Some(vec!["UCX_Bottom".to_string()]),
            ..PartitionFilter::default()
        },
        ..GenerationConfig::default()
    };

    let report = create_from_vertex_groups(&mut scene, &FakeKernel, &selection, &config).unwrap();
    assert_eq!(report.created, ["UCX_Crate_00"]);
}

#[test]
fn test_no_eligible_groups_is_not_an_error() {
    let (mut scene, container) = scene_with_container();
    let mut entity = mesh_entity("Crate");
    entity.groups = vec![VertexGroup::new("Weights", 1)];
    let selection = SelectionSnapshot::single(entity, container.clone());

    let report = create_from_vertex_groups(
        &mut scene,
        &FakeKernel,
        &selection,
        &GenerationConfig::default(),
    )
    .unwrap();

    assert!(report.created.is_empty());
    assert!(scene.entities(&container).is_empty());
}

#[test]
fn test_degenerate_group_aborts_whole_action() {
    let (mut scene, container) = scene_with_container();
    let mut entity = grouped_entity();
    // Collapse the bottom group onto a single point: its hull is degenerate
    for index in [0u32, 1, 2, 3] {
        entity.vertices[index as usize] = DVec3::ZERO;
    }
    let selection = SelectionSnapshot::single(entity, container.clone());

    let err = create_from_vertex_groups(
        &mut scene,
        &FakeKernel,
        &selection,
        &GenerationConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, PipelineError::DegenerateGeometry { .. }));
    // The top group's hull succeeded first but must not have been linked
    assert!(scene.entities(&container).is_empty());
}

// =============================================================================
// BOUNDING BOX MODES
// =============================================================================

#[test]
fn test_box_mode_hulls_the_eight_corners() {
    let (mut scene, container) = scene_with_container();
    let selection = SelectionSnapshot::single(mesh_entity("Crate"), container.clone());
    let config = GenerationConfig {
        mode: GenerationMode::BoundingBox,
        ..GenerationConfig::default()
    };

    create_from_objects(&mut scene, &FakeKernel, &selection, &config).unwrap();
    let stored = scene.entity(&container, "UCX_Crate_00").unwrap();
    assert_eq!(stored.mesh.vertex_count(), 8);
}

#[test]
fn test_merged_boxes_span_the_selection() {
    use approx::assert_relative_eq;

    let (mut scene, container) = scene_with_container();
    let mut far = mesh_entity("Far");
    far.vertices = tetra_vertices()
        .into_iter()
        .map(|v| v + DVec3::splat(10.0))
        .collect();
    let selection = SelectionSnapshot {
        selected: vec![mesh_entity("Crate"), far],
        active_index: Some(0),
        container: Some(container.clone()),
    };
    let config = GenerationConfig {
        mode: GenerationMode::BoundingBox,
        merge_boxes: true,
        ..GenerationConfig::default()
    };

    let report = create_from_objects(&mut scene, &FakeKernel, &selection, &config).unwrap();

    // One proxy, named after the active object, spanning both boxes
    assert_eq!(report.created, ["UCX_Crate_00"]);
    let stored = scene.entity(&container, "UCX_Crate_00").unwrap();
    let (min, max) = stored.mesh.bounding_box().unwrap();
    assert_relative_eq!(min.x, 0.0);
    assert_relative_eq!(max.x, 11.0);
}

#[test]
fn test_auto_hide_can_be_disabled() {
    let (mut scene, container) = scene_with_container();
    let selection = SelectionSnapshot::single(mesh_entity("Crate"), container.clone());
    let config = GenerationConfig {
        auto_hide: false,
        ..GenerationConfig::default()
    };

    create_from_objects(&mut scene, &FakeKernel, &selection, &config).unwrap();
    assert!(!scene.entity(&container, "UCX_Crate_00").unwrap().hidden);
}

// =============================================================================
// CLEANUP
// =============================================================================

#[test]
fn test_clean_names_undoes_registry_dedup() {
    let (mut scene, container) = scene_with_container();
    // Force the registry's dedup path by linking colliding names directly
    let mesh = || CollisionMesh::new();
    scene.link_entity(&container, "UCX_Crate_00", mesh(), Default::default());
    let dup = scene.link_entity(&container, "UCX_Crate_00", mesh(), Default::default());
    assert_eq!(dup, "UCX_Crate_00.001");
    scene.link_entity(&container, "UCX_Old_03.002", mesh(), Default::default());

    let selection = SelectionSnapshot {
        selected: Vec::new(),
        active_index: None,
        container: Some(container.clone()),
    };
    let outcome = clean_names(&mut scene, &selection).unwrap();

    // The dup collides with the surviving original; the stale suffix clears
    assert_eq!(outcome.renamed, 1);
    assert_eq!(outcome.conflicts, 1);
    assert_eq!(
        outcome.warning(),
        Some(PipelineError::RenameConflict { failed: 1 })
    );
    assert_eq!(outcome.warning().unwrap().severity(), Severity::Warning);
    assert_eq!(
        scene.entity_names(&container),
        vec!["UCX_Crate_00", "UCX_Crate_00.001", "UCX_Old_03"]
    );
}

#[test]
fn test_clean_names_on_clean_container_is_noop() {
    let (mut scene, container) = scene_with_container();
    scene.link_entity(
        &container,
        "UCX_Crate_00",
        CollisionMesh::new(),
        Default::default(),
    );
    let selection = SelectionSnapshot {
        container: Some(container),
        ..SelectionSnapshot::default()
    };

    let outcome = clean_names(&mut scene, &selection).unwrap();
    assert_eq!(outcome, Default::default());
    assert_eq!(outcome.warning(), None);
}

// =============================================================================
// GROUP ASSIGNMENT
// =============================================================================

#[test]
fn test_assignment_continues_group_sequence() {
    let mut entity = mesh_entity("Crate");
    entity.selected_vertices = vec![0, 1, 2];
    entity.groups = vec![
        VertexGroup::new("UCX_Crate_00", 4),
        VertexGroup::new("Weights", 8),
    ];
    let selection = SelectionSnapshot::single(entity, "C");

    let assignment = assign_selection_to_group(&selection).unwrap();
    assert_eq!(assignment.name, "UCX_Crate_01");
    assert_eq!(assignment.vertices, vec![0, 1, 2]);
}

#[test]
fn test_assignment_requires_three_selected() {
    let mut entity = mesh_entity("Crate");
    entity.selected_vertices = vec![0];
    let selection = SelectionSnapshot::single(entity, "C");

    let err = assign_selection_to_group(&selection).unwrap_err();
    assert_eq!(err, PipelineError::insufficient(3, 1));
}
