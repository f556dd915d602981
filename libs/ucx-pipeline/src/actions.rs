//! # Generation Actions
//!
//! The user-facing actions behind the panel buttons. Each action validates
//! the snapshot, plans names, extracts geometry, asks the kernel for hulls,
//! and only then links the results: a failure at any stage returns an error
//! with the scene registry untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use config::constants::{DEFAULT_CONTAINER_NAME, MIN_SELECTION_VERTICES};
use glam::DVec3;
use ucx_naming::next_name;
use ucx_partition::PartitionFilter;

use crate::bounds::Aabb;
use crate::error::PipelineError;
use crate::kernel::MeshKernel;
use crate::mesh::CollisionMesh;
use crate::scene::SceneRegistry;
use crate::snapshot::{EntitySnapshot, SelectionSnapshot, Transform};

/// Shape of the generated proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Convex hull of the region's vertices.
    #[default]
    ConvexHull,
    /// Hull of the 8 corners of the region's axis-aligned bounding box.
    BoundingBox,
}

/// Toggles consumed by the generation actions, supplied by the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Proxy shape.
    pub mode: GenerationMode,
    /// In box mode, union the boxes of the whole selection into one proxy.
    pub merge_boxes: bool,
    /// Hide each generated proxy in the viewport.
    pub auto_hide: bool,
    /// Group eligibility filter for the vertex-group actions.
    pub filter: PartitionFilter,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::default(),
            merge_boxes: false,
            // The panel hides proxies by default so they never occlude the
            // render mesh being edited
            auto_hide: true,
            filter: PartitionFilter::default(),
        }
    }
}

/// Names of the proxies one action created, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionReport {
    /// Stored entity names.
    pub created: Vec<String>,
}

/// Result of a [`clean_names`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOutcome {
    /// Renames applied.
    pub renamed: usize,
    /// Names whose cleaned form was already taken.
    pub conflicts: usize,
}

impl CleanOutcome {
    /// The aggregated warning to surface, if any conflicts were hit.
    pub fn warning(&self) -> Option<PipelineError> {
        (self.conflicts > 0).then_some(PipelineError::RenameConflict {
            failed: self.conflicts,
        })
    }
}

/// A vertex-group assignment for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAssignment {
    /// Auto-generated group name, next in the entity's `UCX_` sequence.
    pub name: String,
    /// Member vertex indices.
    pub vertices: Vec<u32>,
}

/// Conceptual stage of one proxy generation, traced per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Fresh sequence name reserved against the container.
    NamesComputed,
    /// Region vertices extracted from the snapshot.
    GeometryExtracted,
    /// Kernel returned a hull.
    HullBuilt,
    /// Proxy linked into the target container.
    Relinked,
    /// Visibility applied; generation done.
    Finalized,
}

impl Stage {
    /// Stable label used in trace events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NamesComputed => "names_computed",
            Self::GeometryExtracted => "geometry_extracted",
            Self::HullBuilt => "hull_built",
            Self::Relinked => "relinked",
            Self::Finalized => "finalized",
        }
    }
}

/// A fully built proxy waiting to be linked.
///
/// Buffering built proxies until every hull in the action has succeeded is
/// what keeps a failed action free of partial linkage.
struct PendingProxy {
    name: String,
    mesh: CollisionMesh,
    transform: Transform,
}

/// Creates one collision proxy per selected mesh object.
///
/// In box mode with `merge_boxes` set, the boxes of the whole selection are
/// unioned into a single proxy named after the active object.
pub fn create_from_objects(
    scene: &mut dyn SceneRegistry,
    kernel: &dyn MeshKernel,
    selection: &SelectionSnapshot,
    config: &GenerationConfig,
) -> Result<ActionReport, PipelineError> {
    let container = target_container(scene, selection)?;
    if selection.selected.is_empty() {
        return Err(PipelineError::NoSelection);
    }
    for entity in &selection.selected {
        if !entity.is_mesh() {
            return Err(PipelineError::not_a_mesh(&entity.name));
        }
    }

    let mut planner = NamePlanner::new(scene, container);
    let mut pending = Vec::new();

    if config.mode == GenerationMode::BoundingBox && config.merge_boxes {
        let named_after = selection.active().unwrap_or(&selection.selected[0]);
        let merged = selection
            .selected
            .iter()
            .filter_map(|entity| Aabb::from_points(&entity.vertices))
            .reduce(|a, b| a.union(&b))
            .ok_or_else(|| PipelineError::degenerate("selection has no vertices"))?;
        pending.push(build_proxy(
            kernel,
            &mut planner,
            &named_after.name,
            &merged.corners(),
            named_after.transform,
        )?);
    } else {
        for entity in &selection.selected {
            let points = region_points(config.mode, &entity.vertices)?;
            pending.push(build_proxy(
                kernel,
                &mut planner,
                &entity.name,
                &points,
                entity.transform,
            )?);
        }
    }

    Ok(commit(scene, container, pending, config))
}

/// Creates one collision proxy from the active mesh's selected vertices.
///
/// Requires at least [`MIN_SELECTION_VERTICES`] selected vertices.
pub fn create_from_selected_vertices(
    scene: &mut dyn SceneRegistry,
    kernel: &dyn MeshKernel,
    selection: &SelectionSnapshot,
    config: &GenerationConfig,
) -> Result<ActionReport, PipelineError> {
    let container = target_container(scene, selection)?;
    let entity = active_mesh(selection)?;

    let positions = entity.selected_positions();
    if positions.len() < MIN_SELECTION_VERTICES {
        return Err(PipelineError::insufficient(
            MIN_SELECTION_VERTICES,
            positions.len(),
        ));
    }

    let mut planner = NamePlanner::new(scene, container);
    let points = region_points(config.mode, &positions)?;
    let pending = vec![build_proxy(
        kernel,
        &mut planner,
        &entity.name,
        &points,
        entity.transform,
    )?];

    Ok(commit(scene, container, pending, config))
}

/// Creates one collision proxy per eligible vertex group of the active mesh.
///
/// Eligibility follows the config's [`PartitionFilter`]; the explicit
/// allowlist flow supplies a filter with `allowlist` set. No eligible group
/// is a valid "nothing to do" outcome, not an error.
pub fn create_from_vertex_groups(
    scene: &mut dyn SceneRegistry,
    kernel: &dyn MeshKernel,
    selection: &SelectionSnapshot,
    config: &GenerationConfig,
) -> Result<ActionReport, PipelineError> {
    let container = target_container(scene, selection)?;
    let entity = active_mesh(selection)?;

    let mut planner = NamePlanner::new(scene, container);
    let mut pending = Vec::new();
    let mut merged: Option<Aabb> = None;

    for (index, group) in entity.groups.iter().enumerate() {
        if !config.filter.admits(group) {
            debug!(group = %group.name, "group filtered out");
            continue;
        }
        let positions = entity.group_positions(index as u32);
        if config.mode == GenerationMode::BoundingBox && config.merge_boxes {
            if let Some(aabb) = Aabb::from_points(&positions) {
                merged = Some(match merged {
                    Some(total) => total.union(&aabb),
                    None => aabb,
                });
            }
            continue;
        }
        let points = region_points(config.mode, &positions)?;
        pending.push(build_proxy(
            kernel,
            &mut planner,
            &entity.name,
            &points,
            entity.transform,
        )?);
    }

    if let Some(total) = merged {
        pending.push(build_proxy(
            kernel,
            &mut planner,
            &entity.name,
            &total.corners(),
            entity.transform,
        )?);
    }

    Ok(commit(scene, container, pending, config))
}

/// Strips host dedup suffixes from every entity in the target container.
///
/// Conflicting renames are skipped and aggregated into the outcome's
/// conflict count; the pass itself never fails once the container resolves.
pub fn clean_names(
    scene: &mut dyn SceneRegistry,
    selection: &SelectionSnapshot,
) -> Result<CleanOutcome, PipelineError> {
    let container = target_container(scene, selection)?;

    let names = scene.entity_names(container);
    let plan = ucx_naming::clean_names(names.iter().map(String::as_str));

    let mut outcome = CleanOutcome {
        renamed: 0,
        conflicts: plan.conflicts,
    };
    for (old, new) in &plan.renames {
        if scene.rename_entity(container, old, new) {
            debug!(%old, %new, "cleaned entity name");
            outcome.renamed += 1;
        } else {
            // The registry can refuse for reasons the plan cannot see,
            // e.g. names reserved outside this container
            outcome.conflicts += 1;
        }
    }
    if outcome.conflicts > 0 {
        warn!(conflicts = outcome.conflicts, "cleanup left names untouched");
    }
    Ok(outcome)
}

/// Computes a new auto-named vertex group over the selected vertices.
///
/// The pipeline only plans the assignment; vertex groups live on the host
/// mesh, so the host applies it.
pub fn assign_selection_to_group(
    selection: &SelectionSnapshot,
) -> Result<GroupAssignment, PipelineError> {
    let entity = active_mesh(selection)?;
    if entity.selected_vertices.len() < MIN_SELECTION_VERTICES {
        return Err(PipelineError::insufficient(
            MIN_SELECTION_VERTICES,
            entity.selected_vertices.len(),
        ));
    }

    let group_names: Vec<&str> = entity.groups.iter().map(|g| g.name.as_str()).collect();
    let name = next_name(&entity.name, group_names);
    info!(%name, members = entity.selected_vertices.len(), "planned vertex group");
    Ok(GroupAssignment {
        name,
        vertices: entity.selected_vertices.clone(),
    })
}

/// Quick-creates the default target container; returns its stored name.
pub fn create_container(scene: &mut dyn SceneRegistry) -> String {
    let name = scene.create_container(DEFAULT_CONTAINER_NAME);
    info!(container = %name, "created target container");
    name
}

// =============================================================================
// INTERNALS
// =============================================================================

/// Reserves sequence names against a container, including names planned
/// earlier in the same action.
struct NamePlanner {
    existing: Vec<String>,
}

impl NamePlanner {
    fn new(scene: &dyn SceneRegistry, container: &str) -> Self {
        Self {
            existing: scene.entity_names(container),
        }
    }

    fn reserve(&mut self, base_name: &str) -> String {
        let name = next_name(base_name, self.existing.iter().map(String::as_str));
        self.existing.push(name.clone());
        name
    }
}

fn target_container<'a>(
    scene: &dyn SceneRegistry,
    selection: &'a SelectionSnapshot,
) -> Result<&'a str, PipelineError> {
    let container = selection
        .container
        .as_deref()
        .ok_or(PipelineError::NoContainerSelected)?;
    if !scene.has_container(container) {
        return Err(PipelineError::NoContainerSelected);
    }
    Ok(container)
}

fn active_mesh(selection: &SelectionSnapshot) -> Result<&EntitySnapshot, PipelineError> {
    let entity = selection.active().ok_or(PipelineError::NoSelection)?;
    if !entity.is_mesh() {
        return Err(PipelineError::not_a_mesh(&entity.name));
    }
    Ok(entity)
}

/// The point set handed to the kernel for one region.
fn region_points(mode: GenerationMode, positions: &[DVec3]) -> Result<Vec<DVec3>, PipelineError> {
    match mode {
        GenerationMode::ConvexHull => Ok(positions.to_vec()),
        GenerationMode::BoundingBox => {
            let aabb = Aabb::from_points(positions)
                .ok_or_else(|| PipelineError::degenerate("region has no vertices"))?;
            Ok(aabb.corners().to_vec())
        }
    }
}

/// Runs the name/extract/hull stages for one proxy, returning it buffered.
fn build_proxy(
    kernel: &dyn MeshKernel,
    planner: &mut NamePlanner,
    base_name: &str,
    points: &[DVec3],
    transform: Transform,
) -> Result<PendingProxy, PipelineError> {
    let name = planner.reserve(base_name);
    debug!(stage = Stage::NamesComputed.as_str(), %name, "reserved proxy name");
    debug!(
        stage = Stage::GeometryExtracted.as_str(),
        points = points.len(),
        "extracted region"
    );
    let mesh = kernel.build_convex_hull(points)?;
    debug!(
        stage = Stage::HullBuilt.as_str(),
        triangles = mesh.triangle_count(),
        "hull built"
    );
    Ok(PendingProxy {
        name,
        mesh,
        transform,
    })
}

/// Links every buffered proxy and applies the visibility policy.
fn commit(
    scene: &mut dyn SceneRegistry,
    container: &str,
    pending: Vec<PendingProxy>,
    config: &GenerationConfig,
) -> ActionReport {
    let mut report = ActionReport::default();
    for proxy in pending {
        let stored = scene.link_entity(container, &proxy.name, proxy.mesh, proxy.transform);
        debug!(stage = Stage::Relinked.as_str(), name = %stored, "linked proxy");
        if stored != proxy.name {
            // The planner reserved against this container, so a rename here
            // means the registry holds names the snapshot did not show
            warn!(planned = %proxy.name, %stored, "registry deduplicated proxy name");
        }
        if config.auto_hide {
            scene.set_hidden(container, &stored, true);
        }
        info!(stage = Stage::Finalized.as_str(), container, name = %stored, "created collision proxy");
        report.created.push(stored);
    }
    report
}
