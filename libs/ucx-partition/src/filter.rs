//! # Group Eligibility
//!
//! Decides which vertex groups qualify for collision generation.

use config::constants::{has_reserved_prefix, DEFAULT_MIN_VERTEX_COUNT};
use serde::{Deserialize, Serialize};

/// A named vertex group, reduced to what collision generation reads.
///
/// The host mesh owns the full weighted group; only the name and the
/// derived member count cross into this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexGroup {
    /// Group name as shown in the host's group list.
    pub name: String,
    /// Number of vertices carrying a membership in this group.
    pub member_vertex_count: u32,
}

impl VertexGroup {
    /// Creates a group view from a name and member count.
    pub fn new(name: impl Into<String>, member_vertex_count: u32) -> Self {
        Self {
            name: name.into(),
            member_vertex_count,
        }
    }
}

/// Filter configuration for one eligibility pass.
///
/// Supplied fresh by the UI layer per invocation; all active parts combine
/// with AND semantics.
///
/// # Example
///
/// ```rust
/// use ucx_partition::PartitionFilter;
///
/// let filter = PartitionFilter {
///     prefix_only: true,
///     allowlist: Some(vec!["UCX_Door_00".to_string()]),
///     ..PartitionFilter::default()
/// };
/// assert_eq!(filter.min_vertex_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionFilter {
    /// Only admit groups whose name starts with the reserved `UCX_` prefix.
    pub prefix_only: bool,
    /// Explicit user-curated list; when present, only its members qualify.
    pub allowlist: Option<Vec<String>>,
    /// Exclusive lower bound on member count; groups must carry strictly
    /// more vertices than this.
    pub min_vertex_count: u32,
}

impl Default for PartitionFilter {
    fn default() -> Self {
        Self {
            // Matches the panel's default "UCX_ prefix only" checkbox state
            prefix_only: true,
            allowlist: None,
            min_vertex_count: DEFAULT_MIN_VERTEX_COUNT,
        }
    }
}

impl PartitionFilter {
    /// A filter with every part disabled except the count threshold.
    pub fn threshold_only(min_vertex_count: u32) -> Self {
        Self {
            prefix_only: false,
            allowlist: None,
            min_vertex_count,
        }
    }

    /// Whether `group` passes every active part of the filter.
    pub fn admits(&self, group: &VertexGroup) -> bool {
        if group.member_vertex_count <= self.min_vertex_count {
            return false;
        }
        if self.prefix_only && !has_reserved_prefix(&group.name) {
            return false;
        }
        match &self.allowlist {
            Some(list) => list.iter().any(|name| *name == group.name),
            None => true,
        }
    }
}

/// Returns the groups eligible for collision generation, in input order.
///
/// An empty result is a valid "nothing to do" outcome, not a failure.
///
/// # Example
///
/// ```rust
/// use ucx_partition::{eligible_groups, PartitionFilter, VertexGroup};
///
/// let groups = vec![
///     VertexGroup::new("UCX_A", 5),
///     VertexGroup::new("B", 10),
///     VertexGroup::new("UCX_C", 1),
/// ];
/// let filter = PartitionFilter {
///     prefix_only: true,
///     min_vertex_count: 2,
///     ..PartitionFilter::default()
/// };
///
/// let eligible = eligible_groups(&groups, &filter);
/// assert_eq!(eligible, vec![VertexGroup::new("UCX_A", 5)]);
/// ```
pub fn eligible_groups(groups: &[VertexGroup], filter: &PartitionFilter) -> Vec<VertexGroup> {
    groups
        .iter()
        .filter(|group| filter.admits(group))
        .cloned()
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
