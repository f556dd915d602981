//! # Group Membership
//!
//! Vertex-to-group membership relation and the pure filters over it.

use serde::{Deserialize, Serialize};

/// Per-vertex group membership for one mesh.
///
/// Row `v` holds the group indices vertex `v` belongs to (zero or more).
/// This mirrors the host's per-vertex weight table with the weights
/// dropped; collision generation only needs the relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipMap {
    rows: Vec<Vec<u32>>,
}

impl MembershipMap {
    /// Creates an empty relation (no vertices).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a relation for `vertex_count` vertices with no memberships.
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds the relation from explicit per-vertex rows.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        Self { rows }
    }

    /// Number of vertices covered by the relation.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Records vertex `vertex` as a member of group `group`.
    ///
    /// Rows grow on demand; repeated assignments are collapsed.
    pub fn assign(&mut self, vertex: u32, group: u32) {
        let index = vertex as usize;
        if index >= self.rows.len() {
            self.rows.resize(index + 1, Vec::new());
        }
        let row = &mut self.rows[index];
        if !row.contains(&group) {
            row.push(group);
        }
    }

    /// Group indices vertex `vertex` belongs to.
    pub fn groups_of(&self, vertex: u32) -> &[u32] {
        self.rows
            .get(vertex as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Returns the vertex indices belonging to `group_index`, ascending.
///
/// A pure filter over the membership relation; an unknown group index
/// simply yields an empty set.
///
/// # Example
///
/// ```rust
/// use ucx_partition::{partition_vertices, MembershipMap};
///
/// let map = MembershipMap::from_rows(vec![
///     vec![0],    // vertex 0 in group 0
///     vec![],     // vertex 1 in no group
///     vec![0, 1], // vertex 2 in groups 0 and 1
/// ]);
/// assert_eq!(partition_vertices(&map, 0), vec![0, 2]);
/// assert_eq!(partition_vertices(&map, 7), Vec::<u32>::new());
/// ```
pub fn partition_vertices(map: &MembershipMap, group_index: u32) -> Vec<u32> {
    (0..map.vertex_count() as u32)
        .filter(|vertex| map.groups_of(*vertex).contains(&group_index))
        .collect()
}

/// Derives the member vertex count of every group in a single pass.
///
/// Returns one count per group index in `0..group_count`; memberships
/// referring past `group_count` are ignored.
pub fn group_vertex_counts(map: &MembershipMap, group_count: usize) -> Vec<u32> {
    let mut counts = vec![0u32; group_count];
    for vertex in 0..map.vertex_count() as u32 {
        for group in map.groups_of(vertex) {
            if let Some(count) = counts.get_mut(*group as usize) {
                *count += 1;
            }
        }
    }
    counts
}

// =============================================================================
// TESTS
// =============================================================================
