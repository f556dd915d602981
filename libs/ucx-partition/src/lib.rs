//! # UCX Partition
//!
//! Vertex-group partition selection for collision generation.
//!
//! A mesh is partitioned into named regions through its vertex groups; this
//! crate decides which groups are eligible for collision generation and
//! resolves a group to the set of vertex indices it contains. Both halves
//! are pure reads of the snapshot handed in; the mesh is never mutated.
//!
//! ## Usage
//!
//! ```rust
//! use ucx_partition::{eligible_groups, PartitionFilter, VertexGroup};
//!
//! let groups = vec![
//!     VertexGroup::new("UCX_Hull_00", 12),
//!     VertexGroup::new("Weights", 200),
//! ];
//! let filter = PartitionFilter::default();
//!
//! let eligible = eligible_groups(&groups, &filter);
//! assert_eq!(eligible.len(), 1);
//! assert_eq!(eligible[0].name, "UCX_Hull_00");
//! ```

pub mod filter;
pub mod membership;

pub use filter::{eligible_groups, PartitionFilter, VertexGroup};
pub use membership::{group_vertex_counts, partition_vertices, MembershipMap};
