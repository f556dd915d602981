//! # Configuration Constants
//!
//! Centralized constants for the UCX collision pipeline. All naming
//! conventions, suffix widths, and vertex-count thresholds are defined here.
//!
//! ## Categories
//!
//! - **Naming**: Reserved prefix and suffix formatting
//! - **Thresholds**: Minimum vertex counts for generation
//! - **Containers**: Default target container naming

// =============================================================================
// NAMING CONSTANTS
// =============================================================================

/// Reserved prefix recognized by the engine's FBX import pipeline.
///
/// A collision proxy named `UCX_<render mesh name>_<NN>` is paired with the
/// render mesh of the same base name and stripped from the visual import.
///
/// # Example
///
/// ```rust
/// use config::constants::RESERVED_PREFIX;
///
/// let proxy = format!("{}Wall_00", RESERVED_PREFIX);
/// assert_eq!(proxy, "UCX_Wall_00");
/// ```
pub const RESERVED_PREFIX: &str = "UCX_";

/// Width of the zero-padded numeric suffix on generated names.
///
/// Generated names count `_00`, `_01`, ... Suffixes past `99` widen to
/// three digits rather than wrapping, so the sequence never collides.
pub const SUFFIX_WIDTH: usize = 2;

/// Width of the dot-separated suffix the host appends on name collisions.
///
/// The host's scene registry disambiguates duplicate names as `Name.001`,
/// `Name.002`, ... The cleanup pass strips exactly this shape.
pub const DEDUP_SUFFIX_WIDTH: usize = 3;

/// Default name for a quick-created target container.
pub const DEFAULT_CONTAINER_NAME: &str = "UCX_Collision_Profiles";

// =============================================================================
// THRESHOLD CONSTANTS
// =============================================================================

/// Default exclusive lower bound on a vertex group's member count.
///
/// A group is eligible for collision generation only when its member count
/// is strictly greater than this value. The default of 2 keeps any group
/// with at least 3 vertices, the minimum a hull face needs.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MIN_VERTEX_COUNT;
///
/// let eligible = |count: u32| count > DEFAULT_MIN_VERTEX_COUNT;
/// assert!(!eligible(2));
/// assert!(eligible(3));
/// ```
pub const DEFAULT_MIN_VERTEX_COUNT: u32 = 2;

/// Minimum number of selected vertices required by the vertex-subset and
/// group-assignment actions.
pub const MIN_SELECTION_VERTICES: usize = 3;

// =============================================================================
// HELPERS
// =============================================================================

/// Checks whether a name carries the reserved collision prefix.
///
/// # Example
///
/// ```rust
/// use config::constants::has_reserved_prefix;
///
/// assert!(has_reserved_prefix("UCX_Wall_00"));
/// assert!(!has_reserved_prefix("Wall"));
/// assert!(!has_reserved_prefix("Wall_UCX_00"));
/// ```
#[inline]
pub fn has_reserved_prefix(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}
