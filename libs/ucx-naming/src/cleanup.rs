//! # Name Cleanup
//!
//! Strips the `.NNN` suffixes the host's scene registry appends when a
//! rename collides with an existing entity.

use std::collections::HashSet;

use config::constants::DEDUP_SUFFIX_WIDTH;

/// Planned renames for one cleanup pass over a container.
///
/// Conflicts are counted, not raised: a rename whose cleaned target is
/// already taken by another entity in the container stays as-is and bumps
/// `conflicts`. The caller surfaces the count once as a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanPlan {
    /// `(old, new)` pairs, in container order, safe to apply in order.
    pub renames: Vec<(String, String)>,
    /// Number of names whose cleaned form was already taken.
    pub conflicts: usize,
}

impl CleanPlan {
    /// Returns true when the pass found nothing to rename and no conflicts.
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty() && self.conflicts == 0
    }
}

/// Strips trailing `.NNN` dedup suffixes from a name.
///
/// Suffixes are stripped repeatedly so the operation is idempotent even on
/// stacked suffixes; a name without one is returned unchanged.
///
/// # Example
///
/// ```rust
/// use ucx_naming::clean_suffix;
///
/// assert_eq!(clean_suffix("Thing.003"), "Thing");
/// assert_eq!(clean_suffix("Thing.001.002"), "Thing");
/// assert_eq!(clean_suffix("Thing"), "Thing");
/// // Only exactly-three-digit tails qualify
/// assert_eq!(clean_suffix("Mesh.12"), "Mesh.12");
/// ```
pub fn clean_suffix(name: &str) -> &str {
    let mut cleaned = name;
    while let Some(stripped) = strip_one_suffix(cleaned) {
        cleaned = stripped;
    }
    cleaned
}

/// Strips a single trailing `.NNN` suffix, if present.
fn strip_one_suffix(name: &str) -> Option<&str> {
    let bytes = name.as_bytes();
    if bytes.len() <= DEDUP_SUFFIX_WIDTH + 1 {
        return None;
    }
    let split = bytes.len() - (DEDUP_SUFFIX_WIDTH + 1);
    if bytes[split] != b'.' || !bytes[split + 1..].iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(&name[..split])
}

/// Plans a cleanup pass over the names of one container.
///
/// For each name whose cleaned form differs, the rename is planned unless
/// the cleaned form is already carried by another entity (or claimed by an
/// earlier planned rename), in which case it is counted as a conflict.
///
/// # Example
///
/// ```rust
/// use ucx_naming::clean_names;
///
/// let plan = clean_names(["UCX_Wall_00.001", "UCX_Wall_01"]);
/// assert_eq!(plan.renames, vec![("UCX_Wall_00.001".into(), "UCX_Wall_00".into())]);
/// assert_eq!(plan.conflicts, 0);
/// ```
pub fn clean_names<'a, I>(names: I) -> CleanPlan
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&str> = names.into_iter().collect();
    let mut current: HashSet<&str> = names.iter().copied().collect();
    let mut plan = CleanPlan::default();

    for name in &names {
        let cleaned = clean_suffix(name);
        if cleaned == *name {
            continue;
        }
        if current.contains(cleaned) {
            plan.conflicts += 1;
            continue;
        }
        current.remove(*name);
        current.insert(cleaned);
        plan.renames.push((name.to_string(), cleaned.to_string()));
    }

    plan
}

// =============================================================================
// TESTS
// =============================================================================
