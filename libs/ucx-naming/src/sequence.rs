//! # Sequential Naming
//!
//! Computes the next available name in the `UCX_<name>_<NN>` sequence.

use config::constants::{RESERVED_PREFIX, SUFFIX_WIDTH};

/// Returns the next available collision proxy name for `base_name`.
///
/// Scans `existing_names` for members of the sequence
/// `UCX_<base_name>_<NN>` and instantiates the pattern with the maximum
/// suffix found plus one, zero-padded to two digits. When nothing matches,
/// the sequence starts at `00`.
///
/// Suffixes past `99` widen to three (or more) digits instead of wrapping;
/// the scan accepts widened suffixes so the sequence keeps advancing once
/// it has grown.
///
/// # Example
///
/// ```rust
/// use ucx_naming::next_name;
///
/// assert_eq!(next_name("Wall", []), "UCX_Wall_00");
/// assert_eq!(next_name("Wall", ["UCX_Wall_00", "UCX_Wall_05"]), "UCX_Wall_06");
/// // Non-matching names are ignored
/// assert_eq!(next_name("Wall", ["Floor_00", "UCX_Floor_09"]), "UCX_Wall_00");
/// ```
pub fn next_name<'a, I>(base_name: &str, existing_names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let next = match max_suffix(base_name, existing_names) {
        Some(max) => max + 1,
        None => 0,
    };
    format!("{RESERVED_PREFIX}{base_name}_{next:0width$}", width = SUFFIX_WIDTH)
}

/// Largest numeric suffix among names in the `UCX_<base_name>_<NN>` sequence,
/// or `None` when no name matches.
fn max_suffix<'a, I>(base_name: &str, existing_names: I) -> Option<u64>
where
    I: IntoIterator<Item = &'a str>,
{
    existing_names
        .into_iter()
        .filter_map(|name| sequence_suffix(base_name, name))
        .max()
}

/// Parses `name` as a member of the sequence for `base_name`.
///
/// The name must be exactly the reserved prefix, the base name, an
/// underscore, and a run of at least [`SUFFIX_WIDTH`] ASCII digits.
fn sequence_suffix(base_name: &str, name: &str) -> Option<u64> {
    let rest = name.strip_prefix(RESERVED_PREFIX)?;
    let rest = rest.strip_prefix(base_name)?;
    let digits = rest.strip_prefix('_')?;
    if digits.len() < SUFFIX_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

// =============================================================================
// TESTS
// =============================================================================
