//! # UCX Naming
//!
//! Naming and numbering policy for collision proxies.
//!
//! The engine's FBX import pipeline pairs a collision proxy with its render
//! mesh through the pattern `UCX_<name>_<NN>`. This crate computes the next
//! free name in that sequence and undoes the `.NNN` suffixes the host's
//! scene registry appends when a rename collides.
//!
//! Both halves are pure functions of the names handed in; no scene state is
//! read or held between calls.
//!
//! ## Usage
//!
//! ```rust
//! use ucx_naming::{next_name, clean_suffix};
//!
//! let existing = ["UCX_Wall_00", "UCX_Wall_01", "Floor"];
//! assert_eq!(next_name("Wall", existing), "UCX_Wall_02");
//!
//! assert_eq!(clean_suffix("UCX_Wall_00.003"), "UCX_Wall_00");
//! ```

pub mod cleanup;
pub mod sequence;

pub use cleanup::{clean_names, clean_suffix, CleanPlan};
pub use sequence::next_name;
