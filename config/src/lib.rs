//! # Config Crate
//!
//! Centralized configuration constants for the UCX collision pipeline.
//! All naming conventions and tunable thresholds are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{RESERVED_PREFIX, DEFAULT_MIN_VERTEX_COUNT};
//!
//! // The engine import pipeline pairs collision proxies by this prefix
//! let name = format!("{}Crate_00", RESERVED_PREFIX);
//! assert!(name.starts_with("UCX_"));
//!
//! // Vertex groups must carry strictly more members than the threshold
//! let member_count = 3;
//! assert!(member_count > DEFAULT_MIN_VERTEX_COUNT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine Compatible**: Naming defaults match the FBX import pipeline
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
