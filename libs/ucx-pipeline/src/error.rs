//! # Pipeline Errors
//!
//! Error types for collision generation actions.
//!
//! Every error is a user-visible, non-fatal status: an action either
//! completes and links its proxies, or returns one of these and leaves the
//! scene untouched.

use thiserror::Error;

/// Errors that can occur while running a generation action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// No active entity in the selection snapshot.
    #[error("No object selected")]
    NoSelection,

    /// The targeted entity is not a mesh.
    #[error("Selected object is not a mesh: {name}")]
    NotAMesh { name: String },

    /// Fewer vertices than the operation requires.
    #[error("Insufficient vertices: need at least {required}, found {actual}")]
    InsufficientVertices { required: usize, actual: usize },

    /// No target container configured, or the configured one is gone.
    #[error("No collection selected")]
    NoContainerSelected,

    /// Hull construction impossible for the extracted geometry.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Cleanup could not disambiguate some names.
    #[error("Renaming failed for {failed} objects, names already taken")]
    RenameConflict { failed: usize },
}

/// How a status message should be presented by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Surfaced as a warning banner; the action still completed.
    Warning,
    /// Surfaced as an error; the scene was left unchanged.
    Error,
}

impl PipelineError {
    /// Creates a not-a-mesh error for the named entity.
    pub fn not_a_mesh(name: impl Into<String>) -> Self {
        Self::NotAMesh { name: name.into() }
    }

    /// Creates an insufficient-vertices error.
    pub fn insufficient(required: usize, actual: usize) -> Self {
        Self::InsufficientVertices { required, actual }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Presentation severity for the UI layer.
    ///
    /// Rename conflicts are aggregated warnings; everything else aborts
    /// the action.
    pub fn severity(&self) -> Severity {
        match self {
            Self::RenameConflict { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PipelineError::insufficient(3, 1);
        assert!(err.to_string().contains("at least 3"));
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn test_rename_conflict_is_warning() {
        assert_eq!(
            PipelineError::RenameConflict { failed: 2 }.severity(),
            Severity::Warning
        );
        assert_eq!(PipelineError::NoSelection.severity(), Severity::Error);
    }
}
