//! Artifact-to-source resolution errors.

use std::path::PathBuf;

use super::error_code::{self, PreflightErrorCode};

/// Errors raised while mapping artifacts back to their sources.
///
/// Mixing build targets is a configuration error, not a recoverable
/// condition: analyzing sources from two different profiles would silently
/// produce findings for the wrong configuration.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("No artifacts given to resolve")]
    NoArtifacts,

    #[error("Cannot derive a build target from artifact path {artifact}")]
    MalformedArtifactPath { artifact: PathBuf },

    #[error("Artifact {artifact} has build target {found}, expected {expected}")]
    MixedTargets {
        expected: String,
        found: String,
        artifact: PathBuf,
    },
}

impl PreflightErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MixedTargets { .. } => error_code::MIXED_TARGETS,
            _ => error_code::RESOLVE_ERROR,
        }
    }
}
