//! Analysis pipeline errors.

use std::path::PathBuf;

use super::database_error::DatabaseError;
use super::engine_error::EngineError;
use super::error_code::{self, PreflightErrorCode};
use super::resolve_error::ResolveError;

/// Errors raised by the analysis pipeline driver and closure builder.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Project descriptor for target {target} does not exist: {path}")]
    DescriptorNotFound { target: String, path: PathBuf },

    #[error("Failed to stage {path}: {source}")]
    StagingFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Classifier rules failed to compile: {message}")]
    InvalidRules { message: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("IO error during analysis at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PreflightErrorCode for AnalyzeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DescriptorNotFound { .. } => error_code::DESCRIPTOR_NOT_FOUND,
            Self::Resolve(e) => e.error_code(),
            Self::Engine(e) => e.error_code(),
            Self::Database(e) => e.error_code(),
            _ => error_code::ANALYZE_ERROR,
        }
    }
}
