//! Build-engine errors.

use std::path::PathBuf;

use super::error_code::{self, PreflightErrorCode};

/// Errors raised by build-engine invocations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Rebuild of declared inputs failed with status {status}")]
    RebuildFailed { status: i32 },

    #[error("Sub-build of {target} failed with status {status}")]
    SubBuildFailed { target: PathBuf, status: i32 },

    #[error("IO error running {program}: {source}")]
    Io {
        program: String,
        source: std::io::Error,
    },
}

impl PreflightErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        error_code::ENGINE_ERROR
    }
}
