//! Test discovery and run errors.

use std::path::PathBuf;

use super::error_code::{self, PreflightErrorCode};

/// Errors raised while discovering tests or preparing the run.
///
/// Individual test failures are never errors; they are aggregated outcomes.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Cannot walk {path}: {source}")]
    WalkFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create {path}: {source}")]
    SetupFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot open summary report {path}: {source}")]
    SummaryUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PreflightErrorCode for DiscoveryError {
    fn error_code(&self) -> &'static str {
        error_code::DISCOVERY_ERROR
    }
}
