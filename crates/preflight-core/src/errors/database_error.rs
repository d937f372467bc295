//! Source/target database errors.

use std::path::PathBuf;

use super::error_code::{self, PreflightErrorCode};

/// Errors raised by the read-only database clients.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Database snapshot not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    #[error("Database snapshot unreadable at {path}: {source}")]
    SnapshotUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Database snapshot malformed at {path}: {message}")]
    SnapshotMalformed { path: PathBuf, message: String },

    #[error("No targets known for directory {directory}")]
    UnknownDirectory { directory: PathBuf },
}

impl PreflightErrorCode for DatabaseError {
    fn error_code(&self) -> &'static str {
        error_code::DATABASE_ERROR
    }
}
