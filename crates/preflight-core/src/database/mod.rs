//! Read-only database interfaces.
//!
//! The build engine owns and populates the source and target databases;
//! this crate only consumes them. The JSON-snapshot implementations read
//! the files the engine writes alongside the build tree.

mod json;

use std::path::{Path, PathBuf};

use crate::errors::DatabaseError;

pub use json::{JsonSourceDatabase, JsonTargetDatabase};

/// Unit-to-source and source-to-dependency lookups.
pub trait SourceDatabase {
    /// Source files that define `unit`, or `None` when the unit is unknown.
    ///
    /// An unknown unit is not an error: the artifact may originate from a
    /// different source language or a build path outside this project.
    fn sources_for_unit(&self, unit: &str) -> Option<Vec<PathBuf>>;

    /// One hop of compile-time dependencies for `source`.
    fn direct_dependencies(&self, source: &Path) -> Result<Vec<PathBuf>, DatabaseError>;
}

/// Build-directory-to-output-target lookups.
pub trait TargetDatabase {
    /// All known output targets under `dir`.
    ///
    /// Fails for unknown directories; callers treat that as "no targets".
    fn targets_for_directory(&self, dir: &Path) -> Result<Vec<PathBuf>, DatabaseError>;
}
