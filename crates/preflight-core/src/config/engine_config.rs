//! Build-engine and database configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the build-engine client and database snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Build-engine binary for sub-builds. Default: "redo".
    pub redo_bin: Option<String>,
    /// Build-engine binary for declared-input rebuilds. Default: "redo-ifchange".
    pub redo_ifchange_bin: Option<String>,
    /// Source database snapshot, relative to the invocation directory.
    /// Default: `build/db/source_db.json`.
    pub source_db: Option<PathBuf>,
    /// Target database snapshot, relative to the invocation directory.
    /// Default: `build/db/target_db.json`.
    pub target_db: Option<PathBuf>,
}

impl EngineConfig {
    /// Returns the effective sub-build binary.
    pub fn effective_redo_bin(&self) -> &str {
        self.redo_bin.as_deref().unwrap_or("redo")
    }

    /// Returns the effective declared-input rebuild binary.
    pub fn effective_redo_ifchange_bin(&self) -> &str {
        self.redo_ifchange_bin.as_deref().unwrap_or("redo-ifchange")
    }

    /// Returns the effective source database snapshot path under `base`.
    pub fn effective_source_db(&self, base: &Path) -> PathBuf {
        match &self.source_db {
            Some(p) => base.join(p),
            None => base.join("build").join("db").join("source_db.json"),
        }
    }

    /// Returns the effective target database snapshot path under `base`.
    pub fn effective_target_db(&self, base: &Path) -> PathBuf {
        match &self.target_db {
            Some(p) => base.join(p),
            None => base.join("build").join("db").join("target_db.json"),
        }
    }
}
