//! Per-run collaborator bundle.
//!
//! The databases cache state that must never leak between sequential test
//! runs in one process. Rather than a global reset call, every run gets a
//! freshly constructed context; discarding it is the reset.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::EngineConfig;
use crate::database::{JsonSourceDatabase, JsonTargetDatabase, SourceDatabase, TargetDatabase};
use crate::engine::{BuildEngine, RedoEngine};

/// The external collaborators one orchestration run works against.
pub struct BuildContext {
    pub engine: Box<dyn BuildEngine>,
    pub source_db: Box<dyn SourceDatabase>,
    pub target_db: Box<dyn TargetDatabase>,
}

/// Constructs a fresh [`BuildContext`] per run.
pub trait ContextFactory {
    fn fresh_context(&self) -> BuildContext;
}

/// Production factory: redo engine plus JSON-snapshot databases.
///
/// Re-reading the snapshots on every call is deliberate — a sub-build may
/// have rewritten them, and stale lookups must not survive into the next
/// run.
pub struct SnapshotContextFactory {
    config: EngineConfig,
    base: PathBuf,
    safe_compile: bool,
}

impl SnapshotContextFactory {
    pub fn new(config: EngineConfig, base: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base: base.into(),
            safe_compile: false,
        }
    }

    /// See [`RedoEngine::with_safe_compile`].
    pub fn with_safe_compile(mut self, safe_compile: bool) -> Self {
        self.safe_compile = safe_compile;
        self
    }

    fn load_source_db(&self, path: &Path) -> JsonSourceDatabase {
        match JsonSourceDatabase::load(path) {
            Ok(db) => db,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "source snapshot unavailable");
                JsonSourceDatabase::empty()
            }
        }
    }

    fn load_target_db(&self, path: &Path) -> JsonTargetDatabase {
        match JsonTargetDatabase::load(path) {
            Ok(db) => db,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "target snapshot unavailable");
                JsonTargetDatabase::empty()
            }
        }
    }
}

impl ContextFactory for SnapshotContextFactory {
    fn fresh_context(&self) -> BuildContext {
        let engine =
            RedoEngine::from_config(&self.config).with_safe_compile(self.safe_compile);
        let source_db = self.load_source_db(&self.config.effective_source_db(&self.base));
        let target_db = self.load_target_db(&self.config.effective_target_db(&self.base));
        BuildContext {
            engine: Box::new(engine),
            source_db: Box::new(source_db),
            target_db: Box::new(target_db),
        }
    }
}
