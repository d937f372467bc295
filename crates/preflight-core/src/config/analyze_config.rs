//! Analysis pipeline configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::ENV_ANALYZE_MODE;
use crate::types::BuildTarget;

/// Configuration for the static-analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyzeConfig {
    /// Analyzer binary. Default: "gnatsas".
    pub analyzer_bin: Option<String>,
    /// Root under which per-run staging directories are created.
    /// Default: `$HOME/.gnatsas`; the analyzer runs fastest against a
    /// native local directory.
    pub staging_root: Option<PathBuf>,
    /// Directory holding per-target project descriptors, relative to the
    /// invocation directory. Default: `targets`.
    pub descriptor_dir: Option<PathBuf>,
    /// Analyzer depth mode (e.g. "deep"). The `PREFLIGHT_ANALYZE_MODE`
    /// environment variable overrides this when set.
    pub mode: Option<String>,
}

impl AnalyzeConfig {
    /// Returns the effective analyzer binary.
    pub fn effective_analyzer_bin(&self) -> &str {
        self.analyzer_bin.as_deref().unwrap_or("gnatsas")
    }

    /// Returns the effective staging root.
    pub fn effective_staging_root(&self) -> PathBuf {
        if let Some(root) = &self.staging_root {
            return root.clone();
        }
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".gnatsas"),
            None => PathBuf::from(".gnatsas"),
        }
    }

    /// Returns the project descriptor path for `target` under `base`.
    pub fn descriptor_path(&self, base: &Path, target: &BuildTarget) -> PathBuf {
        let dir = self.descriptor_dir.as_deref().unwrap_or(Path::new("targets"));
        base.join(dir)
            .join(format!("{}.gpr", target.as_str().to_lowercase()))
    }

    /// Returns the effective analyzer mode: environment override first,
    /// then the configured value.
    pub fn effective_mode(&self) -> Option<String> {
        match std::env::var(ENV_ANALYZE_MODE) {
            Ok(mode) if !mode.is_empty() => Some(mode),
            _ => self.mode.clone(),
        }
    }
}
