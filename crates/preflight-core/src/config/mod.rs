//! Configuration for the preflight orchestrator.
//!
//! All fields are optional in the TOML file; `effective_*()` accessors
//! supply the defaults.

pub mod analyze_config;
pub mod engine_config;
pub mod runner_config;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use analyze_config::AnalyzeConfig;
pub use engine_config::EngineConfig;
pub use runner_config::RunnerConfig;

/// Top-level preflight configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreflightConfig {
    /// Build-engine and database locations.
    pub engine: EngineConfig,
    /// Analysis pipeline settings.
    pub analyze: AnalyzeConfig,
    /// Test runner settings.
    pub runner: RunnerConfig,
}

impl PreflightConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
