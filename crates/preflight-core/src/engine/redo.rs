//! redo-backed build engine client.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::EngineConfig;
use crate::constants::{ENV_DEBUG, ENV_SAFE_COMPILE};
use crate::errors::EngineError;

use super::BuildEngine;

/// Build engine client that shells out to the redo binaries.
#[derive(Debug, Clone)]
pub struct RedoEngine {
    redo_bin: String,
    redo_ifchange_bin: String,
    safe_compile: bool,
}

impl RedoEngine {
    pub fn new(redo_bin: impl Into<String>, redo_ifchange_bin: impl Into<String>) -> Self {
        Self {
            redo_bin: redo_bin.into(),
            redo_ifchange_bin: redo_ifchange_bin.into(),
            safe_compile: false,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.effective_redo_bin(),
            config.effective_redo_ifchange_bin(),
        )
    }

    /// Force compilation of both halves of every unit in every engine
    /// invocation. The analyzer examines specifications and bodies alike,
    /// which fast compilation does not guarantee to have built.
    pub fn with_safe_compile(mut self, safe_compile: bool) -> Self {
        self.safe_compile = safe_compile;
        self
    }

    fn apply_safe_compile(&self, command: &mut Command) {
        if self.safe_compile {
            command.env(ENV_SAFE_COMPILE, "True");
        }
    }
}

impl BuildEngine for RedoEngine {
    fn ensure_fresh(&self, inputs: &[PathBuf]) -> Result<(), EngineError> {
        if inputs.is_empty() {
            return Ok(());
        }
        debug!(count = inputs.len(), "rebuilding declared inputs");
        let mut command = Command::new(&self.redo_ifchange_bin);
        command.args(inputs);
        self.apply_safe_compile(&mut command);
        let status = command
            .status()
            .map_err(|source| EngineError::Spawn {
                program: self.redo_ifchange_bin.clone(),
                source,
            })?;
        if !status.success() {
            return Err(EngineError::RebuildFailed {
                status: status.code().unwrap_or(1),
            });
        }
        Ok(())
    }

    fn run_sub_build(&self, target: &Path, stderr_log: &Path) -> Result<(), EngineError> {
        let log = File::create(stderr_log).map_err(|source| EngineError::Io {
            program: self.redo_bin.clone(),
            source,
        })?;
        debug!(target = %target.display(), "running sub-build");
        // Debug chatter on the diagnostic stream is incompatible with the
        // tabular test report, so the child never sees DEBUG.
        let mut command = Command::new(&self.redo_bin);
        command
            .arg(target)
            .env_remove(ENV_DEBUG)
            .stdout(Stdio::inherit())
            .stderr(Stdio::from(log));
        self.apply_safe_compile(&mut command);
        let status = command
            .status()
            .map_err(|source| EngineError::Spawn {
                program: self.redo_bin.clone(),
                source,
            })?;
        if !status.success() {
            return Err(EngineError::SubBuildFailed {
                target: target.to_path_buf(),
                status: status.code().unwrap_or(1),
            });
        }
        Ok(())
    }
}
