//! Build-engine interface and the redo-backed implementation.
//!
//! The incremental build engine itself is an external collaborator; this
//! module consumes exactly two of its operations — "ensure these declared
//! inputs are up to date" and "run a sub-build target" — plus a logged
//! command helper for analyzer invocations.

mod redo;
mod shell;

use std::path::{Path, PathBuf};

use crate::errors::EngineError;

pub use redo::RedoEngine;
pub use shell::run_logged;

/// The two build-engine operations the orchestrator consumes.
///
/// Both calls are synchronous and blocking; suspension happens only here.
pub trait BuildEngine {
    /// Request rebuild/validation of the declared inputs. Blocking; fails
    /// if the engine cannot bring the inputs up to date.
    fn ensure_fresh(&self, inputs: &[PathBuf]) -> Result<(), EngineError>;

    /// Run the sub-build for `target`, redirecting the child's diagnostic
    /// stream to `stderr_log` while its primary output passes through.
    /// Blocking; fails on non-zero exit.
    fn run_sub_build(&self, target: &Path, stderr_log: &Path) -> Result<(), EngineError>;
}
