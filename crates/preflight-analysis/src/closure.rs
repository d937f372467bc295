//! Transitive dependency closure.

use std::path::{Path, PathBuf};

use tracing::debug;

use preflight_core::config::AnalyzeConfig;
use preflight_core::context::BuildContext;
use preflight_core::errors::AnalyzeError;
use preflight_core::types::{BuildTarget, SourceSet};

/// A saturated dependency closure plus the descriptor it was built against.
#[derive(Debug)]
pub struct ClosureResult {
    /// Every file needed to compile the starting sources; superset of the
    /// input, including the project descriptor and the orchestrator itself.
    pub closure: SourceSet,
    /// The target's project descriptor file.
    pub descriptor: PathBuf,
}

/// Compute the full transitive set of files needed to compile `sources`.
///
/// The seed is the starting sources plus the target's project descriptor
/// and the running orchestrator binary, so the operation invalidates
/// itself when its own logic changes. The seed is handed to the build
/// engine as declared inputs (blocking), then the source database is
/// consulted hop by hop until no new source is discovered — the only
/// iteration bound is the dependency graph's depth.
pub fn build_closure(
    sources: &SourceSet,
    target: &BuildTarget,
    base: &Path,
    config: &AnalyzeConfig,
    ctx: &BuildContext,
) -> Result<ClosureResult, AnalyzeError> {
    let descriptor = config.descriptor_path(base, target);
    if !descriptor.exists() {
        return Err(AnalyzeError::DescriptorNotFound {
            target: target.as_str().to_string(),
            path: descriptor,
        });
    }

    let mut closure = sources.clone();
    closure.insert(descriptor.clone());
    if let Ok(own_binary) = std::env::current_exe() {
        closure.insert(own_binary);
    }

    ctx.engine.ensure_fresh(&closure.to_sorted_vec())?;

    // Saturate: keep expanding until no new source is discovered.
    let mut worklist: Vec<PathBuf> = sources.iter().cloned().collect();
    while let Some(source) = worklist.pop() {
        for dep in ctx.source_db.direct_dependencies(&source)? {
            if closure.insert(dep.clone()) {
                worklist.push(dep);
            }
        }
    }

    debug!(
        start = sources.len(),
        closed = closure.len(),
        "dependency closure saturated"
    );
    Ok(ClosureResult { closure, descriptor })
}
