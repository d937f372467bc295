//! Core data model: artifacts, build targets, dedup source sets.

mod artifact;
mod build_target;
mod source_set;

use std::path::Path;

use crate::constants::{BODY_SUFFIX, SPEC_SUFFIX};

pub use artifact::{Artifact, ArtifactKind};
pub use build_target::BuildTarget;
pub use source_set::SourceSet;

/// True if `path` is an analyzable source file (specification or body).
pub fn is_analyzable_source(path: &Path) -> bool {
    match path.to_str() {
        Some(s) => s.ends_with(SPEC_SUFFIX) || s.ends_with(BODY_SUFFIX),
        None => false,
    }
}
