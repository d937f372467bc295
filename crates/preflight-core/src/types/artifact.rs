//! Build artifacts: objects and linkable binaries.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{BINARY_SUFFIX, OBJECT_SUFFIX};

use super::build_target::BuildTarget;

/// The kind of build output an artifact path denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// A compiled object (`.o`).
    Object,
    /// A linkable executable (`.elf`).
    Binary,
}

/// A build output with a path.
///
/// Artifacts live under `<dir>/build/{obj,bin}/<target>/<file>`, so both
/// the originating unit and the build target are derivable from the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artifact {
    path: PathBuf,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> Option<ArtifactKind> {
        let name = self.path.to_str()?;
        if name.ends_with(OBJECT_SUFFIX) {
            Some(ArtifactKind::Object)
        } else if name.ends_with(BINARY_SUFFIX) {
            Some(ArtifactKind::Binary)
        } else {
            None
        }
    }

    /// Derive the originating unit name from the artifact's file name.
    ///
    /// `foo-bar_baz.o` comes from unit `foo.bar_baz`: the stem is
    /// lower-cased and the child-package separator `-` becomes `.`.
    pub fn unit_name(&self) -> Option<String> {
        let stem = self.path.file_stem()?.to_str()?;
        if stem.is_empty() {
            return None;
        }
        Some(stem.to_lowercase().replace('-', "."))
    }

    /// Extract the build target from the artifact path: the component that
    /// follows `build/obj/` or `build/bin/`.
    pub fn build_target(&self) -> Option<BuildTarget> {
        let mut components = self.path.components().peekable();
        while let Some(component) = components.next() {
            if component != Component::Normal("build".as_ref()) {
                continue;
            }
            match components.peek() {
                Some(Component::Normal(kind))
                    if kind.to_str().is_some_and(|k| k == "obj" || k == "bin") =>
                {
                    components.next();
                }
                _ => continue,
            }
            if let Some(Component::Normal(target)) = components.next() {
                // The target component must not be the artifact file itself.
                if components.peek().is_some() {
                    return Some(BuildTarget::new(target.to_str()?));
                }
            }
            return None;
        }
        None
    }
}
