//! Isolated staging directory population.
//!
//! The analyzer scans whole directories, not file lists, so every run gets
//! a staging directory populated with exactly the closure and nothing else.
//! A stale staging directory is deleted and rebuilt unconditionally rather
//! than incrementally updated.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use preflight_core::errors::AnalyzeError;
use preflight_core::types::SourceSet;

/// Delete and recreate `staging_dir`, then copy every closure member into
/// it flat, named by base name only.
///
/// Base-name collisions are not detected; unit names are assumed unique
/// per project.
pub fn stage_closure(staging_dir: &Path, closure: &SourceSet) -> Result<(), AnalyzeError> {
    if staging_dir.exists() {
        fs::remove_dir_all(staging_dir).map_err(|source| AnalyzeError::StagingFailed {
            path: staging_dir.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir_all(staging_dir).map_err(|source| AnalyzeError::StagingFailed {
        path: staging_dir.to_path_buf(),
        source,
    })?;

    for file in closure.to_sorted_vec() {
        let Some(name) = file.file_name() else {
            continue;
        };
        fs::copy(&file, staging_dir.join(name)).map_err(|source| {
            AnalyzeError::StagingFailed {
                path: file.clone(),
                source,
            }
        })?;
    }
    debug!(dir = %staging_dir.display(), files = closure.len(), "staged closure");
    Ok(())
}

/// The staged location of `source`: its base name under `staging_dir`.
pub fn staged_path(staging_dir: &Path, source: &Path) -> Option<PathBuf> {
    source.file_name().map(|name| staging_dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_replaces_stale_contents() {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("src");
        fs::create_dir_all(&staging).unwrap();
        fs::write(staging.join("stale.ads"), "stale").unwrap();

        let source = dir.path().join("comp.ads");
        fs::write(&source, "package Comp is end Comp;").unwrap();
        let mut closure = SourceSet::new();
        closure.insert(&source);

        stage_closure(&staging, &closure).unwrap();
        assert!(staging.join("comp.ads").exists());
        assert!(!staging.join("stale.ads").exists());
    }

    #[test]
    fn test_staged_path_uses_base_name() {
        assert_eq!(
            staged_path(Path::new("/staging/src"), Path::new("/proj/comp/comp.ads")),
            Some(PathBuf::from("/staging/src/comp.ads"))
        );
    }
}
