//! JSON-snapshot database clients.
//!
//! The build engine serializes its unit/source/target knowledge to JSON
//! snapshot files after each build. Loading a snapshot is a point-in-time
//! read; constructing a fresh client re-reads the file, which is what makes
//! "fresh context per test" an effective cache reset.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::errors::DatabaseError;

use super::{SourceDatabase, TargetDatabase};

#[derive(Debug, Deserialize, Default)]
struct SourceSnapshot {
    /// Unit name -> source files defining it.
    #[serde(default)]
    units: FxHashMap<String, Vec<PathBuf>>,
    /// Source file -> direct compile-time dependencies.
    #[serde(default)]
    dependencies: FxHashMap<PathBuf, Vec<PathBuf>>,
}

/// Source database backed by a JSON snapshot file.
#[derive(Debug)]
pub struct JsonSourceDatabase {
    snapshot: SourceSnapshot,
}

impl JsonSourceDatabase {
    /// Load a snapshot from disk.
    pub fn load(path: &Path) -> Result<Self, DatabaseError> {
        let snapshot = read_snapshot(path)?;
        Ok(Self { snapshot })
    }

    /// An empty database, for directories that have never been built.
    pub fn empty() -> Self {
        Self {
            snapshot: SourceSnapshot::default(),
        }
    }
}

impl SourceDatabase for JsonSourceDatabase {
    fn sources_for_unit(&self, unit: &str) -> Option<Vec<PathBuf>> {
        self.snapshot.units.get(unit).cloned()
    }

    fn direct_dependencies(&self, source: &Path) -> Result<Vec<PathBuf>, DatabaseError> {
        Ok(self
            .snapshot
            .dependencies
            .get(source)
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Debug, Deserialize, Default)]
struct TargetSnapshot {
    /// Build directory -> output targets producible under it.
    #[serde(default)]
    directories: FxHashMap<PathBuf, Vec<PathBuf>>,
}

/// Target database backed by a JSON snapshot file.
#[derive(Debug)]
pub struct JsonTargetDatabase {
    snapshot: TargetSnapshot,
}

impl JsonTargetDatabase {
    /// Load a snapshot from disk.
    pub fn load(path: &Path) -> Result<Self, DatabaseError> {
        let snapshot = read_snapshot(path)?;
        Ok(Self { snapshot })
    }

    /// An empty database, for directories that have never been built.
    pub fn empty() -> Self {
        Self {
            snapshot: TargetSnapshot::default(),
        }
    }
}

impl TargetDatabase for JsonTargetDatabase {
    fn targets_for_directory(&self, dir: &Path) -> Result<Vec<PathBuf>, DatabaseError> {
        self.snapshot
            .directories
            .get(dir)
            .cloned()
            .ok_or_else(|| DatabaseError::UnknownDirectory {
                directory: dir.to_path_buf(),
            })
    }
}

fn read_snapshot<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, DatabaseError> {
    if !path.exists() {
        return Err(DatabaseError::SnapshotNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|source| DatabaseError::SnapshotUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|e| DatabaseError::SnapshotMalformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_source_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"units": {{"comp": ["/src/comp.ads", "/src/comp.adb"]}},
                "dependencies": {{"/src/comp.adb": ["/src/util.ads"]}}}}"#
        )
        .unwrap();

        let db = JsonSourceDatabase::load(file.path()).unwrap();
        assert_eq!(
            db.sources_for_unit("comp"),
            Some(vec![
                PathBuf::from("/src/comp.ads"),
                PathBuf::from("/src/comp.adb")
            ])
        );
        assert_eq!(db.sources_for_unit("missing"), None);
        assert_eq!(
            db.direct_dependencies(Path::new("/src/comp.adb")).unwrap(),
            vec![PathBuf::from("/src/util.ads")]
        );
    }

    #[test]
    fn test_unknown_directory_is_an_error() {
        let db = JsonTargetDatabase::empty();
        assert!(db.targets_for_directory(Path::new("/nowhere")).is_err());
    }

    #[test]
    fn test_missing_snapshot() {
        let err = JsonSourceDatabase::load(Path::new("/no/such/snapshot.json")).unwrap_err();
        assert!(matches!(err, DatabaseError::SnapshotNotFound { .. }));
    }
}
