//! Test target discovery.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use preflight_core::constants::{SKIP_MARKER_FILE, TEST_MARKER_FILES, VENDOR_DIR};
use preflight_core::errors::DiscoveryError;

/// The result of one discovery scan. Not mutated after discovery.
#[derive(Debug, Default)]
pub struct TestPlan {
    /// Test directories in discovery order.
    pub tests: Vec<PathBuf>,
    /// Test directories carrying a skip marker; never executed, never
    /// counted toward pass or fail totals.
    pub skipped: Vec<PathBuf>,
}

/// Recursively find every test directory at or below `root`.
///
/// A directory qualifies when it directly contains a test marker file;
/// recursion continues into qualifying directories regardless. Subtrees
/// under a vendored-package directory are never scanned. The walk is
/// sorted, so discovery order is deterministic.
pub fn discover_tests(root: &Path) -> Result<TestPlan, DiscoveryError> {
    let mut plan = TestPlan::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !(entry.file_type().is_dir() && entry.file_name().to_str() == Some(VENDOR_DIR))
        });

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            DiscoveryError::WalkFailed {
                path,
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk cycle")),
            }
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let dir = entry.path();
        if !has_test_marker(dir) {
            continue;
        }
        if dir.join(SKIP_MARKER_FILE).is_file() {
            debug!(dir = %dir.display(), "test carries a skip marker");
            plan.skipped.push(dir.to_path_buf());
        } else {
            plan.tests.push(dir.to_path_buf());
        }
    }

    Ok(plan)
}

fn has_test_marker(dir: &Path) -> bool {
    TEST_MARKER_FILES
        .iter()
        .any(|marker| dir.join(marker).is_file())
}
