//! Build target names and suffix conventions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{TARGET_ANALYZE_SUFFIX, TARGET_COVERAGE_SUFFIX, TARGET_TEST_SUFFIX};

/// A named build/profile configuration (e.g. `Linux`, `Linux_Test`).
///
/// The trailing suffix encodes the build profile; analysis always runs
/// against the `_Analyze` form of the target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildTarget(String);

impl BuildTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Force the analysis profile: `_Test` and `_Coverage` targets map to
    /// their `_Analyze` sibling, `_Analyze` targets are kept, and plain
    /// targets get the suffix appended.
    pub fn normalize_for_analysis(&self) -> BuildTarget {
        if let Some(base) = self.0.strip_suffix(TARGET_TEST_SUFFIX) {
            return BuildTarget(format!("{base}{TARGET_ANALYZE_SUFFIX}"));
        }
        if let Some(base) = self.0.strip_suffix(TARGET_COVERAGE_SUFFIX) {
            return BuildTarget(format!("{base}{TARGET_ANALYZE_SUFFIX}"));
        }
        if self.0.ends_with(TARGET_ANALYZE_SUFFIX) {
            return self.clone();
        }
        BuildTarget(format!("{}{TARGET_ANALYZE_SUFFIX}", self.0))
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
