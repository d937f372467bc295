//! Test runner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::ENV_NO_COLOR;

/// Configuration for the test discovery and isolation runner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunnerConfig {
    /// Disable colorized pass/fail markers. The `PREFLIGHT_NO_COLOR`
    /// environment variable also disables them when set non-empty.
    pub no_color: Option<bool>,
    /// Column width for the per-test progress rows. Default: 80.
    pub column_width: Option<usize>,
}

impl RunnerConfig {
    /// Returns true if colorized markers should be used.
    pub fn effective_use_color(&self) -> bool {
        if matches!(std::env::var(ENV_NO_COLOR), Ok(v) if !v.is_empty()) {
            return false;
        }
        !self.no_color.unwrap_or(false)
    }

    /// Returns the effective progress row width.
    pub fn effective_column_width(&self) -> usize {
        self.column_width.unwrap_or(80)
    }
}
