//! Crash-durable summary reporting.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use preflight_core::config::RunnerConfig;
use preflight_core::errors::DiscoveryError;

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const NO_COLOR: &str = "\x1b[0m";

/// Duplicates every line to the diagnostic stream and the summary file,
/// flushing after each write so a killed run leaves a readable prefix.
pub struct SummaryWriter {
    file: File,
    use_color: bool,
    width: usize,
}

impl SummaryWriter {
    /// Open (truncate) the summary file at `path`.
    pub fn create(path: &Path, config: &RunnerConfig) -> Result<Self, DiscoveryError> {
        let file = File::create(path).map_err(|source| DiscoveryError::SummaryUnwritable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            file,
            use_color: config.effective_use_color(),
            width: config.effective_column_width(),
        })
    }

    /// Write one full line.
    pub fn line(&mut self, text: &str) {
        self.write_both(text);
        self.write_both("\n");
        self.flush();
    }

    /// Start a per-test progress row: the numbered relative path, truncated
    /// and padded to the configured column width.
    pub fn begin_row(&mut self, text: &str) {
        let truncated: String = text.chars().take(self.width).collect();
        self.write_both(&format!("{:<w$}   ", truncated, w = self.width));
        self.flush();
    }

    /// Finish a progress row with a pass/fail marker.
    pub fn finish_row(&mut self, passed: bool) {
        let marker = self.marker(passed);
        self.write_both(&format!(" {marker}\n"));
        self.flush();
    }

    fn marker(&self, passed: bool) -> String {
        let (word, color) = if passed {
            ("PASSED", GREEN)
        } else {
            ("FAILED", RED)
        };
        if self.use_color {
            format!("{BOLD}{color}{word}{NO_COLOR}")
        } else {
            word.to_string()
        }
    }

    fn write_both(&mut self, text: &str) {
        eprint!("{text}");
        let _ = self.file.write_all(text.as_bytes());
    }

    fn flush(&mut self) {
        let _ = std::io::stderr().flush();
        let _ = self.file.flush();
    }
}
