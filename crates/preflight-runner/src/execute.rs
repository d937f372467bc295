//! Isolated sequential test execution.

use std::fs;
use std::path::{Path, MAIN_SEPARATOR};

use tracing::{debug, info};

use preflight_core::config::RunnerConfig;
use preflight_core::constants::{
    BUILD_DIR, FAILED_TEST_LOG_SUBDIR, TEST_LOG_SUBDIR, TEST_SUMMARY_FILE,
};
use preflight_core::context::ContextFactory;
use preflight_core::errors::DiscoveryError;
use preflight_core::fsutil::copy_tree;

use crate::discovery::discover_tests;
use crate::summary::SummaryWriter;

/// Aggregated outcome of one test-all run.
#[derive(Debug)]
pub struct RunSummary {
    /// Tests planned and executed.
    pub planned: usize,
    /// Tests that failed.
    pub failures: usize,
    /// Tests skipped via marker; not part of pass/fail totals.
    pub skipped: usize,
}

impl RunSummary {
    /// Process exit status: non-zero iff any test failed. An empty test
    /// set is a valid outcome, not an error.
    pub fn exit_code(&self) -> i32 {
        if self.failures > 0 {
            1
        } else {
            0
        }
    }
}

/// Discover and run every test at or below `root`, strictly one at a time
/// in discovery order.
///
/// Each test gets a fresh collaborator context — cached lookups must never
/// leak between sequential runs in one process — and a dedicated log file.
/// One test's failure never prevents subsequent tests from running.
pub fn run_all(
    root: &Path,
    factory: &dyn ContextFactory,
    config: &RunnerConfig,
) -> Result<RunSummary, DiscoveryError> {
    let plan = discover_tests(root)?;
    for skipped in &plan.skipped {
        eprintln!("Skipping {}", skipped.display());
    }

    if plan.tests.is_empty() {
        eprintln!("No tests found in or below '{}'.", root.display());
        return Ok(RunSummary {
            planned: 0,
            failures: 0,
            skipped: plan.skipped.len(),
        });
    }

    let build_dir = root.join(BUILD_DIR);
    let log_dir = build_dir.join(TEST_LOG_SUBDIR);
    let failed_log_dir = build_dir.join(FAILED_TEST_LOG_SUBDIR);
    for dir in [&build_dir, &log_dir, &failed_log_dir] {
        fs::create_dir_all(dir).map_err(|source| DiscoveryError::SetupFailed {
            path: dir.clone(),
            source,
        })?;
    }

    let mut summary = SummaryWriter::create(&build_dir.join(TEST_SUMMARY_FILE), config)?;

    // The full plan goes out first so a crashed run still shows what was
    // meant to happen.
    let total = plan.tests.len();
    summary.line(&format!("Will be running a total of {total:02} tests:"));
    for (number, test) in plan.tests.iter().enumerate() {
        summary.line(&format!(
            "{:02}/{:02} {}",
            number + 1,
            total,
            relative_to(test, root)
        ));
    }

    summary.line("");
    summary.line("Testing...");

    let mut failures = 0;
    for (number, test) in plan.tests.iter().enumerate() {
        let rel = relative_to(test, root);
        summary.begin_row(&format!("{:02}/{:02} {}", number + 1, total, rel));

        // Fresh context per test: constructing it anew is the state reset.
        let ctx = factory.fresh_context();
        let log = log_dir.join(format!("{}.log", flatten(&rel)));
        match ctx.engine.run_sub_build(&test.join("test"), &log) {
            Ok(()) => {
                summary.finish_row(true);
            }
            Err(e) => {
                failures += 1;
                summary.finish_row(false);
                debug!(test = %test.display(), error = %e, "test failed");
                archive_failed_logs(test, &failed_log_dir.join(flatten(&rel)));
            }
        }
    }

    info!(planned = total, failures, "test run complete");
    Ok(RunSummary {
        planned: total,
        failures,
        skipped: plan.skipped.len(),
    })
}

/// Best-effort copy of a failed test's own log directory into the central
/// archive; especially useful on a remote CI server. Copy failures are
/// swallowed — the archive is a convenience, not a correctness requirement.
fn archive_failed_logs(test: &Path, archive: &Path) {
    let test_logs = test.join(BUILD_DIR).join("log");
    if !test_logs.is_dir() {
        debug!(test = %test.display(), "no test logs to archive");
        return;
    }
    if let Err(e) = copy_tree(&test_logs, archive) {
        debug!(test = %test.display(), error = %e, "failed-test log archival skipped");
    }
}

fn relative_to(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

/// Flatten path separators into underscores for per-test file names.
fn flatten(rel: &str) -> String {
    rel.replace(MAIN_SEPARATOR, "_")
}
