//! Tests for isolated sequential test execution.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use preflight_core::config::RunnerConfig;
use preflight_core::context::{BuildContext, ContextFactory};
use preflight_core::database::{SourceDatabase, TargetDatabase};
use preflight_core::engine::BuildEngine;
use preflight_core::errors::{DatabaseError, EngineError};
use preflight_runner::run_all;

struct EmptySourceDb;
impl SourceDatabase for EmptySourceDb {
    fn sources_for_unit(&self, _unit: &str) -> Option<Vec<PathBuf>> {
        None
    }
    fn direct_dependencies(&self, _source: &Path) -> Result<Vec<PathBuf>, DatabaseError> {
        Ok(Vec::new())
    }
}

struct EmptyTargetDb;
impl TargetDatabase for EmptyTargetDb {
    fn targets_for_directory(&self, dir: &Path) -> Result<Vec<PathBuf>, DatabaseError> {
        Err(DatabaseError::UnknownDirectory {
            directory: dir.to_path_buf(),
        })
    }
}

/// Engine that records invocations and fails tests in a named directory.
struct ScriptedEngine {
    fail_dir: Option<String>,
    invocations: Arc<Mutex<Vec<PathBuf>>>,
}

impl BuildEngine for ScriptedEngine {
    fn ensure_fresh(&self, _inputs: &[PathBuf]) -> Result<(), EngineError> {
        Ok(())
    }

    fn run_sub_build(&self, target: &Path, stderr_log: &Path) -> Result<(), EngineError> {
        self.invocations.lock().unwrap().push(target.to_path_buf());
        fs::write(stderr_log, "sub-build diagnostics\n").ok();
        let dir_name = target.parent().and_then(|p| p.file_name());
        if let (Some(fail), Some(name)) = (&self.fail_dir, dir_name) {
            if name.to_string_lossy() == fail.as_str() {
                return Err(EngineError::SubBuildFailed {
                    target: target.to_path_buf(),
                    status: 1,
                });
            }
        }
        Ok(())
    }
}

struct CountingFactory {
    fail_dir: Option<String>,
    invocations: Arc<Mutex<Vec<PathBuf>>>,
    fresh_calls: Arc<AtomicUsize>,
}

impl CountingFactory {
    fn new(fail_dir: Option<&str>) -> Self {
        Self {
            fail_dir: fail_dir.map(String::from),
            invocations: Arc::new(Mutex::new(Vec::new())),
            fresh_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ContextFactory for CountingFactory {
    fn fresh_context(&self) -> BuildContext {
        self.fresh_calls.fetch_add(1, Ordering::SeqCst);
        BuildContext {
            engine: Box::new(ScriptedEngine {
                fail_dir: self.fail_dir.clone(),
                invocations: Arc::clone(&self.invocations),
            }),
            source_db: Box::new(EmptySourceDb),
            target_db: Box::new(EmptyTargetDb),
        }
    }
}

fn plain_config() -> RunnerConfig {
    RunnerConfig {
        no_color: Some(true),
        column_width: None,
    }
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

/// Three test directories; `a/b` also carries a skip marker.
fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("a").join("test.do"));
    touch(&root.join("a").join("b").join("test.adb"));
    touch(&root.join("a").join("b").join(".skip_test"));
    touch(&root.join("c").join("test.adb.do"));
    dir
}

#[test]
fn test_all_pass_in_discovery_order() {
    let dir = fixture();
    let root = dir.path();
    let factory = CountingFactory::new(None);

    let summary = run_all(root, &factory, &plain_config()).unwrap();
    assert_eq!(summary.planned, 2);
    assert_eq!(summary.failures, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.exit_code(), 0);

    // Both tests ran, in discovery order, and the skipped one never did.
    let invocations = factory.invocations.lock().unwrap().clone();
    assert_eq!(
        invocations,
        vec![root.join("a").join("test"), root.join("c").join("test")]
    );

    // One fresh context per executed test.
    assert_eq!(factory.fresh_calls.load(Ordering::SeqCst), 2);

    // Per-test logs were captured.
    assert!(root.join("build/test_logs/a.log").exists());
    assert!(root.join("build/test_logs/c.log").exists());

    let report = fs::read_to_string(root.join("build/test_all_summary.txt")).unwrap();
    assert!(report.contains("Will be running a total of 02 tests:"));
    assert!(report.contains("01/02 a"));
    assert!(report.contains("02/02 c"));
    assert!(report.matches("PASSED").count() == 2);
    assert!(!report.contains("FAILED"));
}

#[test]
fn test_one_failure_does_not_stop_the_batch() {
    let dir = fixture();
    let root = dir.path();
    // Give the failing test some logs worth archiving.
    fs::create_dir_all(root.join("c/build/log")).unwrap();
    fs::write(root.join("c/build/log/debug.txt"), "boom").unwrap();

    let factory = CountingFactory::new(Some("c"));
    let summary = run_all(root, &factory, &plain_config()).unwrap();

    assert_eq!(summary.planned, 2);
    assert_eq!(summary.failures, 1);
    assert_eq!(summary.exit_code(), 1);

    // The failure did not prevent the other test from running.
    assert_eq!(factory.invocations.lock().unwrap().len(), 2);

    let report = fs::read_to_string(root.join("build/test_all_summary.txt")).unwrap();
    assert_eq!(report.matches("PASSED").count(), 1);
    assert_eq!(report.matches("FAILED").count(), 1);

    // The failed test's own logs were archived.
    assert!(root.join("build/failed_test_logs/c/debug.txt").exists());
}

#[test]
fn test_missing_failed_logs_are_tolerated() {
    let dir = fixture();
    let root = dir.path();
    // No c/build/log directory exists; archival must be swallowed.
    let factory = CountingFactory::new(Some("c"));
    let summary = run_all(root, &factory, &plain_config()).unwrap();
    assert_eq!(summary.failures, 1);
}

#[test]
fn test_zero_tests_is_a_clean_noop() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let factory = CountingFactory::new(None);

    let summary = run_all(root, &factory, &plain_config()).unwrap();
    assert_eq!(summary.planned, 0);
    assert_eq!(summary.exit_code(), 0);
    assert!(factory.invocations.lock().unwrap().is_empty());

    // No summary report for an empty plan.
    assert!(!root.join("build/test_all_summary.txt").exists());
}
