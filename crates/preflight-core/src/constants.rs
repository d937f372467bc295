//! Shared constants: suffixes, marker files, directory names, env vars.

/// Specification source suffix.
pub const SPEC_SUFFIX: &str = ".ads";
/// Body source suffix.
pub const BODY_SUFFIX: &str = ".adb";
/// Object artifact suffix.
pub const OBJECT_SUFFIX: &str = ".o";
/// Linkable binary artifact suffix.
pub const BINARY_SUFFIX: &str = ".elf";

/// Build-target suffix denoting a unit-test build profile.
pub const TARGET_TEST_SUFFIX: &str = "_Test";
/// Build-target suffix denoting a coverage build profile.
pub const TARGET_COVERAGE_SUFFIX: &str = "_Coverage";
/// Build-target suffix denoting the analysis build profile.
pub const TARGET_ANALYZE_SUFFIX: &str = "_Analyze";

/// Files whose presence marks a directory as a test target.
pub const TEST_MARKER_FILES: &[&str] = &["test.do", "test.adb", "test.adb.do"];
/// File whose presence excludes a test directory from execution.
pub const SKIP_MARKER_FILE: &str = ".skip_test";
/// Vendored-package directory name; subtrees below it are never scanned.
pub const VENDOR_DIR: &str = "alire";

/// Per-directory build output subdirectory.
pub const BUILD_DIR: &str = "build";
/// Analysis artifacts live under `build/analyze`.
pub const ANALYZE_SUBDIR: &str = "analyze";
/// Per-test logs live under `build/test_logs`.
pub const TEST_LOG_SUBDIR: &str = "test_logs";
/// Failed-test log archives live under `build/failed_test_logs`.
pub const FAILED_TEST_LOG_SUBDIR: &str = "failed_test_logs";
/// Summary report file name under `build/`.
pub const TEST_SUMMARY_FILE: &str = "test_all_summary.txt";

/// Env var selecting the analyzer depth mode (forwarded as `--mode=<value>`).
pub const ENV_ANALYZE_MODE: &str = "PREFLIGHT_ANALYZE_MODE";
/// Env var disabling colorized pass/fail markers when set non-empty.
pub const ENV_NO_COLOR: &str = "PREFLIGHT_NO_COLOR";
/// Env var scrubbed from sub-build children; debug chatter is incompatible
/// with the tabular test report.
pub const ENV_DEBUG: &str = "DEBUG";
/// Env var handed to the build engine to force compilation of both halves
/// of every unit. The analyzer examines specifications and bodies alike,
/// which fast compilation does not guarantee to have built.
pub const ENV_SAFE_COMPILE: &str = "SAFE_COMPILE";
