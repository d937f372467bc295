//! Logged external command execution.

use std::ffi::OsStr;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::errors::EngineError;

/// Run an external command, tee its combined output to `tee_log` and the
/// diagnostic stream, and return its exit code.
///
/// The exit code is a captured result value, not an error: analyzer stages
/// are all attempted regardless of earlier failures, so callers decide what
/// a non-zero status means. Only spawn/IO failures are errors.
pub fn run_logged<I, S>(program: &str, args: I, tee_log: &Path) -> Result<i32, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);
    debug!(program, log = %tee_log.display(), "running external command");

    let output = command.output().map_err(|source| EngineError::Spawn {
        program: program.to_string(),
        source,
    })?;

    let mut log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(tee_log)
        .map_err(|source| EngineError::Io {
            program: program.to_string(),
            source,
        })?;

    for chunk in [&output.stdout, &output.stderr] {
        log.write_all(chunk).map_err(|source| EngineError::Io {
            program: program.to_string(),
            source,
        })?;
        std::io::stderr().write_all(chunk).ok();
    }

    Ok(output.status.code().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_is_captured_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("out.log");

        let status = run_logged("sh", ["-c", "echo out; exit 3"], &log).unwrap();
        assert_eq!(status, 3);

        let contents = std::fs::read_to_string(&log).unwrap();
        assert!(contents.contains("out"));
    }

    #[test]
    fn test_spawn_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("out.log");
        let err = run_logged("definitely-not-a-real-binary", ["x"], &log).unwrap_err();
        assert!(matches!(err, EngineError::Spawn { .. }));
    }
}
