//! Flight filtering of the analyzer's text report.

use std::fs;
use std::path::{Path, PathBuf};

use preflight_core::flight::FlightClassifier;

/// Filtered report artifacts.
#[derive(Debug)]
pub struct FilteredReport {
    /// The canonical, flight-only report.
    pub report: PathBuf,
    /// The original report, preserved unfiltered.
    pub unfiltered_report: PathBuf,
}

/// Filter `report.txt` under `build_dir` down to flight-code lines.
///
/// The original is preserved as `unfiltered_report.txt`; the filtered
/// result becomes the canonical `report.txt`. Filtering is per-line: a
/// line attributed to a non-flight file is dropped no matter what
/// surrounds it. A missing report is not an error — the analyzer may have
/// produced nothing.
pub fn filter_report(
    build_dir: &Path,
    classifier: &FlightClassifier,
) -> std::io::Result<Option<FilteredReport>> {
    let report = build_dir.join("report.txt");
    let unfiltered_report = build_dir.join("unfiltered_report.txt");
    if !report.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&report)?;
    fs::write(&unfiltered_report, &contents)?;

    let mut filtered = String::with_capacity(contents.len());
    for line in contents.lines() {
        if classifier.keep_report_line(line) {
            filtered.push_str(line);
            filtered.push('\n');
        }
    }
    fs::write(&report, filtered)?;

    Ok(Some(FilteredReport {
        report,
        unfiltered_report,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtering_preserves_original() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.txt");
        fs::write(
            &report,
            "comp.adb:1:1: finding\ncomp_tests.adb:2:1: finding\nsummary line\n",
        )
        .unwrap();

        let classifier = FlightClassifier::from_builtin_rules().unwrap();
        let artifacts = filter_report(dir.path(), &classifier).unwrap().unwrap();

        let filtered = fs::read_to_string(&artifacts.report).unwrap();
        assert_eq!(filtered, "comp.adb:1:1: finding\nsummary line\n");

        let unfiltered = fs::read_to_string(&artifacts.unfiltered_report).unwrap();
        assert!(unfiltered.contains("comp_tests.adb"));
    }

    #[test]
    fn test_missing_report_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let classifier = FlightClassifier::from_builtin_rules().unwrap();
        assert!(filter_report(dir.path(), &classifier).unwrap().is_none());
    }
}
