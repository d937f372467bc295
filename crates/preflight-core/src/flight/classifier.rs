//! Compiled flight-code classifier.
//!
//! Compiles the rule table into one `RegexSet` per scope — a single pass
//! over the input matches every pattern of that scope simultaneously.

use std::path::Path;

use regex::RegexSet;

use super::rules::{RuleScope, NON_FLIGHT_RULES};

/// Compiled classifier with one matcher per input representation.
#[derive(Debug)]
pub struct FlightClassifier {
    /// Matches bare file names from analyzer report lines.
    name_set: RegexSet,
    /// Matches full source paths prior to analyzer invocation.
    path_set: RegexSet,
}

impl FlightClassifier {
    /// Compile the built-in rule table.
    pub fn from_builtin_rules() -> Result<Self, regex::Error> {
        let name_patterns: Vec<&str> = NON_FLIGHT_RULES
            .iter()
            .filter(|r| r.scope == RuleScope::ReportName)
            .map(|r| r.pattern)
            .collect();
        let path_patterns: Vec<&str> = NON_FLIGHT_RULES
            .iter()
            .filter(|r| r.scope == RuleScope::StagedPath)
            .map(|r| r.pattern)
            .collect();

        Ok(Self {
            name_set: RegexSet::new(&name_patterns)?,
            path_set: RegexSet::new(&path_patterns)?,
        })
    }

    /// True if a bare file name denotes flight code.
    pub fn is_flight_name(&self, file_name: &str) -> bool {
        !self.name_set.is_match(file_name)
    }

    /// True if a full source path denotes flight code.
    pub fn is_flight_path(&self, path: &Path) -> bool {
        !self.path_set.is_match(&path.to_string_lossy())
    }

    /// True if a report line should be kept in the filtered report.
    ///
    /// The analyzer emits `file_name:line:column: message`; the leading
    /// token before the first colon decides. Lines with no file prefix are
    /// always kept.
    pub fn keep_report_line(&self, line: &str) -> bool {
        match line.split_once(':') {
            Some((file_name, _)) if !file_name.is_empty() => self.is_flight_name(file_name),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> FlightClassifier {
        FlightClassifier::from_builtin_rules().expect("builtin rules compile")
    }

    #[test]
    fn test_non_flight_names() {
        let c = classifier();
        assert!(!c.is_flight_name("component-implementation-tester.adb"));
        assert!(!c.is_flight_name("component_reciprocal.ads"));
        assert!(!c.is_flight_name("component-implementation-suite.adb"));
        assert!(!c.is_flight_name("component_tests.ads"));
        assert!(!c.is_flight_name("tests.adb"));
        assert!(!c.is_flight_name("component_tests-implementation.adb"));
        assert!(!c.is_flight_name("record-assertion.ads"));
        assert!(!c.is_flight_name("record-representation.adb"));
        assert!(!c.is_flight_name("scalar_type_ranges.ads"));
        assert!(!c.is_flight_name("test.adb"));
        assert!(!c.is_flight_name("unit_test.adb"));
    }

    #[test]
    fn test_flight_names() {
        let c = classifier();
        assert!(c.is_flight_name("component.ads"));
        assert!(c.is_flight_name("component-queue.adb"));
        // "test" only excludes bodies by exact suffix.
        assert!(c.is_flight_name("latest.ads"));
        assert!(c.is_flight_name("contested_manifest.ads"));
    }

    #[test]
    fn test_case_insensitive_names() {
        let c = classifier();
        assert!(!c.is_flight_name("Component_Tests.ADS"));
        assert!(!c.is_flight_name("Record-Assertion.ads"));
    }

    #[test]
    fn test_non_flight_paths() {
        let c = classifier();
        assert!(!c.is_flight_path(Path::new("/proj/comp/build/src/rec-assertion.ads")));
        assert!(!c.is_flight_path(Path::new("/proj/comp/build/src/rec-representation.adb")));
        assert!(!c.is_flight_path(Path::new("/proj/comp/test/build/src/generated.ads")));
        assert!(!c.is_flight_path(Path::new(
            "/proj/comp/test/comp-implementation-tester.adb"
        )));
        assert!(!c.is_flight_path(Path::new("/proj/comp/unit_test/harness.ads")));
        assert!(!c.is_flight_path(Path::new("/proj/comp/build/src/t_type_ranges.ads")));
    }

    #[test]
    fn test_flight_paths() {
        let c = classifier();
        assert!(c.is_flight_path(Path::new("/proj/comp/comp.ads")));
        assert!(c.is_flight_path(Path::new("/proj/comp/build/src/generated.ads")));
    }

    #[test]
    fn test_keep_report_line() {
        let c = classifier();
        assert!(c.keep_report_line("comp.adb:10:5: warning: unused variable"));
        assert!(!c.keep_report_line("comp_tests.adb:3:1: warning: unused variable"));
        // Lines without a file prefix pass through.
        assert!(c.keep_report_line("42 findings total"));
        assert!(c.keep_report_line(""));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let c = classifier();
        for name in ["comp.ads", "comp_tests.adb", "tests.ads"] {
            assert_eq!(c.is_flight_name(name), c.is_flight_name(name));
        }
    }
}
