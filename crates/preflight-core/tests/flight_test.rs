//! Tests for the flight-code classifier rule table.

use std::path::Path;

use preflight_core::flight::{FlightClassifier, RuleScope, NON_FLIGHT_RULES};

fn classifier() -> FlightClassifier {
    FlightClassifier::from_builtin_rules().expect("builtin rules compile")
}

#[test]
fn test_rule_table_covers_both_scopes() {
    let names = NON_FLIGHT_RULES
        .iter()
        .filter(|r| r.scope == RuleScope::ReportName)
        .count();
    let paths = NON_FLIGHT_RULES
        .iter()
        .filter(|r| r.scope == RuleScope::StagedPath)
        .count();
    assert_eq!(names, 10);
    assert_eq!(paths, 6);
}

/// Held-out corpus of realistic file paths where the name-based and
/// path-based rule sets must agree. A divergence here means one table
/// changed without the other.
#[test]
fn test_rule_sets_agree_on_corpus() {
    let corpus = [
        // Flight code.
        "/proj/sys/comp/comp.ads",
        "/proj/sys/comp/comp.adb",
        "/proj/sys/comp/comp-queue.ads",
        "/proj/sys/comp/comp-queue.adb",
        "/proj/sys/util/byte_swap.adb",
        "/proj/sys/util/latest.ads",
        // Generated packed-record scaffolding under build/src.
        "/proj/sys/comp/build/src/rec-assertion.ads",
        "/proj/sys/comp/build/src/rec-assertion.adb",
        "/proj/sys/comp/build/src/rec-representation.ads",
        "/proj/sys/comp/build/src/scalar_type_ranges.ads",
        // Tester files under test directories.
        "/proj/sys/comp/test/comp-implementation-tester.ads",
        "/proj/sys/comp/test/comp-implementation-tester.adb",
    ];

    let c = classifier();
    for path in corpus {
        let name = Path::new(path).file_name().unwrap().to_str().unwrap();
        assert_eq!(
            c.is_flight_path(Path::new(path)),
            c.is_flight_name(name),
            "rule sets diverge on {path}"
        );
    }
}

/// The asymmetry between the two rule sets is deliberate: path rules can
/// see directory context that bare names cannot carry.
#[test]
fn test_known_divergent_shapes() {
    let c = classifier();

    // Generated autocode with a flight-looking name is only identifiable
    // by its position under a test directory's build/src.
    let path = Path::new("/proj/sys/comp/test/build/src/generated_pkg.ads");
    assert!(!c.is_flight_path(path));
    assert!(c.is_flight_name("generated_pkg.ads"));

    // Anything under unit_test directories is non-flight by position.
    let path = Path::new("/proj/sys/comp/unit_test/helper.ads");
    assert!(!c.is_flight_path(path));
    assert!(c.is_flight_name("helper.ads"));
}

#[test]
fn test_report_filtering_is_order_independent() {
    let lines = [
        "comp.adb:10:5: warning: possible overflow",
        "comp_tests.adb:3:1: warning: unused",
        "rec-assertion.ads:7:2: warning: unreachable",
        "comp-queue.adb:44:12: warning: aliasing",
        "summary: 4 findings",
    ];

    let c = classifier();
    let forward: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| c.keep_report_line(l))
        .collect();
    let mut reversed: Vec<&str> = lines
        .iter()
        .rev()
        .copied()
        .filter(|l| c.keep_report_line(l))
        .collect();
    reversed.reverse();

    assert_eq!(forward, reversed);
    assert_eq!(
        forward,
        vec![
            "comp.adb:10:5: warning: possible overflow",
            "comp-queue.adb:44:12: warning: aliasing",
            "summary: 4 findings",
        ]
    );
}

#[test]
fn test_suppression_is_per_line() {
    // A line attributed to a non-flight file is dropped even when flight
    // lines around it survive.
    let c = classifier();
    assert!(c.keep_report_line("comp.adb:1:1: finding"));
    assert!(!c.keep_report_line("comp-implementation-suite.adb:1:1: finding"));
    assert!(c.keep_report_line("comp.adb:2:1: finding"));
}
