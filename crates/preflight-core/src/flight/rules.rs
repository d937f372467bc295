//! The canonical non-flight naming rule table.
//!
//! Both classifier accessors are compiled from this one table so the two
//! rule shapes cannot diverge silently.

/// Which input representation a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Bare file names, as they appear at the head of analyzer report lines.
    /// Matching is case-insensitive.
    ReportName,
    /// Full source paths, as available before the analyzer is invoked.
    /// Unlike `ReportName` rules, these can see directory context.
    StagedPath,
}

/// One naming convention that marks a file as non-flight.
#[derive(Debug, Clone, Copy)]
pub struct NonFlightRule {
    /// Anchored regex over the scoped input.
    pub pattern: &'static str,
    /// Input representation the rule applies to.
    pub scope: RuleScope,
    /// What kind of scaffolding the convention denotes.
    pub category: &'static str,
}

/// Every naming convention that marks a file as non-flight.
pub const NON_FLIGHT_RULES: &[NonFlightRule] = &[
    // Unit-test tester files.
    NonFlightRule {
        pattern: r"(?i)^.*-implementation-tester\.ad[sb]$",
        scope: RuleScope::ReportName,
        category: "tester",
    },
    // Reciprocal test harness packages.
    NonFlightRule {
        pattern: r"(?i)^.*_reciprocal\.ad[sb]$",
        scope: RuleScope::ReportName,
        category: "reciprocal",
    },
    // Test suite files.
    NonFlightRule {
        pattern: r"(?i)^.*-implementation-suite\.ad[sb]$",
        scope: RuleScope::ReportName,
        category: "suite",
    },
    // Test collection packages.
    NonFlightRule {
        pattern: r"(?i)^.*_tests\.ad[sb]$",
        scope: RuleScope::ReportName,
        category: "tests",
    },
    NonFlightRule {
        pattern: r"(?i)^tests\.ad[sb]$",
        scope: RuleScope::ReportName,
        category: "tests",
    },
    NonFlightRule {
        pattern: r"(?i)^.*tests-implementation\.ad[sb]$",
        scope: RuleScope::ReportName,
        category: "tests",
    },
    // Packed-record assertion packages.
    NonFlightRule {
        pattern: r"(?i)^.*-assertion\.ad[sb]$",
        scope: RuleScope::ReportName,
        category: "assertion",
    },
    // Packed-record representation packages.
    NonFlightRule {
        pattern: r"(?i)^.*-representation\.ad[sb]$",
        scope: RuleScope::ReportName,
        category: "representation",
    },
    // Type range description packages.
    NonFlightRule {
        pattern: r"(?i)^.*_type_ranges\.ad[sb]$",
        scope: RuleScope::ReportName,
        category: "type_ranges",
    },
    // Test main bodies.
    NonFlightRule {
        pattern: r"(?i)^.*test\.adb$",
        scope: RuleScope::ReportName,
        category: "test_main",
    },
    // Generated assertion/representation sources under build/src.
    NonFlightRule {
        pattern: r".*build/src/.+-assertion\.ad[sb]$",
        scope: RuleScope::StagedPath,
        category: "assertion",
    },
    NonFlightRule {
        pattern: r".*build/src/.+-representation\.ad[sb]$",
        scope: RuleScope::StagedPath,
        category: "representation",
    },
    // Generated sources inside test directories.
    NonFlightRule {
        pattern: r".*/test.*/build/src/.+\.ad[sb]$",
        scope: RuleScope::StagedPath,
        category: "test_autocode",
    },
    // Tester files inside test directories.
    NonFlightRule {
        pattern: r".*/test.*/.+-implementation-tester\.ad[sb]$",
        scope: RuleScope::StagedPath,
        category: "tester",
    },
    // Anything under a unit_test directory.
    NonFlightRule {
        pattern: r".*/unit_test.*/.+\.ad[sb]$",
        scope: RuleScope::StagedPath,
        category: "unit_test",
    },
    // Generated type range sources.
    NonFlightRule {
        pattern: r".*/build/src/.+_type_ranges\.ad[sb]$",
        scope: RuleScope::StagedPath,
        category: "type_ranges",
    },
];
