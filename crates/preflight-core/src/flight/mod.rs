//! Flight-code classification.
//!
//! Decides whether a source path or a report line belongs to production
//! ("flight") code versus test/support scaffolding, using file-naming
//! conventions only. One canonical rule table feeds two accessors: the
//! analyzer's textual report carries bare file names, while full paths are
//! available before invocation, so the two rule shapes intentionally differ.

mod classifier;
mod rules;

pub use classifier::FlightClassifier;
pub use rules::{NonFlightRule, RuleScope, NON_FLIGHT_RULES};
