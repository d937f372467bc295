//! preflight-analysis: the static-analysis half of the orchestrator
//!
//! Given already-built artifacts, reconstruct the exact source closure that
//! produced them, stage it in isolation, drive the external analyzer, and
//! present a curated flight-code-only report:
//! - Resolver: artifacts -> originating sources + single build target
//! - Closure: transitive compile-time dependency saturation
//! - Descriptor: project-descriptor rewriting for the staged layout
//! - Staging: isolated flat staging directory population
//! - Report: per-line flight filtering of the analyzer's text report
//! - Pipeline: the end-to-end driver with per-step failure policies

pub mod closure;
pub mod descriptor;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod staging;

pub use closure::build_closure;
pub use pipeline::{analyze_directory, AnalysisOutcome};
pub use resolver::{collect_artifacts, resolve_sources, CollectedArtifacts, ResolvedSources};
