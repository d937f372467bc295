//! preflight-core: shared foundation for the preflight orchestrator
//!
//! This crate provides the pieces every preflight path builds on:
//! - Types: artifacts, build targets, dedup source sets
//! - Flight: the flight-code classifier (one rule table, two accessors)
//! - Database: read-only source/target database interfaces and the
//!   JSON-snapshot implementations the build engine maintains
//! - Engine: the build-engine interface and the redo-backed implementation
//! - Context: the per-run collaborator bundle (fresh context = state reset)
//! - Errors, config, tracing setup, constants

pub mod config;
pub mod constants;
pub mod context;
pub mod database;
pub mod engine;
pub mod errors;
pub mod flight;
pub mod fsutil;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use context::{BuildContext, ContextFactory, SnapshotContextFactory};
pub use database::{JsonSourceDatabase, JsonTargetDatabase, SourceDatabase, TargetDatabase};
pub use engine::{BuildEngine, RedoEngine};
pub use errors::{
    AnalyzeError, ConfigError, DatabaseError, DiscoveryError, EngineError, ResolveError,
};
pub use flight::FlightClassifier;
pub use types::{Artifact, ArtifactKind, BuildTarget, SourceSet};
