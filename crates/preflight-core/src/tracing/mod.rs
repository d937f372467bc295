//! Tracing/logging for preflight.

pub mod setup;

pub use setup::init_tracing;
