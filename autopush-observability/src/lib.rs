//! # autopush-observability
//!
//! Structured logging and counters for the asset cache.
//!
//! - `tracing_setup`: subscriber initialization, span macros, structured events
//! - `metrics`: `PushMetrics` atomic counters with serializable snapshots

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{MetricsSnapshot, PushMetrics};
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
