//! # autopush-core
//!
//! Foundation crate for the autopush asset cache.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AutoPushConfig, CacheConfig, ObservabilityConfig};
pub use errors::{AutoPushError, AutoPushResult, ConfigError};
pub use models::{ChildSnapshot, ChildState, RequestObservation, RootAttribution, RootSnapshot};
pub use traits::{IPushPredictor, IRequestObserver};
