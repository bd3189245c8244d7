//! Configuration for the asset cache and its ambient services.
//!
//! Every section is `#[serde(default)]`, so an empty TOML document yields
//! the stock configuration.

pub mod cache_config;
pub mod defaults;
pub mod observability_config;

pub use cache_config::CacheConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AutoPushResult, ConfigError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoPushConfig {
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl AutoPushConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    ///
    /// The result is validated, so a parsed config is always usable.
    pub fn from_toml(source: &str) -> AutoPushResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cache.validate()
    }
}
