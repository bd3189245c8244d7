//! Thresholds that govern promotion and demotion of learned assets.
//!
//! # Examples
//!
//! ```
//! use autopush_core::config::CacheConfig;
//!
//! let config = CacheConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.warmup_duration_ms, 500);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Asset cache configuration. Construction-time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Time after a root's first observation before any of its children may
    /// be promoted, in milliseconds. Default: 500.
    pub warmup_duration_ms: u64,
    /// Ratio at or above which a child is promoted. Default: 0.8.
    pub promotion_ratio: f64,
    /// Ratio at or below which a promoted child is demoted. Default: 0.2.
    pub demotion_ratio: f64,
    /// Minimum root observations before promotion is considered. Default: 1.
    pub minimum_requests: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            warmup_duration_ms: defaults::DEFAULT_WARMUP_DURATION_MS,
            promotion_ratio: defaults::DEFAULT_PROMOTION_RATIO,
            demotion_ratio: defaults::DEFAULT_DEMOTION_RATIO,
            minimum_requests: defaults::DEFAULT_MINIMUM_REQUESTS,
        }
    }
}

impl CacheConfig {
    /// Create a config from explicit values. Not validated; see [`Self::validate`].
    pub fn new(
        warmup_duration_ms: u64,
        promotion_ratio: f64,
        demotion_ratio: f64,
        minimum_requests: u64,
    ) -> Self {
        Self {
            warmup_duration_ms,
            promotion_ratio,
            demotion_ratio,
            minimum_requests,
        }
    }

    /// Warmup window as a `chrono::Duration`.
    pub fn warmup(&self) -> chrono::Duration {
        // Anything beyond i64 milliseconds is effectively "never".
        i64::try_from(self.warmup_duration_ms)
            .map(chrono::Duration::milliseconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    /// Check `0 <= demotion_ratio < promotion_ratio <= 1` and
    /// `minimum_requests >= 1`. The warmup is unsigned and always valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("promotion_ratio", self.promotion_ratio)?;
        check_ratio("demotion_ratio", self.demotion_ratio)?;
        if self.demotion_ratio >= self.promotion_ratio {
            return Err(ConfigError::RatioOrdering {
                demotion: self.demotion_ratio,
                promotion: self.promotion_ratio,
            });
        }
        if self.minimum_requests == 0 {
            return Err(ConfigError::MinimumRequests {
                value: self.minimum_requests,
            });
        }
        Ok(())
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRatio { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_ratio_is_rejected() {
        assert!(check_ratio("promotion_ratio", f64::NAN).is_err());
    }

    #[test]
    fn huge_warmup_saturates() {
        let config = CacheConfig::new(u64::MAX, 0.8, 0.2, 1);
        assert_eq!(config.warmup(), chrono::Duration::MAX);
    }
}
