use autopush_core::config::CacheConfig;
use autopush_core::errors::ConfigError;

/// Decision thresholds. Only constructible from a valid [`CacheConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    warmup: chrono::Duration,
    promotion_ratio: f64,
    demotion_ratio: f64,
    minimum_requests: u64,
}

impl Thresholds {
    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            warmup: config.warmup(),
            promotion_ratio: config.promotion_ratio,
            demotion_ratio: config.demotion_ratio,
            minimum_requests: config.minimum_requests,
        })
    }

    pub fn warmup(&self) -> chrono::Duration {
        self.warmup
    }

    pub fn promotion_ratio(&self) -> f64 {
        self.promotion_ratio
    }

    pub fn demotion_ratio(&self) -> f64 {
        self.demotion_ratio
    }

    pub fn minimum_requests(&self) -> u64 {
        self.minimum_requests
    }
}
