/// Configuration errors. Fatal at construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {field}: {value} is not within [0.0, 1.0]")]
    InvalidRatio { field: &'static str, value: f64 },

    #[error("demotion ratio {demotion:.3} must be below promotion ratio {promotion:.3}")]
    RatioOrdering { demotion: f64, promotion: f64 },

    #[error("minimum_requests must be at least 1, got {value}")]
    MinimumRequests { value: u64 },
}
