// Single source of truth for all default values.

// --- Cache ---
pub const DEFAULT_WARMUP_DURATION_MS: u64 = 500;
pub const DEFAULT_PROMOTION_RATIO: f64 = 0.8;
pub const DEFAULT_DEMOTION_RATIO: f64 = 0.2;
pub const DEFAULT_MINIMUM_REQUESTS: u64 = 1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
