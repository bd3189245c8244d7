/// autopush version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable consulted by `init_tracing` for the log filter.
pub const LOG_ENV_VAR: &str = "AUTOPUSH_LOG";

/// Upper bound of any correlation ratio used in a decision.
pub const MAX_RATIO: f64 = 1.0;
