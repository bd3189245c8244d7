mod autopush_error;
mod config_error;

pub use autopush_error::{AutoPushError, AutoPushResult};
pub use config_error::ConfigError;
