use super::ConfigError;

/// Top-level error for every fallible autopush operation.
#[derive(Debug, thiserror::Error)]
pub enum AutoPushError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type AutoPushResult<T> = Result<T, AutoPushError>;
