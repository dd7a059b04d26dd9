//! Application layer errors

use thiserror::Error;

/// Errors a chat round trip can fail with. Every variant ends up rendered as
/// the same fallback reply; keeping them distinct matters only for logs and
/// for tests that pin down which boundary failed.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned status {0}")]
    Api(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
