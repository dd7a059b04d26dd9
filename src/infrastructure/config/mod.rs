//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::infrastructure::http::DEFAULT_ENDPOINT;

/// Client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub client: ClientConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientConfig {
    pub name: String,
    pub viewport_rows: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfig {
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig {
                name: "medichat".to_string(),
                viewport_rows: 20,
            },
            server: ServerConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// All collaborator settings are checked up front; a config that loads
    /// is a config that can start a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField("server.endpoint".to_string()));
        }
        if self.client.viewport_rows == 0 {
            return Err(ConfigError::InvalidValue(
                "client.viewport-rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();

        if let Ok(endpoint) = std::env::var("MEDICHAT_ENDPOINT") {
            config.server.endpoint = endpoint;
        }

        config
    }
}
