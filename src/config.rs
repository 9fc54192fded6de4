//! # Service Configuration
//!
//! Configuration for the arithmetic service, loaded from a JSON file.
//! Every field has a default, so a missing or partial file still yields
//! a runnable configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::LogConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty means permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3040
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            log: LogConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3040);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServiceConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:3040");
    }

    #[test]
    fn test_load_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcd.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"host": "127.0.0.1", "port": 8080, "cors_origins": ["http://localhost:3000"]}}"#
        )
        .unwrap();

        let config = ServiceConfig::load(&path).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins.len(), 1);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcd.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"port": 9090}}"#).unwrap();

        let config = ServiceConfig::load(&path).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcd.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "not json").unwrap();

        let result = ServiceConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_zero_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcd.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"port": 0}}"#).unwrap();

        let result = ServiceConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ServiceConfig::load(Path::new("/nonexistent/calcd.json"));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
