//! Configuration loading and constants.
//!
//! Loads gateway configuration from a TOML file and defines the service
//! constants: the liveness message, the placeholder row id, and logging
//! defaults. `AppConfig` is the root configuration struct containing all
//! settings.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Service Constants
// =============================================================================

/// Message returned by the liveness endpoint
pub const LIVENESS_MESSAGE: &str = "SWB API is live!";

/// Row id returned in submission acknowledgments. A fixed placeholder until
/// submissions are backed by a real sheet store.
pub const PLACEHOLDER_ROW: u64 = 999;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "swb_gateway=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Schema gate settings
    pub schema: SchemaConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Schema gate configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaConfig {
    /// Schema fingerprint the deployed clients were built against.
    /// Submissions presenting any other value are rejected, so rotating the
    /// client schema means updating this value in deployment config.
    pub expected_hash: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Validate: an empty expected hash would reject every submission
        if config.schema.expected_hash.is_empty() {
            return Err(ConfigError::Validation(
                "schema.expected_hash must not be empty".to_string(),
            ));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
