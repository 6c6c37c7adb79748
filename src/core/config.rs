//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL for the AviationStack REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.aviationstack.com/v1";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Upstream flight API configuration.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// AviationStack API access key.
    /// Get a free key at: https://aviationstack.com/signup/free
    ///
    /// A missing key is not a startup fault: every tool call degrades to a
    /// soft error result until one is configured.
    pub aviationstack_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "aviationstack_api_key",
                &self.aviationstack_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Configuration for the upstream flight data API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the AviationStack API.
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "flight-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            credentials: CredentialsConfig {
                aviationstack_api_key: None,
            },
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server and logging settings use the `MCP_` prefix (e.g.
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`); the upstream credential uses the
    /// service's own conventional name `AVIATIONSTACK_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("AVIATIONSTACK_BASE_URL") {
            config.upstream.base_url = base_url;
        }

        // Load AviationStack API key
        if let Ok(api_key) = std::env::var("AVIATIONSTACK_API_KEY") {
            config.credentials.aviationstack_api_key = Some(api_key);
            info!("AviationStack API key loaded from environment");
        } else {
            warn!(
                "AVIATIONSTACK_API_KEY not set - all tool calls will return a \
                 configuration error (get your key at https://aviationstack.com)"
            );
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("AVIATIONSTACK_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.aviationstack_api_key.as_deref(),
            Some("test_key_12345")
        );
        unsafe {
            std::env::remove_var("AVIATIONSTACK_API_KEY");
        }
    }

    #[test]
    fn test_credentials_absent_is_none() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("AVIATIONSTACK_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.credentials.aviationstack_api_key.is_none());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            aviationstack_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
    }
}
