//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, command-line flags, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default remote endpoint for documentation searches.
pub const DEFAULT_SEARCH_API_URL: &str =
    "https://mcp.owlting.com/owlpay/get-owlpay-documentation";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Outbound documentation search configuration.
    pub search: SearchConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the remote documentation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// URL queried with `?query=<text>`.
    pub api_url: String,

    /// Timeout applied to every outbound request, in seconds.
    pub timeout_secs: u64,

    /// Extra attempts made after a connection-level failure.
    pub max_retries: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_SEARCH_API_URL.to_string(),
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "search-owlpay-documentation".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            search: SearchConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_SEARCH_API_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.search = SearchConfig::from_env();

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

impl SearchConfig {
    /// Load search settings from environment variables.
    pub fn from_env() -> Self {
        let mut search = Self::default();

        if let Ok(url) = std::env::var("MCP_SEARCH_API_URL") {
            info!("Documentation endpoint overridden: {}", url);
            search.api_url = url;
        }

        if let Ok(raw) = std::env::var("MCP_SEARCH_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => search.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid MCP_SEARCH_TIMEOUT_SECS={:?}, using {}s",
                    raw, search.timeout_secs
                ),
            }
        }

        if let Ok(raw) = std::env::var("MCP_SEARCH_MAX_RETRIES") {
            match raw.parse::<u32>() {
                Ok(retries) => search.max_retries = retries,
                Err(_) => warn!(
                    "Ignoring invalid MCP_SEARCH_MAX_RETRIES={:?}, using {}",
                    raw, search.max_retries
                ),
            }
        }

        search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_search_defaults() {
        let search = SearchConfig::default();
        assert_eq!(search.api_url, DEFAULT_SEARCH_API_URL);
        assert_eq!(search.timeout_secs, 30);
        assert_eq!(search.max_retries, 3);
    }

    #[test]
    fn test_search_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SEARCH_API_URL", "http://localhost:9999/search");
        }
        let config = Config::from_env();
        assert_eq!(config.search.api_url, "http://localhost:9999/search");
        unsafe {
            std::env::remove_var("MCP_SEARCH_API_URL");
        }
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SEARCH_TIMEOUT_SECS", "soon");
        }
        let search = SearchConfig::from_env();
        assert_eq!(search.timeout_secs, 30);
        unsafe {
            std::env::remove_var("MCP_SEARCH_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_config_default_server_name() {
        let config = Config::default();
        assert_eq!(config.server.name, "search-owlpay-documentation");
        assert!(config.transport.is_stdio());
    }
}
