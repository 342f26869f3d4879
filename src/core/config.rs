//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and an optional `.env` file) or
//! defaults. Nothing outside this module reads the environment.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Default OpenWeatherMap 2.5 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default per-request timeout towards the upstream API.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream weather API configuration.
    pub weather: WeatherConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the OpenWeatherMap client.
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API key sent as the `appid` query parameter.
    /// Absence is reported per call, never at startup.
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,

    /// Base URL; `/weather` and `/forecast` are appended to it.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl WeatherConfig {
    /// Configuration pointing at `base_url` with the given key.
    pub fn with_api_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "weather-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            weather: WeatherConfig::default(),
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
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, ...). The API key is read from `WEATHER_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => {
                config.weather.api_key = Some(key);
                info!("Weather API key loaded from environment");
            }
            _ => warn!(
                "{} not set - weather tools will return errors until it is configured",
                API_KEY_ENV
            ),
        }

        if let Ok(base_url) = std::env::var("MCP_WEATHER_BASE_URL") {
            config.weather.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("MCP_WEATHER_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.weather.timeout_secs = secs,
                Err(_) => warn!(
                    "Invalid MCP_WEATHER_TIMEOUT_SECS value {:?}, using {}s",
                    timeout, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.weather.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "weather base URL must start with http:// or https://, got {base_url:?}"
            )));
        }

        if self.weather.timeout_secs == 0 {
            return Err(Error::config("weather timeout must be at least 1 second"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_KEY_ENV, "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.weather.api_key.as_deref(), Some("test_key_12345"));
        unsafe {
            std::env::remove_var(API_KEY_ENV);
        }
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_KEY_ENV, "");
        }
        let config = Config::from_env();
        assert!(config.weather.api_key.is_none());
        unsafe {
            std::env::remove_var(API_KEY_ENV);
        }
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_WEATHER_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.weather.timeout_secs, DEFAULT_TIMEOUT_SECS);
        unsafe {
            std::env::remove_var("MCP_WEATHER_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_default_has_no_api_key() {
        let config = Config::default();
        assert!(config.weather.api_key.is_none());
        assert_eq!(config.weather.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.weather.timeout_secs, 10);
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let weather = WeatherConfig::with_api_key(DEFAULT_BASE_URL, "super_secret_key");
        let debug_str = format!("{:?}", weather);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_api_key_never_serialized() {
        let mut config = Config::default();
        config.weather = WeatherConfig::with_api_key(DEFAULT_BASE_URL, "super_secret_key");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super_secret_key"));
        assert!(!json.contains("api_key"));
        assert!(json.contains(DEFAULT_BASE_URL));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.weather.base_url = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.weather.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
