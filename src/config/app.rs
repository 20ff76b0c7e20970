//! Main application configuration
//!
//! This module defines the configuration structures for the league service,
//! including environment variable loading, TOML file loading, and validation.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub store: StoreSettings,
    pub recorder: RecorderSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Roster store connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Base URL of the realtime database; the roster is `<url>/players.json`
    pub url: String,
    /// Timeout for each store round trip in milliseconds
    pub request_timeout_ms: u64,
}

/// Match recorder settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderSettings {
    /// How many times a mutation re-runs after a concurrent modification.
    /// Zero leaves retrying to the caller.
    pub conflict_retries: u32,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "babyfoot-league".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:9000".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

impl StoreSettings {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// Values are not validated here; call [`validate_config`] once every
    /// override has been applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml(&contents)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Parse configuration from TOML text without environment overrides
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| anyhow!("Invalid configuration file: {}", e))?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Store settings
        if let Ok(url) = env::var("ROSTER_STORE_URL") {
            self.store.url = url;
        }
        if let Ok(timeout) = env::var("ROSTER_REQUEST_TIMEOUT_MS") {
            self.store.request_timeout_ms = timeout
                .parse()
                .map_err(|_| anyhow!("Invalid ROSTER_REQUEST_TIMEOUT_MS value: {}", timeout))?;
        }

        // Recorder settings
        if let Ok(retries) = env::var("CONFLICT_RETRIES") {
            self.recorder.conflict_retries = retries
                .parse()
                .map_err(|_| anyhow!("Invalid CONFLICT_RETRIES value: {}", retries))?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate store settings
    if config.store.url.trim().is_empty() {
        return Err(anyhow!("Roster store URL cannot be empty"));
    }
    if !(config.store.url.starts_with("http://") || config.store.url.starts_with("https://")) {
        return Err(anyhow!(
            "Roster store URL must be http(s): {}",
            config.store.url
        ));
    }
    if config.store.request_timeout_ms == 0 {
        return Err(anyhow!("Store request timeout must be greater than 0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.store.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.recorder.conflict_retries, 0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [store]
            url = "https://babyfoot.europe-west1.firebasedatabase.app"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.store.url,
            "https://babyfoot.europe-west1.firebasedatabase.app"
        );
        assert_eq!(config.store.request_timeout_ms, 5000);
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.store.request_timeout_ms = 0;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.store.url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());

        assert!(AppConfig::from_toml("[store]\nrequest_timeout_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_later_override_repairs_loaded_value() {
        let mut config = AppConfig::from_toml("[service]\nlog_level = \"loud\"").unwrap();
        assert!(validate_config(&config).is_err());

        // a --log-level flag lands after loading
        config.service.log_level = "debug".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
