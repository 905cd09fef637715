//! Configuration management for Bitewise.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration.
///
/// This is loaded from `~/.config/bitewise/config.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General application settings
    pub general: GeneralConfig,
    /// Remote catalog settings
    pub catalog: CatalogConfig,
    /// Barcode capture settings
    pub capture: CaptureConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `BITEWISE_CATALOG_URL`: Override the catalog base URL
    /// - `BITEWISE_CATALOG_TIMEOUT_SECS`: Override the lookup timeout
    /// - `BITEWISE_LOG_LEVEL`: Override the default log level
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        // Override from environment
        if let Ok(val) = std::env::var("BITEWISE_CATALOG_URL") {
            if !val.is_empty() {
                tracing::debug!("Override catalog.base_url from env: {}", val);
                config.catalog.base_url = val;
            }
        }

        if let Ok(val) = std::env::var("BITEWISE_CATALOG_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                config.catalog.timeout_secs = secs;
                tracing::debug!("Override catalog.timeout_secs from env: {}", secs);
            }
        }

        if let Ok(val) = std::env::var("BITEWISE_LOG_LEVEL") {
            if !val.is_empty() {
                tracing::debug!("Override general.log_level from env: {}", val);
                config.general.log_level = val;
            }
        }

        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/bitewise/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("org", "bitewise", "bitewise").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the data directory path.
    ///
    /// Uses XDG base directories: `~/.local/share/bitewise`
    pub fn data_dir() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("org", "bitewise", "bitewise").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default log level filter (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Remote catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the product catalog
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with lookups
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://world.openfoodfacts.org".to_string(),
            timeout_secs: 10,
            user_agent: format!("bitewise/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Barcode capture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Capture device identifier, `None` for the platform default
    pub device: Option<String>,
    /// Interval between decode polls in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device: None,
            poll_interval_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.catalog.base_url, "https://world.openfoodfacts.org");
        assert_eq!(config.catalog.timeout_secs, 10);
        assert!(config.capture.device.is_none());
        assert_eq!(config.capture.poll_interval_ms, 500);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize config");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse config");

        assert_eq!(parsed.catalog.base_url, config.catalog.base_url);
        assert_eq!(parsed.catalog.timeout_secs, config.catalog.timeout_secs);
        assert_eq!(parsed.general.log_level, config.general.log_level);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml_str = r#"
            [catalog]
            base_url = "http://localhost:8080"
        "#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse partial config");

        assert_eq!(config.catalog.base_url, "http://localhost:8080");
        // Unspecified fields fall back to defaults
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.catalog.base_url = "http://localhost:8080".to_string();

        let contents = toml::to_string_pretty(&config).expect("serialize config");
        fs::write(&path, contents).expect("write config");

        let read_back = fs::read_to_string(&path).expect("read config");
        let parsed: AppConfig = toml::from_str(&read_back).expect("parse config");
        assert_eq!(parsed.catalog.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let result: std::result::Result<AppConfig, _> = toml::from_str("catalog = 42");
        assert!(result.is_err());
    }

    #[test]
    fn test_user_agent_carries_version() {
        let config = CatalogConfig::default();
        assert!(config.user_agent.starts_with("bitewise/"));
    }
}
