//! Configuration management for the `Stayfinder` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings. Provider
//! credentials are read once here and injected into the search client;
//! business logic never touches ambient process state.

use crate::StayfinderError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `Stayfinder` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StayfinderConfig {
    /// Hotel search provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Hotel search provider (RapidAPI) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Value for the `x-rapidapi-host` header
    #[serde(default)]
    pub api_host: String,
    /// Value for the `x-rapidapi-key` header
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the search provider
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,
    /// Transport timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u32,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Nightly budget assumed when the message names none, in INR
    #[serde(default = "default_nightly_budget")]
    pub nightly_budget: u32,
    /// Maximum number of offers rendered into one chat reply
    #[serde(default = "default_max_offers_shown")]
    pub max_offers_shown: u32,
}

// Default value functions
fn default_provider_base_url() -> String {
    "https://booking-com15.p.rapidapi.com".to_string()
}

fn default_provider_timeout() -> u32 {
    30
}

fn default_server_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_nightly_budget() -> u32 {
    5000
}

fn default_max_offers_shown() -> u32 {
    5
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_host: String::new(),
            api_key: String::new(),
            base_url: default_provider_base_url(),
            timeout_seconds: default_provider_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            nightly_budget: default_nightly_budget(),
            max_offers_shown: default_max_offers_shown(),
        }
    }
}

impl StayfinderConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    ///
    /// Sources are layered: the shipped `config/default.toml`, then the
    /// operator's config file, then environment overrides.
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder().add_source(
            File::from(PathBuf::from("config/default.toml"))
                .required(false)
                .format(config::FileFormat::Toml),
        );

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with STAYFINDER_ prefix,
        // e.g. STAYFINDER_PROVIDER__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("STAYFINDER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: StayfinderConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stayfinder").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.provider.base_url.is_empty() {
            self.provider.base_url = default_provider_base_url();
        }
        if self.provider.timeout_seconds == 0 {
            self.provider.timeout_seconds = default_provider_timeout();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.nightly_budget == 0 {
            self.defaults.nightly_budget = default_nightly_budget();
        }
        if self.defaults.max_offers_shown == 0 {
            self.defaults.max_offers_shown = default_max_offers_shown();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_credentials()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate provider credentials
    ///
    /// Empty credentials are allowed so the server can start without them
    /// (searches will fail against the real provider); values that are
    /// present must look plausible.
    pub fn validate_credentials(&self) -> Result<()> {
        if !self.provider.api_key.is_empty() {
            if self.provider.api_key.len() < 8 {
                return Err(StayfinderError::config(
                    "Provider API key appears to be invalid (too short). Please check your key.",
                )
                .into());
            }

            if self.provider.api_key.len() > 100 {
                return Err(StayfinderError::config(
                    "Provider API key appears to be invalid (too long). Please check your key.",
                )
                .into());
            }
        }

        if !self.provider.api_host.is_empty() && self.provider.api_host.contains('/') {
            return Err(StayfinderError::config(
                "Provider API host must be a bare hostname, not a URL",
            )
            .into());
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.provider.timeout_seconds > 300 {
            return Err(
                StayfinderError::config("Provider timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.defaults.max_offers_shown > 50 {
            return Err(
                StayfinderError::config("Cannot render more than 50 offers per reply").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(StayfinderError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(StayfinderError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.provider.base_url.starts_with("http://")
            && !self.provider.base_url.starts_with("https://")
        {
            return Err(StayfinderError::config(
                "Provider base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StayfinderConfig::default();
        assert_eq!(
            config.provider.base_url,
            "https://booking-com15.p.rapidapi.com"
        );
        assert_eq!(config.provider.timeout_seconds, 30);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.nightly_budget, 5000);
        assert_eq!(config.defaults.max_offers_shown, 5);
        assert!(config.provider.api_key.is_empty());
    }

    #[test]
    fn test_validation_accepts_missing_credentials() {
        let config = StayfinderConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_valid_api_key() {
        let mut config = StayfinderConfig::default();
        config.provider.api_key = "valid_api_key_123".to_string();
        config.provider.api_host = "booking-com15.p.rapidapi.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_short_api_key() {
        let mut config = StayfinderConfig::default();
        config.provider.api_key = "abc".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too short"));
    }

    #[test]
    fn test_validation_host_must_be_bare() {
        let mut config = StayfinderConfig::default();
        config.provider.api_host = "https://booking-com15.p.rapidapi.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("bare hostname"));
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let mut config = StayfinderConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_validation_numeric_ranges() {
        let mut config = StayfinderConfig::default();
        config.provider.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("timeout cannot exceed")
        );
    }

    #[test]
    fn test_validation_base_url_scheme() {
        let mut config = StayfinderConfig::default();
        config.provider.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = StayfinderConfig::default();
        config.provider.base_url = String::new();
        config.defaults.nightly_budget = 0;
        config.apply_defaults();
        assert_eq!(
            config.provider.base_url,
            "https://booking-com15.p.rapidapi.com"
        );
        assert_eq!(config.defaults.nightly_budget, 5000);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let path = std::env::temp_dir().join(format!("stayfinder-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[server]\nport = 8080\n\n[defaults]\nnightly_budget = 2500\n",
        )
        .unwrap();

        let config = StayfinderConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.defaults.nightly_budget, 2500);
        // Sections the file does not mention keep their defaults
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.provider.base_url,
            "https://booking-com15.p.rapidapi.com"
        );
    }

    #[test]
    fn test_shipped_defaults_file_is_layered() {
        // Run from the crate root, config/default.toml is the base layer
        // even when the operator's config file does not exist.
        let config =
            StayfinderConfig::load_from_path(Some(PathBuf::from("does-not-exist.toml"))).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.defaults.max_offers_shown, 5);
    }

    #[test]
    fn test_partial_sections_deserialize_with_defaults() {
        let config: StayfinderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.defaults.nightly_budget, 5000);
    }

    #[test]
    fn test_config_path_generation() {
        let path = StayfinderConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("stayfinder"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
