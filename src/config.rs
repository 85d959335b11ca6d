//! Configuration management for the `TripPlanner` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings. The
//! generative-AI API key is required: its absence fails startup with a
//! clear configuration error instead of a deferred failure at first use.

use crate::PlannerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripPlanner` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Generative-AI upstream configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Generative-AI upstream configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key for the generative-language API (required)
    pub api_key: Option<String>,
    /// Model identifier
    #[serde(default = "default_gemini_model")]
    pub model: String,
    /// Base URL for the generative-language API
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_gemini_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for failed requests
    #[serde(default = "default_gemini_max_retries")]
    pub max_retries: u32,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory holding the built static frontend
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
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

// Default value functions
fn default_gemini_model() -> String {
    "gemini-pro".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_timeout() -> u32 {
    30
}

fn default_gemini_max_retries() -> u32 {
    1
}

fn default_server_port() -> u16 {
    8080
}

fn default_frontend_dir() -> String {
    "frontend/dist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            timeout_seconds: default_gemini_timeout(),
            max_retries: default_gemini_max_retries(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            frontend_dir: default_frontend_dir(),
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

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

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

        // Add environment variable overrides with TRIPPLANNER_ prefix,
        // e.g. TRIPPLANNER_GEMINI__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLANNER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: PlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripplanner").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the generative-AI API key. The key is mandatory:
    /// without it every itinerary request would fail, so startup is
    /// rejected immediately.
    pub fn validate_api_key(&self) -> Result<()> {
        match &self.gemini.api_key {
            None => Err(PlannerError::config(
                "Missing Gemini API key. Set TRIPPLANNER_GEMINI__API_KEY or add gemini.api_key to the config file."
            ).into()),
            Some(api_key) if api_key.is_empty() => Err(PlannerError::config(
                "Gemini API key cannot be empty. Please provide a valid key."
            ).into()),
            Some(api_key) if api_key.len() < 8 => Err(PlannerError::config(
                "Gemini API key appears to be invalid (too short). Please check your API key."
            ).into()),
            Some(_) => Ok(()),
        }
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.gemini.timeout_seconds == 0 {
            return Err(PlannerError::config(
                "Gemini request timeout must be at least 1 second"
            ).into());
        }

        if self.gemini.timeout_seconds > 300 {
            return Err(PlannerError::config(
                "Gemini request timeout cannot exceed 300 seconds"
            ).into());
        }

        if self.gemini.max_retries > 10 {
            return Err(PlannerError::config(
                "Gemini max retries cannot exceed 10"
            ).into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PlannerError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PlannerError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        if !self.gemini.base_url.starts_with("http://") && !self.gemini.base_url.starts_with("https://") {
            return Err(PlannerError::config(
                "Gemini base URL must be a valid HTTP or HTTPS URL"
            ).into());
        }

        if self.gemini.model.is_empty() {
            return Err(PlannerError::config(
                "Gemini model identifier cannot be empty"
            ).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> PlannerConfig {
        let mut config = PlannerConfig::default();
        config.gemini.api_key = Some("valid_api_key_123".to_string());
        config
    }

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(
            config.gemini.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.gemini.model, "gemini-pro");
        assert_eq!(config.gemini.timeout_seconds, 30);
        assert_eq!(config.gemini.max_retries, 1);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(config.gemini.api_key.is_none());
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let config = PlannerConfig::default();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Missing Gemini API key"));
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let mut config = PlannerConfig::default();
        config.gemini.api_key = Some(String::new());
        let result = config.validate_api_key();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_valid_api_key_passes() {
        let config = config_with_key();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = config_with_key();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = config_with_key();
        config.gemini.timeout_seconds = 500; // Invalid - too high
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_base_url() {
        let mut config = config_with_key();
        config.gemini.base_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base URL"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = PlannerConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tripplanner"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
