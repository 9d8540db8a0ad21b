//! Application configuration structures
//!
//! This module contains the configuration consumed by the demo binary and by
//! `RuleRegistry::from_config`.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format: `text` or `json`
    #[validate(length(min = 1))]
    pub format: String,
}

impl LoggingConfig {
    /// Whether events are written as JSON objects
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Rule registry configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistryConfig {
    /// Built-in rules to leave out of the registry
    #[serde(default)]
    #[validate(length(max = 64))]
    pub disabled_rules: Vec<String>,
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Rule registry configuration
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl ValidatorConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        Self::load_from("Validator")
    }

    /// Load configuration from `name.{toml,json,yaml,...}` (optional) and
    /// `BEAN_VALIDATOR__*` environment variables
    pub fn load_from(name: &str) -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("BEAN_VALIDATOR")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("registry.disabled_rules")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::shared::error::AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: ValidatorConfig = config.try_deserialize()
            .map_err(|e| crate::shared::error::AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        // Validate configuration
        config.validate_config()
            .map_err(|e| crate::shared::error::AppError::Validation(format!("Configuration validation failed: {}", e)))?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.logging.validate()?;
        self.registry.validate()?;

        Ok(())
    }
}
