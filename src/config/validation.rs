//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::app_config::{LoggingConfig, RegistryConfig, ValidatorConfig};
use crate::domain::validation::RuleRegistry;
use crate::shared::error::AppError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &ValidatorConfig) -> crate::Result<()> {
        Self::validate_logging_config(&config.logging)?;

        Self::validate_registry_config(&config.registry)?;

        Ok(())
    }

    /// Validate logging configuration
    fn validate_logging_config(logging: &LoggingConfig) -> crate::Result<()> {
        if !LOG_LEVELS.contains(&logging.level.to_ascii_lowercase().as_str()) {
            return Err(AppError::Validation(format!("Invalid log level: {}", logging.level)));
        }

        if !LOG_FORMATS.contains(&logging.format.to_ascii_lowercase().as_str()) {
            return Err(AppError::Validation(format!("Invalid log format: {}", logging.format)));
        }

        Ok(())
    }

    /// Every disabled rule must name a built-in rule
    fn validate_registry_config(registry: &RegistryConfig) -> crate::Result<()> {
        let builtins = RuleRegistry::new();
        for name in &registry.disabled_rules {
            if !builtins.contains(name) {
                return Err(AppError::Validation(format!(
                    "Cannot disable unknown validation rule: {}",
                    name
                )));
            }
        }

        Ok(())
    }
}
