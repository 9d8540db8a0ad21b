//! Test suite for the validator
//!
//! This module provides the cross-module tests:
//! - Integration tests walking typed records, JSON documents and configs
//! - Shared fixtures (sample records, schemas, documents)
//! - Assertion helpers

pub mod common;
pub mod fixtures;
pub mod integration;

/// Test configuration and utilities
pub mod config {
    use crate::config::ValidatorConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            // Initialize tracing for tests
            let _ = tracing_subscriber::fmt()
                .with_env_filter("trace")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> ValidatorConfig {
        let mut config = ValidatorConfig::default();

        config.logging.level = "debug".to_string();

        config
    }

    /// Configuration with a couple of rules disabled
    pub fn restricted_config() -> ValidatorConfig {
        let mut config = test_config();
        config.registry.disabled_rules = vec!["email".to_string(), "isTrue".to_string()];
        config
    }
}

/// Test result types
pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_initialization() {
        config::init();
        let test_config = config::test_config();
        assert_eq!(test_config.logging.level, "debug");
        assert!(test_config.registry.disabled_rules.is_empty());
    }

    #[test]
    fn test_restricted_config() {
        let restricted = config::restricted_config();
        assert!(crate::config::ConfigValidator::validate_config(&restricted).is_ok());
        assert_eq!(restricted.registry.disabled_rules.len(), 2);
    }
}
