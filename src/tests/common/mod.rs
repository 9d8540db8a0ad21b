//! Common test utilities
//!
//! This module provides shared helpers used across all test modules.

use std::sync::Arc;

use crate::{
    config::ValidatorConfig,
    domain::validation::{RecordValidator, RuleRegistry, ValidationErrors},
};

/// Validator over every built-in rule
pub fn default_validator() -> RecordValidator {
    RecordValidator::default()
}

/// Validator built the way the binary builds it
pub fn configured_validator(config: &ValidatorConfig) -> RecordValidator {
    RecordValidator::new(Arc::new(RuleRegistry::from_config(&config.registry)))
}

/// Assertion helpers
pub mod assertions {
    use super::*;

    /// (field, message) pairs, in reported order
    pub fn pairs(errors: &ValidationErrors) -> Vec<(&str, &str)> {
        errors
            .iter()
            .map(|e| (e.field.as_str(), e.message.as_str()))
            .collect()
    }

    /// Assert that validation passed
    pub fn assert_valid(errors: &ValidationErrors) {
        assert!(!errors.has_errors(), "unexpected validation errors: {}", errors);
    }

    /// Assert that `field` failed with exactly `messages`, in order
    pub fn assert_field_errors(errors: &ValidationErrors, field: &str, messages: &[&str]) {
        let actual: Vec<&str> = errors
            .get_field_errors(field)
            .into_iter()
            .map(|e| e.message.as_str())
            .collect();
        pretty_assertions::assert_eq!(actual, messages.to_vec());
    }
}
