//! Error handling module
//!
//! This module provides centralized error handling for the crate. Two tiers
//! exist: `AppError` for programmer and environment faults (bad config, a
//! value that is not a record), and `RuleError` for the recoverable outcome
//! of a single rule application, which always ends up as an entry in a
//! validation error collection.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Input must be a record (object-shaped value), found {found}")]
    NotARecord { found: String },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Schema(err.to_string())
    }
}

/// Failure reported by a single rule function
///
/// Both variants render as the bare message; the variant only tells the
/// walker whether the value broke the rule or the rule was misconfigured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The field value does not satisfy the rule
    #[error("{0}")]
    Violation(String),

    /// The rule parameters are missing or malformed
    #[error("{0}")]
    Parameter(String),
}

impl RuleError {
    pub fn violation(message: impl Into<String>) -> Self {
        RuleError::Violation(message.into())
    }

    pub fn parameter(message: impl Into<String>) -> Self {
        RuleError::Parameter(message.into())
    }

    /// Human-readable message carried by either variant
    pub fn message(&self) -> &str {
        match self {
            RuleError::Violation(msg) | RuleError::Parameter(msg) => msg,
        }
    }

    pub fn is_parameter_error(&self) -> bool {
        matches!(self, RuleError::Parameter(_))
    }
}

/// Result returned by every rule function
pub type RuleResult = Result<(), RuleError>;
