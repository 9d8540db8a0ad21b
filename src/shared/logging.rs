//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{debug, trace, warn};

use crate::shared::error::{AppError, RuleError};

/// Logging utilities for the crate
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    ///
    /// `json` switches the fmt layer to one JSON object per event.
    pub fn initialize(level: &str, json: bool) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber_builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = if json {
            tracing::subscriber::set_global_default(subscriber_builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(subscriber_builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log the start of a record walk
    pub fn log_record_start(record_type: &str, field_count: usize) {
        debug!(
            record = %record_type,
            fields = %field_count,
            "Validating record"
        );
    }

    /// Log the outcome of a record walk
    pub fn log_record_done(record_type: &str, error_count: usize) {
        debug!(
            record = %record_type,
            errors = %error_count,
            "Record validation finished"
        );
    }

    /// Log a single rule outcome
    pub fn log_rule_outcome(field: &str, rule: &str, outcome: &Result<(), RuleError>) {
        match outcome {
            Ok(()) => trace!(field = %field, rule = %rule, "Rule passed"),
            Err(RuleError::Violation(message)) => {
                trace!(field = %field, rule = %rule, message = %message, "Rule failed")
            }
            Err(RuleError::Parameter(message)) => warn!(
                field = %field,
                rule = %rule,
                message = %message,
                "Rule parameters are malformed"
            ),
        }
    }

    /// Log an annotation naming a rule the registry does not know
    pub fn log_unknown_rule(field: &str, rule: &str) {
        warn!(
            field = %field,
            rule = %rule,
            "Unknown validation rule in annotation"
        );
    }
}
