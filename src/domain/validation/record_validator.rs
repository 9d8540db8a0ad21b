//! Record walker
//!
//! Applies each public field's annotation against the registry and gathers
//! every failure.

use std::sync::Arc;

use crate::shared::logging::LoggingUtils;
use super::annotation::parse_annotation;
use super::errors::ValidationErrors;
use super::record::{Field, Record};
use super::registry::RuleRegistry;

/// Walks records and applies the registry's rules to annotated fields
#[derive(Debug, Clone)]
pub struct RecordValidator {
    registry: Arc<RuleRegistry>,
}

impl RecordValidator {
    /// Create a validator over a shared registry
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate every public, annotated field of `record`
    ///
    /// Errors come back in field declaration order, then in the order the
    /// rules are listed in each annotation. A rule name the registry does not
    /// know yields a single `unknown validation rule` entry and the remaining
    /// rules still run.
    pub fn validate<R: Record + ?Sized>(&self, record: &R) -> ValidationErrors {
        let fields = record.fields();
        let record_name = record.record_name();

        LoggingUtils::log_record_start(record_name, fields.len());
        let errors = self.walk(&fields);
        LoggingUtils::log_record_done(record_name, errors.len());

        errors
    }

    /// Validate an explicit descriptor list
    pub fn validate_fields(&self, fields: &[Field]) -> ValidationErrors {
        self.validate(fields)
    }

    fn walk(&self, fields: &[Field]) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for field in fields.iter().filter(|f| f.is_public()) {
            let Some(annotation) = field.annotation.as_deref() else {
                continue;
            };

            for invocation in parse_annotation(annotation) {
                let Some(rule) = self.registry.get_rule(&invocation.name) else {
                    LoggingUtils::log_unknown_rule(&field.name, &invocation.name);
                    errors.push(
                        field.name.as_str(),
                        format!("unknown validation rule: {}", invocation.name),
                    );
                    continue;
                };

                let outcome = rule.apply(&field.name, &field.value, &invocation.param_refs());
                LoggingUtils::log_rule_outcome(&field.name, &invocation.name, &outcome);
                if let Err(err) = outcome {
                    errors.push(field.name.as_str(), err.message());
                }
            }
        }

        errors
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(Arc::new(RuleRegistry::new()))
    }
}
