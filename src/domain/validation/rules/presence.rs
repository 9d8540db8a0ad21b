use crate::domain::validation::registry::RuleRegistry;
use crate::domain::validation::types::{RuleCategory, RuleDefinition};
use crate::domain::validation::value::FieldValue;
use crate::shared::error::{RuleError, RuleResult};

pub fn register_presence(registry: &mut RuleRegistry) {
    registry.register_rule(RuleDefinition::new(
        "required",
        "Value must not be nil, zero, blank or an empty collection",
        RuleCategory::Presence,
        required,
    ));
    registry.register_rule(RuleDefinition::new(
        "non-null",
        "Value must not be nil",
        RuleCategory::Presence,
        non_null,
    ));
    registry.register_rule(RuleDefinition::new(
        "non-blank",
        "Strings must contain a non-whitespace character",
        RuleCategory::Presence,
        non_blank,
    ));
    registry.register_rule(RuleDefinition::new(
        "non-empty",
        "Value must not be empty",
        RuleCategory::Presence,
        non_empty,
    ));
    registry.register_rule(RuleDefinition::new(
        "isTrue",
        "Value must be boolean true",
        RuleCategory::Presence,
        is_true,
    ));
}

pub fn required(field: &str, value: &FieldValue, _params: &[&str]) -> RuleResult {
    if value.is_empty() {
        return Err(RuleError::violation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn non_null(field: &str, value: &FieldValue, _params: &[&str]) -> RuleResult {
    if value.is_nil() {
        return Err(RuleError::violation(format!("{} must not be null", field)));
    }
    Ok(())
}

/// Only strings are checked; anything else passes
pub fn non_blank(field: &str, value: &FieldValue, _params: &[&str]) -> RuleResult {
    match value.as_str() {
        Some(s) if s.trim().is_empty() => Err(RuleError::violation(format!(
            "{} must not be blank",
            field
        ))),
        _ => Ok(()),
    }
}

pub fn non_empty(field: &str, value: &FieldValue, _params: &[&str]) -> RuleResult {
    if value.is_empty() {
        return Err(RuleError::violation(format!("{} must not be empty", field)));
    }
    Ok(())
}

pub fn is_true(field: &str, value: &FieldValue, _params: &[&str]) -> RuleResult {
    if value.as_bool() == Some(true) {
        return Ok(());
    }
    Err(RuleError::violation(format!("{} must be true", field)))
}
