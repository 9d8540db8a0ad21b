use super::integer_param;
use crate::domain::validation::registry::RuleRegistry;
use crate::domain::validation::types::{RuleCategory, RuleDefinition};
use crate::domain::validation::value::FieldValue;
use crate::shared::error::{RuleError, RuleResult};

pub fn register_numeric(registry: &mut RuleRegistry) {
    registry.register_rule(RuleDefinition::new(
        "min",
        "Integers must be at least the bound",
        RuleCategory::Numeric,
        min,
    ));
    registry.register_rule(RuleDefinition::new(
        "max",
        "Integers must be at most the bound",
        RuleCategory::Numeric,
        max,
    ));
    registry.register_rule(RuleDefinition::new(
        "positive",
        "Number must be greater than zero",
        RuleCategory::Numeric,
        positive,
    ));
    registry.register_rule(RuleDefinition::new(
        "negative",
        "Number must be less than zero",
        RuleCategory::Numeric,
        negative,
    ));
    registry.register_rule(RuleDefinition::new(
        "positiveOrZero",
        "Number must be zero or greater",
        RuleCategory::Numeric,
        positive_or_zero,
    ));
    registry.register_rule(RuleDefinition::new(
        "negativeOrZero",
        "Number must be zero or less",
        RuleCategory::Numeric,
        negative_or_zero,
    ));
}

/// Non-integer values pass
pub fn min(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let minimum = integer_param("min", field, params, "min rule requires a parameter")?;
    match value.as_i128() {
        Some(v) if v < i128::from(minimum) => Err(RuleError::violation(format!(
            "{} must be at least {}",
            field, minimum
        ))),
        _ => Ok(()),
    }
}

/// Non-integer values pass
pub fn max(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let maximum = integer_param("max", field, params, "max rule requires a parameter")?;
    match value.as_i128() {
        Some(v) if v > i128::from(maximum) => Err(RuleError::violation(format!(
            "{} must be at most {}",
            field, maximum
        ))),
        _ => Ok(()),
    }
}

/// Non-numeric values always fail the sign rules
///
/// Unsigned integers are numeric here too, so `positive` accepts a non-zero
/// `u32` and `negative` rejects every unsigned value.
fn sign_check(field: &str, value: &FieldValue, accept: fn(f64) -> bool, wording: &str) -> RuleResult {
    match value.as_f64() {
        Some(num) if accept(num) => Ok(()),
        _ => Err(RuleError::violation(format!("{} must be {}", field, wording))),
    }
}

pub fn positive(field: &str, value: &FieldValue, _params: &[&str]) -> RuleResult {
    sign_check(field, value, |n| n > 0.0, "positive")
}

pub fn negative(field: &str, value: &FieldValue, _params: &[&str]) -> RuleResult {
    sign_check(field, value, |n| n < 0.0, "negative")
}

pub fn positive_or_zero(field: &str, value: &FieldValue, _params: &[&str]) -> RuleResult {
    sign_check(field, value, |n| n >= 0.0, "positive or zero")
}

pub fn negative_or_zero(field: &str, value: &FieldValue, _params: &[&str]) -> RuleResult {
    sign_check(field, value, |n| n <= 0.0, "negative or zero")
}
