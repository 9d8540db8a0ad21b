use super::integer_param;
use crate::domain::validation::registry::RuleRegistry;
use crate::domain::validation::types::{RuleCategory, RuleDefinition};
use crate::domain::validation::value::FieldValue;
use crate::shared::error::{RuleError, RuleResult};

pub fn register_size(registry: &mut RuleRegistry) {
    registry.register_rule(RuleDefinition::new(
        "size",
        "String or collection must have exactly n elements",
        RuleCategory::Size,
        size,
    ));
    registry.register_rule(RuleDefinition::new(
        "minSize",
        "String or collection must have at least n elements",
        RuleCategory::Size,
        min_size,
    ));
    registry.register_rule(RuleDefinition::new(
        "maxSize",
        "String or collection must have at most n elements",
        RuleCategory::Size,
        max_size,
    ));
}

/// Values without a length (numbers, nil, optionals) always fail
fn length_check(
    rule: &str,
    field: &str,
    value: &FieldValue,
    params: &[&str],
    accept: fn(i64, i64) -> bool,
    wording: &str,
) -> RuleResult {
    let bound = integer_param(
        rule,
        field,
        params,
        &format!("{} rule requires a size parameter", rule),
    )?;
    let len = value.len().and_then(|l| i64::try_from(l).ok());
    match len {
        Some(l) if accept(l, bound) => Ok(()),
        _ => Err(RuleError::violation(format!(
            "{} must have {} {} elements",
            field, wording, bound
        ))),
    }
}

pub fn size(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    length_check("size", field, value, params, |l, n| l == n, "exactly")
}

pub fn min_size(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    length_check("minSize", field, value, params, |l, n| l >= n, "at least")
}

pub fn max_size(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    length_check("maxSize", field, value, params, |l, n| l <= n, "at most")
}
