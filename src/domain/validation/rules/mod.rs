//! Built-in rules, grouped by category
//!
//! Each submodule exposes a `register_*` function that adds its rules to a
//! registry under construction.

pub mod date;
pub mod format;
pub mod numeric;
pub mod presence;
pub mod size;

use crate::shared::error::RuleError;

/// Parse the leading integer parameter shared by `min`, `max` and the size rules
pub(crate) fn integer_param(
    rule: &str,
    field: &str,
    params: &[&str],
    missing: &str,
) -> Result<i64, RuleError> {
    let raw = params
        .first()
        .ok_or_else(|| RuleError::parameter(missing.to_string()))?;
    raw.parse::<i64>()
        .map_err(|_| RuleError::parameter(format!("invalid {} parameter for {}", rule, field)))
}
