//! Date rules
//!
//! Every rule takes the layout as a parameter (see `layout`). Relative rules
//! compare against the current UTC day; `pastInclusive` compares against the
//! current instant instead.

use chrono::{DateTime, Utc};

use crate::domain::validation::layout::{today, DateLayout};
use crate::domain::validation::registry::RuleRegistry;
use crate::domain::validation::types::{RuleCategory, RuleDefinition, RuleFn};
use crate::domain::validation::value::FieldValue;
use crate::shared::error::{RuleError, RuleResult};

pub fn register_date(registry: &mut RuleRegistry) {
    let rules: [(&str, &str, RuleFn); 9] = [
        ("date", "String must parse under the layout", date),
        ("date-format", "String must parse under the layout", date_format),
        ("after", "Date must be strictly after the reference date", after),
        ("before", "Date must be strictly before the reference date", before),
        ("between", "Date must fall within [start, end]", between),
        ("past", "Date must be before today", past),
        ("future", "Date must be after today", future),
        ("pastInclusive", "Date must not be after the current instant", past_inclusive),
        ("futureInclusive", "Date must not be before today", future_inclusive),
    ];
    for (name, description, check) in rules {
        registry.register_rule(RuleDefinition::new(name, description, RuleCategory::Date, check));
    }
}

/// Parse the field value under `layout`, reporting type and format mismatches
fn parse_value(field: &str, value: &FieldValue, layout: &DateLayout) -> Result<DateTime<Utc>, RuleError> {
    let text = value.as_str().ok_or_else(|| {
        RuleError::violation(format!("{} must be a string representing a date", field))
    })?;
    layout.parse(text).ok_or_else(|| {
        RuleError::violation(format!("{} must match the format {}", field, layout.source()))
    })
}

fn format_param<'a>(params: &[&'a str], missing: &str) -> Result<&'a str, RuleError> {
    params
        .first()
        .copied()
        .ok_or_else(|| RuleError::parameter(missing.to_string()))
}

pub fn date(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let layout = format_param(
        params,
        "date rule requires a format parameter (e.g., '2006-01-02')",
    )?;
    parse_value(field, value, &DateLayout::compile(layout)).map(|_| ())
}

pub fn date_format(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let layout = format_param(params, "date-format rule requires a format parameter")?;
    parse_value(field, value, &DateLayout::compile(layout)).map(|_| ())
}

pub fn after(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let [reference, layout, ..] = params else {
        return Err(RuleError::parameter(
            "after rule requires a reference date and format (e.g., '2024-01-01,2006-01-02')",
        ));
    };
    let layout = DateLayout::compile(layout);
    let parsed = parse_value(field, value, &layout)?;
    let reference_date = layout
        .parse(reference)
        .ok_or_else(|| RuleError::parameter(format!("invalid reference date for {}", field)))?;

    if parsed <= reference_date {
        return Err(RuleError::violation(format!("{} must be after {}", field, reference)));
    }
    Ok(())
}

pub fn before(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let [reference, layout, ..] = params else {
        return Err(RuleError::parameter(
            "before rule requires a reference date and format (e.g., '2024-01-01,2006-01-02')",
        ));
    };
    let layout = DateLayout::compile(layout);
    let parsed = parse_value(field, value, &layout)?;
    let reference_date = layout
        .parse(reference)
        .ok_or_else(|| RuleError::parameter(format!("invalid reference date for {}", field)))?;

    if parsed >= reference_date {
        return Err(RuleError::violation(format!("{} must be before {}", field, reference)));
    }
    Ok(())
}

pub fn between(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let [start, end, layout, ..] = params else {
        return Err(RuleError::parameter(
            "between rule requires a start date, end date, and format (e.g., '2024-01-01,2024-12-31,2006-01-02')",
        ));
    };
    let layout = DateLayout::compile(layout);
    let parsed = parse_value(field, value, &layout)?;
    let start_date = layout
        .parse(start)
        .ok_or_else(|| RuleError::parameter(format!("invalid start date for {}", field)))?;
    let end_date = layout
        .parse(end)
        .ok_or_else(|| RuleError::parameter(format!("invalid end date for {}", field)))?;

    if parsed < start_date || parsed > end_date {
        return Err(RuleError::violation(format!(
            "{} must be between {} and {}",
            field, start, end
        )));
    }
    Ok(())
}

/// Shared body of the four rules relative to the present
fn relative_check(
    rule: &str,
    field: &str,
    value: &FieldValue,
    params: &[&str],
    accept: impl Fn(DateTime<Utc>) -> bool,
    wording: &str,
) -> RuleResult {
    let layout = format_param(
        params,
        &format!("{} rule requires a format parameter (e.g., '2006-01-02')", rule),
    )?;
    let parsed = parse_value(field, value, &DateLayout::compile(layout))?;
    if accept(parsed) {
        Ok(())
    } else {
        Err(RuleError::violation(format!("{} must be {}", field, wording)))
    }
}

pub fn past(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let today = today();
    relative_check("past", field, value, params, |d| d < today, "in the past")
}

pub fn future(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let today = today();
    relative_check("future", field, value, params, |d| d > today, "in the future")
}

/// Compares against the current instant, not the start of today
pub fn past_inclusive(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let now = Utc::now();
    relative_check(
        "past-inclusive",
        field,
        value,
        params,
        |d| d <= now,
        "in the past or today",
    )
}

pub fn future_inclusive(field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
    let today = today();
    relative_check(
        "future-inclusive",
        field,
        value,
        params,
        |d| d >= today,
        "in the future or today",
    )
}
