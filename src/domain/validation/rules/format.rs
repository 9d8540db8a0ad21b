use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::validation::registry::RuleRegistry;
use crate::domain::validation::types::{RuleCategory, RuleDefinition};
use crate::domain::validation::value::FieldValue;
use crate::shared::error::{RuleError, RuleResult};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

pub fn register_format(registry: &mut RuleRegistry) {
    registry.register_rule(RuleDefinition::new(
        "email",
        "Strings must look like an email address",
        RuleCategory::Format,
        email,
    ));
}

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_REGEX.is_match(candidate)
}

/// Only strings are checked; anything else passes
pub fn email(field: &str, value: &FieldValue, _params: &[&str]) -> RuleResult {
    match value.as_str() {
        Some(s) if !is_valid_email(s) => Err(RuleError::violation(format!(
            "{} is not a valid email",
            field
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rule() {
        assert!(email("TestField", &FieldValue::from("test@example.com"), &[]).is_ok());
        for bad in ["invalid-email", "", "@example.com", "user@", "user@host"] {
            assert_eq!(
                email("TestField", &FieldValue::from(bad), &[])
                    .unwrap_err()
                    .to_string(),
                "TestField is not a valid email",
                "candidate: {:?}",
                bad
            );
        }
    }

    #[test]
    fn email_variations() {
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user.name@example.co.uk"));
        assert!(is_valid_email("a_b%c@sub-domain.io"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn non_strings_pass() {
        assert!(email("TestField", &FieldValue::from(42), &[]).is_ok());
        assert!(email("TestField", &FieldValue::Nil, &[]).is_ok());
    }
}
