//! Integration tests for the validator
//!
//! This module walks complete records through the default and configured
//! registries:
//! - Typed records declared with `record!`
//! - JSON documents and serializable structs checked against schemas
//! - Registries shaped by configuration
//! - Sharing one registry across threads

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{
    domain::validation::{Field, FieldValue, RecordValidator, RuleRegistry, ValidationErrors},
    infrastructure::Schema,
    shared::error::AppError,
    tests::{
        common::{assertions, configured_validator, default_validator},
        config,
        fixtures::{self, Account, Booking, Signup, User},
        TestResult,
    },
};

#[test]
fn test_invalid_user_reports_every_failure() {
    config::init();
    let errors = default_validator().validate(&User::invalid());

    assert_eq!(
        assertions::pairs(&errors),
        vec![
            ("name", "name is required"),
            ("name", "name must not be blank"),
            ("age", "age must be at least 18"),
            ("email", "email is not a valid email"),
            ("hobbies", "hobbies must not be empty"),
        ]
    );
    assert_eq!(
        errors.to_string(),
        "name: name is required; name: name must not be blank; age: age must be at least 18; \
         email: email is not a valid email; hobbies: hobbies must not be empty"
    );
}

#[test]
fn test_valid_user_passes() {
    config::init();
    assertions::assert_valid(&default_validator().validate(&User::valid()));
}

#[test]
fn test_validation_is_idempotent() {
    let validator = default_validator();
    let user = User::invalid();
    let first = validator.validate(&user);
    let second = validator.validate(&user);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_indirect_records_are_dereferenced() {
    let validator = default_validator();
    let direct = validator.validate(&User::invalid());
    assert_eq!(validator.validate(&Box::new(User::invalid())), direct);
    assert_eq!(validator.validate(&Arc::new(User::invalid())), direct);
    assert_eq!(validator.validate(&&User::invalid()), direct);
}

#[test]
fn test_record_without_annotations_is_valid() {
    let fields = vec![Field::new("a", ""), Field::new("b", FieldValue::Nil)];
    assert!(default_validator().validate_fields(&fields).is_empty());
    assert!(default_validator().validate_fields(&[]).is_empty());
}

#[test]
fn test_account_rules() {
    config::init();
    let validator = default_validator();
    assertions::assert_valid(&validator.validate(&Account::valid()));

    let account = Account {
        balance: -0.01,
        debt: 1,
        credits: 0,
        overdraft: 0.0,
        accepted_terms: false,
        referrer: None,
        pin: String::new(),
        tags: vec![],
    };
    let errors = validator.validate(&account);
    assert_eq!(
        errors.messages(),
        vec![
            "balance must be positive or zero",
            "debt must be negative or zero",
            "credits must be positive",
            "overdraft must be negative",
            "accepted_terms must be true",
            "referrer must not be null",
            "tags must have at least 1 elements",
        ]
    );
    // private fields never reach the rules
    assert!(errors.get_field_errors("pin").is_empty());
}

#[test]
fn test_too_many_tags() {
    let mut account = Account::valid();
    account.tags = vec!["a".into(), "b".into(), "c".into(), "d".into()];
    let errors = default_validator().validate(&account);
    assertions::assert_field_errors(&errors, "tags", &["tags must have at most 3 elements"]);
}

#[test]
fn test_booking_dates() {
    config::init();
    let booking = Booking {
        day: "2024-02-30".to_string(),
        checkout: "01/02/2024".to_string(),
        window: "2024-06-01".to_string(),
        created: "2024-01-01".to_string(),
    };
    let errors = default_validator().validate(&booking);

    assertions::assert_field_errors(&errors, "day", &["day must match the format 2006-01-02"]);
    assertions::assert_field_errors(&errors, "checkout", &[]);
    // an annotation cannot carry the second parameter of `after`
    assertions::assert_field_errors(
        &errors,
        "window",
        &["after rule requires a reference date and format (e.g., '2024-01-01,2006-01-02')"],
    );
    assertions::assert_field_errors(&errors, "created", &["unknown validation rule: bogus"]);
}

#[test]
fn test_multi_parameter_annotations_split_into_unknown_rules() {
    let fields = vec![
        Field::new("when", "2024-06-01").rules("between=2024-01-01,2024-12-31,2006-01-02"),
    ];
    let errors = default_validator().validate_fields(&fields);
    assert_eq!(
        errors.messages(),
        vec![
            "between rule requires a start date, end date, and format (e.g., '2024-01-01,2024-12-31,2006-01-02')",
            "unknown validation rule: 2024-12-31",
            "unknown validation rule: 2006-01-02",
        ]
    );
}

#[test]
fn test_between_through_the_registry() {
    let registry = RuleRegistry::new();
    let params = ["2024-01-01", "2024-12-31", "2006-01-02"];
    let result = registry.apply("between", "when", &FieldValue::from("2023-12-31"), &params);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("2024-01-01") && message.contains("2024-12-31"));
    assert!(registry
        .apply("between", "when", &FieldValue::from("2024-06-01"), &params)
        .is_ok());
}

#[test]
fn test_json_document_against_schema() -> TestResult<()> {
    config::init();
    let schema = Schema::from_toml_str(fixtures::SIGNUP_SCHEMA)?;
    assert_eq!(schema, fixtures::signup_schema());

    let errors = default_validator().validate_json(&fixtures::signup_document(), &schema)?;
    assert_eq!(
        assertions::pairs(&errors),
        vec![
            ("username", "username must have at least 3 elements"),
            ("age", "age must be at least 13"),
            ("email", "email is not a valid email"),
        ]
    );
    Ok(())
}

#[test]
fn test_serialized_struct_against_schema() -> TestResult<()> {
    let signup = Signup {
        username: "alice".to_string(),
        age: 30,
        email: "alice@example.com".to_string(),
        password: String::new(),
    };
    let errors = default_validator().validate_serialized(&signup, &fixtures::signup_schema())?;
    // `password` is skipped by serde, so its rules never run
    assertions::assert_valid(&errors);
    Ok(())
}

#[test]
fn test_non_record_json_is_a_precondition_error() {
    let schema = fixtures::signup_schema();
    let result = default_validator().validate_json(&json!([{"username": "x"}]), &schema);
    assert_eq!(result, Err(AppError::NotARecord { found: "array".to_string() }));

    let result = default_validator().validate_serialized(&42, &schema);
    assert_eq!(result, Err(AppError::NotARecord { found: "number".to_string() }));
}

#[test]
fn test_configured_registry_reports_disabled_rules_as_unknown() {
    let validator = configured_validator(&config::restricted_config());
    let errors = validator.validate(&User::invalid());
    assertions::assert_field_errors(&errors, "email", &["unknown validation rule: email"]);
    assert_eq!(validator.registry().len(), RuleRegistry::new().len() - 2);
}

#[test]
fn test_errors_serialize_for_callers() {
    let errors = default_validator().validate(&User::invalid());
    let json = errors.to_json();
    assert_eq!(json["errors"][0], json!({"field": "name", "message": "name is required"}));

    let encoded = serde_json::to_string(&errors).unwrap();
    let decoded: ValidationErrors = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, errors);
}

#[test]
fn test_into_result() {
    assert!(default_validator().validate(&User::valid()).into_result().is_ok());
    let err = default_validator().validate(&User::invalid()).into_result().unwrap_err();
    assert_eq!(err.len(), 5);
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(RuleRegistry::new());
    let expected = RecordValidator::new(Arc::clone(&registry)).validate(&User::invalid());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = RecordValidator::new(Arc::clone(&registry));
            thread::spawn(move || validator.validate(&User::invalid()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
