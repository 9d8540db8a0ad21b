//! Domain layer - Core validation logic and models
//!
//! This module contains the rule engine and record model, independent of
//! where records come from (typed structs, JSON documents, configuration).

pub mod validation;

pub use validation::{
    Field, FieldValue, Record, RecordValidator, RuleCategory, RuleDefinition, RuleRegistry,
    ValidationError, ValidationErrors, Visibility,
};
