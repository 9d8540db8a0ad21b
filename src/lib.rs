//! Bean Validator - declarative field validation for Rust records
//!
//! Fields carry annotations such as `required,min=18` and a walker applies
//! the named rules from a registry, collecting every (field, message)
//! failure instead of stopping at the first.
//!
//! ```
//! use bean_validator::{record, RecordValidator};
//!
//! struct User {
//!     name: String,
//!     age: i32,
//! }
//!
//! record!(User {
//!     name: "required,non-blank",
//!     age: "min=18",
//! });
//!
//! let errors = RecordValidator::default().validate(&User { name: "Ann".into(), age: 16 });
//! assert_eq!(errors.to_string(), "age: age must be at least 18");
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use crate::config::{ConfigValidator, ValidatorConfig};
pub use crate::domain::validation::{
    parse_annotation, Field, FieldValue, Record, RecordValidator, RuleCategory, RuleDefinition,
    RuleInvocation, RuleRegistry, ValidationError, ValidationErrors, Visibility,
};
pub use crate::infrastructure::{JsonRecord, Schema, SchemaField, ValueConverter};
pub use crate::shared::error::{AppError, AppResult, RuleError, RuleResult};
pub use crate::shared::logging::LoggingUtils;

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;

#[cfg(test)]
mod tests;
