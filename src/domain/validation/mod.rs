//! Domain validation module
//!
//! This module contains the core validation logic: runtime field values, the
//! annotation parser, the built-in rules and their registry, and the record
//! walker that applies them.

pub mod annotation;
pub mod errors;
pub mod layout;
pub mod record;
pub mod record_validator;
pub mod registry;
pub mod rules;
pub mod types;
pub mod value;

pub use annotation::{parse_annotation, RuleInvocation};
pub use errors::{ValidationError, ValidationErrors};
pub use layout::DateLayout;
pub use record::{Field, Record, Visibility};
pub use record_validator::RecordValidator;
pub use registry::RuleRegistry;
pub use types::{RuleCategory, RuleDefinition, RuleFn};
pub use value::FieldValue;
