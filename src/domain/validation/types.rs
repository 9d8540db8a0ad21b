//! Rule definitions held by the registry

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::FieldValue;
use crate::shared::error::RuleResult;

/// Signature shared by every rule: (field name, value, parameters)
pub type RuleFn = fn(&str, &FieldValue, &[&str]) -> RuleResult;

/// Broad grouping of the built-in rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Presence and truthiness checks: required, non-null, non-blank, non-empty, isTrue
    Presence,
    /// Integer bounds and sign checks
    Numeric,
    /// String and collection lengths
    Size,
    /// Textual formats such as email
    Format,
    /// Date parsing and comparison
    Date,
}

/// A named rule
#[derive(Clone)]
pub struct RuleDefinition {
    /// Rule name used in annotations
    pub name: String,

    /// Short human description
    pub description: String,

    pub category: RuleCategory,

    /// The predicate itself
    pub check: RuleFn,
}

impl RuleDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: RuleCategory,
        check: RuleFn,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            check,
        }
    }

    /// Run the rule against a field value
    pub fn apply(&self, field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
        (self.check)(field, value, params)
    }
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}
