//! Field schemas for records without a hand-written `Record` impl
//!
//! A schema is an ordered list of (field, annotation) registrations. It can
//! be built in code or loaded from TOML:
//!
//! ```toml
//! [[fields]]
//! name = "email"
//! rules = "required,email"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::shared::error::{AppError, AppResult};

/// One schema entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,

    /// Annotation in the usual `rule,rule=param` form
    #[serde(default)]
    pub rules: String,
}

/// Ordered field registrations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with an annotation; a later registration of the same
    /// name replaces the earlier one in place
    pub fn field(mut self, name: impl Into<String>, rules: impl Into<String>) -> Self {
        let name = name.into();
        let rules = rules.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.rules = rules,
            None => self.fields.push(SchemaField { name, rules }),
        }
        self
    }

    /// Annotation registered for `name`, if any
    pub fn annotation_for(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.rules.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a TOML schema document
    pub fn from_toml_str(source: &str) -> AppResult<Self> {
        let schema: Schema = toml::from_str(source)?;
        schema.check_names()?;
        Ok(schema)
    }

    /// Read and parse a TOML schema file
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            AppError::Schema(format!("Failed to read schema {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&source)
    }

    fn check_names(&self) -> AppResult<()> {
        for (i, field) in self.fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(AppError::Schema(format!("Field #{} has an empty name", i + 1)));
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(AppError::Schema(format!("Field {} is declared twice", field.name)));
            }
        }
        Ok(())
    }
}
