use std::collections::HashMap;

use crate::config::RegistryConfig;
use crate::shared::error::{RuleError, RuleResult};
use super::types::RuleDefinition;
use super::value::FieldValue;
use super::rules::{
    date::register_date,
    format::register_format,
    numeric::register_numeric,
    presence::register_presence,
    size::register_size,
};

/// Rule registry keyed by annotation name
///
/// Populated once, then shared read-only between validators.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    pub(crate) rules: HashMap<String, RuleDefinition>,
}

impl RuleRegistry {
    /// Create a registry holding every built-in rule
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register_default_rules();

        registry
    }

    /// Create a registry with no rules at all
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Built-in rules minus the ones the configuration disables
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut registry = Self::new();
        for name in &config.disabled_rules {
            registry.rules.remove(name);
        }
        registry
    }

    /// Register a rule definition, replacing any rule with the same name
    pub fn register_rule(&mut self, rule: RuleDefinition) {
        self.rules.insert(rule.name.clone(), rule);
    }

    /// Get a rule definition
    pub fn get_rule(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted
    pub fn rule_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up `name` and run it against one value
    pub fn apply(&self, name: &str, field: &str, value: &FieldValue, params: &[&str]) -> RuleResult {
        match self.rules.get(name) {
            Some(rule) => rule.apply(field, value, params),
            None => Err(RuleError::violation(format!("unknown validation rule: {}", name))),
        }
    }

    fn register_default_rules(&mut self) {
        register_presence(self);
        register_numeric(self);
        register_size(self);
        register_format(self);
        register_date(self);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self { Self::new() }
}
