//! Field annotation parsing
//!
//! An annotation is a comma-separated list of rule invocations, each either
//! `name` or `name=param`. Tokens are produced by a plain comma split, so a
//! parameter can never contain a comma and a rule taking several parameters
//! cannot receive them through an annotation string.

use serde::{Deserialize, Serialize};

/// One rule invocation parsed from an annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInvocation {
    /// Registered rule name
    pub name: String,

    /// Raw string parameters, in order
    pub params: Vec<String>,
}

impl RuleInvocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Parameters as borrowed slices, the shape rule functions take
    pub fn param_refs(&self) -> Vec<&str> {
        self.params.iter().map(String::as_str).collect()
    }

    /// Parse a single token: split on the first `=`, then on `,`
    pub fn parse(token: &str) -> Self {
        match token.split_once('=') {
            Some((name, raw)) => Self {
                name: name.to_string(),
                params: raw.split(',').map(str::to_string).collect(),
            },
            None => Self::new(token),
        }
    }
}

/// Parse a full annotation into rule invocations, preserving order
///
/// An empty annotation yields no invocations.
pub fn parse_annotation(annotation: &str) -> Vec<RuleInvocation> {
    if annotation.is_empty() {
        return Vec::new();
    }
    annotation.split(',').map(RuleInvocation::parse).collect()
}
