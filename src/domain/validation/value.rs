//! Runtime field values
//!
//! Rules never see concrete Rust types. Every field is lowered into a
//! `FieldValue` first, which keeps the rule signature uniform and lets one
//! rule apply across integer widths, strings, collections and optionals.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dynamic value of a record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Untyped nil
    Nil,
    Bool(bool),
    /// Any signed integer width
    Int(i64),
    /// Any unsigned integer width
    Uint(u64),
    /// 32 or 64-bit float
    Float(f64),
    Str(String),
    /// Slices, arrays, sets
    List(Vec<FieldValue>),
    /// Maps with string keys, in iteration order
    Map(Vec<(String, FieldValue)>),
    /// Indirect reference; `None` is a nil reference
    Optional(Option<Box<FieldValue>>),
}

impl FieldValue {
    /// Whether the value is empty in the sense of the `required` rule
    ///
    /// Strings are trimmed first, so whitespace-only text is empty. Scalars
    /// are empty when equal to their zero value. A non-nil optional is never
    /// empty, whatever it points to.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Nil => true,
            FieldValue::Str(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Map(entries) => entries.is_empty(),
            FieldValue::Optional(inner) => inner.is_none(),
            FieldValue::Bool(b) => !*b,
            FieldValue::Int(n) => *n == 0,
            FieldValue::Uint(n) => *n == 0,
            FieldValue::Float(f) => *f == 0.0,
        }
    }

    /// Untyped nil or a nil reference
    pub fn is_nil(&self) -> bool {
        matches!(self, FieldValue::Nil | FieldValue::Optional(None))
    }

    /// Numeric coercion shared by the sign rules
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(n) => Some(*n as f64),
            FieldValue::Uint(n) => Some(*n as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Integer view used by `min`/`max`
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            FieldValue::Int(n) => Some(i128::from(*n)),
            FieldValue::Uint(n) => Some(i128::from(*n)),
            _ => None,
        }
    }

    /// Length of a string (in bytes) or a collection
    pub fn len(&self) -> Option<usize> {
        match self {
            FieldValue::Str(s) => Some(s.len()),
            FieldValue::List(items) => Some(items.len()),
            FieldValue::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the value's shape, used in logs and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Nil => "nil",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "int",
            FieldValue::Uint(_) => "uint",
            FieldValue::Float(_) => "float",
            FieldValue::Str(_) => "string",
            FieldValue::List(_) => "list",
            FieldValue::Map(_) => "map",
            FieldValue::Optional(_) => "optional",
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for FieldValue {
                fn from(value: $t) -> Self {
                    FieldValue::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64, u8, u16, u32, u64, usize);

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float(f64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Str(value.clone())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<FieldValue>> From<&[T]> for FieldValue {
    fn from(items: &[T]) -> Self {
        FieldValue::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Clone + Into<FieldValue>> From<&Vec<T>> for FieldValue {
    fn from(items: &Vec<T>) -> Self {
        FieldValue::from(items.as_slice())
    }
}

impl<T: Into<FieldValue>, const N: usize> From<[T; N]> for FieldValue {
    fn from(items: [T; N]) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        FieldValue::Optional(value.map(|v| Box::new(v.into())))
    }
}

impl<T: Clone + Into<FieldValue>> From<&Option<T>> for FieldValue {
    fn from(value: &Option<T>) -> Self {
        FieldValue::from(value.clone())
    }
}

impl<V: Into<FieldValue>> From<BTreeMap<String, V>> for FieldValue {
    fn from(map: BTreeMap<String, V>) -> Self {
        FieldValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<V: Into<FieldValue>> From<HashMap<String, V>> for FieldValue {
    fn from(map: HashMap<String, V>) -> Self {
        let mut entries: Vec<(String, FieldValue)> =
            map.into_iter().map(|(k, v)| (k, v.into())).collect();
        // HashMap order is unstable; sort so repeated walks stay identical
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        FieldValue::Map(entries)
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Optional(None),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::Uint(u)
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => FieldValue::Str(s.clone()),
            Value::Array(items) => FieldValue::List(items.iter().map(FieldValue::from).collect()),
            Value::Object(map) => FieldValue::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::from(&value)
    }
}
