//! Converters between serde data and domain records

use serde::Serialize;
use serde_json::Value;

use crate::{
    domain::validation::{Field, Record, RecordValidator, ValidationErrors},
    infrastructure::schema::Schema,
    shared::error::{AppError, AppResult},
};

/// A JSON object viewed as a record
///
/// Object entries become fields in document order, annotated from the
/// schema. Schema fields the document lacks are not fields of the record,
/// so no rule runs for them.
#[derive(Debug, Clone)]
pub struct JsonRecord {
    fields: Vec<Field>,
}

impl JsonRecord {
    /// Build a record from an object-shaped JSON value
    pub fn new(value: &Value, schema: &Schema) -> AppResult<Self> {
        let object = value.as_object().ok_or_else(|| AppError::NotARecord {
            found: ValueConverter::shape_name(value).to_string(),
        })?;

        let fields = object
            .iter()
            .map(|(name, v)| {
                let field = Field::new(name.as_str(), v);
                match schema.annotation_for(name) {
                    Some(rules) => field.rules(rules),
                    None => field,
                }
            })
            .collect();

        Ok(Self { fields })
    }
}

impl Record for JsonRecord {
    fn fields(&self) -> Vec<Field> {
        self.fields.clone()
    }

    fn record_name(&self) -> &str {
        "json"
    }
}

/// Converter for turning serde values into record input
pub struct ValueConverter;

impl ValueConverter {
    /// Serialize any value to JSON so it can be walked against a schema
    ///
    /// Fields skipped by serde never reach the walker.
    pub fn to_record_value<T: Serialize + ?Sized>(value: &T) -> AppResult<Value> {
        Ok(serde_json::to_value(value)?)
    }

    /// Name of the JSON shape, as used in error messages
    pub fn shape_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl RecordValidator {
    /// Validate a JSON object against a schema
    pub fn validate_json(&self, value: &Value, schema: &Schema) -> AppResult<ValidationErrors> {
        let record = JsonRecord::new(value, schema)?;
        Ok(self.validate(&record))
    }

    /// Validate any serializable value against a schema
    pub fn validate_serialized<T: Serialize + ?Sized>(
        &self,
        value: &T,
        schema: &Schema,
    ) -> AppResult<ValidationErrors> {
        let value = ValueConverter::to_record_value(value)?;
        self.validate_json(&value, schema)
    }
}
