//! Leaf validators: strings, numbers, booleans, literals and enums.

use serde_json::Value;

use crate::schema_object::{SchemaObject, SchemaType};
use crate::validator::StringFormat;

/// Numeric checks carried by a number validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberBounds {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
    pub multiple_of: Option<f64>,
}

pub fn create_string_schema(
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<&str>,
    format: Option<StringFormat>,
) -> SchemaObject {
    SchemaObject {
        min_length,
        max_length,
        pattern: pattern.map(str::to_string),
        format: format.map(|f| f.as_str().to_string()),
        ..SchemaObject::typed(SchemaType::String)
    }
}

pub fn create_number_schema(integer: bool, bounds: NumberBounds) -> SchemaObject {
    let schema_type = if integer {
        SchemaType::Integer
    } else {
        SchemaType::Number
    };
    SchemaObject {
        minimum: bounds.minimum,
        maximum: bounds.maximum,
        exclusive_minimum: bounds.exclusive_minimum,
        exclusive_maximum: bounds.exclusive_maximum,
        multiple_of: bounds.multiple_of,
        ..SchemaObject::typed(schema_type)
    }
}

pub fn create_boolean_schema() -> SchemaObject {
    SchemaObject::typed(SchemaType::Boolean)
}

pub fn create_null_schema() -> SchemaObject {
    SchemaObject::typed(SchemaType::Null)
}

/// Dates travel as ISO 8601 strings.
pub fn create_date_schema() -> SchemaObject {
    SchemaObject {
        format: Some("date-time".to_string()),
        ..SchemaObject::typed(SchemaType::String)
    }
}

/// Accepts anything: the empty schema.
pub fn create_unknown_schema() -> SchemaObject {
    SchemaObject::default()
}

pub fn create_literal_schema(value: &Value) -> SchemaObject {
    let schema_type = match value {
        Value::String(_) => Some(SchemaType::String),
        Value::Number(_) => Some(SchemaType::Number),
        Value::Bool(_) => Some(SchemaType::Boolean),
        Value::Null => Some(SchemaType::Null),
        // Composite literals carry no single primitive type.
        Value::Array(_) | Value::Object(_) => None,
    };

    SchemaObject {
        schema_type: schema_type.map(Into::into),
        const_value: Some(value.clone()),
        ..SchemaObject::default()
    }
}

pub fn create_enum_schema(values: &[String]) -> SchemaObject {
    SchemaObject {
        enum_values: Some(values.iter().cloned().map(Value::String).collect()),
        ..SchemaObject::typed(SchemaType::String)
    }
}
