//! Wrappers that adjust an inner schema: nullable and default.

use serde_json::Value;

use crate::create::create_schema_or_ref;
use crate::error::ConvertError;
use crate::schema_object::{SchemaObject, SchemaOrRef, SchemaType, SchemaTypes};
use crate::state::SchemaState;
use crate::validator::Validator;

fn is_null_schema(schema: &SchemaOrRef) -> bool {
    schema
        .as_inline()
        .is_some_and(|obj| obj.schema_type == Some(SchemaTypes::Single(SchemaType::Null)))
}

/// Typed schemas gain `null` in their type list (3.1 style); a `const` becomes
/// a two-value `enum`. References and untyped schemas are wrapped in `anyOf`
/// with a null schema.
pub fn create_nullable_schema(
    inner: &Validator,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    let schema = state.nested(|s| create_schema_or_ref(inner, s))?;
    let null_schema = || SchemaOrRef::from(SchemaObject::typed(SchemaType::Null));

    match schema {
        SchemaOrRef::Inline(mut obj) if obj.schema_type.is_some() => {
            obj.schema_type = obj.schema_type.take().map(|t| t.with_null());
            if let Some(value) = obj.const_value.take() {
                obj.enum_values = Some(vec![value]);
            }
            if let Some(values) = obj.enum_values.as_mut() {
                if !values.contains(&Value::Null) {
                    values.push(Value::Null);
                }
            }
            Ok(SchemaOrRef::Inline(obj))
        }
        SchemaOrRef::Inline(mut obj) if obj.any_of.is_some() => {
            if let Some(options) = obj.any_of.as_mut() {
                if !options.iter().any(is_null_schema) {
                    options.push(null_schema());
                }
            }
            Ok(SchemaOrRef::Inline(obj))
        }
        other => Ok(SchemaObject {
            any_of: Some(vec![other, null_schema()]),
            ..SchemaObject::default()
        }
        .into()),
    }
}

/// Attach `default`. A reference cannot carry it, so it is wrapped in `allOf`.
pub fn create_default_schema(
    inner: &Validator,
    value: &Value,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    match state.nested(|s| create_schema_or_ref(inner, s))? {
        SchemaOrRef::Inline(mut obj) => {
            obj.default = Some(value.clone());
            Ok(SchemaOrRef::Inline(obj))
        }
        reference @ SchemaOrRef::Ref(_) => Ok(SchemaObject {
            all_of: Some(vec![reference]),
            default: Some(value.clone()),
            ..SchemaObject::default()
        }
        .into()),
    }
}
