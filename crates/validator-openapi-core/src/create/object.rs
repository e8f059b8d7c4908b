//! Objects and records.

use std::collections::BTreeMap;

use crate::config::Direction;
use crate::create::create_schema_or_ref;
use crate::create::transform::creation_type;
use crate::error::ConvertError;
use crate::schema_object::{AdditionalProperties, SchemaObject, SchemaOrRef, SchemaType};
use crate::state::SchemaState;
use crate::validator::{EffectKind, UnknownKeys, Validator, ValidatorKind};

pub fn create_object_schema(
    shape: &BTreeMap<String, Validator>,
    unknown_keys: UnknownKeys,
    catchall: Option<&Validator>,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    let mut properties = BTreeMap::new();
    let mut required = Vec::new();

    for (name, property) in shape {
        let schema = state.descend(&["properties", name.as_str()], |s| create_schema_or_ref(property, s))?;
        properties.insert(name.clone(), schema);
        if !is_optional(property, state.direction) {
            required.push(name.clone());
        }
    }

    let additional_properties = match (catchall, unknown_keys) {
        (Some(catchall), _) => Some(AdditionalProperties::Schema(Box::new(
            state.descend(&["additionalProperties"], |s| create_schema_or_ref(catchall, s))?,
        ))),
        (None, UnknownKeys::Strict) => Some(AdditionalProperties::Allowed(false)),
        (None, UnknownKeys::Strip | UnknownKeys::Passthrough) => None,
    };

    Ok(SchemaObject {
        properties: (!properties.is_empty()).then_some(properties),
        required: (!required.is_empty()).then_some(required),
        additional_properties,
        ..SchemaObject::typed(SchemaType::Object)
    }
    .into())
}

pub fn create_record_schema(
    value: &Validator,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    let values = state.descend(&["additionalProperties"], |s| create_schema_or_ref(value, s))?;
    Ok(SchemaObject {
        additional_properties: Some(AdditionalProperties::Schema(Box::new(values))),
        ..SchemaObject::typed(SchemaType::Object)
    }
    .into())
}

/// Whether a property may be absent from the object in `direction`.
///
/// Defaults fill a missing value while parsing, so they are optional on the
/// way in and always present on the way out. Effects and pipelines answer
/// for the side they render, without touching conversion state.
pub fn is_optional(node: &Validator, direction: Direction) -> bool {
    let mut node = node;
    loop {
        node = match &node.kind {
            ValidatorKind::Optional { .. } => return true,
            ValidatorKind::Default { .. } => return direction == Direction::Input,
            ValidatorKind::Nullable { inner } => inner,
            ValidatorKind::Effect {
                effect: EffectKind::Transform,
                inner,
            } => {
                if creation_type(node, direction) != Direction::Input {
                    return false;
                }
                inner
            }
            ValidatorKind::Effect { inner, .. } => inner,
            ValidatorKind::Pipeline { input, output } => match creation_type(node, direction) {
                Direction::Input => input,
                Direction::Output => output,
            },
            _ => return false,
        };
    }
}
