//! Schemas from an explicitly declared `type`.

use crate::error::ConvertError;
use crate::schema_object::{SchemaObject, SchemaOrRef};
use crate::state::SchemaState;
use crate::validator::Validator;

/// Build a schema from the `type` (and `format`) declared in the node's
/// metadata. Fails when nothing was declared, since the shape cannot be
/// inferred.
pub fn create_manual_type_schema(
    node: &Validator,
    state: &SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    let metadata = node.openapi.as_ref();
    let Some(schema_type) = metadata.and_then(|m| m.schema_type.clone()) else {
        return Err(ConvertError::UnknownSchemaType {
            path: state.path.clone(),
        });
    };

    Ok(SchemaObject {
        schema_type: Some(schema_type),
        format: metadata.and_then(|m| m.format.clone()),
        ..SchemaObject::default()
    }
    .into())
}
