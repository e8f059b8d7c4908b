//! Transform effects.
//!
//! A transform maps the parsed value through an arbitrary function, so the
//! output shape cannot be inferred from the inner validator. Input walks
//! render the pre-transform validator; output walks fall back to the type
//! declared in the node's metadata.

use crate::config::Direction;
use crate::create::create_schema_or_ref;
use crate::create::manual::create_manual_type_schema;
use crate::error::ConvertError;
use crate::schema_object::SchemaOrRef;
use crate::state::SchemaState;
use crate::validator::Validator;

/// The side a type-changing node renders: its `effectType` override, else the
/// walk direction.
pub fn creation_type(node: &Validator, direction: Direction) -> Direction {
    node.effect_type_override().unwrap_or(direction)
}

/// Convert a transform node whose pre-transform validator is `inner`.
pub fn create_transform_schema(
    node: &Validator,
    inner: &Validator,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    let creation = creation_type(node, state.direction);
    tracing::debug!(
        path = %state.path,
        direction = %state.direction,
        creation_type = %creation,
        "resolving transform"
    );

    if creation == Direction::Input {
        if state.direction == Direction::Input {
            state.forced_input = true;
        }
        return state.nested(|s| create_schema_or_ref(inner, s));
    }

    create_manual_type_schema(node, state)
}
