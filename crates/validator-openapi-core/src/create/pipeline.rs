//! Pipelines: `input` parses first, `output` validates its result.

use crate::config::Direction;
use crate::create::create_schema_or_ref;
use crate::create::transform::creation_type;
use crate::error::ConvertError;
use crate::schema_object::SchemaOrRef;
use crate::state::SchemaState;
use crate::validator::Validator;

/// Render the input side for input creation, the output side otherwise.
///
/// When the input side is itself a transform, it resolves through
/// [`create_transform_schema`](crate::create::transform::create_transform_schema).
pub fn create_pipeline_schema(
    node: &Validator,
    input: &Validator,
    output: &Validator,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    let creation = creation_type(node, state.direction);
    tracing::debug!(
        path = %state.path,
        direction = %state.direction,
        creation_type = %creation,
        "resolving pipeline"
    );

    match creation {
        Direction::Input => {
            if state.direction == Direction::Input {
                state.forced_input = true;
            }
            state.nested(|s| create_schema_or_ref(input, s))
        }
        Direction::Output => state.nested(|s| create_schema_or_ref(output, s)),
    }
}
