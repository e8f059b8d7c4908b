//! Schema creation: one converter per validator kind, joined by a shared
//! dispatcher.
//!
//! [`create_schema_or_ref`] is the entry point every converter recurses
//! through. It handles component registration, then hands the node to
//! [`create_schema_object`], which matches on the validator kind.

pub mod array;
pub mod composite;
pub mod manual;
pub mod modifiers;
pub mod object;
pub mod pipeline;
pub mod primitives;
pub mod transform;

use crate::components::create_component_ref;
use crate::error::ConvertError;
use crate::schema_object::SchemaOrRef;
use crate::state::SchemaState;
use crate::validator::{EffectKind, OpenApiMetadata, Validator, ValidatorKind};

/// Convert any validator node, emitting a `$ref` for registered components.
pub fn create_schema_or_ref(
    node: &Validator,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    if state.depth > state.options.max_depth {
        return Err(ConvertError::RecursionDepthExceeded {
            path: state.path.clone(),
            max_depth: state.options.max_depth,
        });
    }

    match node.ref_id() {
        Some(id) => create_component_ref(id, node, state),
        None => create_schema_object(node, state),
    }
}

/// Convert a validator node inline, ignoring its component id.
pub(crate) fn create_schema_object(
    node: &Validator,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    tracing::trace!(path = %state.path, kind = node.kind.name(), direction = %state.direction, "dispatch");

    let schema: SchemaOrRef = match &node.kind {
        ValidatorKind::String {
            min_length,
            max_length,
            pattern,
            format,
        } => primitives::create_string_schema(*min_length, *max_length, pattern.as_deref(), *format)
            .into(),
        ValidatorKind::Number {
            integer,
            minimum,
            maximum,
            exclusive_minimum,
            exclusive_maximum,
            multiple_of,
        } => primitives::create_number_schema(
            *integer,
            primitives::NumberBounds {
                minimum: *minimum,
                maximum: *maximum,
                exclusive_minimum: *exclusive_minimum,
                exclusive_maximum: *exclusive_maximum,
                multiple_of: *multiple_of,
            },
        )
        .into(),
        ValidatorKind::Boolean => primitives::create_boolean_schema().into(),
        ValidatorKind::Null => primitives::create_null_schema().into(),
        ValidatorKind::Date => primitives::create_date_schema().into(),
        ValidatorKind::Unknown => primitives::create_unknown_schema().into(),
        ValidatorKind::Literal { value } => primitives::create_literal_schema(value).into(),
        ValidatorKind::Enum { values } => primitives::create_enum_schema(values).into(),
        ValidatorKind::Array {
            element,
            min_items,
            max_items,
        } => array::create_array_schema(element, *min_items, *max_items, state)?,
        ValidatorKind::Tuple { items, rest } => {
            array::create_tuple_schema(items, rest.as_deref(), state)?
        }
        ValidatorKind::Object {
            shape,
            unknown_keys,
            catchall,
        } => object::create_object_schema(shape, *unknown_keys, catchall.as_deref(), state)?,
        ValidatorKind::Record { value } => object::create_record_schema(value, state)?,
        ValidatorKind::Union { options } => composite::create_union_schema(options, state)?,
        ValidatorKind::DiscriminatedUnion {
            discriminator,
            options,
        } => composite::create_discriminated_union_schema(discriminator, options, state)?,
        ValidatorKind::Intersection { left, right } => {
            composite::create_intersection_schema(left, right, state)?
        }
        ValidatorKind::Optional { inner } => state.nested(|s| create_schema_or_ref(inner, s))?,
        ValidatorKind::Nullable { inner } => modifiers::create_nullable_schema(inner, state)?,
        ValidatorKind::Default { inner, value } => {
            modifiers::create_default_schema(inner, value, state)?
        }
        ValidatorKind::Effect {
            effect: EffectKind::Transform,
            inner,
        } => transform::create_transform_schema(node, inner, state)?,
        ValidatorKind::Effect {
            effect: EffectKind::Refine | EffectKind::Preprocess,
            inner,
        } => state.nested(|s| create_schema_or_ref(inner, s))?,
        ValidatorKind::Pipeline { input, output } => {
            pipeline::create_pipeline_schema(node, input, output, state)?
        }
    };

    Ok(apply_metadata(schema, node.openapi.as_ref()))
}

/// Copy descriptive metadata onto the emitted schema.
fn apply_metadata(schema: SchemaOrRef, metadata: Option<&OpenApiMetadata>) -> SchemaOrRef {
    let Some(metadata) = metadata else {
        return schema;
    };

    match schema {
        SchemaOrRef::Inline(mut obj) => {
            if metadata.title.is_some() {
                obj.title.clone_from(&metadata.title);
            }
            if metadata.description.is_some() {
                obj.description.clone_from(&metadata.description);
            }
            if metadata.example.is_some() {
                obj.example.clone_from(&metadata.example);
            }
            if metadata.deprecated.is_some() {
                obj.deprecated = metadata.deprecated;
            }
            SchemaOrRef::Inline(obj)
        }
        SchemaOrRef::Ref(mut reference) => {
            if metadata.description.is_some() {
                reference.description.clone_from(&metadata.description);
            }
            SchemaOrRef::Ref(reference)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{input, output};
    use super::*;
    use crate::config::{ConvertOptions, Direction};
    use crate::components::ComponentRegistry;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_metadata_applied_to_inline_schema() {
        let node = Validator::string().openapi(OpenApiMetadata {
            title: Some("Name".into()),
            description: Some("Display name".into()),
            example: Some(json!("Ada")),
            deprecated: Some(true),
            ..OpenApiMetadata::default()
        });

        assert_eq!(
            output(&node),
            json!({
                "type": "string",
                "title": "Name",
                "description": "Display name",
                "example": "Ada",
                "deprecated": true
            })
        );
    }

    #[test]
    fn test_description_kept_next_to_ref() {
        let user = Validator::object([("id", Validator::integer())]).component("User");
        let node = Validator::object([("owner", user.optional().describe("Owner of the item"))]);

        assert_eq!(
            output(&node),
            json!({
                "type": "object",
                "properties": {
                    "owner": {
                        "$ref": "#/components/schemas/User",
                        "description": "Owner of the item"
                    }
                }
            })
        );
    }

    #[test]
    fn test_refine_and_preprocess_render_inner() {
        assert_eq!(input(&Validator::string().refine()), json!({ "type": "string" }));
        assert_eq!(output(&Validator::number().preprocess()), json!({ "type": "number" }));
    }

    #[test]
    fn test_depth_guard() {
        let mut node = Validator::string();
        for _ in 0..5 {
            node = Validator::array(node);
        }
        let options = ConvertOptions {
            max_depth: 3,
            ..ConvertOptions::default()
        };
        let mut registry = ComponentRegistry::default();
        let mut state = SchemaState::new(Direction::Output, &mut registry, &options);

        let err = create_schema_or_ref(&node, &mut state).unwrap_err();
        match err {
            ConvertError::RecursionDepthExceeded { path, max_depth } => {
                assert_eq!(max_depth, 3);
                assert_eq!(path, "#/items/items/items/items");
            }
            other => panic!("expected RecursionDepthExceeded, got: {:?}", other),
        }
    }

    #[test]
    fn test_depth_guard_counts_wrappers() {
        let mut node = Validator::string();
        for _ in 0..60 {
            node = node.optional().nullable().refine();
        }
        let options = ConvertOptions {
            max_depth: 3,
            ..ConvertOptions::default()
        };
        let mut registry = ComponentRegistry::default();
        let mut state = SchemaState::new(Direction::Input, &mut registry, &options);

        let err = create_schema_or_ref(&node, &mut state).unwrap_err();
        match err {
            ConvertError::RecursionDepthExceeded { path, max_depth } => {
                assert_eq!(max_depth, 3);
                assert_eq!(path, "#");
            }
            other => panic!("expected RecursionDepthExceeded, got: {:?}", other),
        }
        assert_eq!(state.depth, 0);
    }

    #[test]
    fn test_depth_guard_counts_pipeline_sides() {
        let mut node = Validator::string();
        for _ in 0..10 {
            node = node.transform().pipe(Validator::string());
        }
        let options = ConvertOptions {
            max_depth: 5,
            ..ConvertOptions::default()
        };
        let mut registry = ComponentRegistry::default();
        let mut state = SchemaState::new(Direction::Input, &mut registry, &options);

        assert!(matches!(
            create_schema_or_ref(&node, &mut state),
            Err(ConvertError::RecursionDepthExceeded { max_depth: 5, .. })
        ));
    }
}
