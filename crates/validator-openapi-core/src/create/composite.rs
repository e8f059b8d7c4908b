//! Unions and intersections.

use crate::create::create_schema_or_ref;
use crate::error::ConvertError;
use crate::schema_object::{Discriminator, SchemaObject, SchemaOrRef};
use crate::state::SchemaState;
use crate::validator::Validator;

fn create_options(
    keyword: &str,
    options: &[Validator],
    state: &mut SchemaState<'_>,
) -> Result<Vec<SchemaOrRef>, ConvertError> {
    let mut schemas = Vec::with_capacity(options.len());
    for (i, option) in options.iter().enumerate() {
        let index = i.to_string();
        schemas.push(state.descend(&[keyword, index.as_str()], |s| create_schema_or_ref(option, s))?);
    }
    Ok(schemas)
}

pub fn create_union_schema(
    options: &[Validator],
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    Ok(SchemaObject {
        any_of: Some(create_options("anyOf", options, state)?),
        ..SchemaObject::default()
    }
    .into())
}

pub fn create_discriminated_union_schema(
    discriminator: &str,
    options: &[Validator],
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    Ok(SchemaObject {
        one_of: Some(create_options("oneOf", options, state)?),
        discriminator: Some(Discriminator {
            property_name: discriminator.to_string(),
        }),
        ..SchemaObject::default()
    }
    .into())
}

pub fn create_intersection_schema(
    left: &Validator,
    right: &Validator,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    let left = state.descend(&["allOf", "0"], |s| create_schema_or_ref(left, s))?;
    let right = state.descend(&["allOf", "1"], |s| create_schema_or_ref(right, s))?;
    Ok(SchemaObject {
        all_of: Some(vec![left, right]),
        ..SchemaObject::default()
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create::test_support::{input, output};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_union_any_of() {
        let node = Validator::union(vec![Validator::string(), Validator::number()]);
        assert_eq!(
            output(&node),
            json!({ "anyOf": [{ "type": "string" }, { "type": "number" }] })
        );
    }

    #[test]
    fn test_discriminated_union() {
        let cat = Validator::object([("type", Validator::literal("cat"))]);
        let dog = Validator::object([("type", Validator::literal("dog"))]);
        let node = Validator::discriminated_union("type", vec![cat, dog]);

        let schema = output(&node);
        assert_eq!(schema["discriminator"], json!({ "propertyName": "type" }));
        assert_eq!(schema["oneOf"].as_array().map(Vec::len), Some(2));
        assert_eq!(schema["oneOf"][1]["properties"]["type"]["const"], "dog");
    }

    #[test]
    fn test_intersection_follows_direction() {
        let node = Validator::intersection(
            Validator::object([("id", Validator::integer())]),
            Validator::object([("at", Validator::string().transform().pipe(Validator::date()))]),
        );

        assert_eq!(input(&node)["allOf"][1]["properties"]["at"], json!({ "type": "string" }));
        assert_eq!(
            output(&node)["allOf"][1]["properties"]["at"],
            json!({ "type": "string", "format": "date-time" })
        );
    }
}
