//! Arrays and tuples.

use crate::create::create_schema_or_ref;
use crate::error::ConvertError;
use crate::schema_object::{SchemaObject, SchemaOrRef, SchemaType};
use crate::state::SchemaState;
use crate::validator::Validator;

pub fn create_array_schema(
    element: &Validator,
    min_items: Option<usize>,
    max_items: Option<usize>,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    let items = state.descend(&["items"], |s| create_schema_or_ref(element, s))?;
    Ok(SchemaObject {
        items: Some(Box::new(items)),
        min_items,
        max_items,
        ..SchemaObject::typed(SchemaType::Array)
    }
    .into())
}

/// Fixed positions become `prefixItems`; a rest element becomes `items` and
/// lifts the upper length bound.
pub fn create_tuple_schema(
    items: &[Validator],
    rest: Option<&Validator>,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    let mut prefix_items = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let index = i.to_string();
        prefix_items.push(state.descend(&["prefixItems", index.as_str()], |s| {
            create_schema_or_ref(item, s)
        })?);
    }

    let rest_items = match rest {
        Some(rest) => Some(Box::new(
            state.descend(&["items"], |s| create_schema_or_ref(rest, s))?,
        )),
        None => None,
    };

    Ok(SchemaObject {
        max_items: rest_items.is_none().then_some(items.len()),
        min_items: Some(items.len()),
        prefix_items: Some(prefix_items),
        items: rest_items,
        ..SchemaObject::typed(SchemaType::Array)
    }
    .into())
}
