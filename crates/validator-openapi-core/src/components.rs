//! Registry of component schemas (`#/components/schemas/...`).
//!
//! A validator carrying `openapi.ref` is emitted once into the registry and
//! referenced by `$ref` everywhere it appears. Because effects and pipelines
//! render differently per [`Direction`], one registered validator can need
//! two component variants:
//!
//! - the first variant takes the plain id;
//! - a variant created in the input direction without `forced_input` is
//!   direction-independent and is shared by both directions;
//! - otherwise the other direction is converted again and, if it differs,
//!   registered under the id plus a direction suffix (`UserOutput`).

use std::collections::BTreeMap;

use crate::config::Direction;
use crate::create::create_schema_object;
use crate::error::ConvertError;
use crate::schema_object::{Reference, SchemaOrRef};
use crate::state::SchemaState;
use crate::validator::Validator;

#[derive(Debug, Clone)]
struct ComponentEntry {
    /// Emitted component id (may carry a direction suffix).
    id: String,
    direction: Direction,
    forced_input: bool,
    schema: SchemaOrRef,
}

#[derive(Debug, Clone)]
struct RegisteredComponent {
    validator: Validator,
    variants: Vec<ComponentEntry>,
}

/// Component schemas collected across one or more conversions.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, RegisteredComponent>,
}

impl ComponentRegistry {
    /// Emitted component schemas keyed by id.
    pub fn schemas(&self) -> BTreeMap<String, SchemaOrRef> {
        let mut out = BTreeMap::new();
        for component in self.components.values() {
            for entry in &component.variants {
                out.entry(entry.id.clone())
                    .or_insert_with(|| entry.schema.clone());
            }
        }
        out
    }

    /// Check `validator` against whatever is already registered under `id`.
    fn check_definition(&self, id: &str, validator: &Validator, path: &str) -> Result<(), ConvertError> {
        match self.components.get(id) {
            Some(existing) if existing.validator != *validator => {
                Err(ConvertError::DuplicateComponent {
                    path: path.to_string(),
                    id: id.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    fn variant(&self, id: &str, direction: Direction) -> Option<&ComponentEntry> {
        self.components
            .get(id)?
            .variants
            .iter()
            .find(|entry| entry.direction == direction)
    }

    fn first_variant(&self, id: &str) -> Option<&ComponentEntry> {
        self.components.get(id)?.variants.first()
    }

    fn insert(&mut self, id: &str, validator: &Validator, entry: ComponentEntry) {
        self.components
            .entry(id.to_string())
            .or_insert_with(|| RegisteredComponent {
                validator: validator.clone(),
                variants: Vec::new(),
            })
            .variants
            .push(entry);
    }
}

fn reference(state: &SchemaState<'_>, id: &str) -> SchemaOrRef {
    Reference::new(format!("{}{}", state.options.component_ref_prefix, id)).into()
}

/// Emit `node` as component `id` and return a `$ref` to the variant matching
/// the state's direction.
pub fn create_component_ref(
    id: &str,
    node: &Validator,
    state: &mut SchemaState<'_>,
) -> Result<SchemaOrRef, ConvertError> {
    state.components.check_definition(id, node, &state.path)?;

    if let Some(entry) = state.components.variant(id, state.direction) {
        if entry.forced_input {
            state.forced_input = true;
        }
        let emitted = entry.id.clone();
        return Ok(reference(state, &emitted));
    }

    let first = state
        .components
        .first_variant(id)
        .map(|e| (e.id.clone(), e.direction, e.forced_input, e.schema.clone()));

    if let Some((first_id, Direction::Input, false, _)) = &first {
        tracing::debug!(component = %id, "reusing direction-independent component");
        return Ok(reference(state, first_id));
    }

    let component_path = format!("{}{}", state.options.component_ref_prefix, id);
    let (schema, forced) = state.isolated(component_path, |s| create_schema_object(node, s))?;

    // A nested registration under the same id may have happened meanwhile.
    state.components.check_definition(id, node, &state.path)?;

    let emitted = match first {
        Some((first_id, _, _, first_schema)) if first_schema == schema => first_id,
        Some(_) => {
            let suffix = match state.direction {
                Direction::Output => &state.options.output_id_suffix,
                Direction::Input => &state.options.input_id_suffix,
            };
            format!("{id}{suffix}")
        }
        None => id.to_string(),
    };

    tracing::debug!(
        component = %id,
        emitted = %emitted,
        direction = %state.direction,
        forced_input = forced,
        "registering component"
    );

    state.components.insert(
        id,
        node,
        ComponentEntry {
            id: emitted.clone(),
            direction: state.direction,
            forced_input: forced,
            schema,
        },
    );

    Ok(reference(state, &emitted))
}
