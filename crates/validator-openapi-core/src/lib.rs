//! Convert validator definition trees into OpenAPI 3.1 schema objects.
//!
//! A [`Validator`] describes how a value is parsed: primitives, objects,
//! unions, effects and pipelines. Transforms can change a value's type while
//! it is parsed, so every conversion picks a [`Direction`]: the *input* shape a
//! caller sends, or the *output* shape parsing produces.
//!
//! ```
//! use validator_openapi_core::{convert, ConvertOptions, Direction, Validator};
//!
//! let length = Validator::string().transform().pipe(Validator::number());
//!
//! let input = ConvertOptions { direction: Direction::Input, ..ConvertOptions::default() };
//! let result = convert(&length, &input).unwrap();
//! assert_eq!(serde_json::to_value(&result.schema).unwrap(), serde_json::json!({ "type": "string" }));
//!
//! let result = convert(&length, &ConvertOptions::default()).unwrap();
//! assert_eq!(serde_json::to_value(&result.schema).unwrap(), serde_json::json!({ "type": "number" }));
//! ```

pub mod components;
pub mod config;
pub mod create;
pub mod error;
pub mod schema_object;
pub mod schema_utils;
pub mod state;
pub mod validator;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use components::ComponentRegistry;
pub use config::{ConvertOptions, Direction};
pub use create::create_schema_or_ref;
pub use error::ConvertError;
pub use schema_object::{SchemaObject, SchemaOrRef};
pub use schema_utils::build_path;
pub use state::SchemaState;
pub use validator::{OpenApiMetadata, Validator, ValidatorKind};

/// Result of a single-root conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResult {
    /// Schema for the root validator.
    pub schema: SchemaOrRef,
    /// Component schemas registered along the way, keyed by id.
    pub components: BTreeMap<String, SchemaOrRef>,
    /// Whether an effect or pipeline rendered its input side during an input
    /// walk.
    pub forced_input: bool,
}

/// A root schema produced by [`Converter::create_schema`].
#[derive(Debug, Clone, Serialize)]
pub struct CreatedSchema {
    pub schema: SchemaOrRef,
    pub forced_input: bool,
}

/// Converts several roots against one shared component registry, so a
/// validator used in both request and response positions is registered once
/// per distinct shape.
pub struct Converter<'o> {
    options: &'o ConvertOptions,
    registry: ComponentRegistry,
}

impl<'o> Converter<'o> {
    pub fn new(options: &'o ConvertOptions) -> Self {
        Self {
            options,
            registry: ComponentRegistry::default(),
        }
    }

    /// Convert one root validator in `direction` with a fresh state.
    pub fn create_schema(
        &mut self,
        validator: &Validator,
        direction: Direction,
    ) -> Result<CreatedSchema, ConvertError> {
        let mut state = SchemaState::new(direction, &mut self.registry, self.options);
        let schema = create_schema_or_ref(validator, &mut state)?;
        tracing::debug!(
            direction = %direction,
            forced_input = state.forced_input,
            "converted root schema"
        );
        Ok(CreatedSchema {
            schema,
            forced_input: state.forced_input,
        })
    }

    /// Component schemas registered so far, keyed by id.
    pub fn components(&self) -> BTreeMap<String, SchemaOrRef> {
        self.registry.schemas()
    }
}

/// Convert one validator in `options.direction`.
pub fn convert(validator: &Validator, options: &ConvertOptions) -> Result<ConvertResult, ConvertError> {
    let mut converter = Converter::new(options);
    let created = converter.create_schema(validator, options.direction)?;
    Ok(ConvertResult {
        schema: created.schema,
        components: converter.components(),
        forced_input: created.forced_input,
    })
}

/// Deserialize a validator from JSON and [`convert`] it.
pub fn convert_json(
    value: &serde_json::Value,
    options: &ConvertOptions,
) -> Result<ConvertResult, ConvertError> {
    let validator = Validator::deserialize(value)?;
    convert(&validator, options)
}
