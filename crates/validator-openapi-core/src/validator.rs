//! Validator definition tree.
//!
//! A [`Validator`] is an immutable description of one validation rule: a
//! closed set of kinds ([`ValidatorKind`]) plus an optional block of OpenAPI
//! metadata ([`OpenApiMetadata`]). Trees are plain data, so they can be built
//! in Rust with the builder methods below or deserialized from JSON:
//!
//! ```
//! use validator_openapi_core::Validator;
//!
//! let json = serde_json::json!({
//!     "kind": "pipeline",
//!     "input": { "kind": "effect", "effect": "transform", "inner": { "kind": "string" } },
//!     "output": { "kind": "number" }
//! });
//! let parsed: Validator = serde_json::from_value(json).unwrap();
//! assert_eq!(parsed, Validator::string().transform().pipe(Validator::number()));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Direction;
use crate::schema_object::SchemaTypes;

/// A node in the validator tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    #[serde(flatten)]
    pub kind: ValidatorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<OpenApiMetadata>,
}

/// The closed set of validator kinds the converter understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidatorKind {
    String {
        #[serde(default)]
        min_length: Option<usize>,
        #[serde(default)]
        max_length: Option<usize>,
        #[serde(default)]
        pattern: Option<String>,
        #[serde(default)]
        format: Option<StringFormat>,
    },
    Number {
        #[serde(default)]
        integer: bool,
        #[serde(default)]
        minimum: Option<f64>,
        #[serde(default)]
        maximum: Option<f64>,
        #[serde(default)]
        exclusive_minimum: Option<f64>,
        #[serde(default)]
        exclusive_maximum: Option<f64>,
        #[serde(default)]
        multiple_of: Option<f64>,
    },
    Boolean,
    Null,
    Date,
    Unknown,
    Literal {
        value: Value,
    },
    Enum {
        values: Vec<String>,
    },
    Array {
        element: Box<Validator>,
        #[serde(default)]
        min_items: Option<usize>,
        #[serde(default)]
        max_items: Option<usize>,
    },
    Tuple {
        items: Vec<Validator>,
        #[serde(default)]
        rest: Option<Box<Validator>>,
    },
    Object {
        #[serde(default)]
        shape: BTreeMap<String, Validator>,
        #[serde(default)]
        unknown_keys: UnknownKeys,
        #[serde(default)]
        catchall: Option<Box<Validator>>,
    },
    Record {
        value: Box<Validator>,
    },
    Union {
        options: Vec<Validator>,
    },
    DiscriminatedUnion {
        discriminator: String,
        options: Vec<Validator>,
    },
    Intersection {
        left: Box<Validator>,
        right: Box<Validator>,
    },
    Optional {
        inner: Box<Validator>,
    },
    Nullable {
        inner: Box<Validator>,
    },
    Default {
        inner: Box<Validator>,
        value: Value,
    },
    /// A stage that runs a function over the value. Only `transform` can
    /// change the value's type.
    Effect {
        effect: EffectKind,
        inner: Box<Validator>,
    },
    /// `input` parses first and feeds its result into `output`.
    Pipeline {
        input: Box<Validator>,
        output: Box<Validator>,
    },
}

impl ValidatorKind {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ValidatorKind::String { .. } => "string",
            ValidatorKind::Number { .. } => "number",
            ValidatorKind::Boolean => "boolean",
            ValidatorKind::Null => "null",
            ValidatorKind::Date => "date",
            ValidatorKind::Unknown => "unknown",
            ValidatorKind::Literal { .. } => "literal",
            ValidatorKind::Enum { .. } => "enum",
            ValidatorKind::Array { .. } => "array",
            ValidatorKind::Tuple { .. } => "tuple",
            ValidatorKind::Object { .. } => "object",
            ValidatorKind::Record { .. } => "record",
            ValidatorKind::Union { .. } => "union",
            ValidatorKind::DiscriminatedUnion { .. } => "discriminated_union",
            ValidatorKind::Intersection { .. } => "intersection",
            ValidatorKind::Optional { .. } => "optional",
            ValidatorKind::Nullable { .. } => "nullable",
            ValidatorKind::Default { .. } => "default",
            ValidatorKind::Effect { .. } => "effect",
            ValidatorKind::Pipeline { .. } => "pipeline",
        }
    }
}

/// Well-known string formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    Email,
    Uuid,
    Uri,
    Date,
    DateTime,
    Time,
    Ipv4,
    Ipv6,
}

impl StringFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            StringFormat::Email => "email",
            StringFormat::Uuid => "uuid",
            StringFormat::Uri => "uri",
            StringFormat::Date => "date",
            StringFormat::DateTime => "date-time",
            StringFormat::Time => "time",
            StringFormat::Ipv4 => "ipv4",
            StringFormat::Ipv6 => "ipv6",
        }
    }
}

/// How an object treats keys that are not in its shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeys {
    /// Unknown keys are dropped while parsing.
    #[default]
    Strip,
    /// Unknown keys are rejected.
    Strict,
    /// Unknown keys are kept as-is.
    Passthrough,
}

/// Kind of effect stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// Maps the parsed value to a new value, possibly of another type.
    Transform,
    /// Extra check on the parsed value; the type is unchanged.
    Refine,
    /// Maps the raw input before the inner validator sees it.
    Preprocess,
}

/// OpenAPI metadata attached to a validator node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiMetadata {
    /// Register the node as a component under this id.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    /// Force effects and pipelines to render their input or output side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_type: Option<Direction>,
    /// Declared type used when the shape cannot be inferred.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaTypes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

impl From<ValidatorKind> for Validator {
    fn from(kind: ValidatorKind) -> Self {
        Self {
            kind,
            openapi: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

impl Validator {
    pub fn string() -> Self {
        ValidatorKind::String {
            min_length: None,
            max_length: None,
            pattern: None,
            format: None,
        }
        .into()
    }

    pub fn number() -> Self {
        ValidatorKind::Number {
            integer: false,
            minimum: None,
            maximum: None,
            exclusive_minimum: None,
            exclusive_maximum: None,
            multiple_of: None,
        }
        .into()
    }

    pub fn integer() -> Self {
        ValidatorKind::Number {
            integer: true,
            minimum: None,
            maximum: None,
            exclusive_minimum: None,
            exclusive_maximum: None,
            multiple_of: None,
        }
        .into()
    }

    pub fn boolean() -> Self {
        ValidatorKind::Boolean.into()
    }

    pub fn null() -> Self {
        ValidatorKind::Null.into()
    }

    pub fn date() -> Self {
        ValidatorKind::Date.into()
    }

    pub fn unknown() -> Self {
        ValidatorKind::Unknown.into()
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        ValidatorKind::Literal {
            value: value.into(),
        }
        .into()
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidatorKind::Enum {
            values: values.into_iter().map(Into::into).collect(),
        }
        .into()
    }

    pub fn array(element: Validator) -> Self {
        ValidatorKind::Array {
            element: Box::new(element),
            min_items: None,
            max_items: None,
        }
        .into()
    }

    pub fn tuple(items: Vec<Validator>) -> Self {
        ValidatorKind::Tuple { items, rest: None }.into()
    }

    pub fn object<I, S>(shape: I) -> Self
    where
        I: IntoIterator<Item = (S, Validator)>,
        S: Into<String>,
    {
        ValidatorKind::Object {
            shape: shape.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            unknown_keys: UnknownKeys::Strip,
            catchall: None,
        }
        .into()
    }

    pub fn record(value: Validator) -> Self {
        ValidatorKind::Record {
            value: Box::new(value),
        }
        .into()
    }

    pub fn union(options: Vec<Validator>) -> Self {
        ValidatorKind::Union { options }.into()
    }

    pub fn discriminated_union(discriminator: impl Into<String>, options: Vec<Validator>) -> Self {
        ValidatorKind::DiscriminatedUnion {
            discriminator: discriminator.into(),
            options,
        }
        .into()
    }

    pub fn intersection(left: Validator, right: Validator) -> Self {
        ValidatorKind::Intersection {
            left: Box::new(left),
            right: Box::new(right),
        }
        .into()
    }

    pub fn optional(self) -> Self {
        ValidatorKind::Optional {
            inner: Box::new(self),
        }
        .into()
    }

    pub fn nullable(self) -> Self {
        ValidatorKind::Nullable {
            inner: Box::new(self),
        }
        .into()
    }

    pub fn default_value(self, value: impl Into<Value>) -> Self {
        ValidatorKind::Default {
            inner: Box::new(self),
            value: value.into(),
        }
        .into()
    }

    fn effect(self, effect: EffectKind) -> Self {
        ValidatorKind::Effect {
            effect,
            inner: Box::new(self),
        }
        .into()
    }

    /// Wrap in a transform stage. The function itself is opaque to the
    /// converter, so only its position in the tree is recorded.
    pub fn transform(self) -> Self {
        self.effect(EffectKind::Transform)
    }

    pub fn refine(self) -> Self {
        self.effect(EffectKind::Refine)
    }

    pub fn preprocess(self) -> Self {
        self.effect(EffectKind::Preprocess)
    }

    pub fn pipe(self, output: Validator) -> Self {
        ValidatorKind::Pipeline {
            input: Box::new(self),
            output: Box::new(output),
        }
        .into()
    }

    /// Replace the metadata block.
    pub fn openapi(mut self, metadata: OpenApiMetadata) -> Self {
        self.openapi = Some(metadata);
        self
    }

    fn metadata_mut(&mut self) -> &mut OpenApiMetadata {
        self.openapi.get_or_insert_with(OpenApiMetadata::default)
    }

    pub fn effect_type(mut self, direction: Direction) -> Self {
        self.metadata_mut().effect_type = Some(direction);
        self
    }

    pub fn manual_type(mut self, schema_type: impl Into<SchemaTypes>) -> Self {
        self.metadata_mut().schema_type = Some(schema_type.into());
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.metadata_mut().description = Some(description.into());
        self
    }

    pub fn component(mut self, id: impl Into<String>) -> Self {
        self.metadata_mut().ref_id = Some(id.into());
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The explicit `effectType` override, if any.
    pub fn effect_type_override(&self) -> Option<Direction> {
        self.openapi.as_ref().and_then(|m| m.effect_type)
    }

    /// The component id this node registers under, if any.
    pub fn ref_id(&self) -> Option<&str> {
        self.openapi.as_ref().and_then(|m| m.ref_id.as_deref())
    }
}
