//! Configuration for schema conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of a type-changing validator a schema describes.
///
/// `Input` is the shape a caller sends (request bodies, query params),
/// `Output` is the shape after parsing and transforms have run (responses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Input,
    Output,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => f.write_str("input"),
            Direction::Output => f.write_str("output"),
        }
    }
}

/// Options for schema conversion.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `max-depth`, `output-id-suffix`).
/// This naming convention is part of the public API contract for config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConvertOptions {
    /// Conversion direction for the root validator. Default: output.
    pub direction: Direction,
    /// Maximum nesting depth of the validator tree (stack overflow guard).
    pub max_depth: usize,
    /// Prefix prepended to component ids when emitting `$ref` pointers.
    pub component_ref_prefix: String,
    /// Suffix for the output variant of a component whose input and output
    /// shapes differ.
    pub output_id_suffix: String,
    /// Suffix for the input variant of a component first registered from an
    /// output walk.
    pub input_id_suffix: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Output,
            max_depth: 50,
            component_ref_prefix: "#/components/schemas/".to_string(),
            output_id_suffix: "Output".to_string(),
            input_id_suffix: "Input".to_string(),
        }
    }
}
