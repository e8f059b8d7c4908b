//! Error types for schema conversion.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown schema type at {path}: assign a manual `type` in the openapi metadata")]
    UnknownSchemaType { path: String },

    #[error("Recursion depth exceeded at {path} (max: {max_depth})")]
    RecursionDepthExceeded { path: String, max_depth: usize },

    #[error("Component `{id}` at {path} is already registered with a different definition")]
    DuplicateComponent { path: String, id: String },
}
