//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error, including property descriptors that are not objects.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid document structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two schemas share the same id.
    #[error("duplicate schema definition: '{id}'")]
    DuplicateSchema {
        /// Schema id.
        id: String,
    },

    /// Property type name outside the supported dialect.
    #[error("unknown type '{type_name}' on property '{property}' of schema '{schema}'")]
    UnknownType {
        /// Type name.
        type_name: String,
        /// Property name.
        property: String,
        /// Schema id.
        schema: String,
    },

    /// Reference to a schema that is not in the listing.
    #[error("schema '{schema}' references unknown schema '{target}'")]
    DanglingReference {
        /// Referencing schema id.
        schema: String,
        /// Referenced schema id.
        target: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a dangling reference error.
    pub fn dangling(schema: impl Into<String>, target: impl Into<String>) -> Self {
        Self::DanglingReference {
            schema: schema.into(),
            target: target.into(),
        }
    }
}
