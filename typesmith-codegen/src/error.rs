//! Error types for code generation.
//!
//! Only hard failures are errors. Soft problems (a schema without an id, a
//! property without a type) are collected as messages on
//! [`crate::GeneratedOutput`] and generation carries on.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] typesmith_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] typesmith_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Type name outside the supported dialect.
    #[error("unknown type '{type_name}' on property '{property}' of schema '{schema}'")]
    UnknownType {
        /// Type name.
        type_name: String,
        /// Property name.
        property: String,
        /// Schema id.
        schema: String,
    },

    /// Array-like property without an items descriptor.
    #[error("property '{property}' of schema '{schema}' is an array without items")]
    MissingItems {
        /// Property name.
        property: String,
        /// Schema id.
        schema: String,
    },
}

impl CodegenError {
    /// Creates an unknown type error.
    pub fn unknown_type(
        type_name: impl Into<String>,
        property: impl Into<String>,
        schema: impl Into<String>,
    ) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            property: property.into(),
            schema: schema.into(),
        }
    }

    /// Creates a missing items error.
    pub fn missing_items(property: impl Into<String>, schema: impl Into<String>) -> Self {
        Self::MissingItems {
            property: property.into(),
            schema: schema.into(),
        }
    }
}
