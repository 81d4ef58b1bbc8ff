//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use typesmith::prelude::*;
//! ```

// Schema types
pub use typesmith_schema::ir::{ExtendsTarget, Inheritance, ResolvedSchema, SchemaIr};
pub use typesmith_schema::parser::{parse_custom_attributes, parse_schemas};
pub use typesmith_schema::types::{
    CustomAttributeConfiguration, PropertyDescriptor, PropertyType, SchemaDescriptor,
};
pub use typesmith_schema::validation::validate_schemas;
pub use typesmith_schema::{ParseError, SchemaError};

// Generation types
pub use typesmith_codegen::typescript::TsType;
pub use typesmith_codegen::{
    Banner, CodegenError, GeneratedOutput, Generator, GeneratorBuilder, GeneratorConfig,
    generate_from_files, generate_from_json,
};
