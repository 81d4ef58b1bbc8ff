//! # Typesmith Codegen
//!
//! TypeScript interface generation from entity schemas.
//!
//! This crate provides:
//! - One interface declaration per schema, with resolved extends clauses
//! - Type mapping for the schema dialect's property types
//! - Typed context specializations with narrowed custom attributes
//! - Soft error collection alongside the generated code

pub mod config;
pub mod error;
pub mod generator;
pub mod typescript;

pub use config::{Banner, GeneratorBuilder, GeneratorConfig};
pub use error::CodegenError;
pub use generator::{GeneratedOutput, Generator};

use typesmith_schema::SchemaIr;

/// Generates TypeScript declarations from JSON listings.
///
/// # Arguments
/// * `schemas` - Schema listing as returned by the entity API
/// * `custom_attributes` - Custom attribute configuration listing
///
/// # Returns
/// Generated code and the soft errors met on the way.
///
/// # Errors
/// Returns `CodegenError` if parsing fails or generation hits a hard failure.
pub fn generate_from_json(
    schemas: &str,
    custom_attributes: &str,
) -> Result<GeneratedOutput, CodegenError> {
    let schemas = typesmith_schema::parse_schemas(schemas)?;
    let custom_attributes = typesmith_schema::parse_custom_attributes(custom_attributes)?;
    let ir = SchemaIr::from_schemas(&schemas);
    Generator::new(&ir, &custom_attributes).generate()
}

/// Generates TypeScript declarations from JSON listing files.
///
/// # Arguments
/// * `schema_path` - Path to the schema listing
/// * `custom_attribute_path` - Path to the custom attribute listing, if any
///
/// # Returns
/// Generated code and the soft errors met on the way.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_files(
    schema_path: &std::path::Path,
    custom_attribute_path: Option<&std::path::Path>,
) -> Result<GeneratedOutput, CodegenError> {
    let schemas = std::fs::read_to_string(schema_path)?;
    let custom_attributes = match custom_attribute_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => "[]".to_string(),
    };
    generate_from_json(&schemas, &custom_attributes)
}
