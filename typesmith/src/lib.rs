//! # Typesmith
//!
//! TypeScript interface declarations generated from an entity API's schemas.
//!
//! Typesmith reads the schema listing served by the API (entity shapes,
//! property types, mixin and alias relationships) and emits one interface per
//! entity, resolving inheritance into `extends` clauses.
//!
//! ## Features
//!
//! - **Inheritance resolution** - Mixin bases and typed context aliases become
//!   explicit extends targets
//! - **Type mapping** - Schema property types map to TypeScript types
//! - **Custom attribute narrowing** - Typed context specializations only accept
//!   the attributes configured for them
//! - **Soft errors** - Problems with one schema are reported without stopping
//!   the rest of the listing
//!
//! ## Quick Start
//!
//! ```ignore
//! use typesmith::prelude::*;
//!
//! let schemas = parse_schemas(&schema_json)?;
//! let custom_attributes = parse_custom_attributes(&attribute_json)?;
//! let ir = SchemaIr::from_schemas(&schemas);
//!
//! let output = Generator::new(&ir, &custom_attributes).generate()?;
//! for error in &output.errors {
//!     eprintln!("{error}");
//! }
//! std::fs::write("schema.ts", output.code)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema descriptors, parsing, validation, resolved IR
//! - [`codegen`] - TypeScript generation

pub mod prelude;

/// Schema descriptors, parsing and validation.
pub mod schema {
    pub use typesmith_schema::*;
}

/// TypeScript generation from schemas.
pub mod codegen {
    pub use typesmith_codegen::*;
}

// Re-export commonly used items at the crate root
pub use typesmith_codegen::{
    CodegenError, GeneratedOutput, Generator, GeneratorBuilder, GeneratorConfig,
    generate_from_files, generate_from_json,
};
pub use typesmith_schema::{SchemaDescriptor, SchemaIr};
