//! # Typesmith Schema
//!
//! Entity schema descriptors as served by the remote entity API.
//!
//! This crate provides:
//! - Descriptor types for schemas, properties and custom attribute configurations
//! - JSON parsing of schema and custom attribute listings
//! - Schema validation
//! - Intermediate representation with resolved inheritance for code generation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;
pub mod well_known;

pub use error::{ParseError, SchemaError};
pub use ir::{ExtendsTarget, Inheritance, ResolvedSchema, SchemaIr};
pub use parser::{parse_custom_attributes, parse_schemas};
pub use types::{
    AliasFor, CustomAttributeConfiguration, CustomAttributeKind, ItemsDescriptor, NamedRef,
    PropertyDescriptor, PropertyType, Reference, SchemaDescriptor,
};
pub use validation::validate_schemas;
