//! Schema validation utilities.
//!
//! Generation tolerates most inconsistencies by reporting them and moving on.
//! These checks surface them up front, for callers that would rather refuse
//! a listing than emit declarations against it.

use crate::error::SchemaError;
use crate::types::{PropertyType, SchemaDescriptor};
use std::collections::HashSet;

/// Validates a schema listing for consistency.
///
/// # Arguments
/// * `schemas` - The listing to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` on duplicate ids, unknown property types or
/// references to schemas missing from the listing.
pub fn validate_schemas(schemas: &[SchemaDescriptor]) -> Result<(), SchemaError> {
    let known = validate_ids(schemas)?;
    for schema in schemas {
        validate_properties(schema, &known)?;
    }
    Ok(())
}

/// Checks ids are present and unique, returning the set of known ids.
fn validate_ids(schemas: &[SchemaDescriptor]) -> Result<HashSet<&str>, SchemaError> {
    let mut seen = HashSet::with_capacity(schemas.len());

    for (index, schema) in schemas.iter().enumerate() {
        let Some(id) = schema.id() else {
            return Err(SchemaError::Validation {
                message: format!("Schema at index {index} has no id"),
            });
        };
        if !seen.insert(id) {
            return Err(SchemaError::DuplicateSchema { id: id.to_string() });
        }
    }

    Ok(seen)
}

/// Checks property types and references of one schema.
fn validate_properties(schema: &SchemaDescriptor, known: &HashSet<&str>) -> Result<(), SchemaError> {
    let schema_id = schema.id().unwrap_or_default();

    if let Some(mixin) = schema.mixin_target() {
        if !known.contains(mixin) {
            return Err(SchemaError::dangling(schema_id, mixin));
        }
    }

    for (name, property) in &schema.properties {
        if let Some(target) = &property.reference {
            if !known.contains(target.as_str()) {
                return Err(SchemaError::dangling(schema_id, target));
            }
        }

        if let Some(type_name) = &property.type_name {
            let Some(property_type) = PropertyType::from_schema_name(type_name) else {
                return Err(SchemaError::UnknownType {
                    type_name: type_name.clone(),
                    property: name.clone(),
                    schema: schema_id.to_string(),
                });
            };

            if property_type.is_array_like() && property.items.is_none() {
                return Err(SchemaError::Validation {
                    message: format!(
                        "Property '{name}' of schema '{schema_id}' is an array without items"
                    ),
                });
            }
        }

        let item_target = property.items.as_ref().and_then(|i| i.reference.as_ref());
        if let Some(target) = item_target {
            if !known.contains(target.as_str()) {
                return Err(SchemaError::dangling(schema_id, target));
            }
        }
    }

    Ok(())
}
