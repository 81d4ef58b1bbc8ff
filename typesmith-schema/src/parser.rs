//! JSON listing parser.
//!
//! This module turns the entity API's schema and custom attribute listings
//! into descriptor values. Parsing only checks shape; semantic checks live in
//! [`crate::validation`] and in code generation.

use crate::error::ParseError;
use crate::types::{CustomAttributeConfiguration, SchemaDescriptor};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parses a JSON array of schema descriptors.
///
/// # Arguments
/// * `json` - Schema listing as returned by the entity API
///
/// # Returns
/// Descriptors in listing order.
///
/// # Errors
/// Returns `ParseError` if the document is not a JSON array of objects or a
/// property descriptor is not an object.
pub fn parse_schemas(json: &str) -> Result<Vec<SchemaDescriptor>, ParseError> {
    parse_listing(json, "schema")
}

/// Parses a JSON array of custom attribute configurations.
///
/// # Errors
/// Returns `ParseError` if the document is not a JSON array of configurations.
pub fn parse_custom_attributes(
    json: &str,
) -> Result<Vec<CustomAttributeConfiguration>, ParseError> {
    parse_listing(json, "custom attribute configuration")
}

fn parse_listing<T: DeserializeOwned>(json: &str, kind: &str) -> Result<Vec<T>, ParseError> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = document else {
        return Err(ParseError::invalid_structure(format!(
            "expected a JSON array of {kind} entries"
        )));
    };

    let mut parsed = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            return Err(ParseError::invalid_structure(format!(
                "{kind} entry at index {index} is not an object"
            )));
        }
        parsed.push(serde_json::from_value(entry)?);
    }

    tracing::debug!("Parsed {} {} entries", parsed.len(), kind);
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_schemas() {
        let json = r#"[
            {
                "id": "Context",
                "properties": {
                    "id": { "type": "string" },
                    "name": { "type": "string" }
                },
                "primary_key": ["id"]
            },
            {
                "id": "Project",
                "$mixin": { "$ref": "Context" },
                "properties": {
                    "full_name": { "type": "string" },
                    "children": { "type": "array", "items": { "$ref": "Context" } }
                }
            }
        ]"#;

        let schemas = parse_schemas(json).expect("Failed to parse");
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[0].id(), Some("Context"));
        assert_eq!(schemas[1].mixin_target(), Some("Context"));
        assert_eq!(schemas[1].properties.len(), 2);
    }

    #[test]
    fn test_parse_empty_listing() {
        let schemas = parse_schemas("[]").expect("Failed to parse");
        assert!(schemas.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_schemas(r#"{ "id": "Context" }"#);
        assert!(matches!(result, Err(ParseError::InvalidStructure { .. })));
    }

    #[test]
    fn test_parse_rejects_non_object_entry() {
        let result = parse_schemas(r#"[{ "id": "Context" }, "Project"]"#);
        assert!(matches!(result, Err(ParseError::InvalidStructure { .. })));
    }

    #[test]
    fn test_parse_rejects_non_object_property() {
        let json = r#"[{ "id": "Context", "properties": { "name": "string" } }]"#;
        let result = parse_schemas(json);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_rejects_array_property() {
        let json = r#"[{ "id": "Note", "properties": { "content": ["string"] } }]"#;
        assert!(matches!(parse_schemas(json), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_rejects_array_items() {
        let json = r#"[{ "id": "Note", "properties": {
            "links": { "type": "array", "items": ["Note"] }
        } }]"#;
        assert!(matches!(parse_schemas(json), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(parse_schemas("[{"), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_custom_attributes() {
        let json = r#"[
            { "key": "fps", "is_hierarchical": true, "type": { "name": "number" } },
            { "key": "cut_in", "is_hierarchical": false,
              "object_type": { "name": "Shot" }, "type": { "name": "number" } }
        ]"#;

        let configs = parse_custom_attributes(json).expect("Failed to parse");
        assert_eq!(configs.len(), 2);
        assert!(configs[0].is_hierarchical);
        assert!(configs[1].applies_to("Shot"));
    }
}
