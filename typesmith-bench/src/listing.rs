//! Synthetic schema listings shaped like a production entity API.

use serde_json::{Value, json};
use typesmith_schema::types::{CustomAttributeConfiguration, SchemaDescriptor};

/// Builds a listing with the context hierarchy plus `entities` plain schemas
/// and `aliases` typed context specializations.
///
/// # Panics
/// Panics if a synthetic schema fails to decode.
#[must_use]
pub fn synthetic_listing(entities: usize, aliases: usize) -> Vec<SchemaDescriptor> {
    let mut listing = vec![
        json!({
            "id": "Context",
            "properties": {
                "id": { "type": "string" },
                "name": { "type": "string" },
                "parent": { "$ref": "Context" },
                "children": { "type": "array", "items": { "$ref": "Context" } }
            },
            "primary_key": ["id"],
            "required": ["name"]
        }),
        json!({
            "id": "TypedContext",
            "$mixin": { "$ref": "Context" },
            "properties": {
                "bid": { "type": "number" },
                "custom_attributes": {
                    "type": "mapped_array",
                    "items": { "$ref": "ContextCustomAttributeValue" }
                }
            }
        }),
    ];

    listing.extend((0..entities).map(entity));
    listing.extend((0..aliases).map(alias));

    listing
        .into_iter()
        .map(|value| serde_json::from_value(value).expect("synthetic schema should decode"))
        .collect()
}

/// Builds custom attribute configurations spread over the synthetic aliases.
#[must_use]
pub fn synthetic_custom_attributes(count: usize, aliases: usize) -> Vec<CustomAttributeConfiguration> {
    (0..count)
        .map(|i| {
            if aliases == 0 || i % 4 == 0 {
                CustomAttributeConfiguration::hierarchical(format!("attribute_{i}"), "number")
            } else {
                CustomAttributeConfiguration::scoped(
                    format!("attribute_{i}"),
                    format!("Alias{}", i % aliases),
                    "text",
                )
            }
        })
        .collect()
}

fn entity(i: usize) -> Value {
    let mut properties = serde_json::Map::new();
    for p in 0..16 {
        let property = match p % 4 {
            0 => json!({ "type": "string" }),
            1 => json!({ "type": "integer" }),
            2 => json!({ "type": "variable" }),
            _ => json!({ "type": "array", "items": { "$ref": "Context" } }),
        };
        properties.insert(format!("field_{p}"), property);
    }
    properties.insert("_internal".to_string(), json!({ "type": "object" }));

    json!({
        "id": format!("Entity{i}"),
        "properties": properties,
        "required": ["field_0"],
        "immutable": ["field_1"],
    })
}

fn alias(i: usize) -> Value {
    json!({
        "id": format!("Alias{i}"),
        "alias_for": { "id": "Task" },
        "properties": {
            "bid": { "type": "number" },
            "frame_start": { "type": "integer" },
            "frame_end": { "type": "integer" }
        }
    })
}
