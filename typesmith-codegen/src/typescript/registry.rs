//! Listing-wide declarations emitted after the interfaces.

use super::types::{TsType, property_key};
use std::collections::HashSet;
use typesmith_schema::ir::SchemaIr;
use typesmith_schema::well_known;

/// Generator for the subtype union and the entity type map.
pub struct RegistryGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> RegistryGenerator<'a> {
    /// Creates a new registry generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the union bounding the typed context parameter.
    ///
    /// Returns `None` when the listing has no typed context schema.
    #[must_use]
    pub fn subtype_union(&self) -> Option<String> {
        self.ir.typed_context()?;

        let members = unique(self.ir.alias_ids())
            .into_iter()
            .map(|id| TsType::StringLiteral(id.to_string()))
            .collect();

        Some(format!(
            "export type {} = {};\n",
            well_known::TYPED_CONTEXT_SUBTYPE,
            TsType::Union(members)
        ))
    }

    /// Generates the map from entity type name to interface.
    ///
    /// Returns `None` when no interface was emitted.
    #[must_use]
    pub fn entity_type_map(&self, interfaces: &[String]) -> Option<String> {
        if interfaces.is_empty() {
            return None;
        }

        let mut output = String::from("export interface EntityTypeMap {\n");
        for id in unique(interfaces.iter().map(String::as_str)) {
            output.push_str(&format!("  {}: {};\n", property_key(id), id));
        }
        output.push_str("}\n\n");
        output.push_str("export type EntityType = keyof EntityTypeMap;\n");
        Some(output)
    }
}

/// Removes repeated ids, keeping the first occurrence.
fn unique<'s>(ids: impl IntoIterator<Item = &'s str>) -> Vec<&'s str> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
