//! Interface declaration generation.

use super::custom_attributes::CustomAttributeNarrowing;
use super::properties::{PropertyGenerator, field};
use super::types::{TsType, quote};
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::GeneratedOutput;
use typesmith_schema::ir::{ExtendsTarget, ResolvedSchema, SchemaIr};
use typesmith_schema::types::CustomAttributeConfiguration;
use typesmith_schema::well_known;

/// Generator for one interface declaration per schema.
pub struct InterfaceGenerator<'a> {
    properties: PropertyGenerator<'a>,
    narrowing: CustomAttributeNarrowing<'a>,
}

impl<'a> InterfaceGenerator<'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub fn new(
        ir: &'a SchemaIr,
        custom_attributes: &'a [CustomAttributeConfiguration],
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            properties: PropertyGenerator::new(ir, config),
            narrowing: CustomAttributeNarrowing::new(custom_attributes)
                .with_element(ir.custom_attribute_element()),
        }
    }

    /// Generates the declaration for one schema and appends it to `output`.
    ///
    /// A schema without an id is reported and skipped.
    ///
    /// # Errors
    /// Returns `CodegenError` if a property hard-fails type mapping.
    pub fn generate(
        &self,
        index: usize,
        schema: &ResolvedSchema,
        output: &mut GeneratedOutput,
    ) -> Result<(), CodegenError> {
        let Some(id) = schema.id() else {
            output.push_error(format!("Schema at index {} has no id, skipping", index));
            return Ok(());
        };

        let fields = self.properties.generate(id, schema, output)?;

        let mut declaration = String::new();
        declaration.push_str(&format!(
            "export interface {}{} {{\n",
            declaration_name(id),
            extends_clause(id, schema)
        ));
        declaration.push_str(&fields);

        if schema.inheritance.is_alias() {
            declaration.push_str(&field(
                well_known::CUSTOM_ATTRIBUTES_FIELD,
                &self.narrowing.field_type(id),
                false,
                false,
            ));
        }

        let entity_type = if schema.is_typed_context() {
            TsType::Reference(well_known::TYPE_PARAMETER.to_string())
        } else {
            TsType::StringLiteral(id.to_string())
        };
        declaration.push_str(&field(well_known::ENTITY_TYPE_FIELD, &entity_type, false, false));
        declaration.push_str(&field(
            well_known::PERMISSIONS_FIELD,
            &TsType::open_record(),
            false,
            false,
        ));
        declaration.push_str("}\n");

        if schema.inheritance.is_dual() {
            tracing::warn!(
                "Schema '{}' both extends a mixin and aliases {}, emitting both",
                id,
                well_known::ALIAS_BASE
            );
        }
        tracing::debug!("Generated interface {}", id);

        output.push_declaration(id, &declaration);
        Ok(())
    }
}

/// Returns the interface name of a schema, or `None` without an id.
#[must_use]
pub fn interface_name(schema: &ResolvedSchema) -> Option<String> {
    schema.id().map(declaration_name)
}

/// Returns the declared name for a schema id; the typed context is generic.
#[must_use]
pub fn declaration_name(id: &str) -> String {
    if id == well_known::TYPED_CONTEXT {
        format!(
            "{}<{} extends {} = {}>",
            id,
            well_known::TYPE_PARAMETER,
            well_known::TYPED_CONTEXT_SUBTYPE,
            well_known::TYPED_CONTEXT_SUBTYPE
        )
    } else {
        id.to_string()
    }
}

/// Returns the extends clause (with a leading space), or an empty string.
///
/// Every target omits the two meta-properties, which each interface
/// redeclares with its own literal type.
#[must_use]
pub fn extends_clause(id: &str, schema: &ResolvedSchema) -> String {
    let targets = schema.inheritance.targets();
    if targets.is_empty() {
        return String::new();
    }

    let omitted = well_known::OMITTED_META_PROPERTIES
        .iter()
        .map(|name| quote(name))
        .collect::<Vec<_>>()
        .join(" | ");

    let clauses = targets
        .iter()
        .map(|target| {
            let extended = match target {
                ExtendsTarget::Base(base) => base.clone(),
                ExtendsTarget::TypedContext => {
                    format!("{}<{}>", well_known::TYPED_CONTEXT, quote(id))
                }
            };
            format!("Omit<{}, {}>", extended, omitted)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(" extends {}", clauses)
}
