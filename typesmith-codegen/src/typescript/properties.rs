//! Property field generation.

use super::types::{PropertySite, TsType, TypeOutcome, map_property, property_key};
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::GeneratedOutput;
use typesmith_schema::ir::{ResolvedSchema, SchemaIr};
use typesmith_schema::types::PropertyDescriptor;
use typesmith_schema::well_known;

/// Generator for the property fields of an interface.
pub struct PropertyGenerator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> PropertyGenerator<'a> {
    /// Creates a new property generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Selects the properties a schema declares itself, sorted by name.
    ///
    /// Underscore-prefixed properties are internal and never emitted.
    /// Properties present on the schema it inherits from are left to the
    /// extends clause. Specializations of the typed context drop their custom
    /// attribute field, which is emitted narrowed instead.
    #[must_use]
    pub fn select<'s>(&self, schema: &'s ResolvedSchema) -> Vec<(&'s str, &'s PropertyDescriptor)> {
        let inherited = self.ir.property_source(schema);
        let is_alias = schema.inheritance.is_alias();

        let mut selected: Vec<(&str, &PropertyDescriptor)> = schema
            .descriptor
            .properties
            .iter()
            .map(|(name, property)| (name.as_str(), property))
            .filter(|(name, _)| !name.starts_with('_'))
            .filter(|(name, _)| !inherited.is_some_and(|base| base.has_property(name)))
            .filter(|(name, _)| !(is_alias && *name == well_known::CUSTOM_ATTRIBUTES_FIELD))
            .collect();
        selected.sort_by(|a, b| a.0.cmp(b.0));
        selected
    }

    /// Generates the field lines for a schema's own properties.
    ///
    /// Properties that cannot be typed are reported on `output` and skipped.
    ///
    /// # Errors
    /// Returns `CodegenError` on an unknown type name or an array-like
    /// property without items.
    pub fn generate(
        &self,
        schema_id: &str,
        schema: &ResolvedSchema,
        output: &mut GeneratedOutput,
    ) -> Result<String, CodegenError> {
        let mut fields = String::new();

        for (name, property) in self.select(schema) {
            let site = PropertySite {
                schema: schema_id,
                property: name,
            };
            let field_type = match map_property(site, property)? {
                TypeOutcome::Mapped(field_type) => field_type,
                TypeOutcome::Skipped(reason) => {
                    output.push_error(reason);
                    continue;
                }
            };

            if self.config.emit_docs {
                if let Some(doc) = doc_comment(property) {
                    fields.push_str(&doc);
                }
            }
            fields.push_str(&field(
                name,
                &field_type,
                schema.descriptor.is_required(name),
                schema.descriptor.is_read_only(name),
            ));
        }

        Ok(fields)
    }
}

/// Renders one field line; fields that are not required are optional.
#[must_use]
pub fn field(name: &str, field_type: &TsType, required: bool, read_only: bool) -> String {
    format!(
        "  {}{}{}: {};\n",
        if read_only { "readonly " } else { "" },
        property_key(name),
        if required { "" } else { "?" },
        field_type
    )
}

/// Renders a property's description and server default as a single-line doc
/// comment, or `None` when it has neither.
fn doc_comment(property: &PropertyDescriptor) -> Option<String> {
    let mut parts = Vec::with_capacity(2);
    if let Some(description) = &property.description {
        let text = description.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            parts.push(text);
        }
    }
    if let Some(default) = &property.default_value {
        parts.push(format!("Defaults to `{}`.", default));
    }

    if parts.is_empty() {
        return None;
    }
    Some(format!("  /** {} */\n", parts.join(" ").replace("*/", "*\\/")))
}
