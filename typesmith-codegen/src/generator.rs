//! Generation pass over a whole schema listing.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::typescript::{InterfaceGenerator, RegistryGenerator};
use typesmith_schema::ir::SchemaIr;
use typesmith_schema::types::{CustomAttributeConfiguration, SchemaDescriptor};
use typesmith_schema::validation::validate_schemas;

/// Error reported when the listing has no schemas.
pub const NO_SCHEMAS: &str = "No schemas found";

/// Output buffer and soft errors of a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedOutput {
    /// Generated TypeScript source.
    pub code: String,
    /// Problems that did not stop generation.
    pub errors: Vec<String>,
    /// Ids of the emitted interfaces, in emission order.
    pub interfaces: Vec<String>,
}

impl GeneratedOutput {
    /// Records a soft error.
    pub fn push_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.errors.push(message);
    }

    /// Appends an interface declaration for the given schema id.
    pub fn push_declaration(&mut self, id: &str, declaration: &str) {
        self.push_code(declaration);
        self.interfaces.push(id.to_string());
    }

    /// Appends a declaration block, separated from the previous one by a
    /// blank line.
    pub fn push_code(&mut self, block: &str) {
        if !self.code.is_empty() && !self.code.ends_with("\n\n") {
            self.code.push('\n');
        }
        self.code.push_str(block);
    }

    /// Returns true if any soft error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Main code generator.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    custom_attributes: &'a [CustomAttributeConfiguration],
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with the default configuration.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, custom_attributes: &'a [CustomAttributeConfiguration]) -> Self {
        Self::with_config(ir, custom_attributes, GeneratorConfig::default())
    }

    /// Creates a new generator with the given configuration.
    #[must_use]
    pub fn with_config(
        ir: &'a SchemaIr,
        custom_attributes: &'a [CustomAttributeConfiguration],
        config: GeneratorConfig,
    ) -> Self {
        Self {
            ir,
            custom_attributes,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates one interface per schema, followed by the listing-wide
    /// declarations.
    ///
    /// An empty listing yields a single soft error and no code.
    ///
    /// # Errors
    /// Returns `CodegenError` on a hard failure: an unknown property type, an
    /// array-like property without items, or (in strict mode) a listing that
    /// fails validation. No partial output is returned.
    pub fn generate(&self) -> Result<GeneratedOutput, CodegenError> {
        let mut output = GeneratedOutput::default();

        if self.ir.is_empty() {
            output.push_error(NO_SCHEMAS);
            return Ok(output);
        }

        if self.config.strict {
            let descriptors: Vec<SchemaDescriptor> = self
                .ir
                .schemas
                .iter()
                .map(|schema| schema.descriptor.clone())
                .collect();
            validate_schemas(&descriptors)?;
        }

        if let Some(banner) = &self.config.banner {
            output.code.push_str(&banner.render());
        }

        let interfaces = InterfaceGenerator::new(self.ir, self.custom_attributes, &self.config);
        for (index, schema) in self.ir.schemas.iter().enumerate() {
            interfaces.generate(index, schema, &mut output)?;
        }

        let registry = RegistryGenerator::new(self.ir);
        if let Some(union) = registry.subtype_union() {
            output.push_code(&union);
        }
        if self.config.emit_entity_type_map {
            if let Some(map) = registry.entity_type_map(&output.interfaces) {
                output.push_code(&map);
            }
        }

        tracing::info!(
            "Generated {} interfaces from {} schemas ({} errors)",
            output.interfaces.len(),
            self.ir.len(),
            output.errors.len()
        );
        Ok(output)
    }
}
