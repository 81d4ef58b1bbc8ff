//! Generator configuration.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

/// Settings for a generation pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Comment block written ahead of the declarations.
    pub banner: Option<Banner>,
    /// Emit property descriptions as doc comments.
    pub emit_docs: bool,
    /// Emit the `EntityTypeMap` and `EntityType` declarations.
    pub emit_entity_type_map: bool,
    /// Refuse listings that fail schema validation.
    pub strict: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            banner: None,
            emit_docs: true,
            emit_entity_type_map: true,
            strict: false,
        }
    }
}

impl GeneratorConfig {
    /// Loads a configuration from a JSON document.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if the document does not match.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the banner.
    #[must_use]
    pub fn banner(mut self, banner: Banner) -> Self {
        self.config.banner = Some(banner);
        self
    }

    /// Enables or disables property doc comments.
    #[must_use]
    pub fn emit_docs(mut self, enabled: bool) -> Self {
        self.config.emit_docs = enabled;
        self
    }

    /// Enables or disables the entity type map.
    #[must_use]
    pub fn emit_entity_type_map(mut self, enabled: bool) -> Self {
        self.config.emit_entity_type_map = enabled;
        self
    }

    /// Enables or disables strict validation.
    #[must_use]
    pub fn strict(mut self, enabled: bool) -> Self {
        self.config.strict = enabled;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

/// Comment block identifying where the declarations came from.
///
/// Off by default: a timestamp makes the output differ between runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Banner {
    /// Name of the product whose API was read.
    pub product: String,
    /// Server version the schemas were read from.
    #[serde(default)]
    pub server_version: Option<String>,
    /// Time the schemas were read.
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl Banner {
    /// Creates a banner for the given product.
    #[must_use]
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            server_version: None,
            generated_at: None,
        }
    }

    /// Sets the server version.
    #[must_use]
    pub fn server_version(mut self, version: impl Into<String>) -> Self {
        self.server_version = Some(version.into());
        self
    }

    /// Sets the generation time.
    #[must_use]
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Renders the banner as a line comment block followed by a blank line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("// {} entity types\n", self.product));
        if let Some(version) = &self.server_version {
            output.push_str(&format!("// Server version: {}\n", version));
        }
        if let Some(at) = &self.generated_at {
            output.push_str(&format!(
                "// Generated at: {}\n",
                at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }
        output.push_str("// Do not edit by hand; regenerate from the server schema.\n\n");
        output
    }
}
