//! Fixed names of the supported schema dialect.

/// Id of the schema emitted as the generic typed context declaration.
pub const TYPED_CONTEXT: &str = "TypedContext";

/// Id of the entity whose aliases become typed context specializations.
pub const ALIAS_BASE: &str = "Task";

/// Name of the union type bounding the typed context parameter.
pub const TYPED_CONTEXT_SUBTYPE: &str = "TypedContextSubtype";

/// Generic parameter name of the typed context declaration.
pub const TYPE_PARAMETER: &str = "K";

/// Field narrowed on typed context specializations.
pub const CUSTOM_ATTRIBUTES_FIELD: &str = "custom_attributes";

/// Synthetic entity type discriminator field.
pub const ENTITY_TYPE_FIELD: &str = "__entity_type__";

/// Synthetic permissions map field.
pub const PERMISSIONS_FIELD: &str = "__permissions";

/// Meta-properties omitted from every extends target.
pub const OMITTED_META_PROPERTIES: [&str; 2] = [ENTITY_TYPE_FIELD, PERMISSIONS_FIELD];
