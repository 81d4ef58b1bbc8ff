//! Intermediate representation for code generation.
//!
//! This module resolves the inheritance relationships between schemas once,
//! so emitters only ever look at an explicit list of extends targets.

use crate::types::SchemaDescriptor;
use crate::well_known;
use std::collections::HashMap;

/// Intermediate representation of a schema listing for code generation.
#[derive(Debug, Clone, Default)]
pub struct SchemaIr {
    /// Schemas in listing order with resolved inheritance.
    pub schemas: Vec<ResolvedSchema>,
    /// Schema id lookup; the first schema with a given id wins.
    index: HashMap<String, usize>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a schema listing.
    #[must_use]
    pub fn from_schemas(schemas: &[SchemaDescriptor]) -> Self {
        let mut index = HashMap::with_capacity(schemas.len());
        for (position, schema) in schemas.iter().enumerate() {
            if let Some(id) = schema.id() {
                index.entry(id.to_string()).or_insert(position);
            }
        }

        let schemas = schemas
            .iter()
            .map(|schema| ResolvedSchema {
                inheritance: Inheritance::resolve(schema, &index),
                descriptor: schema.clone(),
            })
            .collect();

        Self { schemas, index }
    }

    /// Returns the number of schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if the listing is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Gets a schema by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SchemaDescriptor> {
        self.index
            .get(id)
            .map(|&position| &self.schemas[position].descriptor)
    }

    /// Gets the typed context schema, if the listing has one.
    #[must_use]
    pub fn typed_context(&self) -> Option<&SchemaDescriptor> {
        self.get(well_known::TYPED_CONTEXT)
    }

    /// Returns the element schema id of the typed context's custom attribute
    /// array, if it declares one through an items `$ref`.
    #[must_use]
    pub fn custom_attribute_element(&self) -> Option<&str> {
        self.typed_context()
            .and_then(|schema| schema.properties.get(well_known::CUSTOM_ATTRIBUTES_FIELD))
            .and_then(|property| property.items.as_ref())
            .and_then(|items| items.reference.as_deref())
    }

    /// Returns the schema whose properties a subtype must not redeclare.
    ///
    /// Aliases of the well-known base entity inherit from the typed context;
    /// everything else inherits from its resolved mixin base.
    #[must_use]
    pub fn property_source(&self, schema: &ResolvedSchema) -> Option<&SchemaDescriptor> {
        if schema.inheritance.is_alias() {
            self.typed_context()
        } else {
            schema.inheritance.base().and_then(|base| self.get(base))
        }
    }

    /// Returns the ids of all typed context specializations in listing order.
    #[must_use]
    pub fn alias_ids(&self) -> Vec<&str> {
        self.schemas
            .iter()
            .filter(|schema| schema.inheritance.is_alias())
            .filter_map(ResolvedSchema::id)
            .collect()
    }
}

/// A schema together with its resolved inheritance.
#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    /// Source descriptor.
    pub descriptor: SchemaDescriptor,
    /// Resolved extends targets.
    pub inheritance: Inheritance,
}

impl ResolvedSchema {
    /// Returns the schema id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.descriptor.id()
    }

    /// Returns true if this is the generic typed context schema.
    #[must_use]
    pub fn is_typed_context(&self) -> bool {
        self.id() == Some(well_known::TYPED_CONTEXT)
    }
}

/// One entry of an extends clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendsTarget {
    /// Mixin base resolved from the listing.
    Base(String),
    /// Specialization of the generic typed context.
    TypedContext,
}

/// Resolved inheritance of a schema.
///
/// Targets are ordered `[Base, TypedContext]`. A schema with both a
/// resolvable mixin and an alias marker keeps both targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inheritance {
    targets: Vec<ExtendsTarget>,
}

impl Inheritance {
    /// Resolves a schema's inheritance against a schema id index.
    #[must_use]
    pub fn resolve(schema: &SchemaDescriptor, index: &HashMap<String, usize>) -> Self {
        let mut targets = Vec::with_capacity(2);

        if let Some(mixin) = schema.mixin_target() {
            if index.contains_key(mixin) {
                targets.push(ExtendsTarget::Base(mixin.to_string()));
            } else {
                tracing::warn!(
                    "Schema {:?} extends unknown schema '{}', ignoring mixin",
                    schema.id(),
                    mixin
                );
            }
        }

        if schema.alias_target() == Some(well_known::ALIAS_BASE) {
            targets.push(ExtendsTarget::TypedContext);
        }

        Self { targets }
    }

    /// Returns the extends targets in clause order.
    #[must_use]
    pub fn targets(&self) -> &[ExtendsTarget] {
        &self.targets
    }

    /// Returns true if the schema extends nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns the resolved mixin base id.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.targets.iter().find_map(|target| match target {
            ExtendsTarget::Base(id) => Some(id.as_str()),
            ExtendsTarget::TypedContext => None,
        })
    }

    /// Returns true if the schema specializes the typed context.
    #[must_use]
    pub fn is_alias(&self) -> bool {
        self.targets.contains(&ExtendsTarget::TypedContext)
    }

    /// Returns true if the schema both extends a base and specializes the
    /// typed context.
    #[must_use]
    pub fn is_dual(&self) -> bool {
        self.base().is_some() && self.is_alias()
    }
}
