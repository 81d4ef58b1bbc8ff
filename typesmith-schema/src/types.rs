//! Schema descriptor types.
//!
//! This module contains the data structures describing server-side entity
//! schemas, their properties, and the custom attribute configurations that
//! decorate them. All of them deserialize straight from the entity API's
//! JSON listings.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Descriptor of one server-side entity type's shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    /// Schema identifier (the entity type name).
    #[serde(default)]
    pub id: Option<String>,
    /// Mixin reference to the schema this one extends.
    #[serde(
        rename = "$mixin",
        default,
        deserialize_with = "object",
        skip_serializing_if = "Option::is_none"
    )]
    pub mixin: Option<Reference>,
    /// Marks this schema as an alias for another entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_for: Option<AliasFor>,
    /// Property descriptors keyed by property name.
    #[serde(default, deserialize_with = "object_map")]
    pub properties: BTreeMap<String, PropertyDescriptor>,
    /// Names of required properties.
    #[serde(default, deserialize_with = "nullable_list")]
    pub required: Vec<String>,
    /// Names of primary key properties.
    #[serde(default, deserialize_with = "nullable_list")]
    pub primary_key: Vec<String>,
    /// Names of properties that cannot change after creation.
    #[serde(default, deserialize_with = "nullable_list")]
    pub immutable: Vec<String>,
    /// Names of properties computed by the server.
    #[serde(default, deserialize_with = "nullable_list")]
    pub computed: Vec<String>,
}

impl SchemaDescriptor {
    /// Creates a new schema descriptor with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Returns the schema id, treating an empty id as absent.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns the id of the mixin base, if any.
    #[must_use]
    pub fn mixin_target(&self) -> Option<&str> {
        self.mixin.as_ref().map(|m| m.target.as_str())
    }

    /// Returns the id of the aliased entity, if any.
    #[must_use]
    pub fn alias_target(&self) -> Option<&str> {
        self.alias_for.as_ref().map(AliasFor::id)
    }

    /// Adds a property to the schema.
    pub fn add_property(&mut self, name: impl Into<String>, property: PropertyDescriptor) {
        self.properties.insert(name.into(), property);
    }

    /// Returns true if the schema declares a property with the given name.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Returns true if the property is listed as required or as a primary key.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        contains(&self.required, name) || contains(&self.primary_key, name)
    }

    /// Returns true if the property is listed as immutable or computed.
    #[must_use]
    pub fn is_read_only(&self, name: &str) -> bool {
        contains(&self.immutable, name) || contains(&self.computed, name)
    }
}

fn contains(list: &[String], name: &str) -> bool {
    list.iter().any(|entry| entry == name)
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// Derived struct impls also accept sequences and fill fields by position, so
// nested descriptors go through these to insist on a JSON object.

fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => from_object(value, "descriptor").map(Some),
    }
}

fn object_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, PropertyDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<BTreeMap<String, Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| {
            from_object(value, &format!("property '{name}'")).map(|property| (name, property))
        })
        .collect()
}

fn from_object<T, E>(value: Value, what: &str) -> Result<T, E>
where
    T: DeserializeOwned,
    E: serde::de::Error,
{
    if !value.is_object() {
        return Err(E::custom(format!("{what} must be a JSON object, found {value}")));
    }
    serde_json::from_value(value).map_err(E::custom)
}

/// Reference to another schema by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Referenced schema id.
    #[serde(rename = "$ref")]
    pub target: String,
}

impl Reference {
    /// Creates a reference to the given schema id.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// Alias marker, either a bare id or an object carrying the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasFor {
    /// Bare entity id.
    Id(String),
    /// Entity id with classifiers narrowing the alias.
    Entity {
        /// Aliased entity id.
        id: String,
        /// Server-side classifiers (for example an object type id).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        classifiers: Option<Value>,
    },
}

impl AliasFor {
    /// Returns the aliased entity id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Entity { id, .. } => id,
        }
    }
}

/// Descriptor of a single schema property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Declared type name.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Reference to another schema.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Element descriptor for array-like types.
    #[serde(default, deserialize_with = "object", skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsDescriptor>,
    /// Human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Server-side default value.
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl PropertyDescriptor {
    /// Creates a property with the given declared type name.
    #[must_use]
    pub fn typed(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }

    /// Creates a property referencing another schema.
    #[must_use]
    pub fn reference(target: impl Into<String>) -> Self {
        Self {
            reference: Some(target.into()),
            ..Self::default()
        }
    }

    /// Creates an array-like property whose items reference another schema.
    #[must_use]
    pub fn array_of(type_name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            items: Some(ItemsDescriptor {
                reference: Some(target.into()),
                type_name: None,
            }),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Element descriptor of an array-like property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsDescriptor {
    /// Referenced schema id.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Declared element type name.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

/// Property type names understood by the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// Nested object.
    Object,
    /// Text.
    String,
    /// Floating point number.
    Number,
    /// Boolean flag.
    Boolean,
    /// Whole number.
    Integer,
    /// Value of varying scalar type.
    Variable,
    /// Ordered collection.
    Array,
    /// Collection keyed on the server, exposed as an array.
    MappedArray,
}

impl PropertyType {
    /// Every supported type, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Object,
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Integer,
        Self::Variable,
        Self::Array,
        Self::MappedArray,
    ];

    /// Returns the schema type name.
    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Variable => "variable",
            Self::Array => "array",
            Self::MappedArray => "mapped_array",
        }
    }

    /// Parses a type from its schema name.
    #[must_use]
    pub fn from_schema_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.schema_name() == name)
    }

    /// Returns true if the type carries an items descriptor.
    #[must_use]
    pub const fn is_array_like(&self) -> bool {
        matches!(self, Self::Array | Self::MappedArray)
    }
}

/// Custom attribute configuration as listed by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttributeConfiguration {
    /// Attribute key.
    pub key: String,
    /// Applies to every entity type.
    #[serde(default)]
    pub is_hierarchical: bool,
    /// Entity type this attribute is scoped to.
    #[serde(default, deserialize_with = "object", skip_serializing_if = "Option::is_none")]
    pub object_type: Option<NamedRef>,
    /// Value type of the attribute.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "object",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_type: Option<NamedRef>,
}

impl CustomAttributeConfiguration {
    /// Creates a hierarchical attribute.
    #[must_use]
    pub fn hierarchical(key: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            is_hierarchical: true,
            value_type: Some(NamedRef::new(value_type)),
            ..Self::default()
        }
    }

    /// Creates an attribute scoped to one entity type.
    #[must_use]
    pub fn scoped(
        key: impl Into<String>,
        object_type: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            object_type: Some(NamedRef::new(object_type)),
            value_type: Some(NamedRef::new(value_type)),
            ..Self::default()
        }
    }

    /// Returns true if the attribute applies to the given entity type.
    #[must_use]
    pub fn applies_to(&self, entity: &str) -> bool {
        self.is_hierarchical
            || self
                .object_type
                .as_ref()
                .is_some_and(|object_type| object_type.name == entity)
    }

    /// Returns the kind of value stored in the attribute.
    #[must_use]
    pub fn kind(&self) -> CustomAttributeKind {
        self.value_type
            .as_ref()
            .map_or(CustomAttributeKind::Unknown, |t| {
                CustomAttributeKind::from_name(&t.name)
            })
    }
}

/// Named reference (`{ "name": ... }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    /// Referenced name.
    pub name: String,
}

impl NamedRef {
    /// Creates a named reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Value kinds of custom attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomAttributeKind {
    /// Numeric value.
    Number,
    /// Free text.
    Text,
    /// Boolean flag.
    Boolean,
    /// ISO date string.
    Date,
    /// Selection from a fixed list.
    Enumerator,
    /// Selection from a server-computed list.
    DynamicEnumerator,
    /// Expression evaluated by the server.
    Expression,
    /// Link.
    Url,
    /// Notification type selector.
    NotificationType,
    /// Missing or unrecognized type.
    Unknown,
}

impl CustomAttributeKind {
    /// Parses a kind from the configuration type name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "number" => Self::Number,
            "text" => Self::Text,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "enumerator" => Self::Enumerator,
            "dynamic enumerator" => Self::DynamicEnumerator,
            "expression" => Self::Expression,
            "url" => Self::Url,
            "notificationtype" => Self::NotificationType,
            _ => Self::Unknown,
        }
    }

    /// Returns true if the value holds a list of selections.
    #[must_use]
    pub const fn is_multi_select(&self) -> bool {
        matches!(self, Self::Enumerator | Self::DynamicEnumerator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_descriptor_from_json() {
        let schema: SchemaDescriptor = serde_json::from_value(json!({
            "id": "Shot",
            "$mixin": { "$ref": "Context" },
            "alias_for": { "id": "Task", "classifiers": { "object_typeid": "bad1" } },
            "properties": {
                "id": { "type": "string" },
                "parent": { "$ref": "Context" }
            },
            "required": ["name"],
            "primary_key": ["id"],
            "immutable": ["id"],
            "computed": null
        }))
        .expect("Failed to deserialize");

        assert_eq!(schema.id(), Some("Shot"));
        assert_eq!(schema.mixin_target(), Some("Context"));
        assert_eq!(schema.alias_target(), Some("Task"));
        assert_eq!(schema.properties.len(), 2);
        assert!(schema.computed.is_empty());
        assert_eq!(
            schema.properties["parent"].reference.as_deref(),
            Some("Context")
        );
    }

    #[test]
    fn test_alias_for_bare_id() {
        let schema: SchemaDescriptor =
            serde_json::from_value(json!({ "id": "Shot", "alias_for": "Task" }))
                .expect("Failed to deserialize");
        assert_eq!(schema.alias_target(), Some("Task"));
    }

    #[test]
    fn test_empty_id_is_absent() {
        let schema = SchemaDescriptor::new("");
        assert_eq!(schema.id(), None);
        assert_eq!(SchemaDescriptor::default().id(), None);
    }

    #[test]
    fn test_required_and_read_only() {
        let mut schema = SchemaDescriptor::new("User");
        schema.required.push("username".to_string());
        schema.primary_key.push("id".to_string());
        schema.immutable.push("id".to_string());
        schema.computed.push("thumbnail_url".to_string());

        assert!(schema.is_required("username"));
        assert!(schema.is_required("id"));
        assert!(!schema.is_required("email"));
        assert!(schema.is_read_only("id"));
        assert!(schema.is_read_only("thumbnail_url"));
        assert!(!schema.is_read_only("username"));
    }

    #[test]
    fn test_property_type_from_schema_name() {
        assert_eq!(
            PropertyType::from_schema_name("integer"),
            Some(PropertyType::Integer)
        );
        assert_eq!(
            PropertyType::from_schema_name("mapped_array"),
            Some(PropertyType::MappedArray)
        );
        assert_eq!(PropertyType::from_schema_name("datetime"), None);
        assert!(PropertyType::Array.is_array_like());
        assert!(!PropertyType::Object.is_array_like());
    }

    #[test]
    fn test_property_type_names_round_trip() {
        for property_type in PropertyType::ALL {
            assert_eq!(
                PropertyType::from_schema_name(property_type.schema_name()),
                Some(property_type)
            );
        }
    }

    #[test]
    fn test_custom_attribute_applies_to() {
        let fps = CustomAttributeConfiguration::hierarchical("fps", "number");
        let cut_in = CustomAttributeConfiguration::scoped("cut_in", "Shot", "number");

        assert!(fps.applies_to("Shot"));
        assert!(fps.applies_to("Sequence"));
        assert!(cut_in.applies_to("Shot"));
        assert!(!cut_in.applies_to("Sequence"));
    }

    #[test]
    fn test_custom_attribute_kind() {
        let config: CustomAttributeConfiguration = serde_json::from_value(json!({
            "key": "status",
            "is_hierarchical": false,
            "object_type": { "name": "Shot" },
            "type": { "name": "dynamic enumerator" }
        }))
        .expect("Failed to deserialize");

        assert_eq!(config.kind(), CustomAttributeKind::DynamicEnumerator);
        assert!(config.kind().is_multi_select());
        assert_eq!(
            CustomAttributeConfiguration::default().kind(),
            CustomAttributeKind::Unknown
        );
    }

    #[test]
    fn test_property_descriptor_builders() {
        let notes = PropertyDescriptor::array_of("array", "Note").with_description("Notes");
        assert_eq!(notes.type_name.as_deref(), Some("array"));
        assert_eq!(
            notes.items.and_then(|items| items.reference).as_deref(),
            Some("Note")
        );
        assert_eq!(notes.description.as_deref(), Some("Notes"));
    }

    #[test]
    fn test_property_must_be_object() {
        let result = serde_json::from_value::<SchemaDescriptor>(json!({
            "id": "Note",
            "properties": { "author": ["object", "User"] }
        }));
        let error = result.expect_err("array property should be rejected");
        assert!(error.to_string().contains("property 'author'"));
    }

    #[test]
    fn test_items_must_be_object() {
        let result = serde_json::from_value::<SchemaDescriptor>(json!({
            "id": "Note",
            "properties": { "links": { "type": "array", "items": ["Note"] } }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_null_nested_descriptors() {
        let schema: SchemaDescriptor = serde_json::from_value(json!({
            "id": "Note",
            "$mixin": null,
            "properties": null
        }))
        .expect("Failed to deserialize");
        assert!(schema.mixin.is_none());
        assert!(schema.properties.is_empty());
    }

    #[test]
    fn test_custom_attribute_type_must_be_object() {
        let result = serde_json::from_value::<CustomAttributeConfiguration>(json!({
            "key": "fps",
            "type": ["number"]
        }));
        assert!(result.is_err());
    }
}
