//! TypeScript type expressions and schema type mapping.

use crate::error::CodegenError;
use std::fmt;
use typesmith_schema::types::{ItemsDescriptor, PropertyDescriptor, PropertyType};

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Named declaration, such as another entity interface.
    Reference(String),
    /// Built-in keyword type (`string`, `number`, `never`, ...).
    Keyword(&'static str),
    /// String literal type.
    StringLiteral(String),
    /// `Array<T>`.
    Array(Box<TsType>),
    /// Union of members; an empty union is `never`.
    Union(Vec<TsType>),
    /// Inline object type.
    Object(Vec<(String, TsType)>),
    /// `Record<K, V>`.
    Record(Box<TsType>, Box<TsType>),
    /// Intersection of members.
    Intersection(Vec<TsType>),
    /// Generic type applied to arguments, such as `Omit<T, K>`.
    Generic(String, Vec<TsType>),
    /// Indexed access `T["key"]`.
    Indexed(Box<TsType>, String),
}

impl TsType {
    /// `string`.
    #[must_use]
    pub const fn string() -> Self {
        Self::Keyword("string")
    }

    /// `number`.
    #[must_use]
    pub const fn number() -> Self {
        Self::Keyword("number")
    }

    /// `boolean`.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::Keyword("boolean")
    }

    /// `unknown`.
    #[must_use]
    pub const fn unknown() -> Self {
        Self::Keyword("unknown")
    }

    /// `Array<T>`.
    #[must_use]
    pub fn array(inner: Self) -> Self {
        Self::Array(Box::new(inner))
    }

    /// The four-way union a `variable` property may hold.
    #[must_use]
    pub fn variable() -> Self {
        Self::Union(vec![
            Self::string(),
            Self::number(),
            Self::boolean(),
            Self::array(Self::string()),
        ])
    }

    /// `Omit<T, "a" | "b">`.
    #[must_use]
    pub fn omit(inner: Self, keys: &[&str]) -> Self {
        let keys = keys
            .iter()
            .map(|key| Self::StringLiteral((*key).to_string()))
            .collect();
        Self::Generic("Omit".to_string(), vec![inner, Self::Union(keys)])
    }

    /// `Record<string, any>`, the shape of the permissions map.
    #[must_use]
    pub fn open_record() -> Self {
        Self::Record(Box::new(Self::string()), Box::new(Self::Keyword("any")))
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(name) => f.write_str(name),
            Self::Keyword(keyword) => f.write_str(keyword),
            Self::StringLiteral(value) => write!(f, "{}", quote(value)),
            Self::Array(inner) => write!(f, "Array<{}>", inner),
            Self::Union(members) if members.is_empty() => f.write_str("never"),
            Self::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
            Self::Object(fields) => {
                f.write_str("{ ")?;
                for (i, (name, field_type)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}: {}", property_key(name), field_type)?;
                }
                f.write_str(" }")
            }
            Self::Record(key, value) => write!(f, "Record<{}, {}>", key, value),
            Self::Intersection(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" & ")?;
                    }
                    match member {
                        Self::Union(inner) if inner.len() > 1 => write!(f, "({})", member)?,
                        _ => write!(f, "{}", member)?,
                    }
                }
                Ok(())
            }
            Self::Generic(name, arguments) => {
                write!(f, "{}<", name)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                f.write_str(">")
            }
            Self::Indexed(inner, key) => write!(f, "{}[{}]", inner, quote(key)),
        }
    }
}

/// Quotes a string as a TypeScript string literal.
#[must_use]
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Renders a property name, quoting it unless it is a plain identifier.
#[must_use]
pub fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        name.to_string()
    } else {
        quote(name)
    }
}

/// Location of a property, for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct PropertySite<'a> {
    /// Schema id.
    pub schema: &'a str,
    /// Property name.
    pub property: &'a str,
}

/// Result of mapping a property that did not hard-fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeOutcome {
    /// The property maps to this type.
    Mapped(TsType),
    /// The property cannot be typed; carries the error to report.
    Skipped(String),
}

/// Determines the emitted type of a property.
///
/// A `$ref` wins over a declared type name.
///
/// # Errors
/// Returns `CodegenError` if the type name is outside the dialect or an
/// array-like property has no items descriptor.
pub fn map_property(
    site: PropertySite<'_>,
    property: &PropertyDescriptor,
) -> Result<TypeOutcome, CodegenError> {
    if let Some(target) = &property.reference {
        return Ok(TypeOutcome::Mapped(TsType::Reference(target.clone())));
    }

    match &property.type_name {
        Some(type_name) => map_type_name(site, type_name, property.items.as_ref()),
        None => Ok(TypeOutcome::Skipped(format!(
            "Property '{}' of schema '{}' declares neither a $ref nor a type",
            site.property, site.schema
        ))),
    }
}

/// Maps a schema type name to a TypeScript type.
///
/// # Errors
/// Returns `CodegenError` if the type name is outside the dialect or an
/// array-like type has no items descriptor.
pub fn map_type_name(
    site: PropertySite<'_>,
    type_name: &str,
    items: Option<&ItemsDescriptor>,
) -> Result<TypeOutcome, CodegenError> {
    let property_type = PropertyType::from_schema_name(type_name)
        .ok_or_else(|| CodegenError::unknown_type(type_name, site.property, site.schema))?;

    let mapped = match property_type {
        PropertyType::Integer => TsType::number(),
        PropertyType::Variable => TsType::variable(),
        PropertyType::Array | PropertyType::MappedArray => {
            let items =
                items.ok_or_else(|| CodegenError::missing_items(site.property, site.schema))?;
            return map_items(site, items);
        }
        PropertyType::Object
        | PropertyType::String
        | PropertyType::Number
        | PropertyType::Boolean => TsType::Keyword(property_type.schema_name()),
    };

    Ok(TypeOutcome::Mapped(mapped))
}

fn map_items(site: PropertySite<'_>, items: &ItemsDescriptor) -> Result<TypeOutcome, CodegenError> {
    if let Some(target) = &items.reference {
        return Ok(TypeOutcome::Mapped(TsType::array(TsType::Reference(
            target.clone(),
        ))));
    }

    let Some(type_name) = &items.type_name else {
        return Ok(TypeOutcome::Skipped(format!(
            "Items of property '{}' of schema '{}' declare neither a $ref nor a type",
            site.property, site.schema
        )));
    };

    Ok(match map_type_name(site, type_name, None)? {
        TypeOutcome::Mapped(inner) => TypeOutcome::Mapped(TsType::array(inner)),
        skipped @ TypeOutcome::Skipped(_) => skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: PropertySite<'static> = PropertySite {
        schema: "Shot",
        property: "value",
    };

    fn mapped(property: &PropertyDescriptor) -> String {
        match map_property(SITE, property).expect("mapping should succeed") {
            TypeOutcome::Mapped(ts_type) => ts_type.to_string(),
            TypeOutcome::Skipped(reason) => panic!("unexpected skip: {reason}"),
        }
    }

    #[test]
    fn test_integer_maps_to_number() {
        assert_eq!(mapped(&PropertyDescriptor::typed("integer")), "number");
    }

    #[test]
    fn test_variable_maps_to_union() {
        assert_eq!(
            mapped(&PropertyDescriptor::typed("variable")),
            "string | number | boolean | Array<string>"
        );
    }

    #[test]
    fn test_scalars_pass_through() {
        for name in ["object", "string", "number", "boolean"] {
            assert_eq!(mapped(&PropertyDescriptor::typed(name)), name);
        }
    }

    #[test]
    fn test_reference_wins_over_type() {
        let mut property = PropertyDescriptor::reference("User");
        property.type_name = Some("object".to_string());
        assert_eq!(mapped(&property), "User");
    }

    #[test]
    fn test_array_of_reference() {
        assert_eq!(
            mapped(&PropertyDescriptor::array_of("array", "Note")),
            "Array<Note>"
        );
        assert_eq!(
            mapped(&PropertyDescriptor::array_of("mapped_array", "Metadata")),
            "Array<Metadata>"
        );
    }

    #[test]
    fn test_array_of_typed_items() {
        let mut property = PropertyDescriptor::typed("array");
        property.items = Some(ItemsDescriptor {
            reference: None,
            type_name: Some("integer".to_string()),
        });
        assert_eq!(mapped(&property), "Array<number>");
    }

    #[test]
    fn test_array_without_items_is_hard_failure() {
        let result = map_property(SITE, &PropertyDescriptor::typed("array"));
        assert!(matches!(result, Err(CodegenError::MissingItems { .. })));
    }

    #[test]
    fn test_unknown_type_is_hard_failure() {
        let result = map_property(SITE, &PropertyDescriptor::typed("datetime"));
        assert!(matches!(
            result,
            Err(CodegenError::UnknownType { type_name, schema, .. })
                if type_name == "datetime" && schema == "Shot"
        ));
    }

    #[test]
    fn test_missing_type_is_skipped() {
        let result = map_property(SITE, &PropertyDescriptor::default()).expect("soft error");
        assert!(matches!(result, TypeOutcome::Skipped(reason) if reason.contains("'value'")));
    }

    #[test]
    fn test_empty_items_are_skipped() {
        let mut property = PropertyDescriptor::typed("array");
        property.items = Some(ItemsDescriptor::default());
        let result = map_property(SITE, &property).expect("soft error");
        assert!(matches!(result, TypeOutcome::Skipped(_)));
    }

    #[test]
    fn test_display_composite_types() {
        let member = TsType::Object(vec![
            ("key".to_string(), TsType::StringLiteral("fps".to_string())),
            ("value".to_string(), TsType::number()),
        ]);
        assert_eq!(member.to_string(), r#"{ key: "fps"; value: number }"#);
        assert_eq!(TsType::Union(Vec::new()).to_string(), "never");
        assert_eq!(TsType::open_record().to_string(), "Record<string, any>");
    }

    #[test]
    fn test_display_intersection_and_generics() {
        let element = TsType::Reference("ContextCustomAttributeValue".to_string());
        let narrowed = TsType::Intersection(vec![
            TsType::omit(element.clone(), &["key", "value"]),
            TsType::Object(vec![(
                "value".to_string(),
                TsType::Indexed(Box::new(element), "value".to_string()),
            )]),
        ]);
        assert_eq!(
            narrowed.to_string(),
            r#"Omit<ContextCustomAttributeValue, "key" | "value"> & { value: ContextCustomAttributeValue["value"] }"#
        );

        let grouped = TsType::Intersection(vec![TsType::variable(), TsType::number()]);
        assert_eq!(
            grouped.to_string(),
            "(string | number | boolean | Array<string>) & number"
        );
    }

    #[test]
    fn test_property_key_quoting() {
        assert_eq!(property_key("full_name"), "full_name");
        assert_eq!(property_key("$value"), "$value");
        assert_eq!(property_key("frame-rate"), r#""frame-rate""#);
        assert_eq!(property_key("3d"), r#""3d""#);
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
    }
}
