//! Custom attribute narrowing for typed context specializations.

use super::types::TsType;
use typesmith_schema::types::{CustomAttributeConfiguration, CustomAttributeKind};

const KEY_FIELD: &str = "key";
const VALUE_FIELD: &str = "value";

/// Narrows the custom attribute field to the attributes one entity accepts.
///
/// When the typed context declares the field as an array of an element
/// schema, every member keeps that element's other fields so the narrowed
/// field stays assignable to the inherited one.
#[derive(Debug, Clone, Copy)]
pub struct CustomAttributeNarrowing<'a> {
    configurations: &'a [CustomAttributeConfiguration],
    element: Option<&'a str>,
}

impl<'a> CustomAttributeNarrowing<'a> {
    /// Creates a narrowing over the server's attribute configurations.
    #[must_use]
    pub fn new(configurations: &'a [CustomAttributeConfiguration]) -> Self {
        Self {
            configurations,
            element: None,
        }
    }

    /// Sets the element schema the inherited field holds.
    #[must_use]
    pub fn with_element(mut self, element: Option<&'a str>) -> Self {
        self.element = element;
        self
    }

    /// Returns the configurations that apply to the entity, hierarchical
    /// ones included.
    #[must_use]
    pub fn applicable(&self, entity: &str) -> Vec<&'a CustomAttributeConfiguration> {
        self.configurations
            .iter()
            .filter(|config| config.applies_to(entity))
            .collect()
    }

    /// Returns the narrowed field type: an array of `{ key; value }` members,
    /// one per distinct key and value type, ordered by key.
    #[must_use]
    pub fn field_type(&self, entity: &str) -> TsType {
        let mut members: Vec<(String, TsType)> = self
            .applicable(entity)
            .into_iter()
            .map(|config| (config.key.clone(), self.member_value(config.kind())))
            .collect();
        members.sort_by_cached_key(|(key, value)| (key.clone(), value.to_string()));
        members.dedup();

        let members = members
            .into_iter()
            .map(|(key, value)| self.member(key, value))
            .collect();

        TsType::array(TsType::Union(members))
    }

    /// Value type of one member; an unknown kind keeps the element's own
    /// value type.
    fn member_value(&self, kind: CustomAttributeKind) -> TsType {
        match (kind, self.element) {
            (CustomAttributeKind::Unknown, Some(element)) => TsType::Indexed(
                Box::new(TsType::Reference(element.to_string())),
                VALUE_FIELD.to_string(),
            ),
            _ => value_type(kind),
        }
    }

    fn member(&self, key: String, value: TsType) -> TsType {
        let pair = TsType::Object(vec![
            (KEY_FIELD.to_string(), TsType::StringLiteral(key)),
            (VALUE_FIELD.to_string(), value),
        ]);

        match self.element {
            Some(element) => TsType::Intersection(vec![
                TsType::omit(
                    TsType::Reference(element.to_string()),
                    &[KEY_FIELD, VALUE_FIELD],
                ),
                pair,
            ]),
            None => pair,
        }
    }
}

/// Maps an attribute kind to the type of its stored value.
#[must_use]
pub fn value_type(kind: CustomAttributeKind) -> TsType {
    match kind {
        CustomAttributeKind::Number => TsType::number(),
        CustomAttributeKind::Boolean => TsType::boolean(),
        CustomAttributeKind::Enumerator | CustomAttributeKind::DynamicEnumerator => {
            TsType::array(TsType::string())
        }
        CustomAttributeKind::Text
        | CustomAttributeKind::Date
        | CustomAttributeKind::Expression
        | CustomAttributeKind::Url
        | CustomAttributeKind::NotificationType => TsType::string(),
        CustomAttributeKind::Unknown => TsType::unknown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configurations() -> Vec<CustomAttributeConfiguration> {
        vec![
            CustomAttributeConfiguration::hierarchical("fps", "number"),
            CustomAttributeConfiguration::scoped("cut_in", "Shot", "number"),
            CustomAttributeConfiguration::scoped("tags", "Shot", "enumerator"),
            CustomAttributeConfiguration::scoped("episode", "Sequence", "text"),
            CustomAttributeConfiguration::hierarchical("approved", "boolean"),
        ]
    }

    #[test]
    fn test_applicable_includes_hierarchical() {
        let configs = configurations();
        let narrowing = CustomAttributeNarrowing::new(&configs);

        let keys: Vec<&str> = narrowing
            .applicable("Shot")
            .iter()
            .map(|config| config.key.as_str())
            .collect();
        assert_eq!(keys, vec!["fps", "cut_in", "tags", "approved"]);
    }

    #[test]
    fn test_field_type_sorted_by_key() {
        let configs = configurations();
        let narrowing = CustomAttributeNarrowing::new(&configs);

        assert_eq!(
            narrowing.field_type("Sequence").to_string(),
            r#"Array<{ key: "approved"; value: boolean } | { key: "episode"; value: string } | { key: "fps"; value: number }>"#
        );
    }

    #[test]
    fn test_field_type_deduplicates() {
        let configs = vec![
            CustomAttributeConfiguration::hierarchical("fps", "number"),
            CustomAttributeConfiguration::scoped("fps", "Shot", "number"),
        ];
        let narrowing = CustomAttributeNarrowing::new(&configs);

        assert_eq!(
            narrowing.field_type("Shot").to_string(),
            r#"Array<{ key: "fps"; value: number }>"#
        );
    }

    #[test]
    fn test_field_type_without_attributes() {
        let narrowing = CustomAttributeNarrowing::new(&[]);
        assert_eq!(narrowing.field_type("Shot").to_string(), "Array<never>");
    }

    #[test]
    fn test_field_type_keeps_element_fields() {
        let configs = vec![
            CustomAttributeConfiguration::hierarchical("fps", "number"),
            CustomAttributeConfiguration::scoped("notes", "Shot", "rich text"),
        ];
        let narrowing = CustomAttributeNarrowing::new(&configs)
            .with_element(Some("ContextCustomAttributeValue"));

        assert_eq!(
            narrowing.field_type("Shot").to_string(),
            concat!(
                r#"Array<Omit<ContextCustomAttributeValue, "key" | "value"> & { key: "fps"; value: number }"#,
                r#" | Omit<ContextCustomAttributeValue, "key" | "value"> & { key: "notes"; value: ContextCustomAttributeValue["value"] }>"#
            )
        );
    }

    #[test]
    fn test_field_type_with_element_without_attributes() {
        let narrowing = CustomAttributeNarrowing::new(&[]).with_element(Some("Value"));
        assert_eq!(narrowing.field_type("Shot").to_string(), "Array<never>");
    }

    #[test]
    fn test_value_types() {
        assert_eq!(
            value_type(CustomAttributeKind::DynamicEnumerator).to_string(),
            "Array<string>"
        );
        assert_eq!(value_type(CustomAttributeKind::Date).to_string(), "string");
        assert_eq!(value_type(CustomAttributeKind::Unknown).to_string(), "unknown");
    }
}
