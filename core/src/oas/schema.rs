#![deny(missing_docs)]

//! # Schema Nodes
//!
//! A schema node keeps the four shape-bearing keys (`properties`, `items`,
//! and the `oneOf`/`allOf`/`anyOf` compositions) as independent optional
//! parts, plus its `type` declaration. A node may legally carry none of
//! them, e.g. a bare `$ref` placeholder.

use indexmap::IndexMap;
use serde_json::Value;

/// The value of a schema's `type` key.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    /// A single type name, e.g. `"string"`.
    Name(String),
    /// Any non-string value, e.g. `["string", "null"]`.
    Other(Value),
}

/// Composition keywords, in the order the walker visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// `oneOf`
    OneOf,
    /// `allOf`
    AllOf,
    /// `anyOf`
    AnyOf,
}

impl Composition {
    /// All composition keywords in visiting order.
    pub const ALL: [Composition; 3] = [Self::OneOf, Self::AllOf, Self::AnyOf];

    /// The keyword as written in a document.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::OneOf => "oneOf",
            Self::AllOf => "allOf",
            Self::AnyOf => "anyOf",
        }
    }
}

/// A schema mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    /// Declared `type`; `null` counts as absent.
    pub schema_type: Option<SchemaType>,
    /// `properties`; property values that are not mappings are dropped.
    pub properties: Option<IndexMap<String, Schema>>,
    /// `items`, when it is a mapping.
    pub items: Option<Box<Schema>>,
    /// `oneOf` members. Non-mapping members stay as `None` to keep indices.
    pub one_of: Option<Vec<Option<Schema>>>,
    /// `allOf` members.
    pub all_of: Option<Vec<Option<Schema>>>,
    /// `anyOf` members.
    pub any_of: Option<Vec<Option<Schema>>>,
    /// `$ref` target, kept for logging.
    pub reference: Option<String>,
}

impl Schema {
    /// Builds a schema from any node; returns `None` unless the node is a mapping.
    pub fn from_node(value: &Value) -> Option<Self> {
        value.is_object().then(|| Self::from(value))
    }

    /// Members of the given composition, if the keyword is present.
    pub fn composition(&self, kind: Composition) -> Option<&[Option<Schema>]> {
        match kind {
            Composition::OneOf => self.one_of.as_deref(),
            Composition::AllOf => self.all_of.as_deref(),
            Composition::AnyOf => self.any_of.as_deref(),
        }
    }
}

impl From<&Value> for Schema {
    fn from(value: &Value) -> Self {
        let schema_type = match value.get("type") {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(SchemaType::Name(name.clone())),
            Some(other) => Some(SchemaType::Other(other.clone())),
        };

        let properties = value.get("properties").and_then(Value::as_object).map(|obj| {
            obj.iter()
                .filter(|(_, prop)| prop.is_object())
                .map(|(name, prop)| (name.clone(), Schema::from(prop)))
                .collect()
        });

        let items = value
            .get("items")
            .and_then(Schema::from_node)
            .map(Box::new);

        let members = |key: &str| -> Option<Vec<Option<Schema>>> {
            value
                .get(key)
                .and_then(Value::as_array)
                .map(|list| list.iter().map(Schema::from_node).collect())
        };

        Self {
            schema_type,
            properties,
            items,
            one_of: members(Composition::OneOf.keyword()),
            all_of: members(Composition::AllOf.keyword()),
            any_of: members(Composition::AnyOf.keyword()),
            reference: value.get("$ref").and_then(Value::as_str).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_shapes() {
        let schema = Schema::from(&json!({
            "type": "object",
            "properties": {"id": {"type": "integer"}, "flag": true},
            "items": {"type": "string"},
            "oneOf": [{"type": "string"}, "junk", {"$ref": "#/components/schemas/X"}]
        }));

        assert_eq!(schema.schema_type, Some(SchemaType::Name("object".into())));
        let props = schema.properties.as_ref().unwrap();
        assert_eq!(props.len(), 1);
        assert!(props.contains_key("id"));
        assert!(schema.items.is_some());

        let one_of = schema.composition(Composition::OneOf).unwrap();
        assert_eq!(one_of.len(), 3);
        assert!(one_of[1].is_none());
        assert_eq!(
            one_of[2].as_ref().unwrap().reference.as_deref(),
            Some("#/components/schemas/X")
        );
        assert!(schema.composition(Composition::AllOf).is_none());
    }

    #[test]
    fn test_type_variants() {
        let list = Schema::from(&json!({"type": ["string", "null"]}));
        assert!(matches!(list.schema_type, Some(SchemaType::Other(_))));

        let null = Schema::from(&json!({"type": null}));
        assert!(null.schema_type.is_none());
    }

    #[test]
    fn test_from_node_rejects_scalars() {
        assert!(Schema::from_node(&json!("string")).is_none());
        assert!(Schema::from_node(&json!({})).is_some());
    }
}
