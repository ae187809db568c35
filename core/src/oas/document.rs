#![deny(missing_docs)]

//! # OpenAPI Document Model
//!
//! Read-only typed view of a parsed OpenAPI 3.x document.
//!
//! The model is built from an already-parsed `serde_json::Value` and the
//! conversion never fails: keys that are absent, `null`, or of an unexpected
//! shape become `None`/`Missing`/empty so the checkers can report on them
//! instead of aborting. Map order always follows the source document.

use crate::oas::paths::Paths;
use crate::oas::schema::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A root-level field that must be a mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// The key is absent or `null`.
    Missing,
    /// The key is present but holds something other than a mapping.
    NotObject(Value),
    /// The key holds a mapping.
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> Field<T> {
    /// Returns the parsed value when the field holds a mapping.
    pub fn as_present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    /// True when the key is absent or `null`.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    fn from_value(value: Option<&Value>, build: impl FnOnce(&Value) -> T) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(v @ Value::Object(_)) => Self::Present(build(v)),
            Some(other) => Self::NotObject(other.clone()),
        }
    }
}

/// Root node of an OpenAPI document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// The `openapi` version string. Non-string scalars keep their textual form.
    pub openapi: Option<String>,
    /// The `info` object.
    pub info: Field<Info>,
    /// The `paths` object.
    pub paths: Field<Paths>,
    /// The `components` object, when it is a mapping.
    pub components: Option<Components>,
    /// The top-level `tags` sequence.
    pub tags: Vec<Tag>,
}

impl Document {
    /// Path items in document order, or nothing when `paths` is not usable.
    pub fn path_items(&self) -> impl Iterator<Item = (&String, &crate::oas::paths::PathItem)> {
        self.paths.as_present().into_iter().flat_map(|paths| paths.iter())
    }

    /// Named schemas from `components.schemas`, in document order.
    pub fn component_schemas(&self) -> impl Iterator<Item = (&String, &Option<Schema>)> {
        self.components
            .as_ref()
            .into_iter()
            .flat_map(|components| components.schemas.iter())
    }
}

impl From<&Value> for Document {
    fn from(value: &Value) -> Self {
        let openapi = value.get("openapi").and_then(scalar_string);
        let info = Field::from_value(value.get("info"), |v| Info::from(v));
        let paths = Field::from_value(value.get("paths"), |v| -> Paths {
            v.as_object()
                .map(|obj| {
                    obj.iter()
                        .map(|(path, item)| (path.clone(), item.into()))
                        .collect()
                })
                .unwrap_or_default()
        });
        let components = value
            .get("components")
            .filter(|v| v.is_object())
            .map(Components::from);
        let tags = value
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().map(Tag::from).collect())
            .unwrap_or_default();

        Self {
            openapi,
            info,
            paths,
            components,
            tags,
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from(&raw))
    }
}

/// The Info Object. Only the fields the validator inspects are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Info {
    /// API title. An empty string counts as absent.
    pub title: Option<String>,
    /// API version. An empty string counts as absent.
    pub version: Option<String>,
}

impl From<&Value> for Info {
    fn from(value: &Value) -> Self {
        Self {
            title: value.get("title").and_then(text),
            version: value.get("version").and_then(text),
        }
    }
}

/// An entry of the top-level `tags` sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    /// Tag name; entries without one are ignored for consistency checks.
    pub name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
}

impl From<&Value> for Tag {
    fn from(value: &Value) -> Self {
        Self {
            name: value.get("name").and_then(scalar_string),
            description: value.get("description").and_then(text),
        }
    }
}

/// The Components Object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Components {
    /// Named schemas. Entries that are not mappings are kept as `None`.
    pub schemas: IndexMap<String, Option<Schema>>,
}

impl From<&Value> for Components {
    fn from(value: &Value) -> Self {
        let schemas = value
            .get("schemas")
            .and_then(Value::as_object)
            .map(|obj| {
                obj.iter()
                    .map(|(name, schema)| (name.clone(), Schema::from_node(schema)))
                    .collect()
            })
            .unwrap_or_default();
        Self { schemas }
    }
}

/// Renders a scalar as text; `null`, sequences and mappings yield `None`.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Like [`scalar_string`] but treats the empty string as absent.
pub(crate) fn text(value: &Value) -> Option<String> {
    scalar_string(value).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_from_value() {
        let raw = json!({
            "openapi": "3.0.4",
            "info": {"title": "Pets", "version": "1.0.0"},
            "paths": {"/pets": {"get": {"responses": {"200": {}}}}},
            "components": {"schemas": {"Pet": {"type": "object"}, "Broken": 5}},
            "tags": [{"name": "pets", "description": "Pet operations"}]
        });
        let doc = Document::from(&raw);

        assert_eq!(doc.openapi.as_deref(), Some("3.0.4"));
        let info = doc.info.as_present().unwrap();
        assert_eq!(info.title.as_deref(), Some("Pets"));
        assert_eq!(doc.path_items().count(), 1);
        let names: Vec<_> = doc.component_schemas().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Pet", "Broken"]);
        assert!(doc.components.unwrap().schemas["Broken"].is_none());
        assert_eq!(doc.tags[0].name.as_deref(), Some("pets"));
    }

    #[test]
    fn test_root_field_shapes() {
        let doc = Document::from(&json!({"info": "nope", "paths": null}));
        assert!(doc.openapi.is_none());
        assert!(matches!(doc.info, Field::NotObject(_)));
        assert!(doc.paths.is_missing());
    }

    #[test]
    fn test_numeric_version_kept_as_text() {
        let doc = Document::from(&json!({"openapi": 3.1}));
        assert_eq!(doc.openapi.as_deref(), Some("3.1"));
    }

    #[test]
    fn test_empty_info_fields_are_absent() {
        let info = Info::from(&json!({"title": "", "version": 2}));
        assert!(info.title.is_none());
        assert_eq!(info.version.as_deref(), Some("2"));
    }

    #[test]
    fn test_whitespace_title_is_present() {
        let info = Info::from(&json!({"title": "   ", "version": null}));
        assert_eq!(info.title.as_deref(), Some("   "));
        assert!(info.version.is_none());
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
openapi: 3.0.0
info: {title: Test, version: 1.0.0}
paths: {}
tags:
  - name: a
  - description: nameless
"#;
        let doc: Document = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.tags.len(), 2);
        assert!(doc.tags[1].name.is_none());
        assert!(matches!(doc.paths, Field::Present(ref p) if p.is_empty()));
    }
}
