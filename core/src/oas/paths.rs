#![deny(missing_docs)]

//! # Paths and Operations
//!
//! Path items split their keys into operations (the eight HTTP methods,
//! matched case-insensitively) and everything else (`parameters`, `$ref`,
//! `summary`, extensions, ...). Non-method keys are kept but never validated.

use crate::oas::document::{scalar_string, text};
use crate::oas::schema::Schema;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The Paths Object: path template to path item, in document order.
pub type Paths = IndexMap<String, PathItem>;

/// HTTP methods that may carry an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// Every supported method.
    pub const ALL: [HttpMethod; 8] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
        Self::Head,
        Self::Options,
        Self::Trace,
    ];

    /// Parses a path item key, ignoring case.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(key))
    }

    /// Lower-case token, as used in documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Head => "head",
            Self::Options => "options",
            Self::Trace => "trace",
        }
    }

    /// Upper-case token, as used in messages.
    pub fn as_upper(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upper())
    }
}

/// A Path Item Object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathItem {
    /// Operations keyed by the key exactly as written, in document order.
    pub operations: IndexMap<String, Operation>,
    /// Every other key (`parameters`, `$ref`, `x-...`), untouched.
    pub extensions: IndexMap<String, Value>,
}

impl From<&Value> for PathItem {
    fn from(value: &Value) -> Self {
        let mut item = Self::default();
        let Some(obj) = value.as_object() else {
            return item;
        };

        for (key, entry) in obj {
            match HttpMethod::parse(key) {
                Some(method) => {
                    item.operations
                        .insert(key.clone(), Operation::new(method, entry));
                }
                None => {
                    item.extensions.insert(key.clone(), entry.clone());
                }
            }
        }
        item
    }
}

/// An Operation Object.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// The method this operation is bound to.
    pub method: HttpMethod,
    /// `responses`, when it is a mapping. Keys are status codes as text.
    pub responses: Option<IndexMap<String, Response>>,
    /// Tag names. Scalar entries keep their textual form; others are dropped.
    pub tags: Vec<String>,
    /// Short summary. An empty string counts as absent.
    pub summary: Option<String>,
    /// Long description. An empty string counts as absent.
    pub description: Option<String>,
}

impl Operation {
    /// Builds the operation found under a method key.
    pub fn new(method: HttpMethod, value: &Value) -> Self {
        let responses = value.get("responses").and_then(Value::as_object).map(|obj| {
            obj.iter()
                .map(|(code, response)| (code.clone(), Response::from(response)))
                .collect()
        });
        let tags = value
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(scalar_string).collect())
            .unwrap_or_default();

        Self {
            method,
            responses,
            tags,
            summary: value.get("summary").and_then(text),
            description: value.get("description").and_then(text),
        }
    }

    /// True when neither `summary` nor `description` is set.
    pub fn is_undocumented(&self) -> bool {
        self.summary.is_none() && self.description.is_none()
    }
}

/// A Response Object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Response {
    /// `content`, media type to media type object.
    pub content: IndexMap<String, MediaType>,
}

impl From<&Value> for Response {
    fn from(value: &Value) -> Self {
        let content = value
            .get("content")
            .and_then(Value::as_object)
            .map(|obj| {
                obj.iter()
                    .map(|(media, entry)| (media.clone(), MediaType::from(entry)))
                    .collect()
            })
            .unwrap_or_default();
        Self { content }
    }
}

/// A Media Type Object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaType {
    /// The body schema, when it is a mapping.
    pub schema: Option<Schema>,
}

impl From<&Value> for MediaType {
    fn from(value: &Value) -> Self {
        Self {
            schema: value.get("schema").and_then(Schema::from_node),
        }
    }
}
