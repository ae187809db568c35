#![deny(missing_docs)]

//! # Document Loader
//!
//! Turns YAML or JSON text into a [`Document`]. This is the only place in the
//! core that can fail; everything downstream works on the parsed tree.

use crate::error::{AppError, AppResult};
use crate::oas::document::Document;
use serde_json::{Map, Number, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses a YAML OpenAPI document.
///
/// Merge keys (`<<: *anchor`) are applied first. YAML keys that are not
/// strings (e.g. unquoted status codes `200:`) are rendered as text so that
/// the tree matches what a JSON document would hold.
pub fn parse_yaml(yaml_content: &str) -> AppResult<Document> {
    let mut raw: serde_yaml::Value = serde_yaml::from_str(yaml_content)
        .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI YAML: {}", e)))?;
    raw.apply_merge()
        .map_err(|e| AppError::Parse(format!("Failed to apply YAML merge keys: {}", e)))?;
    Ok(Document::from(&yaml_to_json(raw)))
}

/// Parses a JSON OpenAPI document.
pub fn parse_json(json_content: &str) -> AppResult<Document> {
    let raw: Value = serde_json::from_str(json_content)
        .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI JSON: {}", e)))?;
    Ok(Document::from(&raw))
}

/// Parses a document whose format is unknown.
///
/// Text starting with `{` is read as JSON, anything else as YAML.
pub fn parse_document(content: &str) -> AppResult<Document> {
    if content.trim_start().starts_with('{') {
        parse_json(content)
    } else {
        parse_yaml(content)
    }
}

/// Reads and parses a document from disk, choosing the format by extension.
pub fn load_document(path: &Path) -> AppResult<Document> {
    let content = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    debug!(path = %path.display(), bytes = content.len(), "loading OpenAPI document");

    match extension.as_deref() {
        Some("json") => parse_json(&content),
        Some("yaml") | Some("yml") => parse_yaml(&content),
        _ => parse_document(&content),
    }
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut obj = Map::with_capacity(mapping.len());
            for (key, entry) in mapping {
                obj.insert(yaml_key(key), yaml_to_json(entry));
            }
            Value::Object(obj)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(n.to_string()))
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match yaml_to_json(key) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
