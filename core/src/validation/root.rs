#![deny(missing_docs)]

//! # Root Structure Checks
//!
//! Required top-level fields: `openapi`, `info` (with `title` and `version`)
//! and `paths`.

use crate::oas::document::{Document, Field};
use crate::validation::diagnostics::{Diagnostics, Rule};
use regex::Regex;
use std::sync::OnceLock;

fn version_pattern() -> &'static Regex {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    VERSION_RE.get_or_init(|| Regex::new(r"^3\.[0-9]+\.[0-9]+$").expect("Invalid regex constant"))
}

/// True when `version` is a three-part `3.x.y` version.
pub fn is_supported_version(version: &str) -> bool {
    version_pattern().is_match(version)
}

/// Validates the required root-level fields of a document.
pub fn check_root(document: &Document, diagnostics: &mut Diagnostics) {
    match document.openapi.as_deref() {
        None => diagnostics.push(
            Rule::MissingOpenapi,
            "openapi",
            "Missing required field: openapi",
        ),
        Some(version) if !is_supported_version(version) => diagnostics.push(
            Rule::InvalidOpenapiVersion,
            "openapi",
            format!(
                "Invalid OpenAPI version format: \"{}\". Expected 3.x.x",
                version
            ),
        ),
        Some(_) => {}
    }

    match &document.info {
        Field::Missing => {
            diagnostics.push(Rule::MissingInfo, "info", "Missing required field: info")
        }
        Field::NotObject(_) => diagnostics.push(
            Rule::InfoNotObject,
            "info",
            "Field \"info\" must be an object",
        ),
        Field::Present(info) => {
            if info.title.is_none() {
                diagnostics.push(
                    Rule::MissingInfoTitle,
                    "info.title",
                    "Missing required field: info.title",
                );
            }
            if info.version.is_none() {
                diagnostics.push(
                    Rule::MissingInfoVersion,
                    "info.version",
                    "Missing required field: info.version",
                );
            }
        }
    }

    match &document.paths {
        Field::Missing => {
            diagnostics.push(Rule::MissingPaths, "paths", "Missing required field: paths")
        }
        Field::NotObject(_) => diagnostics.push(
            Rule::PathsNotObject,
            "paths",
            "Field \"paths\" must be an object",
        ),
        Field::Present(paths) if paths.is_empty() => {
            diagnostics.push(Rule::EmptyPaths, "paths", "No paths defined in the API")
        }
        Field::Present(_) => {}
    }
}
