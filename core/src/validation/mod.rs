#![deny(missing_docs)]

//! # OpenAPI Validation
//!
//! Runs every check over a parsed document and assembles the report.
//!
//! Passes, in order:
//! - Root structure (`openapi`, `info`, `paths`).
//! - Each schema in `components.schemas`.
//! - Every path and operation, including response body schemas.
//! - Tag consistency between the `tags` section and operations.
//!
//! Findings are data: no check ever aborts the run.

pub mod diagnostics;
pub mod operations;
pub mod root;
pub mod schemas;
pub mod tags;

pub use diagnostics::{Diagnostic, Diagnostics, Rule, Severity};
pub use schemas::{check_type, SchemaWalker, ALLOWED_TYPES};

use crate::config::ValidatorOptions;
use crate::oas::document::Document;
use crate::report::ValidationReport;
use crate::stats::collect_stats;
use tracing::debug;

/// Validates a document with default options.
pub fn validate_document(document: &Document) -> ValidationReport {
    validate_document_with(document, &ValidatorOptions::default())
}

/// Validates a document and collects its statistics.
pub fn validate_document_with(document: &Document, options: &ValidatorOptions) -> ValidationReport {
    let mut diagnostics = Diagnostics::new();

    root::check_root(document, &mut diagnostics);

    for (name, schema) in document.component_schemas() {
        let path = format!("components.schemas.{}", name);
        SchemaWalker::new(&mut diagnostics, options).walk(schema.as_ref(), &path);
    }

    operations::check_paths(document, options, &mut diagnostics);
    tags::check_tags(document, &mut diagnostics);

    let stats = collect_stats(document);
    let (errors, warnings) = diagnostics.into_parts();

    debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        endpoints = stats.endpoint_count,
        "validation finished"
    );

    ValidationReport {
        errors,
        warnings,
        stats,
    }
}
