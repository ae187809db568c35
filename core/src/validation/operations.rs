#![deny(missing_docs)]

//! # Path and Operation Checks
//!
//! Walks `paths` in document order. For every operation: responses must be
//! present, response body schemas are walked, and a success code, some
//! documentation and at least one tag are expected.

use crate::config::ValidatorOptions;
use crate::oas::document::Document;
use crate::oas::paths::Operation;
use crate::validation::diagnostics::{Diagnostics, Rule};
use crate::validation::schemas::SchemaWalker;
use tracing::debug;

/// Status codes that count as a success response.
pub const SUCCESS_CODES: [&str; 2] = ["200", "201"];

/// Validates every path key and every operation under `paths`.
pub fn check_paths(
    document: &Document,
    options: &ValidatorOptions,
    diagnostics: &mut Diagnostics,
) {
    let mut operation_count = 0usize;

    for (path, item) in document.path_items() {
        if !path.starts_with('/') {
            diagnostics.push(
                Rule::PathMissingSlash,
                format!("paths.{}", path),
                format!("Path \"{}\" must start with \"/\"", path),
            );
        }

        for (key, operation) in &item.operations {
            check_operation(path, key, operation, options, diagnostics);
            operation_count += 1;
        }
    }

    debug!(
        operations = operation_count,
        errors = diagnostics.errors().len(),
        warnings = diagnostics.warnings().len(),
        "paths checked"
    );
}

fn check_operation(
    path: &str,
    key: &str,
    operation: &Operation,
    options: &ValidatorOptions,
    diagnostics: &mut Diagnostics,
) {
    let label = format!("{} {}", operation.method.as_upper(), path);
    let context = format!("paths.{}.{}", path, key);

    match &operation.responses {
        None => diagnostics.push(
            Rule::MissingResponses,
            format!("{}.responses", context),
            format!("Missing responses for {}", label),
        ),
        Some(responses) => {
            for (code, response) in responses {
                for (media_type, media) in &response.content {
                    if let Some(schema) = &media.schema {
                        let schema_path = format!(
                            "{}.responses.{}.content.{}.schema",
                            context, code, media_type
                        );
                        SchemaWalker::new(diagnostics, options).walk(Some(schema), &schema_path);
                    }
                }
            }

            if !SUCCESS_CODES.iter().any(|code| responses.contains_key(*code)) {
                diagnostics.push(
                    Rule::NoSuccessResponse,
                    format!("{}.responses", context),
                    format!("No success response (200/201) defined for {}", label),
                );
            }
        }
    }

    if operation.is_undocumented() {
        diagnostics.push(
            Rule::MissingDocumentation,
            context.as_str(),
            format!("Missing summary or description for {}", label),
        );
    }

    if operation.tags.is_empty() {
        diagnostics.push(
            Rule::MissingOperationTags,
            format!("{}.tags", context),
            format!("No tags defined for {}", label),
        );
    }
}
