#![deny(missing_docs)]

//! # OAS Lint Core
//!
//! Validation and analysis engine for OpenAPI 3.x documents.
//!
//! The engine consumes an already-parsed document, reports structural
//! errors and style warnings with dotted paths to the offending node, and
//! computes aggregate statistics. Running it twice on the same document
//! yields identical output.

/// Shared error types.
pub mod error;

/// Validator configuration.
pub mod config;

/// OpenAPI document model and loader.
pub mod oas;

/// Structural, operation and tag checks.
pub mod validation;

/// Aggregate document statistics.
pub mod stats;

/// Report assembly and rendering.
pub mod report;

pub use config::ValidatorOptions;
pub use error::{AppError, AppResult};
pub use oas::{load_document, parse_document, parse_json, parse_yaml, Document, HttpMethod};
pub use report::{StatsText, ValidationReport};
pub use stats::{collect_stats, Stats};
pub use validation::{
    validate_document, validate_document_with, Diagnostic, Rule, Severity,
};
