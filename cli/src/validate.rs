#![deny(missing_docs)]

//! # Validate Command
//!
//! Validates one or more OpenAPI documents and maps the outcome to an exit
//! status: `0` when every document is valid, `1` when any document is
//! invalid or could not be loaded.

use crate::discover::discover_documents;
use crate::error::{CliError, CliResult};
use crate::output::{write_json, OutputFormat};
use oas_lint_core::config::DEFAULT_MAX_SCHEMA_DEPTH;
use oas_lint_core::{load_document, validate_document_with, ValidationReport, ValidatorOptions};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

/// Arguments for the validate command.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// OpenAPI documents (YAML or JSON) or directories containing them.
    #[clap(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text, env = "OAS_LINT_FORMAT")]
    pub format: OutputFormat,

    /// Treat warnings as failures for the exit status.
    #[clap(long, env = "OAS_LINT_DENY_WARNINGS")]
    pub deny_warnings: bool,

    /// Deepest schema nesting that is still checked.
    #[clap(long, default_value_t = DEFAULT_MAX_SCHEMA_DEPTH, env = "OAS_LINT_MAX_SCHEMA_DEPTH")]
    pub max_schema_depth: usize,
}

impl ValidateArgs {
    fn options(&self) -> ValidatorOptions {
        ValidatorOptions {
            max_schema_depth: self.max_schema_depth,
        }
    }
}

/// Result for one input file, as written in JSON output.
#[derive(Serialize)]
struct FileOutcome<'a> {
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a ValidationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Executes the validation and writes results to `out`.
///
/// # Returns
///
/// * The process exit status.
pub fn execute(args: &ValidateArgs, out: &mut impl Write) -> CliResult<u8> {
    let documents = discover_documents(&args.paths);
    if documents.is_empty() {
        return Err(CliError::General(format!(
            "No OpenAPI documents found in {:?}",
            args.paths
        )));
    }

    let options = args.options();
    let outcomes: Vec<(String, CliResult<ValidationReport>)> = documents
        .iter()
        .map(|path| {
            let source = path.display().to_string();
            let result = load_document(path)
                .map(|document| validate_document_with(&document, &options))
                .map_err(CliError::from);
            (source, result)
        })
        .collect();

    let mut failed = false;
    for (source, result) in &outcomes {
        match result {
            Ok(report) => {
                let rejected =
                    !report.is_valid() || (args.deny_warnings && !report.warnings.is_empty());
                info!(
                    source = source.as_str(),
                    errors = report.errors.len(),
                    warnings = report.warnings.len(),
                    "validated document"
                );
                failed |= rejected;
            }
            Err(e) => {
                error!(source = source.as_str(), "{}", e);
                failed = true;
            }
        }
    }

    match args.format {
        OutputFormat::Text => write_text(out, &outcomes)?,
        OutputFormat::Json => {
            let view: Vec<FileOutcome<'_>> = outcomes
                .iter()
                .map(|(source, result)| FileOutcome {
                    source: source.clone(),
                    report: result.as_ref().ok(),
                    error: result.as_ref().err().map(ToString::to_string),
                })
                .collect();
            write_json(out, &view)?;
        }
    }

    Ok(u8::from(failed))
}

fn write_text(
    out: &mut impl Write,
    outcomes: &[(String, CliResult<ValidationReport>)],
) -> CliResult<()> {
    for (index, (source, result)) in outcomes.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        match result {
            Ok(report) => write!(out, "{}", report.to_text(source))?,
            Err(e) => writeln!(
                out,
                "OpenAPI validation: {}\n\nFailed to load document: {}",
                source, e
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const VALID: &str = r#"
openapi: 3.0.4
info: {title: Pets, version: 1.0.0}
tags: [{name: pets}]
paths:
  /pets:
    get:
      summary: List
      tags: [pets]
      responses:
        "200": {description: ok}
"#;

    const WARNS: &str = r#"
openapi: 3.0.4
info: {title: Pets, version: 1.0.0}
paths: {}
"#;

    fn args(paths: Vec<PathBuf>) -> ValidateArgs {
        ValidateArgs {
            paths,
            format: OutputFormat::Text,
            deny_warnings: false,
            max_schema_depth: DEFAULT_MAX_SCHEMA_DEPTH,
        }
    }

    fn run(args: &ValidateArgs) -> (u8, String) {
        let mut out = Vec::new();
        let code = execute(args, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_valid_document_exits_zero() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, VALID).unwrap();

        let (code, text) = run(&args(vec![path]));
        assert_eq!(code, 0);
        assert!(text.contains("Result: VALID (0 errors, 0 warnings)"));
    }

    #[test]
    fn test_invalid_document_exits_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        fs::write(&path, r#"{"openapi": "2.0", "paths": {}}"#).unwrap();

        let (code, text) = run(&args(vec![path]));
        assert_eq!(code, 1);
        assert!(text.contains("Invalid OpenAPI version format"));
        assert!(text.contains("Missing required field: info"));
    }

    #[test]
    fn test_warnings_only_fail_when_denied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, WARNS).unwrap();

        let mut lenient = args(vec![path]);
        assert_eq!(run(&lenient).0, 0);

        lenient.deny_warnings = true;
        assert_eq!(run(&lenient).0, 1);
    }

    #[test]
    fn test_unparsable_document_is_reported_and_fails() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.yaml");
        let good = dir.path().join("good.yaml");
        fs::write(&broken, "openapi: [unclosed").unwrap();
        fs::write(&good, VALID).unwrap();

        let (code, text) = run(&args(vec![dir.path().to_path_buf()]));
        assert_eq!(code, 1);
        assert!(text.contains("Failed to load document: Parse Error"));
        assert!(text.contains("Result: VALID"));
    }

    #[test]
    fn test_json_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, VALID).unwrap();

        let mut json_args = args(vec![path.clone(), dir.path().join("missing.yaml")]);
        json_args.format = OutputFormat::Json;
        let (code, text) = run(&json_args);

        assert_eq!(code, 1);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["report"]["isValid"], true);
        assert_eq!(parsed[0]["report"]["stats"]["endpointCount"], 1);
        assert!(parsed[1]["error"].as_str().unwrap().starts_with("IO Error"));
        assert!(parsed[1].get("report").is_none());
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let mut out = Vec::new();
        let err = execute(&args(vec![dir.path().to_path_buf()]), &mut out).unwrap_err();
        assert!(err.to_string().contains("No OpenAPI documents found"));
    }
}
