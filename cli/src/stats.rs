#![deny(missing_docs)]

//! # Stats Command
//!
//! Prints aggregate statistics for a single document without validating it.

use crate::error::CliResult;
use crate::output::{write_json, OutputFormat};
use oas_lint_core::{collect_stats, load_document, StatsText};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the stats command.
#[derive(clap::Args, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the OpenAPI document.
    #[clap(default_value = "openapi.yaml")]
    pub path: PathBuf,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text, env = "OAS_LINT_FORMAT")]
    pub format: OutputFormat,
}

/// Executes the stats command.
pub fn execute(args: &StatsArgs, out: &mut impl Write) -> CliResult<u8> {
    let document = load_document(&args.path)?;
    let stats = collect_stats(&document);

    match args.format {
        OutputFormat::Text => write!(out, "{}", StatsText(&stats))?,
        OutputFormat::Json => write_json(out, &stats)?,
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const DOC: &str = r#"
openapi: 3.0.0
info: {title: T, version: "1"}
paths:
  /a:
    get: {responses: {"200": {}}}
    delete: {responses: {"204": {}}}
components:
  schemas:
    A: {type: object}
"#;

    #[test]
    fn test_stats_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, DOC).unwrap();

        let mut out = Vec::new();
        let args = StatsArgs {
            path,
            format: OutputFormat::Text,
        };
        assert_eq!(execute(&args, &mut out).unwrap(), 0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Endpoints: 2"));
        assert!(text.contains("Methods: GET 1, DELETE 1"));
        assert!(text.contains("Response codes: 200, 204"));
        assert!(text.contains("Schemas: 1"));
    }

    #[test]
    fn test_stats_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, DOC).unwrap();

        let mut out = Vec::new();
        let args = StatsArgs {
            path,
            format: OutputFormat::Json,
        };
        execute(&args, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["perMethodCount"]["delete"], 1);
        assert_eq!(json["schemaCount"], 1);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let args = StatsArgs {
            path: dir.path().join("nope.yaml"),
            format: OutputFormat::Text,
        };
        assert!(execute(&args, &mut Vec::new()).is_err());
    }
}
