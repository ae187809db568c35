#![deny(missing_docs)]

//! # Validation Report
//!
//! Combines findings and statistics into the outward-facing result, and
//! renders it as text for terminals or as JSON through `serde`.

use crate::stats::Stats;
use crate::validation::Diagnostic;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural errors, in discovery order.
    pub errors: Vec<Diagnostic>,
    /// Style and hygiene warnings, in discovery order.
    pub warnings: Vec<Diagnostic>,
    /// Aggregate counts.
    pub stats: Stats,
}

impl ValidationReport {
    /// True iff there are no errors. Warnings never affect validity.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages only.
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|d| d.message.as_str()).collect()
    }

    /// Warning messages only.
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|d| d.message.as_str()).collect()
    }

    /// Text rendering, headed with `source` (usually a file name).
    pub fn to_text<'a>(&'a self, source: &'a str) -> TextReport<'a> {
        TextReport {
            report: self,
            source,
        }
    }
}

impl Serialize for ValidationReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ValidationReport", 4)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.serialize_field("stats", &self.stats)?;
        state.end()
    }
}

/// Human-readable rendering of a [`ValidationReport`].
pub struct TextReport<'a> {
    report: &'a ValidationReport,
    source: &'a str,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "OpenAPI validation: {}", self.source)?;

        write_section(f, "Errors", &report.errors)?;
        write_section(f, "Warnings", &report.warnings)?;

        writeln!(f)?;
        write!(f, "{}", StatsText(&report.stats))?;

        writeln!(f)?;
        let verdict = if report.is_valid() { "VALID" } else { "INVALID" };
        writeln!(
            f,
            "Result: {} ({}, {})",
            verdict,
            plural(report.errors.len(), "error"),
            plural(report.warnings.len(), "warning")
        )
    }
}

/// Text rendering of [`Stats`].
pub struct StatsText<'a>(pub &'a Stats);

impl fmt::Display for StatsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        let methods = stats
            .per_method_count
            .iter()
            .map(|(method, count)| format!("{} {}", method.as_upper(), count))
            .collect::<Vec<_>>();
        let codes = stats
            .response_codes_used
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();

        writeln!(f, "Stats:")?;
        writeln!(f, "  Endpoints: {}", stats.endpoint_count)?;
        writeln!(f, "  Methods: {}", or_none(&methods.join(", ")))?;
        writeln!(f, "  Response codes: {}", or_none(&codes.join(", ")))?;
        writeln!(f, "  Schemas: {}", stats.schema_count)?;
        writeln!(f, "  Tags: {}", stats.tag_count)
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, items: &[Diagnostic]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "{} ({}):", title, items.len())?;
    for (index, item) in items.iter().enumerate() {
        writeln!(f, "  {}. {}", index + 1, item)?;
    }
    Ok(())
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

fn or_none(text: &str) -> &str {
    if text.is_empty() {
        "none"
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::parse_yaml;
    use crate::validation::validate_document;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"
openapi: 3.0.4
info: {title: Pets}
tags: [{name: pets}]
paths:
  /pets:
    get:
      summary: List
      tags: [pets]
      responses:
        "200": {description: ok}
"#;

    #[test]
    fn test_text_rendering() {
        let report = validate_document(&parse_yaml(DOC).unwrap());
        let text = report.to_text("pets.yaml").to_string();

        let expected = "\
OpenAPI validation: pets.yaml

Errors (1):
  1. Missing required field: info.version

Stats:
  Endpoints: 1
  Methods: GET 1
  Response codes: 200
  Schemas: 0
  Tags: 1

Result: INVALID (1 error, 0 warnings)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_stats_render_none() {
        let text = StatsText(&Stats::default()).to_string();
        assert!(text.contains("Methods: none"));
        assert!(text.contains("Response codes: none"));
    }

    #[test]
    fn test_json_shape() {
        let report = validate_document(&parse_yaml(DOC).unwrap());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"][0]["rule"], "missing-info-version");
        assert_eq!(json["errors"][0]["path"], "info.version");
        assert_eq!(json["warnings"], serde_json::json!([]));
        assert_eq!(json["stats"]["endpointCount"], 1);
    }
}
