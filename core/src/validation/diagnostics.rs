#![deny(missing_docs)]

//! # Diagnostics
//!
//! Findings produced while walking a document. Each finding names the rule
//! that raised it; the rule fixes whether it lands in the errors or the
//! warnings bucket.

use serde::Serialize;
use std::fmt;

/// Which bucket a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Makes the document invalid.
    Error,
    /// Advisory only.
    Warning,
}

/// Every kind of finding the validator can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// `openapi` is absent.
    MissingOpenapi,
    /// `openapi` is not a `3.x.y` version.
    InvalidOpenapiVersion,
    /// `info` is absent.
    MissingInfo,
    /// `info` is not a mapping.
    InfoNotObject,
    /// `info.title` is absent.
    MissingInfoTitle,
    /// `info.version` is absent.
    MissingInfoVersion,
    /// `paths` is absent.
    MissingPaths,
    /// `paths` is not a mapping.
    PathsNotObject,
    /// `paths` has no entries.
    EmptyPaths,
    /// A path key does not start with `/`.
    PathMissingSlash,
    /// An operation has no `responses`.
    MissingResponses,
    /// An operation declares neither 200 nor 201.
    NoSuccessResponse,
    /// An operation has neither summary nor description.
    MissingDocumentation,
    /// An operation has no tags.
    MissingOperationTags,
    /// A schema declares `type: "null"`.
    NullType,
    /// A schema declares an unknown type name.
    InvalidType,
    /// A schema nests deeper than the configured limit.
    SchemaTooDeep,
    /// A declared tag is used by no operation.
    UnusedTag,
    /// An operation uses a tag that is not declared.
    UndeclaredTag,
}

impl Rule {
    /// The bucket findings of this rule go to.
    pub fn severity(self) -> Severity {
        match self {
            Self::MissingOpenapi
            | Self::InvalidOpenapiVersion
            | Self::MissingInfo
            | Self::InfoNotObject
            | Self::MissingInfoTitle
            | Self::MissingInfoVersion
            | Self::MissingPaths
            | Self::PathsNotObject
            | Self::PathMissingSlash
            | Self::MissingResponses
            | Self::NullType
            | Self::InvalidType => Severity::Error,
            Self::EmptyPaths
            | Self::NoSuccessResponse
            | Self::MissingDocumentation
            | Self::MissingOperationTags
            | Self::SchemaTooDeep
            | Self::UnusedTag
            | Self::UndeclaredTag => Severity::Warning,
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The rule that raised it.
    pub rule: Rule,
    /// Human-readable, self-describing message.
    pub message: String,
    /// Dotted location of the offending node, e.g. `components.schemas.User.type`.
    pub path: String,
}

impl Diagnostic {
    /// The bucket this finding belongs to.
    pub fn severity(&self) -> Severity {
        self.rule.severity()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Accumulator threaded through every checker of a single run.
///
/// Order of insertion is discovery order; nothing is ever removed or merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding in the bucket chosen by its rule.
    pub fn push(&mut self, rule: Rule, path: impl Into<String>, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            rule,
            message: message.into(),
            path: path.into(),
        };
        match rule.severity() {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Splits into `(errors, warnings)`.
    pub fn into_parts(self) -> (Vec<Diagnostic>, Vec<Diagnostic>) {
        (self.errors, self.warnings)
    }
}
