//! # Validator Configuration
//!
//! Tunables for a validation run. Every field has a default, so partial
//! configuration (e.g. from a YAML snippet or environment) is accepted.

use serde::{Deserialize, Serialize};

/// Default nesting limit for schema walks.
pub const DEFAULT_MAX_SCHEMA_DEPTH: usize = 128;

/// Options for a single validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorOptions {
    /// Deepest schema nesting that is still checked. Deeper nodes are
    /// reported once with a warning and skipped.
    pub max_schema_depth: usize,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            max_schema_depth: DEFAULT_MAX_SCHEMA_DEPTH,
        }
    }
}
