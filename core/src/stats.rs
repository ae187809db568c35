#![deny(missing_docs)]

//! # Document Statistics
//!
//! Aggregate counts for reporting. Independent of validity: a broken
//! document still gets statistics for whatever parts are usable.

use crate::oas::document::Document;
use crate::oas::paths::HttpMethod;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Aggregate counts over one document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of (path, method) operations.
    pub endpoint_count: usize,
    /// Operations per method.
    pub per_method_count: BTreeMap<HttpMethod, usize>,
    /// Length of the top-level `tags` sequence.
    pub tag_count: usize,
    /// Entries in `components.schemas`.
    pub schema_count: usize,
    /// Every status code seen, sorted as strings.
    pub response_codes_used: BTreeSet<String>,
}

impl Stats {
    /// Count for a single method, zero when unused.
    pub fn method_count(&self, method: HttpMethod) -> usize {
        self.per_method_count.get(&method).copied().unwrap_or(0)
    }
}

/// Computes statistics for a document.
pub fn collect_stats(document: &Document) -> Stats {
    let mut stats = Stats {
        tag_count: document.tags.len(),
        schema_count: document.component_schemas().count(),
        ..Stats::default()
    };

    for (_, item) in document.path_items() {
        for operation in item.operations.values() {
            stats.endpoint_count += 1;
            *stats.per_method_count.entry(operation.method).or_insert(0) += 1;

            if let Some(responses) = &operation.responses {
                stats.response_codes_used.extend(responses.keys().cloned());
            }
        }
    }

    stats
}
