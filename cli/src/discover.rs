#![deny(missing_docs)]

//! # Document Discovery
//!
//! Expands command-line inputs into document paths. Directories are walked
//! recursively for YAML and JSON files; plain paths are passed through
//! untouched so a missing file surfaces as a load failure for that file.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const DOCUMENT_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Expands `inputs` into a list of document paths, in input order.
/// Files found inside a directory are sorted by name.
pub fn discover_documents(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut documents = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            documents.push(input.clone());
            continue;
        }

        let walker = WalkDir::new(input).sort_by_file_name().into_iter();
        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();
            if entry.file_type().is_file() && is_document(path) {
                documents.push(path.to_path_buf());
            }
        }
    }

    debug!(count = documents.len(), "discovered documents");
    documents
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DOCUMENT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
