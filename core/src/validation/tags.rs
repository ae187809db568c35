#![deny(missing_docs)]

//! # Tag Consistency
//!
//! Cross-references the declared `tags` section against the tags operations
//! actually use. Both directions are advisory and produce warnings.

use crate::oas::document::Document;
use crate::validation::diagnostics::{Diagnostics, Rule};
use indexmap::IndexSet;
use tracing::debug;

/// Names declared in the top-level `tags` section, first occurrence order.
pub fn declared_tags(document: &Document) -> IndexSet<&str> {
    document
        .tags
        .iter()
        .filter_map(|tag| tag.name.as_deref())
        .collect()
}

/// Tags referenced by any operation, in traversal order.
pub fn used_tags(document: &Document) -> IndexSet<&str> {
    document
        .path_items()
        .flat_map(|(_, item)| item.operations.values())
        .flat_map(|operation| operation.tags.iter().map(String::as_str))
        .collect()
}

/// Warns about tags declared but unused, then tags used but undeclared.
pub fn check_tags(document: &Document, diagnostics: &mut Diagnostics) {
    let declared = declared_tags(document);
    let used = used_tags(document);

    debug!(declared = declared.len(), used = used.len(), "checking tag consistency");

    for tag in declared.difference(&used) {
        diagnostics.push(
            Rule::UnusedTag,
            "tags",
            format!("Tag \"{}\" is defined but never used", tag),
        );
    }

    for tag in used.difference(&declared) {
        diagnostics.push(
            Rule::UndeclaredTag,
            "tags",
            format!("Tag \"{}\" is used but not defined in tags section", tag),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::parse_yaml;
    use pretty_assertions::assert_eq;

    fn warnings(yaml: &str) -> Vec<String> {
        let document = parse_yaml(yaml).unwrap();
        let mut diagnostics = Diagnostics::new();
        check_tags(&document, &mut diagnostics);
        assert!(diagnostics.errors().is_empty());
        diagnostics.warnings().iter().map(|d| d.message.clone()).collect()
    }

    #[test]
    fn test_declared_but_unused() {
        let found = warnings(
            r#"
tags:
  - name: A
paths: {}
"#,
        );
        assert_eq!(found, vec!["Tag \"A\" is defined but never used".to_string()]);
    }

    #[test]
    fn test_used_but_undeclared() {
        let found = warnings(
            r#"
paths:
  /things:
    get:
      tags: [B]
"#,
        );
        assert_eq!(
            found,
            vec!["Tag \"B\" is used but not defined in tags section".to_string()]
        );
    }

    #[test]
    fn test_consistent_tags_are_silent() {
        let found = warnings(
            r#"
tags:
  - name: pets
  - name: store
paths:
  /pets:
    get: {tags: [pets]}
    post: {tags: [pets, store]}
"#,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_non_operation_keys_do_not_contribute_tags() {
        let document = parse_yaml(
            r#"
paths:
  /pets:
    x-meta: {tags: [ghost]}
    get: {tags: [pets, pets]}
"#,
        )
        .unwrap();
        let used: Vec<_> = used_tags(&document).into_iter().collect();
        assert_eq!(used, vec!["pets"]);
    }

    #[test]
    fn test_nameless_tags_ignored() {
        let document = parse_yaml("tags: [{description: orphan}, {name: x}]").unwrap();
        let declared: Vec<_> = declared_tags(&document).into_iter().collect();
        assert_eq!(declared, vec!["x"]);
    }
}
