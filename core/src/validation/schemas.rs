#![deny(missing_docs)]

//! # Schema Checks
//!
//! Recursive walk over a schema node and everything nested in it. The
//! `properties`, `items` and composition branches are independent: a node
//! that declares several of them has each one walked, in that order.

use crate::config::ValidatorOptions;
use crate::oas::schema::{Composition, Schema, SchemaType};
use crate::validation::diagnostics::{Diagnostics, Rule};
use tracing::trace;

/// The type names a schema may declare. Case-sensitive, no aliases.
pub const ALLOWED_TYPES: [&str; 6] = ["array", "boolean", "integer", "number", "object", "string"];

/// Checks a schema's `type` value, reporting at `path`.
///
/// Returns `true` when the value is one of [`ALLOWED_TYPES`]. A `"null"`
/// type gets its own error pointing at `nullable`. Non-string values such
/// as type lists are not inspected: they return `false` without a finding.
pub fn check_type(value: &SchemaType, path: &str, diagnostics: &mut Diagnostics) -> bool {
    let SchemaType::Name(name) = value else {
        return false;
    };

    if ALLOWED_TYPES.contains(&name.as_str()) {
        return true;
    }

    if name == "null" {
        diagnostics.push(
            Rule::NullType,
            path,
            format!(
                "Invalid type \"null\" at {}. Use \"nullable: true\" instead.",
                path
            ),
        );
    } else {
        diagnostics.push(
            Rule::InvalidType,
            path,
            format!(
                "Invalid type \"{}\" at {}. Must be one of: {}",
                name,
                path,
                ALLOWED_TYPES.join(", ")
            ),
        );
    }
    false
}

/// Walks schema trees, appending findings to a shared accumulator.
pub struct SchemaWalker<'a> {
    diagnostics: &'a mut Diagnostics,
    max_depth: usize,
}

impl<'a> SchemaWalker<'a> {
    /// Creates a walker writing into `diagnostics`.
    pub fn new(diagnostics: &'a mut Diagnostics, options: &ValidatorOptions) -> Self {
        Self {
            diagnostics,
            max_depth: options.max_schema_depth,
        }
    }

    /// Walks `schema` rooted at `path`. A missing schema is not a finding.
    pub fn walk(&mut self, schema: Option<&Schema>, path: &str) {
        self.walk_at(schema, path, 0);
    }

    fn walk_at(&mut self, schema: Option<&Schema>, path: &str, depth: usize) {
        let Some(schema) = schema else {
            return;
        };

        if depth > self.max_depth {
            self.diagnostics.push(
                Rule::SchemaTooDeep,
                path,
                format!(
                    "Schema nesting exceeds {} levels at {}. Nested schemas were not checked.",
                    self.max_depth, path
                ),
            );
            return;
        }

        trace!(path, reference = schema.reference.as_deref(), "walking schema");

        if let Some(schema_type) = &schema.schema_type {
            check_type(schema_type, &format!("{}.type", path), self.diagnostics);
        }

        if let Some(properties) = &schema.properties {
            for (name, property) in properties {
                let child = format!("{}.properties.{}", path, name);
                self.walk_at(Some(property), &child, depth + 1);
            }
        }

        if let Some(items) = &schema.items {
            self.walk_at(Some(items), &format!("{}.items", path), depth + 1);
        }

        for kind in Composition::ALL {
            let Some(members) = schema.composition(kind) else {
                continue;
            };
            for (index, member) in members.iter().enumerate() {
                let child = format!("{}.{}[{}]", path, kind.keyword(), index);
                self.walk_at(member.as_ref(), &child, depth + 1);
            }
        }
    }
}
