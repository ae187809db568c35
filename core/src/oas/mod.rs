#![deny(missing_docs)]

//! # OpenAPI Document Module
//!
//! - **document**: Root document, info, tags and components.
//! - **paths**: Path items, operations, responses and HTTP methods.
//! - **schema**: Recursive schema nodes.
//! - **loader**: YAML/JSON text to document.

pub mod document;
pub mod loader;
pub mod paths;
pub mod schema;

pub use document::{Components, Document, Field, Info, Tag};
pub use loader::{load_document, parse_document, parse_json, parse_yaml};
pub use paths::{HttpMethod, MediaType, Operation, PathItem, Paths, Response};
pub use schema::{Composition, Schema, SchemaType};
