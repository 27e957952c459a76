//! Compiled profile documents.
//!
//! This module wraps the JSON artifacts produced by the external profile
//! compiler so the generator can consume them as typed values: identifiers
//! (`ProfileId`), the deserializable document tree, and the JSON Schema
//! contract that separates "not a profile document" from "broken JSON".

pub mod document;
pub mod identity;
pub mod schema;

pub use document::{
    Definition, EnumValue, FieldDefinition, ProfileDocument, ProfileHeader, ProfileVersion,
    Structure, UseCaseDefinition, UseCaseSlot, load_document,
};
pub use identity::{ProfileId, camel_ident, pascal_case, type_prefix};
pub use schema::{DocumentSchema, resolve_schema_path};
