//! Deserializable representation of a compiled profile document.
//!
//! The types mirror the AST the external profile compiler emits, trimmed to
//! the nodes the typing generator consumes: the document header, use-case
//! definitions, and the recursive structure tree behind their input/result
//! slots. Unknown node kinds deserialize into permissive fallbacks instead of
//! failing, so newer compilers do not break generation.

use crate::error::GenerateError;
use crate::profile::schema::DocumentSchema;
use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
/// Top-level compiled profile document.
pub struct ProfileDocument {
    pub kind: String,
    pub header: ProfileHeader,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProfileHeader {
    pub kind: String,
    #[serde(default)]
    pub scope: Option<String>,
    pub name: String,
    pub version: ProfileVersion,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProfileVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind")]
/// Top-level definitions; only use cases matter to typing generation.
pub enum Definition {
    #[serde(rename = "UseCaseDefinition")]
    UseCase(UseCaseDefinition),
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseDefinition {
    pub use_case_name: String,
    #[serde(default)]
    pub input: Option<UseCaseSlot>,
    #[serde(default)]
    pub result: Option<UseCaseSlot>,
}

#[derive(Clone, Debug, Deserialize)]
/// Slot wrapper around a use case's input or result structure.
pub struct UseCaseSlot {
    #[serde(default)]
    pub value: Option<Structure>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind")]
/// Recursive structure tree for use-case inputs and results.
pub enum Structure {
    #[serde(rename = "PrimitiveTypeName")]
    Primitive { name: String },
    #[serde(rename = "ObjectDefinition")]
    Object {
        #[serde(default)]
        fields: Vec<FieldDefinition>,
    },
    #[serde(rename = "ListDefinition")]
    List {
        #[serde(rename = "elementType")]
        element: Option<Box<Structure>>,
    },
    #[serde(rename = "EnumDefinition")]
    Enum {
        #[serde(default)]
        values: Vec<EnumValue>,
    },
    #[serde(rename = "NonNullDefinition")]
    NonNull {
        #[serde(rename = "type")]
        inner: Option<Box<Structure>>,
    },
    #[serde(rename = "UnionDefinition")]
    Union {
        #[serde(default)]
        types: Vec<Structure>,
    },
    // Model references and future node kinds render as `any`.
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub field_name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type", default)]
    pub ty: Option<Box<Structure>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnumValue {
    pub value: Value,
}

impl ProfileDocument {
    /// Use cases in document order.
    pub fn use_cases(&self) -> impl Iterator<Item = &UseCaseDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::UseCase(use_case) => Some(use_case),
            Definition::Other => None,
        })
    }
}

/// Load a compiled profile document from disk.
///
/// Failure mapping is the generator's contract: absent file means the compile
/// step has not run (`MissingArtifact`), broken JSON means a corrupt artifact
/// (`MalformedArtifact`), and anything failing the document schema or the
/// typed deserialization is the wrong document kind. Nothing is written on
/// any of these paths.
pub fn load_document(path: &Path, schema: &DocumentSchema) -> Result<ProfileDocument> {
    if !path.is_file() {
        return Err(GenerateError::MissingArtifact {
            path: path.to_path_buf(),
        }
        .into());
    }

    let raw = fs::read_to_string(path)?;
    let value: Value =
        serde_json::from_str(&raw).map_err(|err| GenerateError::MalformedArtifact {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    if let Err(reason) = schema.check(&value) {
        return Err(GenerateError::WrongDocumentKind {
            path: path.to_path_buf(),
            reason,
        }
        .into());
    }

    let document: ProfileDocument =
        serde_json::from_value(value).map_err(|err| GenerateError::WrongDocumentKind {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    Ok(document)
}
