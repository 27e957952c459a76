//! Profile document contract validation.
//!
//! The shipped JSON Schema decides whether a parsed artifact is a profile
//! document at all; typed deserialization only runs after the schema passes.
//! Projects may carry their own copy under `schema/`, otherwise the crate's
//! canonical copy is used.

use anyhow::{Context, Result};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const SCHEMA_REL_PATH: &str = "schema/profile_document.schema.json";

/// Compiled profile-document schema.
pub struct DocumentSchema {
    compiled: JSONSchema,
    // Keeps the schema value alive for the compiled validator borrowing it.
    #[allow(dead_code)]
    raw: Arc<Value>,
}

impl DocumentSchema {
    pub fn load(path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_reader(
            File::open(path)
                .with_context(|| format!("opening document schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing document schema {}", path.display()))?;

        let raw = Arc::new(value);
        let raw_static: &'static Value = unsafe { &*(Arc::as_ptr(&raw)) };
        let compiled = JSONSchema::compile(raw_static)
            .with_context(|| format!("compiling document schema {}", path.display()))?;

        Ok(Self { compiled, raw })
    }

    /// Validate a parsed artifact against the contract.
    ///
    /// Returns the joined validation details on failure so callers can embed
    /// them in a single user-facing message.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        if let Err(errors) = self.compiled.validate(value) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(details);
        }
        Ok(())
    }
}

/// Prefer a project-local schema copy, fall back to the crate's canonical one.
pub fn resolve_schema_path(project_root: &Path) -> PathBuf {
    let candidate = project_root.join(SCHEMA_REL_PATH);
    if candidate.exists() {
        return candidate;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(SCHEMA_REL_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn canonical_schema() -> DocumentSchema {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(SCHEMA_REL_PATH);
        DocumentSchema::load(&path).expect("canonical schema loads")
    }

    #[test]
    fn accepts_a_minimal_profile_document() {
        let schema = canonical_schema();
        let value = json!({
            "kind": "ProfileDocument",
            "header": {
                "kind": "ProfileHeader",
                "scope": "communication",
                "name": "send-sms",
                "version": {"major": 1, "minor": 0, "patch": 0}
            },
            "definitions": []
        });
        assert!(schema.check(&value).is_ok());
    }

    #[test]
    fn rejects_other_document_kinds_with_details() {
        let schema = canonical_schema();
        let value = json!({"kind": "MapDocument", "header": {}, "definitions": []});
        let details = schema.check(&value).unwrap_err();
        assert!(!details.is_empty());
    }

    #[test]
    fn resolution_prefers_the_project_copy() {
        let project = TempDir::new().unwrap();
        assert_eq!(
            resolve_schema_path(project.path()),
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(SCHEMA_REL_PATH)
        );

        std::fs::create_dir_all(project.path().join("schema")).unwrap();
        std::fs::write(project.path().join(SCHEMA_REL_PATH), "{}").unwrap();
        assert_eq!(
            resolve_schema_path(project.path()),
            project.path().join(SCHEMA_REL_PATH)
        );
    }
}
