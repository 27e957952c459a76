use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Throwaway capability grid project with the sentinel layout the tooling
/// expects: `grid/`, `sdk/project.json`, and room for compiled artifacts.
pub struct FixtureProject {
    dir: TempDir,
}

impl FixtureProject {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("allocating fixture project")?;
        fs::create_dir_all(dir.path().join("grid"))?;
        fs::create_dir_all(dir.path().join("sdk"))?;
        fs::write(
            dir.path().join("sdk/project.json"),
            serde_json::to_string_pretty(&json!({
                "profiles": {},
                "providers": {}
            }))?,
        )?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_capability(&self, scope: &str, use_case: &str) -> Result<()> {
        fs::create_dir_all(
            self.root()
                .join("grid")
                .join(scope)
                .join(use_case)
                .join("maps"),
        )?;
        Ok(())
    }

    pub fn remove_capability(&self, scope: &str, use_case: &str) -> Result<()> {
        fs::remove_dir_all(self.root().join("grid").join(scope).join(use_case))?;
        Ok(())
    }

    /// Write a compiled profile document at the conventional build path.
    pub fn write_ast(&self, scope: &str, profile: &str, document: &Value) -> Result<()> {
        self.write_ast_text(scope, profile, &serde_json::to_string_pretty(document)?)
    }

    /// Write raw artifact text, for malformed-artifact fixtures.
    pub fn write_ast_text(&self, scope: &str, profile: &str, text: &str) -> Result<()> {
        let dir = self.root().join("sdk/build").join(scope).join(profile);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("profile.ast.json"), text)?;
        Ok(())
    }

    pub fn write_recording(
        &self,
        scope: &str,
        use_case: &str,
        provider: &str,
        exchanges: &Value,
    ) -> Result<()> {
        let dir = self
            .root()
            .join("grid")
            .join(scope)
            .join(use_case)
            .join("maps")
            .join("recordings");
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join(format!("{provider}.json")),
            serde_json::to_string_pretty(exchanges)?,
        )?;
        Ok(())
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn read(&self, rel: &str) -> Result<String> {
        fs::read_to_string(self.path(rel)).with_context(|| format!("reading fixture file {rel}"))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }
}

/// Compiled document for `communication/send-sms` with the SendMessage and
/// RetrieveMessageStatus use cases.
pub fn send_sms_document() -> Value {
    json!({
        "kind": "ProfileDocument",
        "header": {
            "kind": "ProfileHeader",
            "scope": "communication",
            "name": "send-sms",
            "version": {"major": 1, "minor": 0, "patch": 1}
        },
        "definitions": [
            {
                "kind": "UseCaseDefinition",
                "useCaseName": "SendMessage",
                "input": {
                    "value": {
                        "kind": "ObjectDefinition",
                        "fields": [
                            {"kind": "FieldDefinition", "fieldName": "to", "required": true,
                             "type": {"kind": "PrimitiveTypeName", "name": "string"}},
                            {"kind": "FieldDefinition", "fieldName": "from",
                             "type": {"kind": "PrimitiveTypeName", "name": "string"}},
                            {"kind": "FieldDefinition", "fieldName": "text",
                             "type": {"kind": "PrimitiveTypeName", "name": "string"}}
                        ]
                    }
                },
                "result": {
                    "value": {
                        "kind": "ObjectDefinition",
                        "fields": [
                            {"kind": "FieldDefinition", "fieldName": "messageId",
                             "type": {"kind": "PrimitiveTypeName", "name": "string"}}
                        ]
                    }
                }
            },
            {
                "kind": "UseCaseDefinition",
                "useCaseName": "RetrieveMessageStatus",
                "input": {
                    "value": {
                        "kind": "ObjectDefinition",
                        "fields": [
                            {"kind": "FieldDefinition", "fieldName": "messageId", "required": true,
                             "type": {"kind": "PrimitiveTypeName", "name": "string"}}
                        ]
                    }
                },
                "result": {
                    "value": {
                        "kind": "ObjectDefinition",
                        "fields": [
                            {"kind": "FieldDefinition", "fieldName": "deliveryStatus",
                             "type": {"kind": "PrimitiveTypeName", "name": "string"}}
                        ]
                    }
                }
            }
        ]
    })
}

/// Minimal compiled document for an arbitrary profile with one use case
/// taking and returning a single string field.
pub fn simple_document(scope: &str, name: &str, use_case: &str) -> Value {
    json!({
        "kind": "ProfileDocument",
        "header": {
            "kind": "ProfileHeader",
            "scope": scope,
            "name": name,
            "version": {"major": 1, "minor": 0, "patch": 0}
        },
        "definitions": [
            {
                "kind": "UseCaseDefinition",
                "useCaseName": use_case,
                "input": {
                    "value": {
                        "kind": "ObjectDefinition",
                        "fields": [
                            {"kind": "FieldDefinition", "fieldName": "value",
                             "type": {"kind": "PrimitiveTypeName", "name": "string"}}
                        ]
                    }
                },
                "result": {
                    "value": {
                        "kind": "ObjectDefinition",
                        "fields": [
                            {"kind": "FieldDefinition", "fieldName": "value",
                             "type": {"kind": "PrimitiveTypeName", "name": "string"}}
                        ]
                    }
                }
            }
        ]
    })
}
