//! Project configuration (`sdk/project.json`).
//!
//! The config names the profiles and providers the project is wired for and,
//! optionally, the transpiler command the pipeline hands its sources to.
//! Entries are kept as raw JSON values; this crate only routes them.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub profiles: BTreeMap<String, Value>,
    #[serde(default)]
    pub providers: BTreeMap<String, Value>,
    /// Transpiler invocation: program followed by its arguments. Touched file
    /// paths are appended by the command transpiler. Absent means no-op.
    #[serde(default)]
    pub transpiler: Option<Vec<String>>,
}

impl ProjectConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("loading project config at {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("parsing project config at {}", path.display()))
    }
}
