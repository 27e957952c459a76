//! Transpilation seam.
//!
//! Turning the generated TypeScript sources into compiled output is the job
//! of an external toolchain; the pipeline only hands over the sources it just
//! rewrote together with the project config. The production implementation
//! runs the command the config names, with the touched project-relative paths
//! appended. Failures propagate unwrapped, aborting the run.

use crate::config::ProjectConfig;
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::path::Path;
use std::process::{Command, Stdio};

pub trait Transpiler {
    /// `sources` maps project-relative paths to the source text just written
    /// at those paths.
    fn transpile(
        &self,
        root: &Path,
        sources: &BTreeMap<String, String>,
        config: &ProjectConfig,
    ) -> Result<()>;
}

/// Skips transpilation entirely. Used by tests and projects without a
/// configured toolchain.
pub struct NoopTranspiler;

impl Transpiler for NoopTranspiler {
    fn transpile(
        &self,
        _root: &Path,
        _sources: &BTreeMap<String, String>,
        _config: &ProjectConfig,
    ) -> Result<()> {
        Ok(())
    }
}

/// Runs the transpiler command configured in `project.json`.
pub struct CommandTranspiler;

impl Transpiler for CommandTranspiler {
    fn transpile(
        &self,
        root: &Path,
        sources: &BTreeMap<String, String>,
        config: &ProjectConfig,
    ) -> Result<()> {
        let Some(command) = config.transpiler.as_deref().filter(|cmd| !cmd.is_empty()) else {
            return Ok(());
        };

        let mut cmd = Command::new(&command[0]);
        cmd.args(&command[1..])
            .args(sources.keys())
            .current_dir(root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = cmd
            .output()
            .with_context(|| format!("running transpiler '{}'", command[0]))?;
        if !output.status.success() {
            bail!(
                "transpiler '{}' failed with status {:?}: {}",
                command[0],
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(())
    }
}
