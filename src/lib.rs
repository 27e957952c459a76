//! Shared library for the capability grid tooling.
//!
//! The crate is a thin integration layer around an external
//! capability-invocation SDK: it generates typed client bindings
//! (`sdk/sdk.ts` plus per-profile typing modules) from compiled profile
//! documents, and ships per-capability map suites that verify providers
//! against recorded exchanges. Public functions here form the contract the
//! helper binaries depend on: project-root discovery, the generation
//! pipeline, and the test harness.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod config;
pub mod error;
pub mod generate;
pub mod harness;
pub mod layout;
pub mod maps;
pub mod profile;
pub mod transpile;

pub use config::ProjectConfig;
pub use error::GenerateError;
pub use generate::{
    GenerateOptions, TypeIndex, collect_capabilities, generate, generate_profile_types,
    render_sdk_module, render_typings,
};
pub use harness::{
    CapabilityTest, MapContext, PerformOutcome, ReplayPerformer, RunOptions, RunResult,
    UseCasePerformer,
};
pub use profile::{DocumentSchema, ProfileDocument, ProfileId, load_document};
pub use transpile::{CommandTranspiler, NoopTranspiler, Transpiler};

const GRID_SENTINEL: &str = "grid";
const CONFIG_SENTINEL: &str = "sdk/project.json";

/// Returns true when `candidate` looks like a capability grid project root.
///
/// Detection is strict on purpose: the generator writes by path convention,
/// so running against a half-matching directory would scatter artifacts.
fn is_project_root(candidate: &Path) -> bool {
    candidate.join(GRID_SENTINEL).is_dir() && candidate.join(CONFIG_SENTINEL).is_file()
}

/// Verifies that an explicit `CAPGRID_ROOT` hint points at a valid project.
fn project_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_project_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_project_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the capability grid project root.
///
/// Search order: honor `CAPGRID_ROOT` if it points at a real project, fall
/// back to climbing up from the working directory, then use the build-time
/// hint. Callers can treat failure as fatal because the pipeline cannot run
/// without the project layout.
pub fn find_project_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("CAPGRID_ROOT") {
        if let Some(root) = project_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    if let Some(hint) = option_env!("CAPGRID_ROOT_HINT") {
        if let Some(root) = project_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate a capability grid project (needs grid/ and sdk/project.json). \
         Set CAPGRID_ROOT to the project directory."
    );
}
