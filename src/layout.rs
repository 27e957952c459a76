//! Fixed filesystem conventions for a capability grid project.
//!
//! Every path the generator reads or writes is derived here so the on-disk
//! layout stays compatible across the CLI, the maps, and external tooling:
//! compiled ASTs under `sdk/build/`, generated typings under `sdk/types/`,
//! the aggregate module at `sdk/sdk.ts`, capabilities under `grid/`.

use crate::profile::ProfileId;
use std::path::{Path, PathBuf};

/// Two-level capability tree: `grid/<scope>/<usecase>`.
pub const GRID_DIR: &str = "grid";
/// Compiled profile documents: `sdk/build/<scope>/<profile>/profile.ast.json`.
pub const BUILD_DIR: &str = "sdk/build";
/// Generated typing modules: `sdk/types/<scope>/<profile>.ts`.
pub const TYPES_DIR: &str = "sdk/types";
/// Aggregate uncompiled SDK module.
pub const SDK_FILE: &str = "sdk/sdk.ts";
/// Project configuration consumed by the transpile step.
pub const PROJECT_CONFIG_FILE: &str = "sdk/project.json";
/// Per-scope barrel index of exported profile typings.
pub const TYPE_DEFINITIONS_FILE: &str = "index.d.ts";

pub const PROFILE_BUILD_EXT: &str = ".ast.json";
pub const TYPESCRIPT_EXT: &str = ".ts";

pub fn grid_dir(root: &Path) -> PathBuf {
    root.join(GRID_DIR)
}

pub fn ast_path(root: &Path, id: &ProfileId) -> PathBuf {
    root.join(BUILD_DIR)
        .join(&id.scope)
        .join(&id.name)
        .join(format!("profile{PROFILE_BUILD_EXT}"))
}

pub fn scope_types_dir(root: &Path, scope: &str) -> PathBuf {
    root.join(TYPES_DIR).join(scope)
}

pub fn typing_path(root: &Path, id: &ProfileId) -> PathBuf {
    scope_types_dir(root, &id.scope).join(format!("{}{TYPESCRIPT_EXT}", id.name))
}

pub fn index_path(root: &Path, scope: &str) -> PathBuf {
    scope_types_dir(root, scope).join(TYPE_DEFINITIONS_FILE)
}

pub fn sdk_path(root: &Path) -> PathBuf {
    root.join(SDK_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG_FILE)
}

/// Project-relative typing path, used as the key in transpile source maps.
pub fn typing_rel_path(id: &ProfileId) -> String {
    format!("{TYPES_DIR}/{}/{}{TYPESCRIPT_EXT}", id.scope, id.name)
}
