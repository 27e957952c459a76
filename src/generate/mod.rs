//! The binding-generation pipeline.
//!
//! `generate_profile_types` handles one profile: load and validate the
//! compiled AST, render the typing module, write it, and update the scope's
//! export index. `generate` wraps that and rebuilds the aggregate SDK module
//! from the full grid tree before handing the touched sources to the
//! transpiler seam. All validation happens before the first write, so a
//! failing run leaves the tree untouched.

pub mod index;
pub mod sdk;
pub mod typing;

pub use index::TypeIndex;
pub use sdk::{collect_capabilities, render_sdk_module};
pub use typing::render_typings;

use crate::config::ProjectConfig;
use crate::layout;
use crate::profile::{DocumentSchema, ProfileId, load_document, resolve_schema_path};
use crate::transpile::Transpiler;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Options threaded through a generation run.
///
/// `log` mirrors the CLI's progress callback: invoked at pipeline milestones
/// with human-readable strings, never consulted for control flow.
#[derive(Default)]
pub struct GenerateOptions<'a> {
    pub log: Option<&'a dyn Fn(&str)>,
}

impl GenerateOptions<'_> {
    fn emit(&self, message: &str) {
        if let Some(log) = self.log {
            log(message);
        }
    }
}

/// Generate the typing module for one profile and update the scope index.
///
/// Returns the generated typing text so callers can pass it on to the
/// transpile step without re-reading the file.
pub fn generate_profile_types(
    root: &Path,
    id: &ProfileId,
    options: &GenerateOptions<'_>,
) -> Result<String> {
    let ast_path = layout::ast_path(root, id);
    options.emit(&format!(
        "Looking for compiled profile at \"{}\"",
        ast_path.display()
    ));

    let schema = DocumentSchema::load(&resolve_schema_path(root))?;
    let document = load_document(&ast_path, &schema)?;
    options.emit(&format!("Compiled profile found. Generating typings for \"{id}\""));

    let typing = render_typings(id, &document);

    let scope_dir = layout::scope_types_dir(root, &id.scope);
    fs::create_dir_all(&scope_dir)
        .with_context(|| format!("creating types directory {}", scope_dir.display()))?;

    let typing_path = layout::typing_path(root, id);
    options.emit(&format!(
        "Writing generated typings to \"{}\"",
        typing_path.display()
    ));
    fs::write(&typing_path, &typing)
        .with_context(|| format!("writing typings to {}", typing_path.display()))?;

    let index_path = layout::index_path(root, &id.scope);
    let mut type_index = TypeIndex::load(&index_path)?;
    if type_index.insert(&id.name) {
        options.emit(&format!(
            "Updating \"{}\" with an export for \"{}\"",
            index_path.display(),
            id.name
        ));
        fs::write(&index_path, type_index.render())
            .with_context(|| format!("writing type index {}", index_path.display()))?;
    }

    Ok(typing)
}

/// Run the full pipeline for one profile.
///
/// Any failure aborts the run: a partially generated profile is never treated
/// as success. Transpiler errors propagate unwrapped.
pub fn generate(
    root: &Path,
    id: &ProfileId,
    transpiler: &dyn Transpiler,
    options: &GenerateOptions<'_>,
) -> Result<()> {
    let mut sources: BTreeMap<String, String> = BTreeMap::new();

    let typing = generate_profile_types(root, id, options)?;
    sources.insert(layout::typing_rel_path(id), typing);

    let profile_ids = collect_capabilities(root)?;
    let sdk_source = render_sdk_module(&profile_ids)?;

    let sdk_path = layout::sdk_path(root);
    if let Some(parent) = sdk_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating sdk directory {}", parent.display()))?;
    }
    options.emit(&format!(
        "Updating \"{}\" with typings for \"{id}\"",
        layout::SDK_FILE
    ));
    fs::write(&sdk_path, &sdk_source)
        .with_context(|| format!("writing sdk module {}", sdk_path.display()))?;
    sources.insert(layout::SDK_FILE.to_string(), sdk_source);

    let config = ProjectConfig::load(&layout::config_path(root))?;
    transpiler.transpile(root, &sources, &config)?;
    Ok(())
}
