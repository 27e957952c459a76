//! Aggregate SDK module assembly.
//!
//! The capability list is rebuilt from the on-disk `grid/` tree on every run,
//! never cached, so removed capabilities drop out of `sdk.ts` automatically.

use crate::layout;
use crate::profile::{ProfileId, camel_ident, type_prefix};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Walk two levels of `grid/` and collect `scope/usecase` identifiers.
///
/// Only directories count; hidden entries are skipped. Output is sorted and
/// duplicate-free so the rendered module is deterministic.
pub fn collect_capabilities(root: &Path) -> Result<Vec<String>> {
    let grid = layout::grid_dir(root);
    let mut ids = BTreeSet::new();

    for scope_entry in fs::read_dir(&grid)
        .with_context(|| format!("listing capability grid at {}", grid.display()))?
    {
        let scope_path = scope_entry?.path();
        let Some(scope) = visible_dir_name(&scope_path) else {
            continue;
        };
        for case_entry in fs::read_dir(&scope_path)
            .with_context(|| format!("listing scope {}", scope_path.display()))?
        {
            let case_path = case_entry?.path();
            let Some(use_case) = visible_dir_name(&case_path) else {
                continue;
            };
            ids.insert(format!("{scope}/{use_case}"));
        }
    }

    Ok(ids.into_iter().collect())
}

fn visible_dir_name(path: &Path) -> Option<String> {
    if !path.is_dir() {
        return None;
    }
    let name = path.file_name()?.to_str()?;
    if name.starts_with('.') {
        return None;
    }
    Some(name.to_string())
}

/// Render the uncompiled `sdk.ts` source for the given capability list.
///
/// One import and one re-export per profile, the spread union of their type
/// maps, and the typed client factory call.
pub fn render_sdk_module(profile_ids: &[String]) -> Result<String> {
    let mut imports = String::new();
    let mut exports = String::new();
    let mut spreads = String::new();

    for raw in profile_ids {
        let id = ProfileId::parse(raw)
            .with_context(|| format!("capability id '{raw}' in the grid tree"))?;
        let ident = camel_ident(&id);
        let prefix = type_prefix(&id);
        let module = format!("./types/{}/{}", id.scope, id.name);

        writeln!(imports, "import {{ {ident} }} from '{module}';").expect("write to string");
        writeln!(exports, "export {{ {prefix}Profile }} from \"{module}\";").expect("write to string");
        writeln!(spreads, "  ...{ident},").expect("write to string");
    }

    let mut out = String::new();
    out.push_str("import { createTypedClient } from '@capgrid/sdk';\n\n");
    out.push_str(&imports);
    out.push('\n');
    out.push_str(&exports);
    out.push('\n');
    out.push_str("const typeDefinitions = {\n");
    out.push_str(&spreads);
    out.push_str("};\n\n");
    out.push_str("export const GridClient = createTypedClient(typeDefinitions);\n");
    out.push_str("export type GridClient = InstanceType<typeof GridClient>;\n");
    Ok(out)
}
