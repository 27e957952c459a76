//! Lists the capabilities present in the project's grid tree.
//!
//! Prints one `scope/usecase` identifier per line, sorted. This is the same
//! walk the generator uses to rebuild the aggregate SDK module, exposed for
//! scripts and sanity checks.

use anyhow::Result;
use capgrid::{collect_capabilities, find_project_root};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let root = find_project_root()?;
    for id in collect_capabilities(&root)? {
        println!("{id}");
    }
    Ok(())
}
