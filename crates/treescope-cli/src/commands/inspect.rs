// Rust guideline compliant 2026-08-20

//! Implementation of the `tscope inspect` command.
//!
//! Prints a tree document (or a subtree of it) as an outline with
//! per-node client ids and flags.

use crate::output::{OutlineRow, OutputFormatter};
use anyhow::Result;
use std::path::Path;
use treescope_core::{ComponentTree, Config, NodeId, TreeDocument};

/// Executes the inspect command.
///
/// # Arguments
///
/// * `tree_path` - Path to the tree document
/// * `id` - Identifier of the subtree root to inspect (default: the root)
///
/// # Returns
///
/// Ok if the outline was printed, Err otherwise.
///
/// # Errors
///
/// Returns an error if the tree document cannot be loaded or the `--id`
/// identifier is unknown or ambiguous.
pub fn execute(
    tree_path: String,
    id: Option<String>,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let document = TreeDocument::load(Path::new(&tree_path))?;
    let separator = document.separator.unwrap_or(config.separator);
    let tree = document.to_tree()?;

    let start = match &id {
        Some(id) => super::find_anchor(&tree, id)?,
        None => tree.root(),
    };

    let mut rows = Vec::new();
    collect_outline(&tree, start, 0, None, separator, &mut rows);

    println!("{}", formatter.format_outline(&rows));

    Ok(())
}

/// Walks a subtree in display order, facets ahead of children at each node.
fn collect_outline(
    tree: &ComponentTree,
    node: NodeId,
    depth: usize,
    slot: Option<String>,
    separator: char,
    rows: &mut Vec<OutlineRow>,
) {
    rows.push(OutlineRow {
        depth,
        slot,
        id: tree.id(node).map(str::to_string),
        client_id: tree.client_id(node, separator),
        naming_container: tree.is_naming_container(node),
        form: tree.is_form(node),
    });

    for (name, facet) in tree.facets(node) {
        collect_outline(tree, facet, depth + 1, Some(name.to_string()), separator, rows);
    }
    for child in tree.children(node) {
        collect_outline(tree, *child, depth + 1, None, separator, rows);
    }
}
