// Rust guideline compliant 2026-08-20

//! Command implementations for the Treescope CLI.

use anyhow::Result;
use treescope_core::{ComponentTree, NodeId};

pub mod check;
pub mod inspect;
pub mod resolve;

/// Finds the unique node carrying an identifier.
///
/// Used by commands that accept a node identifier on the command line to
/// pick a starting point inside the loaded tree.
///
/// # Arguments
/// * `tree` - The tree to search
/// * `id` - The identifier to look up
///
/// # Returns
/// The handle of the node carrying the identifier.
///
/// # Errors
/// Returns an error if no node carries the identifier, or if more than
/// one does.
pub(crate) fn find_anchor(tree: &ComponentTree, id: &str) -> Result<NodeId> {
    let matches: Vec<NodeId> = tree
        .descendants(tree.root())
        .filter(|node| tree.id(*node) == Some(id))
        .collect();

    match matches.as_slice() {
        [] => anyhow::bail!("No component with id '{}' in the tree", id),
        [single] => Ok(*single),
        found => anyhow::bail!(
            "Identifier '{}' is ambiguous: {} components carry it",
            id,
            found.len()
        ),
    }
}
