// Rust guideline compliant 2026-08-20

//! Implementation of the `tscope resolve` command.
//!
//! Resolves a search expression against a tree document and prints
//! the matched components.

use crate::output::{MatchRow, OutputFormatter};
use anyhow::Result;
use std::path::Path;
use treescope_core::{resolve_expression, Config, TreeDocument};

/// Executes the resolve command.
///
/// The expression is resolved once per starting node and the results are
/// concatenated in starting-node order, duplicates included.
///
/// # Arguments
///
/// * `expression` - The search expression to resolve
/// * `tree_path` - Path to the tree document
/// * `from` - Identifiers of the starting nodes (empty means the root)
/// * `config` - The loaded configuration
/// * `formatter` - The output formatter to use
///
/// # Returns
///
/// Ok if the expression resolved against every starting node, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The tree document cannot be loaded
/// - A `--from` identifier is unknown or ambiguous
/// - The expression is malformed or matches nothing
pub fn execute(
    expression: String,
    tree_path: String,
    from: Vec<String>,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let document = TreeDocument::load(Path::new(&tree_path))?;
    let separator = document.separator.unwrap_or(config.separator);
    let tree = document.to_tree()?;

    // Resolve --from identifiers to starting nodes
    let anchors = if from.is_empty() {
        vec![tree.root()]
    } else {
        from.iter()
            .map(|id| super::find_anchor(&tree, id))
            .collect::<Result<Vec<_>>>()?
    };

    let mut matches = Vec::new();
    for anchor in anchors {
        matches.extend(resolve_expression(&tree, anchor, &expression, separator)?);
    }

    let rows: Vec<MatchRow> = matches
        .iter()
        .map(|node| MatchRow::from_node(&tree, *node, separator))
        .collect();

    println!("{}", formatter.format_matches(&rows));

    Ok(())
}
