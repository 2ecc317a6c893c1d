// Rust guideline compliant 2026-08-18

//! Expression parsing and dispatch.
//!
//! An expression string holds one or more whitespace- or comma-separated
//! expressions. Each expression is a chain of segments separated by the
//! separator character; segments resolve left to right through the resolvers
//! in [`crate::resolver`], starting from the anchor node (or the tree root
//! when the expression begins with the separator). Results of the individual
//! expressions are concatenated in order, without de-duplication.
//!
//! The full raw expression text is threaded through every resolver call, so
//! diagnostics always cite what the caller wrote, not the segment under
//! resolution.

use crate::resolver::resolver_for_segment;
use crate::{ComponentTree, Error, NodeId, Result};
use tracing::debug;

/// Default segment separator.
pub const DEFAULT_SEPARATOR: char = ':';

/// Resolves a search-expression string from an anchor node.
///
/// # Arguments
///
/// * `tree` - The tree to search
/// * `anchor` - The node relative expressions start from
/// * `expression` - Raw expression text
/// * `separator` - Segment separator character
///
/// # Returns
///
/// The resolved nodes across all expressions in the string, in resolution
/// order. The result is empty only when every expression resolved to
/// `@none`.
///
/// # Errors
///
/// Returns an error if the expression text is empty or malformed, names an
/// unknown keyword, or if any id segment matches nothing.
pub fn resolve_expression(
    tree: &ComponentTree,
    anchor: NodeId,
    expression: &str,
    separator: char,
) -> Result<Vec<NodeId>> {
    let singles: Vec<&str> = expression
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if singles.is_empty() {
        return Err(Error::InvalidExpression {
            detail: "expression is empty".to_string(),
            expression: expression.to_string(),
        });
    }

    let mut result = Vec::new();
    for single in singles {
        let resolved = resolve_single(tree, anchor, single, expression, separator)?;
        result.extend(resolved);
    }
    Ok(result)
}

/// Resolves one expression (a single segment chain).
///
/// The current set starts as the anchor, or the tree root when the
/// expression begins with the separator. `@none` short-circuits the chain
/// to an empty result; every other chain either fails or ends non-empty,
/// because no resolver returns an empty set successfully.
fn resolve_single(
    tree: &ComponentTree,
    anchor: NodeId,
    single: &str,
    original_expression: &str,
    separator: char,
) -> Result<Vec<NodeId>> {
    let (chain, mut current) = match single.strip_prefix(separator) {
        Some(rest) => (rest, vec![tree.root()]),
        None => (single, vec![anchor]),
    };

    for segment in chain.split(separator) {
        if segment.is_empty() {
            return Err(Error::InvalidExpression {
                detail: "contains an empty segment".to_string(),
                expression: original_expression.to_string(),
            });
        }
        if segment == "@none" {
            return Ok(Vec::new());
        }
        let resolver = resolver_for_segment(segment, original_expression)?;
        debug!(segment, "dispatching segment");
        current = resolver.resolve(tree, &current, segment, original_expression)?;
    }

    debug!(expression = single, matches = current.len(), "resolved expression");
    Ok(current)
}
