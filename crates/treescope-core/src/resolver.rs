// Rust guideline compliant 2026-08-18

//! Search-expression segment resolvers.
//!
//! One resolver per grammar rule of the expression language: wildcard id
//! patterns, plain ids, and the `@` keywords. All resolvers share the
//! [`SegmentResolver`] interface and are selected by
//! [`resolver_for_segment`]; the expression layer in [`crate::expression`]
//! drives them segment by segment.
//!
//! The wildcard resolver is the algorithmic core. Its scope rule is strict:
//! matching is evaluated on a starting node's search root and that root's
//! direct facets and children only, never deeper. Plain-id resolution by
//! contrast descends the whole subtree.

use crate::{ComponentTree, Error, NodeId, Result};
use tracing::debug;

/// Capability interface for resolving one expression segment.
///
/// A resolver maps the current node set to the next one. Implementations
/// read the tree and hold no state; each call is independent.
pub trait SegmentResolver: std::fmt::Debug {
    /// Resolves one segment against the current node set.
    ///
    /// # Arguments
    ///
    /// * `tree` - The tree being searched
    /// * `current` - The node set the segment applies to
    /// * `segment` - The segment text (pattern, id, or keyword)
    /// * `original_expression` - Full expression text, used only for
    ///   diagnostics
    ///
    /// # Returns
    ///
    /// The resolved node set. Apart from the `@none` keyword, a successful
    /// resolution is never empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment cannot be resolved; the error carries
    /// the original expression text.
    fn resolve(
        &self,
        tree: &ComponentTree,
        current: &[NodeId],
        segment: &str,
        original_expression: &str,
    ) -> Result<Vec<NodeId>>;
}

/// Selects the resolver for a segment.
///
/// `@`-segments dispatch on the keyword (the part before any `(` argument);
/// segments containing `*` use the wildcard resolver; everything else is a
/// plain id.
///
/// # Arguments
///
/// * `segment` - The segment text
/// * `expression` - Full expression text for diagnostics
///
/// # Errors
///
/// Returns an error for an `@`-segment with an unrecognized keyword.
pub fn resolver_for_segment(
    segment: &str,
    expression: &str,
) -> Result<&'static dyn SegmentResolver> {
    if segment.starts_with('@') {
        let keyword = match segment.find('(') {
            Some(open) => &segment[..open],
            None => segment,
        };
        match keyword {
            "@this" => Ok(&ThisResolver),
            "@parent" => Ok(&ParentResolver),
            "@form" => Ok(&FormResolver),
            "@namingcontainer" => Ok(&NamingContainerResolver),
            "@all" => Ok(&AllResolver),
            "@none" => Ok(&NoneResolver),
            "@next" => Ok(&NextResolver),
            "@previous" => Ok(&PreviousResolver),
            "@child" => Ok(&ChildResolver),
            _ => Err(Error::UnknownKeyword {
                keyword: segment.to_string(),
                expression: expression.to_string(),
            }),
        }
    } else if segment.contains('*') {
        Ok(&PartialIdResolver)
    } else {
        Ok(&IdResolver)
    }
}

/// Tests an identifier against a wildcard pattern.
///
/// Shapes, checked in order: `*substring*` contains, `prefix*` starts-with,
/// `*suffix` ends-with, anything else exact equality. Comparison is
/// case-sensitive. A node without an identifier never matches. A lone `*`
/// resolves through the starts-with rule with an empty prefix and therefore
/// matches every present identifier; the contains rule only applies to
/// patterns of length two or more.
pub fn wildcard_match(id: Option<&str>, pattern: &str) -> bool {
    let id = match id {
        Some(id) => id,
        None => return false,
    };
    if pattern.len() > 1 && pattern.starts_with('*') && pattern.ends_with('*') {
        id.contains(&pattern[1..pattern.len() - 1])
    } else if let Some(prefix) = pattern.strip_suffix('*') {
        id.starts_with(prefix)
    } else if let Some(suffix) = pattern.strip_prefix('*') {
        id.ends_with(suffix)
    } else {
        id == pattern
    }
}

/// Resolves wildcard id patterns against each starting node's search root
/// and its one-level neighborhood.
#[derive(Debug, Clone, Copy)]
pub struct PartialIdResolver;

impl PartialIdResolver {
    /// Collects the pattern matches visible from one search root: the root
    /// itself plus its direct facets and children. Grandchildren are out of
    /// scope here; deeper nodes are only found when they are themselves in
    /// some search root's neighborhood.
    ///
    /// # Arguments
    ///
    /// * `tree` - The tree being searched
    /// * `search_root` - Scope root to scan from
    /// * `pattern` - Wildcard pattern
    ///
    /// # Returns
    ///
    /// The matching handles in scan order (root first, then facets in name
    /// order, then children in insertion order). May be empty.
    pub fn find_matches(
        tree: &ComponentTree,
        search_root: NodeId,
        pattern: &str,
    ) -> Vec<NodeId> {
        let mut matches = Vec::new();
        if wildcard_match(tree.id(search_root), pattern) {
            matches.push(search_root);
        }
        for child in tree.facets_and_children(search_root) {
            if wildcard_match(tree.id(child), pattern) {
                matches.push(child);
            }
        }
        matches
    }
}

impl SegmentResolver for PartialIdResolver {
    /// Resolves a wildcard pattern.
    ///
    /// For each node in `current`, ascends the parent chain to the nearest
    /// naming container or the tree root and scans that search root plus its
    /// direct facets and children. Matches accumulate across starting nodes
    /// in order, without de-duplication: two starting nodes sharing a search
    /// root contribute its matches twice.
    ///
    /// # Errors
    ///
    /// Returns the no-match error if the accumulated result is empty; an
    /// empty set is never returned silently.
    fn resolve(
        &self,
        tree: &ComponentTree,
        current: &[NodeId],
        segment: &str,
        original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        let mut result = Vec::new();
        for &start in current {
            let search_root = tree.search_root(start);
            debug!(start = %start, search_root = %search_root, "ascended to search root");
            result.extend(Self::find_matches(tree, search_root, segment));
        }
        debug!(pattern = segment, matches = result.len(), "partial id scan");
        if result.is_empty() {
            return Err(Error::NoMatch {
                pattern: segment.to_string(),
                expression: original_expression.to_string(),
            });
        }
        Ok(result)
    }
}

/// Resolves plain ids by exact match over each starting node's whole scope.
#[derive(Debug, Clone, Copy)]
pub struct IdResolver;

impl SegmentResolver for IdResolver {
    /// Resolves a plain id segment.
    ///
    /// Determines each starting node's search root exactly as the wildcard
    /// resolver does, then collects every node in the root's entire subtree
    /// whose identifier equals the segment. Accumulates across starting
    /// nodes without de-duplication.
    ///
    /// # Errors
    ///
    /// Returns the no-match error if no node in any scanned scope carries
    /// the id.
    fn resolve(
        &self,
        tree: &ComponentTree,
        current: &[NodeId],
        segment: &str,
        original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        let mut result = Vec::new();
        for &start in current {
            let search_root = tree.search_root(start);
            for node in tree.descendants(search_root) {
                if tree.id(node) == Some(segment) {
                    result.push(node);
                }
            }
        }
        debug!(id = segment, matches = result.len(), "exact id scan");
        if result.is_empty() {
            return Err(Error::NoMatch {
                pattern: segment.to_string(),
                expression: original_expression.to_string(),
            });
        }
        Ok(result)
    }
}

/// `@this` - each node maps to itself.
#[derive(Debug, Clone, Copy)]
pub struct ThisResolver;

impl SegmentResolver for ThisResolver {
    fn resolve(
        &self,
        _tree: &ComponentTree,
        current: &[NodeId],
        _segment: &str,
        _original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        Ok(current.to_vec())
    }
}

/// `@parent` - each node maps to its parent.
#[derive(Debug, Clone, Copy)]
pub struct ParentResolver;

impl SegmentResolver for ParentResolver {
    fn resolve(
        &self,
        tree: &ComponentTree,
        current: &[NodeId],
        _segment: &str,
        original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        let mut result = Vec::with_capacity(current.len());
        for &node in current {
            match tree.parent(node) {
                Some(parent) => result.push(parent),
                None => {
                    return Err(Error::Unresolvable {
                        keyword: "@parent".to_string(),
                        detail: "has no parent at the tree root".to_string(),
                        expression: original_expression.to_string(),
                    })
                }
            }
        }
        Ok(result)
    }
}

/// `@form` - each node maps to its nearest enclosing form, itself included.
#[derive(Debug, Clone, Copy)]
pub struct FormResolver;

impl SegmentResolver for FormResolver {
    fn resolve(
        &self,
        tree: &ComponentTree,
        current: &[NodeId],
        _segment: &str,
        original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        let mut result = Vec::with_capacity(current.len());
        for &node in current {
            match tree.enclosing_form(node) {
                Some(form) => result.push(form),
                None => {
                    return Err(Error::Unresolvable {
                        keyword: "@form".to_string(),
                        detail: "found no enclosing form".to_string(),
                        expression: original_expression.to_string(),
                    })
                }
            }
        }
        Ok(result)
    }
}

/// `@namingcontainer` - each node maps to its naming scope. Never fails;
/// the tree root bounds every scope.
#[derive(Debug, Clone, Copy)]
pub struct NamingContainerResolver;

impl SegmentResolver for NamingContainerResolver {
    fn resolve(
        &self,
        tree: &ComponentTree,
        current: &[NodeId],
        _segment: &str,
        _original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        Ok(current
            .iter()
            .map(|&node| tree.naming_container_of(node))
            .collect())
    }
}

/// `@all` - the set becomes the tree root, regardless of the current set.
#[derive(Debug, Clone, Copy)]
pub struct AllResolver;

impl SegmentResolver for AllResolver {
    fn resolve(
        &self,
        tree: &ComponentTree,
        _current: &[NodeId],
        _segment: &str,
        _original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        Ok(vec![tree.root()])
    }
}

/// `@none` - the set becomes empty. The expression layer treats this as a
/// successful empty resolution, the only construct allowed to produce one.
#[derive(Debug, Clone, Copy)]
pub struct NoneResolver;

impl SegmentResolver for NoneResolver {
    fn resolve(
        &self,
        _tree: &ComponentTree,
        _current: &[NodeId],
        _segment: &str,
        _original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        Ok(Vec::new())
    }
}

/// `@next` - each node maps to its following sibling.
#[derive(Debug, Clone, Copy)]
pub struct NextResolver;

impl SegmentResolver for NextResolver {
    fn resolve(
        &self,
        tree: &ComponentTree,
        current: &[NodeId],
        _segment: &str,
        original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        let mut result = Vec::with_capacity(current.len());
        for &node in current {
            match tree.next_sibling(node) {
                Some(sibling) => result.push(sibling),
                None => {
                    return Err(Error::Unresolvable {
                        keyword: "@next".to_string(),
                        detail: "has no following sibling".to_string(),
                        expression: original_expression.to_string(),
                    })
                }
            }
        }
        Ok(result)
    }
}

/// `@previous` - each node maps to its preceding sibling.
#[derive(Debug, Clone, Copy)]
pub struct PreviousResolver;

impl SegmentResolver for PreviousResolver {
    fn resolve(
        &self,
        tree: &ComponentTree,
        current: &[NodeId],
        _segment: &str,
        original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        let mut result = Vec::with_capacity(current.len());
        for &node in current {
            match tree.previous_sibling(node) {
                Some(sibling) => result.push(sibling),
                None => {
                    return Err(Error::Unresolvable {
                        keyword: "@previous".to_string(),
                        detail: "has no preceding sibling".to_string(),
                        expression: original_expression.to_string(),
                    })
                }
            }
        }
        Ok(result)
    }
}

/// `@child(n)` - each node maps to its n-th child, zero-based.
#[derive(Debug, Clone, Copy)]
pub struct ChildResolver;

impl SegmentResolver for ChildResolver {
    fn resolve(
        &self,
        tree: &ComponentTree,
        current: &[NodeId],
        segment: &str,
        original_expression: &str,
    ) -> Result<Vec<NodeId>> {
        let index_text = segment
            .strip_prefix("@child(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| Error::InvalidExpression {
                detail: "@child requires an index argument like @child(2)".to_string(),
                expression: original_expression.to_string(),
            })?;
        let index: usize = index_text.trim().parse().map_err(|_| Error::InvalidExpression {
            detail: format!("@child index '{}' is not a number", index_text),
            expression: original_expression.to_string(),
        })?;

        let mut result = Vec::with_capacity(current.len());
        for &node in current {
            let children = tree.children(node);
            match children.get(index) {
                Some(&child) => result.push(child),
                None => {
                    return Err(Error::Unresolvable {
                        keyword: "@child".to_string(),
                        detail: format!(
                            "index {} is out of range ({} children)",
                            index,
                            children.len()
                        ),
                        expression: original_expression.to_string(),
                    })
                }
            }
        }
        Ok(result)
    }
}
