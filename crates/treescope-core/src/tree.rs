// Rust guideline compliant 2026-08-18

//! Component tree arena for search-expression resolution.
//!
//! This module provides the passive tree structure that resolution operates
//! on: an arena of nodes indexed by integer handles, each storing a parent
//! handle, an ordered child list, and a map of named facets. The arena layout
//! avoids cyclic ownership while keeping parent-chain ascension O(depth).
//!
//! The tree is data only. It carries no rendering or lifecycle behavior; the
//! resolvers in [`crate::resolver`] read it and never mutate it.

use crate::{Error, Result};
use std::collections::BTreeMap;

/// Handle to a node in a [`ComponentTree`].
///
/// Handles are plain arena indices and are only meaningful for the tree that
/// issued them. Accessors index the arena directly, so a handle from another
/// tree may panic or address an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the arena index behind this handle.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Data carried by a single tree node.
///
/// The identifier is optional: anonymous structural nodes are legal and
/// simply never match an id pattern. The two flags mark the scoping roles a
/// node can play: a naming container bounds identifier search, a form is the
/// target of the `@form` keyword.
#[derive(Debug, Clone, Default)]
pub struct Node {
    id: Option<String>,
    naming_container: bool,
    form: bool,
}

impl Node {
    /// Creates a node with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            naming_container: false,
            form: false,
        }
    }

    /// Creates a node without an identifier.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Marks this node as a naming container (builder style).
    pub fn naming_container(mut self) -> Self {
        self.naming_container = true;
        self
    }

    /// Marks this node as a form (builder style).
    pub fn form(mut self) -> Self {
        self.form = true;
        self
    }

    /// Returns the node's identifier, if present.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns true if this node bounds identifier search.
    pub fn is_naming_container(&self) -> bool {
        self.naming_container
    }

    /// Returns true if this node is a form.
    pub fn is_form(&self) -> bool {
        self.form
    }
}

/// Arena slot: node data plus its structural links.
#[derive(Debug, Clone)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    facets: BTreeMap<String, NodeId>,
}

/// A component tree owning all of its nodes.
///
/// The root is created with the tree and is the only node without a parent.
/// Children keep insertion order; facets are named slots kept in name order.
/// Identifier uniqueness is not enforced at construction (duplicate ids are
/// representable and show up in resolution results as distinct handles).
#[derive(Debug, Clone)]
pub struct ComponentTree {
    slots: Vec<Slot>,
}

impl ComponentTree {
    /// Creates a tree with the given root node.
    ///
    /// # Arguments
    ///
    /// * `root` - Node data for the root
    ///
    /// # Returns
    ///
    /// A tree containing only the root.
    ///
    /// # Errors
    ///
    /// Returns an error if the root carries an invalid identifier.
    pub fn new(root: Node) -> Result<Self> {
        if let Some(id) = root.id() {
            validate_id(id)?;
        }
        Ok(Self {
            slots: vec![Slot {
                node: root,
                parent: None,
                children: Vec::new(),
                facets: BTreeMap::new(),
            }],
        })
    }

    /// Returns the root handle.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Appends a child to a parent node.
    ///
    /// # Arguments
    ///
    /// * `parent` - Handle of the parent node
    /// * `node` - Node data for the new child
    ///
    /// # Returns
    ///
    /// The handle of the inserted child.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent handle is unknown or the identifier is
    /// invalid.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> Result<NodeId> {
        self.check_handle(parent)?;
        if let Some(id) = node.id() {
            validate_id(id)?;
        }
        let child = self.push_slot(node, parent);
        self.slots[parent.index()].children.push(child);
        Ok(child)
    }

    /// Attaches a named facet to a parent node.
    ///
    /// Re-attaching an existing facet name replaces the previous linkage;
    /// the replaced subtree stays allocated in the arena but becomes
    /// unreachable from the root.
    ///
    /// # Arguments
    ///
    /// * `parent` - Handle of the parent node
    /// * `name` - Facet name, must not be empty
    /// * `node` - Node data for the facet
    ///
    /// # Returns
    ///
    /// The handle of the inserted facet node.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent handle is unknown, the facet name is
    /// empty, or the identifier is invalid.
    pub fn add_facet(&mut self, parent: NodeId, name: &str, node: Node) -> Result<NodeId> {
        self.check_handle(parent)?;
        if name.is_empty() {
            return Err(Error::InvalidNode("facet name must not be empty".to_string()));
        }
        if let Some(id) = node.id() {
            validate_id(id)?;
        }
        let facet = self.push_slot(node, parent);
        self.slots[parent.index()].facets.insert(name.to_string(), facet);
        Ok(facet)
    }

    /// Returns the node data behind a handle.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.slots[id.index()].node
    }

    /// Returns a node's identifier, if present.
    pub fn id(&self, id: NodeId) -> Option<&str> {
        self.slots[id.index()].node.id()
    }

    /// Returns true if the node bounds identifier search.
    pub fn is_naming_container(&self, id: NodeId) -> bool {
        self.slots[id.index()].node.is_naming_container()
    }

    /// Returns true if the node is a form.
    pub fn is_form(&self, id: NodeId) -> bool {
        self.slots[id.index()].node.is_form()
    }

    /// Returns a node's parent, or None for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.index()].parent
    }

    /// Returns a node's children in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.slots[id.index()].children
    }

    /// Returns the facet attached under the given name, if any.
    pub fn facet(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.slots[id.index()].facets.get(name).copied()
    }

    /// Iterates a node's facets as (name, handle) pairs in name order.
    pub fn facets(&self, id: NodeId) -> impl Iterator<Item = (&str, NodeId)> {
        self.slots[id.index()]
            .facets
            .iter()
            .map(|(name, handle)| (name.as_str(), *handle))
    }

    /// Iterates a node's one-level neighborhood: facets in name order, then
    /// children in insertion order.
    ///
    /// This is the scan order of wildcard matching, which makes resolution
    /// results deterministic for a given tree.
    pub fn facets_and_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let slot = &self.slots[id.index()];
        slot.facets
            .values()
            .copied()
            .chain(slot.children.iter().copied())
    }

    /// Iterates a subtree in depth-first pre-order, facets before children at
    /// each node, starting with the node itself.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Determines the search root for a starting node.
    ///
    /// Ascends the parent chain until reaching the tree root or a node
    /// flagged as a naming container, whichever comes first. A starting node
    /// that is itself a naming container (or the root) is its own search
    /// root. This bounds identifier matching so it does not leak across
    /// unrelated naming scopes.
    ///
    /// # Arguments
    ///
    /// * `id` - The starting node
    ///
    /// # Returns
    ///
    /// The handle of the nearest enclosing scope root.
    pub fn search_root(&self, id: NodeId) -> NodeId {
        let mut current = id;
        loop {
            if self.is_naming_container(current) {
                return current;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    /// Returns the node's naming scope: itself if it is a naming container,
    /// else the nearest naming-container ancestor, else the root.
    ///
    /// The root bounds every scope in this model, so this coincides with
    /// [`ComponentTree::search_root`].
    pub fn naming_container_of(&self, id: NodeId) -> NodeId {
        self.search_root(id)
    }

    /// Returns the nearest enclosing form, the node itself included.
    pub fn enclosing_form(&self, id: NodeId) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.is_form(node) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// Returns the sibling following the node among its parent's children.
    ///
    /// Facets have no sibling order, so a facet node (or the root) has no
    /// next sibling.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let position = siblings.iter().position(|&sibling| sibling == id)?;
        siblings.get(position + 1).copied()
    }

    /// Returns the sibling preceding the node among its parent's children.
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let position = siblings.iter().position(|&sibling| sibling == id)?;
        position.checked_sub(1).and_then(|p| siblings.get(p)).copied()
    }

    /// Renders a node's client id: the identifiers of its naming-container
    /// ancestors (those that have one), joined with the separator and
    /// terminated by the node's own identifier.
    ///
    /// Nodes without an identifier render as `n{index}` from their handle.
    ///
    /// # Arguments
    ///
    /// * `id` - The node to render
    /// * `separator` - Segment separator character
    ///
    /// # Returns
    ///
    /// The separator-joined client id string.
    pub fn client_id(&self, id: NodeId, separator: char) -> String {
        let mut prefix: Vec<&str> = Vec::new();
        let mut current = self.parent(id);
        while let Some(node) = current {
            if self.is_naming_container(node) {
                if let Some(segment) = self.id(node) {
                    prefix.push(segment);
                }
            }
            current = self.parent(node);
        }
        prefix.reverse();

        let mut out = String::new();
        for segment in prefix {
            out.push_str(segment);
            out.push(separator);
        }
        match self.id(id) {
            Some(own) => out.push_str(own),
            None => out.push_str(&id.to_string()),
        }
        out
    }

    fn check_handle(&self, id: NodeId) -> Result<()> {
        if id.index() < self.slots.len() {
            Ok(())
        } else {
            Err(Error::InvalidNode(format!(
                "handle {} is not part of this tree",
                id
            )))
        }
    }

    fn push_slot(&mut self, node: Node, parent: NodeId) -> NodeId {
        let handle = NodeId(self.slots.len() as u32);
        self.slots.push(Slot {
            node,
            parent: Some(parent),
            children: Vec::new(),
            facets: BTreeMap::new(),
        });
        handle
    }
}

/// Depth-first pre-order iterator over a subtree.
///
/// Yields the starting node first, then at each node its facets in name
/// order before its children in insertion order.
pub struct Descendants<'a> {
    tree: &'a ComponentTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.stack.pop()?;
        // Push in reverse so facets pop before children, both in order.
        let slot = &self.tree.slots[next.index()];
        for &child in slot.children.iter().rev() {
            self.stack.push(child);
        }
        for &facet in slot.facets.values().rev() {
            self.stack.push(facet);
        }
        Some(next)
    }
}

/// Validates a node identifier.
///
/// Identifiers must be non-empty, start with an ASCII letter or underscore,
/// and contain only ASCII letters, digits, hyphens, and underscores. This
/// keeps wildcard markers and separator characters out of identifiers, so
/// expression text stays unambiguous.
///
/// # Arguments
///
/// * `id` - The identifier to validate
///
/// # Errors
///
/// Returns an error describing the first violation found.
pub fn validate_id(id: &str) -> Result<()> {
    let mut chars = id.chars();
    let first = chars
        .next()
        .ok_or_else(|| Error::InvalidNode("id must not be empty".to_string()))?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(Error::InvalidNode(format!(
            "id '{}' must start with a letter or underscore",
            id
        )));
    }
    for c in chars {
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(Error::InvalidNode(format!(
                "id '{}' contains invalid character '{}'",
                id, c
            )));
        }
    }
    Ok(())
}
