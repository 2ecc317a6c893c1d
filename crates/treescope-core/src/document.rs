// Rust guideline compliant 2026-08-18

//! JSON tree documents.
//!
//! This module provides the serialization model and file IO for component
//! trees: a nested node document mirroring the tree shape, loaded and saved
//! as pretty-printed JSON. Conversion to [`ComponentTree`] validates every
//! present identifier.

use crate::{ComponentTree, Node, NodeId, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Serializable form of one node and its subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NodeDocument {
    /// Node identifier, absent for anonymous nodes.
    #[serde(default)]
    pub id: Option<String>,

    /// True if the node bounds identifier search.
    #[serde(default)]
    pub naming_container: bool,

    /// True if the node is a form.
    #[serde(default)]
    pub form: bool,

    /// Child subtrees in document order.
    #[serde(default)]
    pub children: Vec<NodeDocument>,

    /// Named facet subtrees, keyed by facet name.
    #[serde(default)]
    pub facets: BTreeMap<String, NodeDocument>,
}

/// A complete tree document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDocument {
    /// Root node of the tree.
    pub root: NodeDocument,

    /// Optional separator override for expressions against this document.
    #[serde(default)]
    pub separator: Option<char>,
}

impl TreeDocument {
    /// Loads a tree document from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file
    ///
    /// # Returns
    ///
    /// The parsed document. Identifiers are not validated here; conversion
    /// with [`TreeDocument::to_tree`] validates them.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let document: TreeDocument = serde_json::from_str(&content)?;
        Ok(document)
    }

    /// Saves the document as pretty-printed JSON.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to write
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Builds a component tree from the document.
    ///
    /// # Returns
    ///
    /// A tree with the same structure, children in document order and facets
    /// in name order.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending identifier if any present id is
    /// invalid, or if a facet name is empty.
    pub fn to_tree(&self) -> Result<ComponentTree> {
        let mut tree = ComponentTree::new(node_from_document(&self.root))?;
        let root = tree.root();
        attach_subtrees(&mut tree, root, &self.root)?;
        Ok(tree)
    }

    /// Snapshots a component tree into a document.
    ///
    /// Facet subtrees that were replaced by a later [`ComponentTree::add_facet`]
    /// are unreachable from the root and do not appear in the snapshot.
    pub fn from_tree(tree: &ComponentTree) -> Self {
        Self {
            root: document_from_node(tree, tree.root()),
            separator: None,
        }
    }
}

/// Converts document node data into arena node data.
fn node_from_document(document: &NodeDocument) -> Node {
    let mut node = match &document.id {
        Some(id) => Node::new(id.clone()),
        None => Node::anonymous(),
    };
    if document.naming_container {
        node = node.naming_container();
    }
    if document.form {
        node = node.form();
    }
    node
}

/// Recursively attaches a document node's facets and children under a handle.
fn attach_subtrees(
    tree: &mut ComponentTree,
    parent: NodeId,
    document: &NodeDocument,
) -> Result<()> {
    for (name, facet) in &document.facets {
        let handle = tree.add_facet(parent, name, node_from_document(facet))?;
        attach_subtrees(tree, handle, facet)?;
    }
    for child in &document.children {
        let handle = tree.add_child(parent, node_from_document(child))?;
        attach_subtrees(tree, handle, child)?;
    }
    Ok(())
}

/// Recursively snapshots a subtree into document form.
fn document_from_node(tree: &ComponentTree, id: NodeId) -> NodeDocument {
    NodeDocument {
        id: tree.id(id).map(str::to_string),
        naming_container: tree.is_naming_container(id),
        form: tree.is_form(id),
        children: tree
            .children(id)
            .iter()
            .map(|&child| document_from_node(tree, child))
            .collect(),
        facets: tree
            .facets(id)
            .map(|(name, facet)| (name.to_string(), document_from_node(tree, facet)))
            .collect(),
    }
}
