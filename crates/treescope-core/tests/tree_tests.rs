// Rust guideline compliant 2026-08-18

//! Unit tests for the tree module.
//!
//! These tests validate arena construction, the facets-then-children scan
//! order, search-root ascension, sibling navigation, and client id
//! rendering.

use treescope_core::tree::validate_id;
use treescope_core::{ComponentTree, Node, NodeId};

/// Helper to create a naming-container node with the given id.
fn container(id: &str) -> Node {
    Node::new(id).naming_container()
}

/// Helper to collect the ids (or "-" for anonymous) of a handle sequence.
fn ids_of(tree: &ComponentTree, handles: impl IntoIterator<Item = NodeId>) -> Vec<String> {
    handles
        .into_iter()
        .map(|h| tree.id(h).unwrap_or("-").to_string())
        .collect()
}

#[test]
fn test_root_only_tree() {
    let tree = ComponentTree::new(Node::new("view")).expect("Root-only tree should be valid");

    assert_eq!(tree.node_count(), 1, "Tree should contain only the root");
    assert_eq!(tree.id(tree.root()), Some("view"), "Root should keep its id");
    assert!(
        tree.parent(tree.root()).is_none(),
        "Root should have no parent"
    );
    assert!(
        tree.children(tree.root()).is_empty(),
        "Root should start without children"
    );
}

#[test]
fn test_add_child_preserves_order() {
    let mut tree = ComponentTree::new(Node::anonymous()).unwrap();
    let root = tree.root();
    tree.add_child(root, Node::new("first")).unwrap();
    tree.add_child(root, Node::new("second")).unwrap();
    tree.add_child(root, Node::new("third")).unwrap();

    assert_eq!(
        ids_of(&tree, tree.children(root).to_vec()),
        vec!["first", "second", "third"],
        "Children should keep insertion order"
    );
}

#[test]
fn test_facets_and_children_order() {
    let mut tree = ComponentTree::new(Node::anonymous()).unwrap();
    let root = tree.root();
    tree.add_child(root, Node::new("childA")).unwrap();
    tree.add_facet(root, "zeta", Node::new("facetZ")).unwrap();
    tree.add_facet(root, "alpha", Node::new("facetA")).unwrap();
    tree.add_child(root, Node::new("childB")).unwrap();

    assert_eq!(
        ids_of(&tree, tree.facets_and_children(root)),
        vec!["facetA", "facetZ", "childA", "childB"],
        "Scan order should be facets in name order, then children in insertion order"
    );
}

#[test]
fn test_facet_lookup_and_replacement() {
    let mut tree = ComponentTree::new(Node::anonymous()).unwrap();
    let root = tree.root();
    let first = tree.add_facet(root, "header", Node::new("old")).unwrap();
    let second = tree.add_facet(root, "header", Node::new("new")).unwrap();

    assert_ne!(first, second, "Replacement should allocate a new handle");
    assert_eq!(
        tree.facet(root, "header"),
        Some(second),
        "Facet name should point at the replacement"
    );
    assert_eq!(
        ids_of(&tree, tree.facets_and_children(root)),
        vec!["new"],
        "Replaced facet should no longer be reachable from the root"
    );
}

#[test]
fn test_empty_facet_name_rejected() {
    let mut tree = ComponentTree::new(Node::anonymous()).unwrap();
    let root = tree.root();
    let result = tree.add_facet(root, "", Node::new("x"));
    assert!(result.is_err(), "Empty facet names should be rejected");
}

#[test]
fn test_invalid_ids_rejected() {
    let mut tree = ComponentTree::new(Node::anonymous()).unwrap();
    let root = tree.root();

    for bad in ["9lead", "has space", "wild*card", "seg:ment", ""] {
        let result = tree.add_child(root, Node::new(bad));
        assert!(result.is_err(), "Id '{}' should be rejected", bad);
    }
    assert_eq!(tree.node_count(), 1, "Failed inserts should not grow the arena");
}

#[test]
fn test_foreign_handle_rejected() {
    let mut big = ComponentTree::new(Node::anonymous()).unwrap();
    let big_root = big.root();
    big.add_child(big_root, Node::new("a")).unwrap();
    let far = big.add_child(big_root, Node::new("b")).unwrap();

    let mut small = ComponentTree::new(Node::anonymous()).unwrap();
    let result = small.add_child(far, Node::new("c"));
    assert!(
        result.is_err(),
        "A handle beyond the arena should be rejected as a parent"
    );
}

#[test]
fn test_validate_id_rules() {
    for good in ["a", "_hidden", "panelA", "a-b_c9", "Z9"] {
        assert!(validate_id(good).is_ok(), "Id '{}' should be valid", good);
    }
    for bad in ["", "9a", "-lead", "a b", "a*b", "a:b", "a@b", "päne"] {
        assert!(validate_id(bad).is_err(), "Id '{}' should be invalid", bad);
    }
}

#[test]
fn test_search_root_stops_at_naming_container() {
    let mut tree = ComponentTree::new(Node::new("view")).unwrap();
    let root = tree.root();
    let scope = tree.add_child(root, container("scope")).unwrap();
    let child = tree.add_child(scope, Node::new("child")).unwrap();
    let grandchild = tree.add_child(child, Node::new("grandchild")).unwrap();

    assert_eq!(
        tree.search_root(grandchild),
        scope,
        "Ascension should stop at the nearest naming container"
    );
    assert_eq!(
        tree.search_root(scope),
        scope,
        "A naming container is its own search root"
    );
    assert_eq!(
        tree.search_root(root),
        root,
        "The root is its own search root"
    );
}

#[test]
fn test_search_root_reaches_root_without_boundary() {
    let mut tree = ComponentTree::new(Node::new("view")).unwrap();
    let root = tree.root();
    let a = tree.add_child(root, Node::new("a")).unwrap();
    let b = tree.add_child(a, Node::new("b")).unwrap();

    assert_eq!(
        tree.search_root(b),
        root,
        "Without naming containers, ascension should reach the root"
    );
}

#[test]
fn test_search_root_nested_boundaries() {
    let mut tree = ComponentTree::new(Node::new("view")).unwrap();
    let root = tree.root();
    let outer = tree.add_child(root, container("outer")).unwrap();
    let middle = tree.add_child(outer, Node::new("middle")).unwrap();
    let inner = tree.add_child(middle, container("inner")).unwrap();
    let leaf = tree.add_child(inner, Node::new("leaf")).unwrap();

    assert_eq!(
        tree.search_root(leaf),
        inner,
        "The nearest of the nested boundaries should win"
    );
    assert_eq!(
        tree.search_root(middle),
        outer,
        "Nodes between boundaries should ascend to the outer one"
    );
}

#[test]
fn test_enclosing_form() {
    let mut tree = ComponentTree::new(Node::new("view")).unwrap();
    let root = tree.root();
    let form = tree.add_child(root, Node::new("form1").form()).unwrap();
    let field = tree.add_child(form, Node::new("field")).unwrap();
    let stray = tree.add_child(root, Node::new("stray")).unwrap();

    assert_eq!(
        tree.enclosing_form(field),
        Some(form),
        "A field should find the enclosing form"
    );
    assert_eq!(
        tree.enclosing_form(form),
        Some(form),
        "A form is its own enclosing form"
    );
    assert!(
        tree.enclosing_form(stray).is_none(),
        "Nodes outside any form should have none"
    );
}

#[test]
fn test_sibling_navigation() {
    let mut tree = ComponentTree::new(Node::anonymous()).unwrap();
    let root = tree.root();
    let a = tree.add_child(root, Node::new("a")).unwrap();
    let b = tree.add_child(root, Node::new("b")).unwrap();
    let c = tree.add_child(root, Node::new("c")).unwrap();
    let facet = tree.add_facet(root, "side", Node::new("side")).unwrap();

    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert!(tree.next_sibling(c).is_none(), "Last child has no successor");
    assert!(tree.previous_sibling(a).is_none(), "First child has no predecessor");
    assert_eq!(tree.previous_sibling(c), Some(b));
    assert!(
        tree.next_sibling(facet).is_none() && tree.previous_sibling(facet).is_none(),
        "Facets have no sibling order"
    );
    assert!(tree.next_sibling(root).is_none(), "The root has no siblings");
}

#[test]
fn test_descendants_preorder() {
    let mut tree = ComponentTree::new(Node::new("view")).unwrap();
    let root = tree.root();
    let panel = tree.add_child(root, Node::new("panel")).unwrap();
    tree.add_child(panel, Node::new("deep")).unwrap();
    tree.add_facet(panel, "header", Node::new("head")).unwrap();
    tree.add_child(root, Node::new("tail")).unwrap();

    assert_eq!(
        ids_of(&tree, tree.descendants(root)),
        vec!["view", "panel", "head", "deep", "tail"],
        "Descent should be pre-order with facets before children"
    );
}

#[test]
fn test_client_id_joins_naming_containers() {
    let mut tree = ComponentTree::new(container("app")).unwrap();
    let root = tree.root();
    let section = tree.add_child(root, container("settings")).unwrap();
    let plain = tree.add_child(section, Node::new("panel")).unwrap();
    let input = tree.add_child(plain, Node::new("name")).unwrap();
    let anon = tree.add_child(section, Node::anonymous()).unwrap();

    assert_eq!(
        tree.client_id(input, ':'),
        "app:settings:name",
        "Only naming-container ancestors should contribute segments"
    );
    assert_eq!(tree.client_id(section, ':'), "app:settings");
    assert_eq!(tree.client_id(root, ':'), "app");
    assert_eq!(
        tree.client_id(anon, ':'),
        format!("app:settings:{}", anon),
        "Anonymous nodes should render their handle"
    );
}

#[test]
fn test_client_id_custom_separator() {
    let mut tree = ComponentTree::new(container("app")).unwrap();
    let root = tree.root();
    let leaf = tree.add_child(root, Node::new("leaf")).unwrap();

    assert_eq!(tree.client_id(leaf, '/'), "app/leaf");
}
