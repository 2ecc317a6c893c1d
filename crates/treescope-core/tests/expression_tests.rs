// Rust guideline compliant 2026-08-18

//! Integration tests for the expression module.
//!
//! These tests drive full expression strings through parsing, dispatch, and
//! the segment resolvers: relative and absolute chains, keyword segments,
//! multi-expression union, `@none`, custom separators, and diagnostics.

use treescope_core::{resolve_expression, ComponentTree, Error, Node, NodeId};

/// A small view tree with two forms and a free-standing toolbar.
struct Fixture {
    tree: ComponentTree,
    form1: NodeId,
    input1: NodeId,
    input2: NodeId,
    panel: NodeId,
    deep_input: NodeId,
    input3: NodeId,
    toolbar: NodeId,
}

fn fixture() -> Fixture {
    let mut tree = ComponentTree::new(Node::new("view").naming_container()).unwrap();
    let root = tree.root();
    let form1 = tree
        .add_child(root, Node::new("form1").form().naming_container())
        .unwrap();
    let input1 = tree.add_child(form1, Node::new("input1")).unwrap();
    let input2 = tree.add_child(form1, Node::new("input2")).unwrap();
    let panel = tree.add_child(form1, Node::new("panel")).unwrap();
    let deep_input = tree.add_child(panel, Node::new("deepInput")).unwrap();
    let form2 = tree
        .add_child(root, Node::new("form2").form().naming_container())
        .unwrap();
    let input3 = tree.add_child(form2, Node::new("input3")).unwrap();
    let toolbar = tree.add_child(root, Node::new("toolbar")).unwrap();

    Fixture {
        tree,
        form1,
        input1,
        input2,
        panel,
        deep_input,
        input3,
        toolbar,
    }
}

#[test]
fn test_plain_id_resolves_in_enclosing_scope() {
    let f = fixture();
    let result = resolve_expression(&f.tree, f.input1, "input2", ':').unwrap();
    assert_eq!(result, vec![f.input2]);
}

#[test]
fn test_plain_id_descends_recursively() {
    let f = fixture();
    let result = resolve_expression(&f.tree, f.input1, "deepInput", ':').unwrap();
    assert_eq!(
        result,
        vec![f.deep_input],
        "Plain ids should be found below the scope root at any depth"
    );
}

#[test]
fn test_chain_moves_scope_segment_by_segment() {
    let f = fixture();
    let result = resolve_expression(&f.tree, f.input1, "panel:deepInput", ':').unwrap();
    assert_eq!(result, vec![f.deep_input]);
}

#[test]
fn test_wildcard_scans_one_level_of_scope() {
    let f = fixture();
    let result = resolve_expression(&f.tree, f.input1, "input*", ':').unwrap();
    assert_eq!(
        result,
        vec![f.input1, f.input2],
        "The wildcard scan must not see deepInput below the panel"
    );
}

#[test]
fn test_absolute_expression_anchors_at_root() {
    let f = fixture();
    let result = resolve_expression(&f.tree, f.deep_input, ":toolbar", ':').unwrap();
    assert_eq!(
        result,
        vec![f.toolbar],
        "A leading separator should restart resolution at the tree root"
    );
}

#[test]
fn test_wildcard_chain_accumulates_across_current_nodes() {
    let f = fixture();
    let root = f.tree.root();
    let result = resolve_expression(&f.tree, root, "*orm*:input*", ':').unwrap();
    assert_eq!(
        result,
        vec![f.input1, f.input2, f.input3],
        "Each node of the current set contributes its own scope's matches"
    );
}

#[test]
fn test_multiple_expressions_concatenate() {
    let f = fixture();
    let root = f.tree.root();
    let result = resolve_expression(&f.tree, root, "input1 input3", ':').unwrap();
    assert_eq!(result, vec![f.input1, f.input3]);

    let comma = resolve_expression(&f.tree, root, "input1,input3", ':').unwrap();
    assert_eq!(comma, vec![f.input1, f.input3], "Commas and spaces are equivalent");
}

#[test]
fn test_repeated_expressions_are_not_deduplicated() {
    let f = fixture();
    let root = f.tree.root();
    let result = resolve_expression(&f.tree, root, "input1 input1", ':').unwrap();
    assert_eq!(result, vec![f.input1, f.input1]);
}

#[test]
fn test_form_keyword_then_wildcard() {
    let f = fixture();
    let result = resolve_expression(&f.tree, f.deep_input, "@form:input*", ':').unwrap();
    assert_eq!(
        result,
        vec![f.input1, f.input2],
        "@form should hop to form1, whose one-level scan sees both inputs"
    );
}

#[test]
fn test_keyword_segments() {
    let f = fixture();
    let root = f.tree.root();

    assert_eq!(
        resolve_expression(&f.tree, f.input1, "@parent", ':').unwrap(),
        vec![f.form1]
    );
    assert_eq!(
        resolve_expression(&f.tree, f.panel, "@this", ':').unwrap(),
        vec![f.panel]
    );
    assert_eq!(
        resolve_expression(&f.tree, f.deep_input, "@all", ':').unwrap(),
        vec![root]
    );
    assert_eq!(
        resolve_expression(&f.tree, f.deep_input, "@namingcontainer", ':').unwrap(),
        vec![f.form1]
    );
    assert_eq!(
        resolve_expression(&f.tree, f.input1, "@next", ':').unwrap(),
        vec![f.input2]
    );
    assert_eq!(
        resolve_expression(&f.tree, f.panel, "@previous", ':').unwrap(),
        vec![f.input2]
    );
    assert_eq!(
        resolve_expression(&f.tree, f.form1, "@child(0)", ':').unwrap(),
        vec![f.input1]
    );
}

#[test]
fn test_none_yields_empty_without_error() {
    let f = fixture();
    let result = resolve_expression(&f.tree, f.input1, "@none", ':').unwrap();
    assert!(result.is_empty(), "@none is the only successful empty outcome");
}

#[test]
fn test_none_short_circuits_rest_of_chain() {
    let f = fixture();
    let result = resolve_expression(&f.tree, f.input1, "@none:definitely-missing*", ':')
        .expect("Segments after @none must not be evaluated");
    assert!(result.is_empty());
}

#[test]
fn test_none_alongside_other_expressions() {
    let f = fixture();
    let root = f.tree.root();
    let result = resolve_expression(&f.tree, root, "input1 @none", ':').unwrap();
    assert_eq!(result, vec![f.input1]);
}

#[test]
fn test_empty_expression_rejected() {
    let f = fixture();
    for raw in ["", "   ", " , ", ",,"] {
        let err = resolve_expression(&f.tree, f.input1, raw, ':')
            .expect_err("Blank expressions should be rejected");
        assert!(
            matches!(err, Error::InvalidExpression { .. }),
            "Expected InvalidExpression for '{}', got {:?}",
            raw,
            err
        );
    }
}

#[test]
fn test_empty_segment_rejected() {
    let f = fixture();
    let err = resolve_expression(&f.tree, f.input1, "form1::input1", ':')
        .expect_err("Empty segments should be rejected");
    match err {
        Error::InvalidExpression { expression, .. } => {
            assert_eq!(expression, "form1::input1");
        }
        other => panic!("Expected InvalidExpression, got {:?}", other),
    }
}

#[test]
fn test_unknown_keyword_rejected() {
    let f = fixture();
    let err = resolve_expression(&f.tree, f.input1, "@form:@sideways", ':')
        .expect_err("Unknown keywords should be rejected");
    match err {
        Error::UnknownKeyword { keyword, expression } => {
            assert_eq!(keyword, "@sideways");
            assert_eq!(expression, "@form:@sideways");
        }
        other => panic!("Expected UnknownKeyword, got {:?}", other),
    }
}

#[test]
fn test_errors_cite_the_full_original_text() {
    let f = fixture();
    let root = f.tree.root();
    let err = resolve_expression(&f.tree, root, "input1 nosuch*", ':')
        .expect_err("The second expression cannot match");
    match err {
        Error::NoMatch { pattern, expression } => {
            assert_eq!(pattern, "nosuch*");
            assert_eq!(
                expression, "input1 nosuch*",
                "Diagnostics should carry what the caller wrote, not the failing segment"
            );
        }
        other => panic!("Expected NoMatch, got {:?}", other),
    }
}

#[test]
fn test_form_keyword_outside_form_fails() {
    let f = fixture();
    let err = resolve_expression(&f.tree, f.toolbar, "@form", ':')
        .expect_err("The toolbar sits outside every form");
    assert!(matches!(err, Error::Unresolvable { .. }));
}

#[test]
fn test_custom_separator() {
    let f = fixture();
    let result = resolve_expression(&f.tree, f.input1, "panel/deepInput", '/').unwrap();
    assert_eq!(result, vec![f.deep_input]);

    let absolute = resolve_expression(&f.tree, f.deep_input, "/toolbar", '/').unwrap();
    assert_eq!(absolute, vec![f.toolbar]);

    let with_colon = resolve_expression(&f.tree, f.input1, "panel:deepInput", '/');
    assert!(
        with_colon.is_err(),
        "With '/' configured, ':' is no separator and the whole text is one id"
    );
}
