//! Tests for the arena tree: allocation, attachment, accessors, declarations.

use wombat_dom::{DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData {
        tag_name: tag.to_string(),
        attrs: Default::default(),
    }))
}

/// Helper to create a text node and return its NodeId.
fn alloc_text(tree: &mut DomTree, text: &str) -> NodeId {
    tree.alloc(NodeType::Text(text.to_string()))
}

// ========== construction ==========

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();

    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert_eq!(tree.root(), NodeId::ROOT);
    assert!(matches!(
        tree.get(NodeId::ROOT).map(|n| &n.node_type),
        Some(NodeType::Document(_))
    ));
    assert_eq!(tree.parent(NodeId::ROOT), None);
    assert!(tree.declarations().is_empty());
}

#[test]
fn test_append_child_sets_both_directions() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");

    assert_eq!(tree.parent(div), None);

    tree.append_child(NodeId::ROOT, div);

    assert_eq!(tree.parent(div), Some(NodeId::ROOT));
    assert_eq!(tree.children(NodeId::ROOT), &[div]);
}

#[test]
fn test_children_keep_insertion_order() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);
    tree.append_child(NodeId::ROOT, c);

    assert_eq!(tree.children(NodeId::ROOT), &[a, b, c]);
}

// ========== navigation ==========

#[test]
fn test_ancestors_walk_parent_to_root() {
    let mut tree = DomTree::new();
    let outer = alloc_element(&mut tree, "outer");
    let inner = alloc_element(&mut tree, "inner");
    let text = alloc_text(&mut tree, "x");
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, inner);
    tree.append_child(inner, text);

    let chain: Vec<NodeId> = tree.ancestors(text).collect();
    assert_eq!(chain, vec![inner, outer, NodeId::ROOT]);

    // The root has no ancestors.
    assert_eq!(tree.ancestors(NodeId::ROOT).count(), 0);
}

#[test]
fn test_is_descendant_of() {
    let mut tree = DomTree::new();
    let outer = alloc_element(&mut tree, "outer");
    let inner = alloc_element(&mut tree, "inner");
    let sibling = alloc_element(&mut tree, "sibling");
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, inner);
    tree.append_child(NodeId::ROOT, sibling);

    assert!(tree.is_descendant_of(inner, outer));
    assert!(tree.is_descendant_of(inner, NodeId::ROOT));
    assert!(!tree.is_descendant_of(inner, sibling));
    // A node is not its own descendant.
    assert!(!tree.is_descendant_of(outer, outer));
}

#[test]
fn test_document_element_is_first_element_child() {
    let mut tree = DomTree::new();
    assert_eq!(tree.document_element(), None);

    let text = alloc_text(&mut tree, "stray");
    tree.append_child(NodeId::ROOT, text);
    assert_eq!(tree.document_element(), None);

    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);
    assert_eq!(tree.document_element(), Some(html));
}

// ========== variant accessors ==========

#[test]
fn test_as_element_and_as_text() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");
    let text = alloc_text(&mut tree, "hello");
    tree.append_child(NodeId::ROOT, div);
    tree.append_child(div, text);

    assert_eq!(tree.as_element(div).map(|e| e.tag_name.as_str()), Some("div"));
    assert!(tree.as_element(text).is_none());
    assert!(tree.as_element(NodeId::ROOT).is_none());

    assert_eq!(tree.as_text(text), Some("hello"));
    assert_eq!(tree.as_text(div), None);
}

#[test]
fn test_element_id_and_classes() {
    let mut tree = DomTree::new();
    let div = tree.alloc(NodeType::Element(ElementData {
        tag_name: "div".to_string(),
        attrs: [
            ("id".to_string(), "main".to_string()),
            ("class".to_string(), "nav active".to_string()),
        ]
        .into(),
    }));
    tree.append_child(NodeId::ROOT, div);

    let element = tree.as_element(div).unwrap();
    assert_eq!(element.id(), Some(&"main".to_string()));

    let classes = element.classes();
    assert!(classes.contains("nav"));
    assert!(classes.contains("active"));
    assert!(!classes.contains("nav active"));

    let plain = ElementData {
        tag_name: "p".to_string(),
        attrs: Default::default(),
    };
    assert_eq!(plain.id(), None);
    assert!(plain.classes().is_empty());
}

// ========== declarations ==========

#[test]
fn test_declarations_append_in_order() {
    let mut tree = DomTree::new();
    tree.append_declaration("DOCTYPE html".to_string());
    tree.append_declaration("ENTITY x".to_string());

    assert_eq!(tree.declarations(), &["DOCTYPE html", "ENTITY x"]);
    // Declarations are document metadata, not child nodes.
    assert!(tree.children(NodeId::ROOT).is_empty());
    assert_eq!(tree.len(), 1);
}

// ========== stale ids ==========

#[test]
fn test_unresolvable_id_degrades_to_none() {
    let tree = DomTree::new();
    let stale = NodeId(999);

    assert!(tree.get(stale).is_none());
    assert_eq!(tree.parent(stale), None);
    assert!(tree.children(stale).is_empty());
    assert!(tree.as_element(stale).is_none());
    assert_eq!(tree.as_text(stale), None);
    assert_eq!(tree.ancestors(stale).count(), 0);
}
