//! Tests for breadth-first traversal: visit order, direct-children mode,
//! one-shot laziness, concurrent readers.

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

/// Document -> a -> (b, c). Returns (tree, a, b, c).
fn small_fixture() -> (DomTree, NodeId, NodeId, NodeId) {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(a, b);
    tree.append_child(a, c);
    (tree, a, b, c)
}

// ========== breadth-first mode ==========

#[test]
fn test_bfs_yields_root_then_levels() {
    let (tree, a, b, c) = small_fixture();

    let visited: Vec<NodeId> = tree.traverse(&[NodeId::ROOT], false).collect();
    assert_eq!(visited, vec![NodeId::ROOT, a, b, c]);
}

#[test]
fn test_bfs_is_level_order_left_to_right() {
    // Document -> a -> (b -> d, c -> e): depth-first would visit d before c.
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    let d = alloc_element(&mut tree, "d");
    let e = alloc_element(&mut tree, "e");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(a, b);
    tree.append_child(a, c);
    tree.append_child(b, d);
    tree.append_child(c, e);

    let visited: Vec<NodeId> = tree.traverse(&[NodeId::ROOT], false).collect();
    assert_eq!(visited, vec![NodeId::ROOT, a, b, c, d, e]);
}

#[test]
fn test_bfs_includes_text_nodes_as_leaves() {
    let mut tree = DomTree::new();
    let p = alloc_element(&mut tree, "p");
    let text = alloc_text(&mut tree, "hello");
    tree.append_child(NodeId::ROOT, p);
    tree.append_child(p, text);

    let visited: Vec<NodeId> = tree.traverse(&[NodeId::ROOT], false).collect();
    assert_eq!(visited, vec![NodeId::ROOT, p, text]);
}

#[test]
fn test_bfs_multiple_roots_interleave_by_level() {
    let (tree, a, b, c) = small_fixture();

    // Both subtree roots are level 0, their children come after both.
    let visited: Vec<NodeId> = tree.traverse(&[b, a], false).collect();
    assert_eq!(visited, vec![b, a, b, c]);

    // A node passed twice is visited twice; the walk is over the closed
    // subtrees of whatever list the caller supplies.
    let twice: Vec<NodeId> = tree.traverse(&[b, b], false).collect();
    assert_eq!(twice, vec![b, b]);
}

#[test]
fn test_traverse_empty_roots_yields_nothing() {
    let (tree, _, _, _) = small_fixture();
    assert_eq!(tree.traverse(&[], false).count(), 0);
    assert_eq!(tree.traverse(&[], true).count(), 0);
}

#[test]
fn test_traverse_is_restartable_by_calling_again() {
    let (tree, a, b, c) = small_fixture();

    let first: Vec<NodeId> = tree.traverse(&[NodeId::ROOT], false).collect();
    let second: Vec<NodeId> = tree.traverse(&[NodeId::ROOT], false).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![NodeId::ROOT, a, b, c]);
}

// ========== direct-children mode ==========

#[test]
fn test_direct_only_yields_children_of_initial_roots() {
    let (tree, a, _, _) = small_fixture();

    // Only the document's direct child a; not a's children, and not the
    // document itself.
    let visited: Vec<NodeId> = tree.traverse(&[NodeId::ROOT], true).collect();
    assert_eq!(visited, vec![a]);
}

#[test]
fn test_direct_only_does_not_descend_into_found_elements() {
    let (tree, a, b, c) = small_fixture();

    let visited: Vec<NodeId> = tree.traverse(&[a], true).collect();
    assert_eq!(visited, vec![b, c]);

    // b and c have no children, so a deeper list stops immediately.
    assert_eq!(tree.traverse(&[b, c], true).count(), 0);
}

#[test]
fn test_direct_only_multiple_roots_in_order() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let a1 = alloc_element(&mut tree, "a1");
    let b1 = alloc_element(&mut tree, "b1");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);
    tree.append_child(a, a1);
    tree.append_child(b, b1);

    let visited: Vec<NodeId> = tree.traverse(&[b, a], true).collect();
    assert_eq!(visited, vec![b1, a1]);
}

#[test]
fn test_direct_only_yields_text_children_but_not_text_roots() {
    let mut tree = DomTree::new();
    let p = alloc_element(&mut tree, "p");
    let text = alloc_text(&mut tree, "hello");
    tree.append_child(NodeId::ROOT, p);
    tree.append_child(p, text);

    // A text child of a root is yielded like any other child.
    let visited: Vec<NodeId> = tree.traverse(&[p], true).collect();
    assert_eq!(visited, vec![text]);

    // A text node used as a root has no children to offer.
    assert_eq!(tree.traverse(&[text], true).count(), 0);
}

// ========== read-only sharing ==========

#[test]
fn test_concurrent_readers_see_the_same_order() {
    let (tree, a, b, c) = small_fixture();
    let expected = vec![NodeId::ROOT, a, b, c];

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| tree.traverse(&[NodeId::ROOT], false).collect::<Vec<NodeId>>())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
