//! Breadth-first traversal over the document tree.
//!
//! [`DomTree::traverse`] hands out a [`Traversal`]: a lazy, one-shot iterator
//! that walks the closed subtrees of a root list level by level. It is the
//! read side of the library; nothing here mutates the tree, so any number of
//! traversals can run over the same finished tree concurrently.

use std::collections::VecDeque;

use crate::{DomTree, NodeId, NodeType};

impl DomTree {
    /// Walk the tree starting from `roots`.
    ///
    /// With `direct_only` false this is a breadth-first walk: the roots
    /// themselves are level 0 and are yielded first, in the given order, then
    /// their children left-to-right, then the grandchildren, and so on until
    /// the queue drains. Document and Element nodes contribute their children
    /// to the next level; Text nodes are leaves and contribute nothing.
    ///
    /// With `direct_only` true only the immediate children of the nodes in
    /// `roots` are yielded (in order, for Document/Element roots). The roots
    /// are not yielded and the walk does not descend any further, not even
    /// into children that are elements: callers get exactly one level below
    /// the list they passed in, nothing below nodes found along the way.
    ///
    /// The iterator is one-shot; call `traverse` again to restart.
    pub fn traverse(&self, roots: &[NodeId], direct_only: bool) -> Traversal<'_> {
        let mut queue = VecDeque::new();
        if direct_only {
            for &root in roots {
                if let Some(node) = self.get(root) {
                    match &node.node_type {
                        NodeType::Document(_) | NodeType::Element(_) => {
                            queue.extend(node.children.iter().copied());
                        }
                        NodeType::Text(_) => {}
                    }
                }
            }
        } else {
            queue.extend(roots.iter().copied());
        }
        Traversal {
            tree: self,
            queue,
            expand: !direct_only,
        }
    }
}

/// A lazy breadth-first walk over one or more subtrees.
///
/// Produced by [`DomTree::traverse`]. Yields each reachable node exactly
/// once, level order, left-to-right within a level.
pub struct Traversal<'a> {
    tree: &'a DomTree,
    queue: VecDeque<NodeId>,
    expand: bool,
}

impl Iterator for Traversal<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        if self.expand
            && let Some(node) = self.tree.get(id)
        {
            match &node.node_type {
                NodeType::Document(_) | NodeType::Element(_) => {
                    self.queue.extend(node.children.iter().copied());
                }
                NodeType::Text(_) => {}
            }
        }
        Some(id)
    }
}
