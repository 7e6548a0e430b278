//! Name- and attribute-based selection of element nodes.
//!
//! [`DomTree::find_tags`] filters a traversal down to the elements matching a
//! [`TagFilter`]. Document and Text nodes never match. The result preserves
//! traversal order and stays lazy: nodes are examined only as the caller
//! pulls them.

use crate::traverse::Traversal;
use crate::{DomTree, ElementData, NodeId};

impl DomTree {
    /// Select element nodes reachable from `roots` that satisfy `filter`.
    ///
    /// The walk underneath is exactly [`DomTree::traverse`] with the same
    /// `roots` and `direct_only` arguments, so matches come back in
    /// breadth-first order (or, with `direct_only`, in root-children order).
    pub fn find_tags(
        &self,
        roots: &[NodeId],
        filter: TagFilter,
        direct_only: bool,
    ) -> TagMatches<'_> {
        TagMatches {
            tree: self,
            traversal: self.traverse(roots, direct_only),
            filter,
        }
    }
}

/// Criteria for selecting elements, assembled builder-style.
///
/// An empty filter matches every element. Each added constraint must hold for
/// an element to match:
///
/// - [`name`](TagFilter::name): exact tag-name equality;
/// - [`attr`](TagFilter::attr): the attribute is present with exactly the
///   given value;
/// - [`attr_token`](TagFilter::attr_token): the attribute is present and its
///   value, split on single spaces, contains the given token. This is the
///   class-list membership rule: `class="x y"` has the token `x`, while
///   `class="xy"` does not.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    name: Option<String>,
    attrs: Vec<(String, String)>,
    in_attrs: Vec<(String, String)>,
}

impl TagFilter {
    /// A filter with no constraints (matches every element).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact tag name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Require attribute `name` to be present with exactly `value`.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Require attribute `name` to contain `token` among its space-separated
    /// tokens.
    #[must_use]
    pub fn attr_token(mut self, name: &str, token: &str) -> Self {
        self.in_attrs.push((name.to_string(), token.to_string()));
        self
    }

    fn matches(&self, element: &ElementData) -> bool {
        if let Some(name) = &self.name
            && element.tag_name != *name
        {
            return false;
        }
        for (name, value) in &self.attrs {
            if element.attrs.get(name) != Some(value) {
                return false;
            }
        }
        for (name, token) in &self.in_attrs {
            let holds = element
                .attrs
                .get(name)
                .is_some_and(|value| value.split(' ').any(|t| t == token));
            if !holds {
                return false;
            }
        }
        true
    }
}

/// Lazy sequence of element nodes matching a [`TagFilter`].
///
/// Produced by [`DomTree::find_tags`].
pub struct TagMatches<'a> {
    tree: &'a DomTree,
    traversal: Traversal<'a>,
    filter: TagFilter,
}

impl Iterator for TagMatches<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.traversal.next()?;
            if let Some(element) = self.tree.as_element(id)
                && self.filter.matches(element)
            {
                return Some(id);
            }
        }
    }
}
