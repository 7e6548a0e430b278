//! The tree-construction state machine.
//!
//! [`TreeBuilder`] folds a flat stream of tokenizer events into a document
//! tree. The whole state is the tree plus one cursor, the "current node",
//! which starts at the Document root. There is no stack of open elements:
//! the open tags *are* the cursor's ancestor chain, and every decision walks
//! that chain through the parent links.
//!
//! The machine is deliberately permissive. Nothing it consumes can make it
//! fail: a stray end tag is dropped, an end tag matching a non-innermost
//! ancestor closes every tag between, and a reference that resolves to
//! nothing becomes its own literal text. Callers that need strict validation
//! must add a separate pass; this one always produces a tree.

use std::fmt;

use strum_macros::Display;
use wombat_common::warning::warn_once;
use wombat_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::entities::{lookup_entity, parse_char_ref, resolve_char_ref, resolve_named_entity};
use crate::events::{Attribute, Event};

/// Classification of a recovered anomaly in the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IssueKind {
    /// An end tag with no matching element on the cursor's ancestor chain.
    StrayEndTag,
    /// A named entity reference that is not in the reference table.
    UnknownEntity,
    /// A numeric character reference that does not parse or names a
    /// codepoint `char` cannot represent.
    InvalidCharRef,
}

/// A recovered anomaly observed while consuming the event stream.
///
/// Issues are observability only: recording one never changes what the
/// builder constructs.
#[derive(Debug, Clone)]
pub struct ParseIssue {
    /// What kind of anomaly was recovered.
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
    /// 0-based ordinal of the offending event in the consumed stream.
    pub event_index: usize,
}

/// The tree-construction state machine.
///
/// Feed events with [`process`](TreeBuilder::process), then take the finished
/// tree with [`finish`](TreeBuilder::finish):
///
/// ```ignore
/// let mut builder = TreeBuilder::new();
/// builder.process(Event::start_tag("p", &[]));
/// builder.process(Event::data("hello"));
/// builder.process(Event::end_tag("p"));
/// let tree = builder.finish();
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    /// The tree under construction.
    tree: DomTree,
    /// The current insertion point.
    cursor: NodeId,
    /// Recovered anomalies, in order of detection.
    issues: Vec<ParseIssue>,
    /// Number of events consumed so far.
    events_seen: usize,
}

impl TreeBuilder {
    /// Create a builder holding an empty document, cursor on its root.
    #[must_use]
    pub fn new() -> Self {
        TreeBuilder {
            tree: DomTree::new(),
            cursor: NodeId::ROOT,
            issues: Vec::new(),
            events_seen: 0,
        }
    }

    /// Consume one event and apply its transition.
    pub fn process(&mut self, event: Event) {
        log::trace!(target: "wombat.tree_builder", "process event: {event:?}");
        match event {
            Event::StartTag { name, attributes } => self.insert_element(name, attributes),
            Event::EndTag { name } => self.close_element(&name),
            Event::Data { text } => self.insert_text(text),
            Event::EntityRef { name } => {
                if lookup_entity(&name).is_none() {
                    self.record_issue(
                        IssueKind::UnknownEntity,
                        format!("unknown entity reference &{name};"),
                    );
                }
                self.insert_text(resolve_named_entity(&name));
            }
            Event::CharRef { raw } => {
                if parse_char_ref(&raw).is_none() {
                    self.record_issue(
                        IssueKind::InvalidCharRef,
                        format!("invalid character reference &#{raw};"),
                    );
                }
                self.insert_text(resolve_char_ref(&raw));
            }
            Event::Decl { text } => self.tree.append_declaration(text),
        }
        self.events_seen += 1;
    }

    /// The tree as built so far.
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The current insertion point.
    #[must_use]
    pub const fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Recovered anomalies observed so far, in order of detection.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Consume the builder and return the finished tree.
    #[must_use]
    pub fn finish(self) -> DomTree {
        self.tree
    }

    /// Create a new element under the insertion parent and move the cursor
    /// onto it.
    fn insert_element(&mut self, name: String, attributes: Vec<Attribute>) {
        let parent = self.insertion_parent();
        let element = self.tree.alloc(NodeType::Element(ElementData {
            tag_name: name,
            attrs: Self::attributes_to_map(attributes),
        }));
        self.tree.append_child(parent, element);
        self.cursor = element;
    }

    /// Convert event attributes to the `AttributesMap` used by
    /// `ElementData`. Collecting the pairs in source order means a
    /// duplicated name keeps its last value.
    fn attributes_to_map(attributes: Vec<Attribute>) -> AttributesMap {
        attributes
            .into_iter()
            .map(|attr| (attr.name, attr.value))
            .collect()
    }

    /// Close the nearest open element named `name`.
    ///
    /// Moving the cursor to the matched element's parent implicitly closes
    /// every unclosed tag between the cursor and the match. Without a match
    /// the event is a no-op for the tree and cursor; it is only recorded.
    fn close_element(&mut self, name: &str) {
        let Some(matched) = self.find_open_element(name) else {
            self.record_issue(
                IssueKind::StrayEndTag,
                format!("ignoring stray end tag </{name}>"),
            );
            return;
        };
        self.cursor = self.tree.parent(matched).unwrap_or(NodeId::ROOT);
    }

    /// Walk the ancestor-or-self chain from the cursor looking for the first
    /// element named `name`. The search stops at (and excludes) the Document
    /// root.
    fn find_open_element(&self, name: &str) -> Option<NodeId> {
        let mut candidate = Some(self.cursor);
        while let Some(id) = candidate {
            match self.tree.get(id).map(|node| &node.node_type) {
                Some(NodeType::Element(data)) if data.tag_name == name => return Some(id),
                Some(NodeType::Document(_)) | None => return None,
                Some(NodeType::Element(_) | NodeType::Text(_)) => {
                    candidate = self.tree.parent(id);
                }
            }
        }
        None
    }

    /// Insert character data at the cursor.
    ///
    /// A Text cursor absorbs the new data into its buffer, so consecutive
    /// data events produce one coalesced Text node rather than siblings.
    /// Otherwise a fresh Text node goes under the insertion parent and
    /// becomes the cursor.
    fn insert_text(&mut self, text: String) {
        if let Some(node) = self.tree.get_mut(self.cursor)
            && let NodeType::Text(buffer) = &mut node.node_type
        {
            buffer.push_str(&text);
            return;
        }
        let parent = self.insertion_parent();
        let text_node = self.tree.alloc(NodeType::Text(text));
        self.tree.append_child(parent, text_node);
        self.cursor = text_node;
    }

    /// The nearest ancestor-or-self of the cursor that can take children.
    ///
    /// Text nodes are leaves by construction; a Text cursor defers to its
    /// parent.
    fn insertion_parent(&self) -> NodeId {
        let mut id = self.cursor;
        loop {
            match self.tree.get(id).map(|node| &node.node_type) {
                Some(NodeType::Document(_) | NodeType::Element(_)) => return id,
                Some(NodeType::Text(_)) => id = self.tree.parent(id).unwrap_or(NodeId::ROOT),
                None => return NodeId::ROOT,
            }
        }
    }

    /// Record a recovered anomaly and warn (once per unique message).
    fn record_issue(&mut self, kind: IssueKind, message: String) {
        log::trace!(
            target: "wombat.tree_builder",
            "{kind} at event {}: {message}",
            self.events_seen
        );
        warn_once("Tree Builder", &message);
        self.issues.push(ParseIssue {
            kind,
            message,
            event_index: self.events_seen,
        });
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive a fresh [`TreeBuilder`] over `events` and return the finished tree.
#[must_use]
pub fn build_tree<I>(events: I) -> DomTree
where
    I: IntoIterator<Item = Event>,
{
    let mut builder = TreeBuilder::new();
    for event in events {
        builder.process(event);
    }
    builder.finish()
}

/// Maximum nesting level the tree dump will render.
///
/// Nothing in construction or traversal limits depth; only the recursive
/// dump needs a ceiling, because adversarial input can nest arbitrarily
/// deep.
pub const MAX_DUMP_DEPTH: usize = 100;

/// Write a debugging rendition of the subtree at `id`, two-space indented
/// per level, starting at `level`.
///
/// Levels at or past [`MAX_DUMP_DEPTH`] render as a single `Error:` line
/// with the subtree omitted. That line is the library's only visible error
/// signal; it never panics or recurses past the ceiling.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_tree(
    out: &mut dyn fmt::Write,
    tree: &DomTree,
    id: NodeId,
    level: usize,
) -> fmt::Result {
    let indent = "  ".repeat(level);
    if level >= MAX_DUMP_DEPTH {
        return writeln!(
            out,
            "{indent}Error: nesting deeper than {MAX_DUMP_DEPTH} levels, subtree omitted"
        );
    }
    if let Some(node) = tree.get(id) {
        match &node.node_type {
            NodeType::Document(data) => {
                writeln!(out, "{indent}Document")?;
                for decl in &data.declarations {
                    writeln!(out, "{indent}  <!{decl}>")?;
                }
            }
            NodeType::Element(data) => {
                if data.attrs.is_empty() {
                    writeln!(out, "{indent}<{}>", data.tag_name)?;
                } else {
                    let mut attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| {
                            if v.is_empty() {
                                k.clone()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    // HashMap iteration order is arbitrary; keep dumps stable.
                    attrs.sort_unstable();
                    writeln!(out, "{indent}<{} {}>", data.tag_name, attrs.join(" "))?;
                }
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
                writeln!(out, "{indent}\"{display}\"")?;
            }
        }
        for &child_id in tree.children(id) {
            write_tree(out, tree, child_id, level + 1)?;
        }
    }
    Ok(())
}

/// Print a debugging rendition of the subtree at `id` to stdout.
pub fn print_tree(tree: &DomTree, id: NodeId) {
    let mut rendered = String::new();
    let _ = write_tree(&mut rendered, tree, id, 0);
    print!("{rendered}");
}
