//! Permissive event-driven tree construction for the Wombat markup library.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tree Builder** - folds a stream of tokenizer events (start tag, end
//!   tag, character data, entity reference, character reference, declaration)
//!   into a [`wombat_dom::DomTree`], recovering structurally from malformed
//!   input: unmatched end tags are dropped, a mismatched end tag closes every
//!   tag between the cursor and its match, and consecutive character data is
//!   coalesced into one Text node
//! - **Entity/Char-Ref Resolver** - the HTML 4.01 named reference table plus
//!   numeric reference parsing, falling back to the literal reference text
//!   when resolution fails
//! - **Diagnostic dump** - a depth-guarded renderer for finished trees
//!
//! Tokenizing raw markup into events is an external collaborator's job; see
//! [`events::Event`] for the input contract.

/// Tree construction from tokenizer events.
pub mod builder;
/// Entity and character reference resolution.
pub mod entities;
/// Event types consumed by the tree builder.
pub mod events;

pub use builder::{
    IssueKind, MAX_DUMP_DEPTH, ParseIssue, TreeBuilder, build_tree, print_tree, write_tree,
};
pub use entities::{lookup_entity, parse_char_ref, resolve_char_ref, resolve_named_entity};
pub use events::{Attribute, Event};
