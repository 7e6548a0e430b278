//! Tree construction from tokenizer events.

/// Tree builder state machine and diagnostic dump.
pub mod core;

pub use self::core::{
    IssueKind, MAX_DUMP_DEPTH, ParseIssue, TreeBuilder, build_tree, print_tree, write_tree,
};
