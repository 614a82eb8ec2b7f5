//! The tree data model, `NodeReader` cursor, and `Matcher` predicates
//! shared by the parser and formatter stages.

pub mod matcher;
pub mod node;
pub mod reader;

pub use matcher::Matcher;
pub use node::{
    AliasedView, BinaryView, FunctionView, ListNode, MemberView, Node, NodeKind,
};
pub use reader::NodeReader;
