//! Step 1: split the flat top-level token sequence on semicolons into
//! `Statement` nodes. Trailing content with no terminating semicolon
//! becomes a final statement.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::token::TokenKind;

pub fn split(items: Vec<Node>) -> Vec<Node> {
    let mut statements = Vec::new();
    let mut current = Vec::new();
    for item in items {
        let is_semicolon = matches!(item.as_item(), Some(t) if t.kind == TokenKind::Semicolon);
        current.push(item);
        if is_semicolon {
            statements.push(Node::Statement(ListNode::new(std::mem::take(&mut current))));
        }
    }
    if !current.is_empty() {
        statements.push(Node::Statement(ListNode::new(current)));
    }
    statements
}
