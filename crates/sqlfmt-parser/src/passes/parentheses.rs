//! Step 2: on encountering a left paren, scan forward to the matching
//! right paren (respecting nesting) and wrap the range in a
//! `Parenthesis`. When no matching right paren exists, the rewrite fails
//! open and leaves the left paren as a bare item -- a known partial-input
//! tolerance, preserved deliberately rather than treated as an error.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;
use sqlfmt_common::token::TokenKind;

use crate::driver::parse_prefix_group;

fn is_left_paren(node: &Node, _dialect: &dyn Dialect) -> bool {
    matches!(node.as_item(), Some(t) if t.kind == TokenKind::LeftParen)
}

fn fuse(old: &[Node], start: usize, _dialect: &dyn Dialect) -> (Node, usize) {
    let mut depth = 1;
    let mut idx = start + 1;
    while idx < old.len() {
        if let Some(token) = old[idx].as_item() {
            match token.kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    depth -= 1;
                    if depth == 0 {
                        let children = old[start..=idx].to_vec();
                        return (Node::Parenthesis(ListNode::new(children)), idx + 1);
                    }
                }
                _ => {}
            }
        }
        idx += 1;
    }
    (old[start].clone(), start + 1)
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    if let Some(children) = query.children_mut() {
        parse_prefix_group(children, &is_left_paren, dialect, &fuse);
    }
}
