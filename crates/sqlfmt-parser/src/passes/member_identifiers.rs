//! Step 7: when a period appears, fuse `parent . child` into a
//! `MemberIdentifer`. A missing parent (leading period) or missing child
//! (trailing period) produces a partial node, by design -- this pass
//! pulls the preceding sibling back out of the rebuilt sequence rather
//! than peeking ahead, since member access has no whitespace between its
//! parts and the period itself is the trigger, not a lookahead target.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;
use sqlfmt_common::token::TokenKind;

use crate::operand::is_operand_like;

fn is_period(node: &Node) -> bool {
    matches!(node.as_item(), Some(t) if t.kind == TokenKind::Period)
}

fn pop_parent(new_children: &mut Vec<Node>) -> Option<Node> {
    match new_children.last() {
        Some(n) if is_operand_like(n) => new_children.pop(),
        _ => None,
    }
}

fn apply(children: &mut Vec<Node>, dialect: &dyn Dialect) {
    let old = std::mem::take(children);
    let mut new_children: Vec<Node> = Vec::with_capacity(old.len());
    let mut i = 0;
    while i < old.len() {
        if is_period(&old[i]) {
            let mut member_children = Vec::new();
            if let Some(parent) = pop_parent(&mut new_children) {
                member_children.push(parent);
            }
            member_children.push(old[i].clone());
            let mut idx = i + 1;
            if idx < old.len() && is_operand_like(&old[idx]) {
                member_children.push(old[idx].clone());
                idx += 1;
            }
            new_children.push(Node::MemberIdentifer(ListNode::new(member_children)));
            i = idx;
        } else {
            let mut cur = old[i].clone();
            if let Some(grandchildren) = cur.children_mut() {
                apply(grandchildren, dialect);
            }
            new_children.push(cur);
            i += 1;
        }
    }
    *children = new_children;
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    if let Some(children) = query.children_mut() {
        apply(children, dialect);
    }
}
