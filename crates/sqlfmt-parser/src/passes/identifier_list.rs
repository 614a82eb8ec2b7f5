//! Step 13: where the next token is a comma, consume a
//! `left, comma, next, comma, next, ...` run into `IdentiferList` while
//! each subsequent element matches the list-element shape. A trailing
//! comma terminates the list with a partial tail (the comma is consumed,
//! nothing after it is).

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;
use sqlfmt_common::token::TokenKind;

use crate::driver::parse_infix_group;
use crate::operand::is_list_element;

fn is_comma(node: &Node, _dialect: &dyn Dialect) -> bool {
    matches!(node.as_item(), Some(t) if t.kind == TokenKind::Comma)
}

fn fuse(old: &[Node], start: usize, dialect: &dyn Dialect) -> (Node, usize) {
    let mut children = vec![old[start].clone()];
    let mut idx = start + 1;
    loop {
        let mut comma_idx = idx;
        while comma_idx < old.len() && old[comma_idx].is_whitespace() {
            comma_idx += 1;
        }
        if comma_idx >= old.len() || !is_comma(&old[comma_idx], dialect) {
            break;
        }
        children.extend(old[idx..=comma_idx].iter().cloned());
        idx = comma_idx + 1;

        let mut elem_idx = idx;
        while elem_idx < old.len() && old[elem_idx].is_whitespace() {
            elem_idx += 1;
        }
        if elem_idx < old.len() && is_list_element(&old[elem_idx]) {
            children.extend(old[idx..=elem_idx].iter().cloned());
            idx = elem_idx + 1;
        } else {
            break;
        }
    }
    (Node::IdentiferList(ListNode::new(children)), idx)
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    if let Some(children) = query.children_mut() {
        parse_infix_group(children, &is_comma, true, dialect, &fuse);
    }
}
