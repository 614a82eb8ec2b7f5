//! Step 12: where the peeked next token is the keyword `AS`, consume
//! `left, AS, identifier` into `Aliased` with `is_as()` true.

use sqlfmt_ast::{ListNode, Node, NodeKind};
use sqlfmt_common::dialect::Dialect;

use crate::driver::parse_infix_group;

fn is_as_keyword(node: &Node, _dialect: &dyn Dialect) -> bool {
    matches!(node.as_item(), Some(t) if t.is_ident() && t.text.eq_ignore_ascii_case("AS"))
}

fn fuse(old: &[Node], start: usize, _dialect: &dyn Dialect) -> (Node, usize) {
    let mut idx = start + 1;
    while idx < old.len() && old[idx].is_whitespace() {
        idx += 1;
    }
    let as_idx = idx;
    idx += 1;
    let mut alias_idx = idx;
    while alias_idx < old.len() && old[alias_idx].is_whitespace() {
        alias_idx += 1;
    }
    if alias_idx < old.len() && matches!(old[alias_idx].kind(), NodeKind::Identifer) {
        let children = old[start..=alias_idx].to_vec();
        (Node::Aliased(ListNode::new(children)), alias_idx + 1)
    } else {
        // Malformed `AS` with nothing usable after it: leave the left
        // side untouched and do not consume the `AS` token itself.
        let _ = as_idx;
        (old[start].clone(), start + 1)
    }
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    if let Some(children) = query.children_mut() {
        parse_infix_group(children, &is_as_keyword, true, dialect, &fuse);
    }
}
