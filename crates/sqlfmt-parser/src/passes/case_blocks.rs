//! Step 5: when a `CASE` keyword appears, scan forward at the same
//! nesting level to the matching `END` and wrap as `SwitchCase`. Nested
//! `CASE`/`END` pairs are tracked with a depth counter so inner case
//! expressions don't terminate the outer one early. Missing a matching
//! `END` produces a partial `SwitchCase` spanning to the tail of the
//! list, consistent with the rest of the pipeline's tolerance for
//! unterminated constructs.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;

use crate::driver::parse_prefix_group;

fn is_case(node: &Node, _dialect: &dyn Dialect) -> bool {
    matches!(node.as_item(), Some(t) if t.is_ident() && t.text.eq_ignore_ascii_case("CASE"))
}

fn fuse(old: &[Node], start: usize, _dialect: &dyn Dialect) -> (Node, usize) {
    let mut depth = 1;
    let mut idx = start + 1;
    while idx < old.len() {
        if let Some(t) = old[idx].as_item() {
            if t.is_ident() && t.text.eq_ignore_ascii_case("CASE") {
                depth += 1;
            } else if t.is_ident() && t.text.eq_ignore_ascii_case("END") {
                depth -= 1;
                if depth == 0 {
                    let children = old[start..=idx].to_vec();
                    return (Node::SwitchCase(ListNode::new(children)), idx + 1);
                }
            }
        }
        idx += 1;
    }
    let children = old[start..].to_vec();
    (Node::SwitchCase(ListNode::new(children)), old.len())
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    if let Some(children) = query.children_mut() {
        parse_prefix_group(children, &is_case, dialect, &fuse);
    }
}
