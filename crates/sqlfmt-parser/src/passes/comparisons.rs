//! Step 10 (and the inner-parenthesis half of step 6): structure
//! comparison expressions into `Comparison { left, comparator, right }`.
//! Comparators are `= <> < > <= >=` and the keyword `IS`; targets
//! additionally accept `TRUE`/`FALSE`.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;

use crate::driver::parse_infix_group;
use crate::operand::is_comparison_operand;

fn is_comparator(node: &Node, _dialect: &dyn Dialect) -> bool {
    match node.as_item() {
        Some(t) if t.kind.is_comparison() => true,
        Some(t) if t.is_ident() && t.text.eq_ignore_ascii_case("IS") => true,
        _ => false,
    }
}

/// Consumes the whole chain of same-category comparisons in one call (like
/// `identifier_list::fuse` and `multi_keyword::fuse` already do), folding
/// left-associatively: `a = b = c` becomes `Comparison{Comparison{a, =, b},
/// =, c}`, not a single flat 5-child list. Stopping at the first `op,
/// right` pair that fails to complete (no right operand) avoids ever
/// resuming the outer driver loop on a bare whitespace/operator left
/// behind mid-chain.
fn fuse(old: &[Node], start: usize, dialect: &dyn Dialect) -> (Node, usize) {
    let mut node = old[start].clone();
    let mut idx = start + 1;
    loop {
        let mut op_idx = idx;
        while op_idx < old.len() && old[op_idx].is_whitespace() {
            op_idx += 1;
        }
        if op_idx >= old.len() || !is_comparator(&old[op_idx], dialect) {
            break;
        }
        let mut right_idx = op_idx + 1;
        while right_idx < old.len() && old[right_idx].is_whitespace() {
            right_idx += 1;
        }
        if right_idx < old.len() && is_comparison_operand(&old[right_idx]) {
            let mut children = vec![node];
            children.extend(old[idx..=right_idx].iter().cloned());
            node = Node::Comparison(ListNode::new(children));
            idx = right_idx + 1;
        } else {
            let mut end = op_idx + 1;
            while end < old.len() && old[end].is_whitespace() {
                end += 1;
            }
            let mut children = vec![node];
            children.extend(old[idx..end].iter().cloned());
            node = Node::Comparison(ListNode::new(children));
            idx = end;
            break;
        }
    }
    (node, idx)
}

pub fn apply(children: &mut Vec<Node>, dialect: &dyn Dialect) {
    parse_infix_group(children, &is_comparator, true, dialect, &fuse);
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    if let Some(children) = query.children_mut() {
        apply(children, dialect);
    }
}
