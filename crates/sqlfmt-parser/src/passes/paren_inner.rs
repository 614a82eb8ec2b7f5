//! Step 6: apply the operator and comparison infix passes to each
//! `Parenthesis`'s inner children (excluding the delimiters themselves)
//! before the top-level operator/comparison passes run. This must happen
//! in this order and at this point in the pipeline: the top-level passes
//! descend into parens via the generic prefix/infix recursion, but they
//! never treat a paren's inner list as a standalone operator/comparison
//! context on their own.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;

use crate::passes::{comparisons, operators};

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    walk(query, dialect);
}

fn walk(node: &mut Node, dialect: &dyn Dialect) {
    if let Node::Parenthesis(list) = node {
        apply_inner(list, dialect);
    }
    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            walk(child, dialect);
        }
    }
}

fn apply_inner(list: &mut ListNode, dialect: &dyn Dialect) {
    let end = if list.is_balanced() {
        list.children.len().saturating_sub(1)
    } else {
        list.children.len()
    };
    let start = end.min(1);
    let mut inner: Vec<Node> = list.children.drain(start..end).collect();
    operators::apply(&mut inner, dialect);
    comparisons::apply(&mut inner, dialect);
    for (offset, node) in inner.into_iter().enumerate() {
        list.children.insert(start + offset, node);
    }
}
