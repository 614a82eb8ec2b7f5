//! Generic rewrite drivers shared by every pass: `parse_prefix_group` and
//! `parse_infix_group`. Each pass supplies a match predicate and a fuse
//! function; the driver handles walking the list, recursing into
//! unmatched nested lists, and rebuilding the child sequence.

use sqlfmt_ast::Node;
use sqlfmt_common::dialect::Dialect;

/// `(old_children, start_index, dialect) -> (fused_node, next_index)`.
/// `next_index` must be greater than `start_index`; the driver resumes
/// scanning from there.
pub type FuseFn<'a> = dyn Fn(&[Node], usize, &dyn Dialect) -> (Node, usize) + 'a;
pub type MatchFn<'a> = dyn Fn(&Node, &dyn Dialect) -> bool + 'a;

/// For each child: if `is_match` accepts it, replace it with
/// `fuse(old, index, dialect)`; else if it is itself a list, recurse into
/// its own children with the same pass; else keep it unchanged.
pub fn parse_prefix_group(children: &mut Vec<Node>, is_match: &MatchFn, dialect: &dyn Dialect, fuse: &FuseFn) {
    let old = std::mem::take(children);
    let mut new_children = Vec::with_capacity(old.len());
    let mut i = 0;
    while i < old.len() {
        if is_match(&old[i], dialect) {
            let (fused, next_i) = fuse(&old, i, dialect);
            new_children.push(fused);
            i = next_i.max(i + 1);
        } else {
            let mut cur = old[i].clone();
            if let Some(grandchildren) = cur.children_mut() {
                parse_prefix_group(grandchildren, is_match, dialect, fuse);
            }
            new_children.push(cur);
            i += 1;
        }
    }
    *children = new_children;
}

/// Identical walk, but the trigger is whether the *next* significant
/// child (after the one at the current index) matches `is_match` — so
/// `fuse` can consume `left, operator, right`.
pub fn parse_infix_group(
    children: &mut Vec<Node>,
    is_match: &MatchFn,
    ignore_whitespace: bool,
    dialect: &dyn Dialect,
    fuse: &FuseFn,
) {
    let old = std::mem::take(children);
    let mut new_children = Vec::with_capacity(old.len());
    let mut i = 0;
    while i < old.len() {
        let mut cur = old[i].clone();
        if let Some(grandchildren) = cur.children_mut() {
            parse_infix_group(grandchildren, is_match, ignore_whitespace, dialect, fuse);
        }

        let mut j = i + 1;
        if ignore_whitespace {
            while j < old.len() && old[j].is_whitespace() {
                j += 1;
            }
        }

        if j < old.len() && is_match(&old[j], dialect) {
            let (fused, next_i) = fuse(&old, i, dialect);
            new_children.push(fused);
            i = next_i.max(i + 1);
        } else {
            new_children.push(cur);
            i += 1;
        }
    }
    *children = new_children;
}
