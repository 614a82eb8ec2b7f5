//! Step 9 (and the inner-parenthesis half of step 6): structure
//! arithmetic expressions into `Operator { left, op, right }`.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;

use crate::driver::parse_infix_group;
use crate::operand::is_operand_like;

fn is_arithmetic_op(node: &Node, _dialect: &dyn Dialect) -> bool {
    matches!(node.as_item(), Some(t) if t.kind.is_arithmetic())
}

/// Consumes the whole chain of same-category operators in one call (like
/// `identifier_list::fuse` and `multi_keyword::fuse` already do), folding
/// left-associatively: `a + b + c` becomes `Operator{Operator{a, +, b}, +,
/// c}`, not a single flat 5-child list. Stopping at the first `op, right`
/// pair that fails to complete (no right operand) avoids ever resuming the
/// outer driver loop on a bare whitespace/operator left behind mid-chain.
fn fuse(old: &[Node], start: usize, dialect: &dyn Dialect) -> (Node, usize) {
    let mut node = old[start].clone();
    let mut idx = start + 1;
    loop {
        let mut op_idx = idx;
        while op_idx < old.len() && old[op_idx].is_whitespace() {
            op_idx += 1;
        }
        if op_idx >= old.len() || !is_arithmetic_op(&old[op_idx], dialect) {
            break;
        }
        let mut right_idx = op_idx + 1;
        while right_idx < old.len() && old[right_idx].is_whitespace() {
            right_idx += 1;
        }
        if right_idx < old.len() && is_operand_like(&old[right_idx]) {
            let mut children = vec![node];
            children.extend(old[idx..=right_idx].iter().cloned());
            node = Node::Operator(ListNode::new(children));
            idx = right_idx + 1;
        } else {
            // No right operand: fold in a partial operator spanning
            // through any trailing whitespace, then stop the chain.
            let mut end = op_idx + 1;
            while end < old.len() && old[end].is_whitespace() {
                end += 1;
            }
            let mut children = vec![node];
            children.extend(old[idx..end].iter().cloned());
            node = Node::Operator(ListNode::new(children));
            idx = end;
            break;
        }
    }
    (node, idx)
}

/// Apply this pass to an arbitrary child sequence -- used both at the
/// top level (via [`run`]) and on a `Parenthesis`'s inner children (step
/// 6, before the top-level operator pass runs).
pub fn apply(children: &mut Vec<Node>, dialect: &dyn Dialect) {
    parse_infix_group(children, &is_arithmetic_op, true, dialect, &fuse);
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    if let Some(children) = query.children_mut() {
        apply(children, dialect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::{identifiers, statements};
    use sqlfmt_common::dialect::AnsiDialect;
    use sqlfmt_common::position::Position;
    use sqlfmt_common::token::{Token, TokenKind};

    fn item(kind: TokenKind, text: &str) -> Node {
        Node::Item(Token::new(kind, text, Position::new(1, 1), Position::new(1, 1)))
    }

    #[test]
    fn fuses_simple_arithmetic() {
        let items = vec![
            item(TokenKind::Ident, "a"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Plus, "+"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "b"),
        ];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        identifiers::run(&mut query, &AnsiDialect);
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        assert_eq!(stmt_children.len(), 1);
        assert!(matches!(stmt_children[0], Node::Operator(_)));
    }

    #[test]
    fn trailing_operator_without_right_operand_is_partial() {
        let items = vec![
            item(TokenKind::Ident, "a"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Plus, "+"),
        ];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        identifiers::run(&mut query, &AnsiDialect);
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        let Node::Operator(op) = &stmt_children[0] else {
            panic!("expected partial operator");
        };
        assert!(op.as_binary().right.is_none());
    }

    #[test]
    fn three_chained_operators_nest_left_associatively() {
        let items = vec![
            item(TokenKind::Ident, "a"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Plus, "+"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "b"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Plus, "+"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "c"),
        ];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        identifiers::run(&mut query, &AnsiDialect);
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        assert_eq!(stmt_children.len(), 1);
        let Node::Operator(outer) = &stmt_children[0] else {
            panic!("expected outer operator");
        };
        let view = outer.as_binary();
        assert_eq!(view.operator.text, "+");
        assert!(view.right.is_some());
        assert!(matches!(view.left, Node::Operator(_)));
        let Node::Operator(inner) = view.left else {
            unreachable!()
        };
        assert_eq!(inner.as_binary().operator.text, "+");
    }
}
