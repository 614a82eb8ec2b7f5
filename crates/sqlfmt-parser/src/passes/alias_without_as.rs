//! Step 11: where a left operand (parenthesis, function, identifier,
//! member, case, operator) is immediately followed, skipping whitespace,
//! by an identifier, fuse them into `Aliased` with no `AS` token.

use sqlfmt_ast::{ListNode, Matcher, Node, NodeKind};
use sqlfmt_common::dialect::Dialect;

use crate::driver::parse_prefix_group;

fn aliasable_matcher() -> Matcher {
    Matcher::new().node_types(&[
        NodeKind::Parenthesis,
        NodeKind::FunctionLiteral,
        NodeKind::Identifer,
        NodeKind::MemberIdentifer,
        NodeKind::SwitchCase,
        NodeKind::Operator,
    ])
}

fn fuse(old: &[Node], start: usize, _dialect: &dyn Dialect) -> (Node, usize) {
    let mut idx = start + 1;
    while idx < old.len() && old[idx].is_whitespace() {
        idx += 1;
    }
    if idx < old.len() && matches!(old[idx].kind(), NodeKind::Identifer) {
        let children = old[start..=idx].to_vec();
        (Node::Aliased(ListNode::new(children)), idx + 1)
    } else {
        (old[start].clone(), start + 1)
    }
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    let matcher = aliasable_matcher();
    let is_match = move |node: &Node, _d: &dyn Dialect| matcher.matches(node);
    if let Some(children) = query.children_mut() {
        parse_prefix_group(children, &is_match, dialect, &fuse);
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
    fn fuses_identifier_followed_by_identifier() {
        let items = vec![
            item(TokenKind::Ident, "t"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "s"),
        ];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        identifiers::run(&mut query, &AnsiDialect);
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        assert!(matches!(stmt_children[0], Node::Aliased(_)));
        let Node::Aliased(list) = &stmt_children[0] else {
            unreachable!()
        };
        assert!(!list.is_as());
    }
}
