//! Step 4: promote bare `*` and unclassified-identifier leaves to
//! `Identifer` nodes.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;
use sqlfmt_common::token::TokenKind;

use crate::driver::parse_prefix_group;

fn is_promotable(node: &Node, dialect: &dyn Dialect) -> bool {
    match node.as_item() {
        Some(t) if t.kind == TokenKind::Star => true,
        Some(t) if t.is_ident() => dialect.classify(&t.text).is_none(),
        _ => false,
    }
}

fn fuse(old: &[Node], start: usize, _dialect: &dyn Dialect) -> (Node, usize) {
    (Node::Identifer(ListNode::new(vec![old[start].clone()])), start + 1)
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    if let Some(children) = query.children_mut() {
        parse_prefix_group(children, &is_promotable, dialect, &fuse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::statements;
    use sqlfmt_common::dialect::AnsiDialect;
    use sqlfmt_common::position::Position;
    use sqlfmt_common::token::Token;

    fn item(kind: TokenKind, text: &str) -> Node {
        Node::Item(Token::new(kind, text, Position::new(1, 1), Position::new(1, 1)))
    }

    #[test]
    fn promotes_star_and_plain_identifier() {
        let items = vec![item(TokenKind::Star, "*"), item(TokenKind::Ident, "my_col")];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        assert!(matches!(stmt_children[0], Node::Identifer(_)));
        assert!(matches!(stmt_children[1], Node::Identifer(_)));
    }

    #[test]
    fn leaves_keyword_identifiers_unpromoted() {
        let items = vec![item(TokenKind::Ident, "SELECT")];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        assert!(matches!(stmt_children[0], Node::Item(_)));
    }
}
