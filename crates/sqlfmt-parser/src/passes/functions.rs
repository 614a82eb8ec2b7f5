//! Step 3: when a keyword-classified identifier is immediately followed,
//! with no intervening whitespace, by a `Parenthesis`, fuse them into a
//! `FunctionLiteral`.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;

use crate::driver::parse_prefix_group;

fn is_keyword_ident(node: &Node, dialect: &dyn Dialect) -> bool {
    match node.as_item() {
        Some(t) if t.is_ident() => dialect.classify(&t.text).is_some(),
        _ => false,
    }
}

fn fuse(old: &[Node], start: usize, _dialect: &dyn Dialect) -> (Node, usize) {
    if let Some(Node::Parenthesis(_)) = old.get(start + 1) {
        let children = old[start..=start + 1].to_vec();
        return (Node::FunctionLiteral(ListNode::new(children)), start + 2);
    }
    (old[start].clone(), start + 1)
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    if let Some(children) = query.children_mut() {
        parse_prefix_group(children, &is_keyword_ident, dialect, &fuse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::{parentheses, statements};
    use sqlfmt_common::dialect::AnsiDialect;
    use sqlfmt_common::position::Position;
    use sqlfmt_common::token::{Token, TokenKind};

    fn item(kind: TokenKind, text: &str) -> Node {
        Node::Item(Token::new(kind, text, Position::new(1, 1), Position::new(1, 1)))
    }

    #[test]
    fn fuses_keyword_ident_immediately_followed_by_parens() {
        let items = vec![
            item(TokenKind::Ident, "CASE"),
            item(TokenKind::LeftParen, "("),
            item(TokenKind::Ident, "a"),
            item(TokenKind::RightParen, ")"),
        ];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        parentheses::run(&mut query, &AnsiDialect);
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        assert!(matches!(stmt_children[0], Node::FunctionLiteral(_)));
    }

    #[test]
    fn does_not_fuse_when_whitespace_intervenes() {
        let items = vec![
            item(TokenKind::Ident, "CASE"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::LeftParen, "("),
            item(TokenKind::Ident, "a"),
            item(TokenKind::RightParen, ")"),
        ];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        parentheses::run(&mut query, &AnsiDialect);
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        assert!(!matches!(stmt_children[0], Node::FunctionLiteral(_)));
    }
}
