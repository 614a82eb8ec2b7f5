//! Depth-first render of a formatted tree into the final output string.

use sqlfmt_ast::Node;
use sqlfmt_common::dialect::Dialect;

/// Render `node` to text. Keyword-shaped identifiers are lowercased when
/// `lowercase_keywords` is set; every other leaf, and every list, is
/// emitted verbatim by concatenating its children's renders.
pub fn render(node: &Node, dialect: &dyn Dialect, lowercase_keywords: bool) -> String {
    match node {
        Node::Item(tok) => {
            if lowercase_keywords && tok.is_ident() && dialect.is_keyword(&tok.text) {
                tok.text.to_ascii_lowercase()
            } else {
                tok.text.clone()
            }
        }
        _ => node
            .children()
            .unwrap_or(&[])
            .iter()
            .map(|child| render(child, dialect, lowercase_keywords))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_ast::ListNode;
    use sqlfmt_common::dialect::AnsiDialect;
    use sqlfmt_common::position::Position;
    use sqlfmt_common::token::{Token, TokenKind};

    fn item(kind: TokenKind, text: &str) -> Node {
        Node::Item(Token::new(kind, text, Position::new(1, 1), Position::new(1, 1)))
    }

    #[test]
    fn lowercases_keywords_when_flag_set() {
        let tree = Node::Statement(ListNode::new(vec![
            item(TokenKind::Ident, "SELECT"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "a"),
        ]));
        assert_eq!(render(&tree, &AnsiDialect, true), "select a");
        assert_eq!(render(&tree, &AnsiDialect, false), "SELECT a");
    }

    #[test]
    fn plain_identifiers_are_never_lowercased() {
        let tree = item(TokenKind::Ident, "MyTable");
        assert_eq!(render(&tree, &AnsiDialect, true), "MyTable");
    }
}
