//! `EvalTrailingWhitespace`: a second, indent-state-free pass that trims
//! whitespace leaves sitting directly against a `LineBreak` or `Indent`
//! node, on either side. A keyword decoration's own line break already
//! separates it from its neighbor, so the original single-space leaf the
//! source had in that same spot is now redundant -- whether it used to sit
//! at the end of the previous line or at the start of the new one.
//! Whitespace with no such neighbor (e.g. between `AND` and its operand,
//! where neither side carries a decoration) is left untouched, since it is
//! the only thing separating the two tokens in the rendered output.
//! Idempotent: a tree with no such adjacent pairs left is a fixed point.

use sqlfmt_ast::{Node, NodeKind};

fn is_break(node: &Node) -> bool {
    matches!(node.kind(), NodeKind::LineBreak | NodeKind::Indent)
}

pub fn trim_trailing_whitespace(node: &Node) -> Node {
    let Some(children) = node.children() else {
        return node.clone();
    };

    let mut rebuilt: Vec<Node> = children.iter().map(trim_trailing_whitespace).collect();

    let mut i = 0;
    while i < rebuilt.len() {
        let drop = rebuilt[i].is_whitespace()
            && ((i > 0 && is_break(&rebuilt[i - 1])) || (i + 1 < rebuilt.len() && is_break(&rebuilt[i + 1])));
        if drop {
            rebuilt.remove(i);
        } else {
            i += 1;
        }
    }

    node.with_children(rebuilt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_ast::ListNode;
    use sqlfmt_common::position::Position;
    use sqlfmt_common::token::{Token, TokenKind};

    fn item(kind: TokenKind, text: &str) -> Node {
        Node::Item(Token::new(kind, text, Position::new(1, 1), Position::new(1, 1)))
    }

    fn linebreak() -> Node {
        Node::LineBreak(ListNode::new(vec![item(TokenKind::Whitespace, "\n")]))
    }

    #[test]
    fn drops_whitespace_immediately_before_a_linebreak() {
        let tree = Node::Statement(ListNode::new(vec![
            item(TokenKind::Ident, "t"),
            item(TokenKind::Whitespace, " "),
            linebreak(),
            item(TokenKind::Ident, "FROM"),
        ]));
        let trimmed = trim_trailing_whitespace(&tree);
        assert_eq!(trimmed.children().unwrap().len(), 3);
    }

    #[test]
    fn drops_whitespace_immediately_after_a_linebreak() {
        let tree = Node::Statement(ListNode::new(vec![
            item(TokenKind::Ident, "SELECT"),
            linebreak(),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "a"),
        ]));
        let trimmed = trim_trailing_whitespace(&tree);
        assert_eq!(trimmed.children().unwrap().len(), 3);
    }

    #[test]
    fn keeps_whitespace_with_no_adjacent_break() {
        let tree = Node::Statement(ListNode::new(vec![
            item(TokenKind::Ident, "AND"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "b"),
        ]));
        let trimmed = trim_trailing_whitespace(&tree);
        assert_eq!(trimmed.children().unwrap().len(), 3);
    }

    #[test]
    fn idempotent_on_a_tree_with_no_dangling_whitespace() {
        let tree = Node::Statement(ListNode::new(vec![item(TokenKind::Ident, "t"), linebreak()]));
        let once = trim_trailing_whitespace(&tree);
        let twice = trim_trailing_whitespace(&once);
        assert_eq!(once, twice);
    }
}
