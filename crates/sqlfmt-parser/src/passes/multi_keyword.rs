//! Step 8: starting at any key in the transition table, greedily consume
//! the longest matching chain of keywords and wrap as `MultiKeyword`.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;

use crate::driver::parse_prefix_group;

const START_KEYWORDS: &[&str] = &[
    "ORDER", "GROUP", "INSERT", "DELETE", "INNER", "CROSS", "OUTER", "LEFT", "RIGHT", "NATURAL",
];

fn is_start_keyword(node: &Node, _dialect: &dyn Dialect) -> bool {
    matches!(node.as_item(), Some(t) if t.is_ident() && START_KEYWORDS.iter().any(|k| t.text.eq_ignore_ascii_case(k)))
}

/// The transition table from spec.md §4.5: does `next` legally follow
/// `prev` in a multi-keyword chain?
fn follows(prev: &str, next: &str) -> bool {
    match prev.to_ascii_uppercase().as_str() {
        "ORDER" | "GROUP" => next.eq_ignore_ascii_case("BY"),
        "INSERT" => next.eq_ignore_ascii_case("INTO"),
        "DELETE" => next.eq_ignore_ascii_case("FROM"),
        "INNER" | "CROSS" | "OUTER" => next.eq_ignore_ascii_case("JOIN"),
        "LEFT" | "RIGHT" => next.eq_ignore_ascii_case("OUTER") || next.eq_ignore_ascii_case("JOIN"),
        "NATURAL" => {
            next.eq_ignore_ascii_case("LEFT")
                || next.eq_ignore_ascii_case("RIGHT")
                || next.eq_ignore_ascii_case("OUTER")
                || next.eq_ignore_ascii_case("JOIN")
        }
        _ => false,
    }
}

fn fuse(old: &[Node], start: usize, _dialect: &dyn Dialect) -> (Node, usize) {
    let mut children = vec![old[start].clone()];
    let mut last_kw = old[start].as_item().expect("matched a keyword item").text.clone();
    let mut idx = start + 1;
    loop {
        let mut peek = idx;
        while peek < old.len() && old[peek].is_whitespace() {
            peek += 1;
        }
        let Some(tok) = old.get(peek).and_then(Node::as_item) else {
            break;
        };
        if !tok.is_ident() || !follows(&last_kw, &tok.text) {
            break;
        }
        children.extend(old[idx..=peek].iter().cloned());
        last_kw = tok.text.clone();
        idx = peek + 1;
    }
    (Node::MultiKeyword(ListNode::new(children)), idx)
}

pub fn run(query: &mut Node, dialect: &dyn Dialect) {
    if let Some(children) = query.children_mut() {
        parse_prefix_group(children, &is_start_keyword, dialect, &fuse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::statements;
    use sqlfmt_common::dialect::AnsiDialect;
    use sqlfmt_common::position::Position;
    use sqlfmt_common::token::{Token, TokenKind};

    fn item(kind: TokenKind, text: &str) -> Node {
        Node::Item(Token::new(kind, text, Position::new(1, 1), Position::new(1, 1)))
    }

    #[test]
    fn fuses_order_by() {
        let items = vec![
            item(TokenKind::Ident, "ORDER"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "BY"),
        ];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        let Node::MultiKeyword(list) = &stmt_children[0] else {
            panic!("expected multi keyword");
        };
        let kws: Vec<&str> = list.keywords().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(kws, vec!["ORDER", "BY"]);
    }

    #[test]
    fn chains_left_outer_join() {
        let items = vec![
            item(TokenKind::Ident, "LEFT"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "OUTER"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "JOIN"),
        ];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        let Node::MultiKeyword(list) = &stmt_children[0] else {
            panic!("expected multi keyword");
        };
        assert_eq!(list.keywords().len(), 3);
    }

    #[test]
    fn stops_when_chain_breaks() {
        let items = vec![
            item(TokenKind::Ident, "INNER"),
            item(TokenKind::Whitespace, " "),
            item(TokenKind::Ident, "t"),
        ];
        let mut query = Node::Query(ListNode::new(statements::split(items)));
        run(&mut query, &AnsiDialect);
        let stmt_children = query.children().unwrap()[0].children().unwrap();
        let Node::MultiKeyword(list) = &stmt_children[0] else {
            panic!("expected multi keyword");
        };
        assert_eq!(list.keywords().len(), 1);
    }
}
