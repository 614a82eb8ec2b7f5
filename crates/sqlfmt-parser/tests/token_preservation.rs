//! Property: whatever non-whitespace tokens a document tokenizes into,
//! `parse` never drops, duplicates, or reorders one. The tree only ever
//! groups leaves into new parents; it never touches their text or order.

use proptest::prelude::*;

use sqlfmt_common::dialect::AnsiDialect;
use sqlfmt_common::token::TokenKind;
use sqlfmt_ast::Node;

const WORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "AND", "OR", "JOIN", "ON", "GROUP", "BY", "ORDER", "CASE", "WHEN",
    "THEN", "ELSE", "END", "AS", "INSERT", "INTO", "VALUES", "a", "b", "c", "t", "u", "x", "1",
    "2",
];

fn collect_leaves(node: &Node, out: &mut Vec<String>) {
    match node {
        Node::Item(t) if t.kind != TokenKind::Whitespace => out.push(t.text.clone()),
        Node::Item(_) => {}
        _ => {
            for child in node.children().unwrap_or(&[]) {
                collect_leaves(child, out);
            }
        }
    }
}

fn word() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(WORDS)
}

proptest! {
    #[test]
    fn parse_preserves_every_non_whitespace_token_in_order(
        words in proptest::collection::vec(word(), 1..20)
    ) {
        let src = words.join(" ");
        let tokens = sqlfmt_lexer::tokenize(&src).unwrap();
        let expected: Vec<String> = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Whitespace && t.kind != TokenKind::Eof)
            .map(|t| t.text.clone())
            .collect();

        let tree = sqlfmt_parser::parse(tokens, &AnsiDialect);
        let mut actual = Vec::new();
        collect_leaves(&tree, &mut actual);

        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn parenthesized_runs_preserve_tokens_too(
        words in proptest::collection::vec(word(), 1..10)
    ) {
        let src = format!("SELECT * FROM ({}) s", words.join(" "));
        let tokens = sqlfmt_lexer::tokenize(&src).unwrap();
        let expected: Vec<String> = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Whitespace && t.kind != TokenKind::Eof)
            .map(|t| t.text.clone())
            .collect();

        let tree = sqlfmt_parser::parse(tokens, &AnsiDialect);
        let mut actual = Vec::new();
        collect_leaves(&tree, &mut actual);

        prop_assert_eq!(expected, actual);
    }
}
