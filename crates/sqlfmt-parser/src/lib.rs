//! The parse pipeline: a fixed, carefully ordered sequence of rewrite
//! passes that turn a flat token stream into the `sqlfmt-ast` tree. Order
//! matters -- later passes depend on the structures built by earlier
//! ones; see each pass module for its place in the sequence.
//!
//! Every pass is total: unmatched parens, missing operator operands,
//! dangling commas, and unclosed `CASE`/`MultiKeyword` chains all
//! produce partial node variants rather than failing. `parse` therefore
//! never returns a `Result` -- there is nothing a well-formed token
//! stream (as produced by `sqlfmt-lexer`) can do to make any pass here
//! fail.

mod driver;
mod operand;
mod passes;

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::dialect::Dialect;
use sqlfmt_common::token::{Token, TokenKind};

/// Run the full parse pipeline over a tokenized document, producing the
/// top-level `Query` node.
pub fn parse(tokens: Vec<Token>, dialect: &dyn Dialect) -> Node {
    let items: Vec<Node> = tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(Node::Item)
        .collect();

    let mut query = Node::Query(ListNode::new(passes::statements::split(items)));

    passes::parentheses::run(&mut query, dialect);
    passes::functions::run(&mut query, dialect);
    passes::identifiers::run(&mut query, dialect);
    passes::case_blocks::run(&mut query, dialect);
    passes::paren_inner::run(&mut query, dialect);
    passes::member_identifiers::run(&mut query, dialect);
    passes::multi_keyword::run(&mut query, dialect);
    passes::operators::run(&mut query, dialect);
    passes::comparisons::run(&mut query, dialect);
    passes::alias_without_as::run(&mut query, dialect);
    passes::alias_with_as::run(&mut query, dialect);
    passes::identifier_list::run(&mut query, dialect);

    query
}
