use sqlfmt_common::dialect::{Dialect, KeywordClass};
use sqlfmt_common::token::TokenKind;

use crate::node::{Node, NodeKind};

/// A declarative predicate over a node: matches iff *any* of its
/// (non-empty) condition sets is satisfied. An empty set never
/// contributes a match on its own -- a `Matcher` with nothing configured
/// matches nothing.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    node_types: Vec<NodeKind>,
    expect_tokens: Vec<TokenKind>,
    expect_keywords: Vec<String>,
    expect_sql_type: Vec<KeywordClass>,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// (a) the node's own variant tag is in this set.
    pub fn node_types(mut self, kinds: &[NodeKind]) -> Self {
        self.node_types.extend_from_slice(kinds);
        self
    }

    /// (b) the node is a leaf whose token kind is in this set.
    pub fn expect_tokens(mut self, kinds: &[TokenKind]) -> Self {
        self.expect_tokens.extend_from_slice(kinds);
        self
    }

    /// (c) the node is a leaf whose ASCII-uppercased text is in this set.
    pub fn expect_keywords(mut self, keywords: &[&str]) -> Self {
        self.expect_keywords
            .extend(keywords.iter().map(|k| k.to_ascii_uppercase()));
        self
    }

    /// (d) the node is an identifier leaf whose dialect classification is
    /// in this set. Only takes effect via [`Matcher::matches_with_dialect`].
    pub fn expect_sql_type(mut self, classes: &[KeywordClass]) -> Self {
        self.expect_sql_type.extend_from_slice(classes);
        self
    }

    /// Evaluate predicates (a)-(c); predicate (d) is skipped (matchers
    /// that only need variant/token/keyword conditions can use this
    /// directly, e.g. within `NodeReader` lookahead where no dialect is
    /// in scope).
    pub fn matches(&self, node: &Node) -> bool {
        if !self.node_types.is_empty() && self.node_types.contains(&node.kind()) {
            return true;
        }
        if let Some(token) = node.as_item() {
            if !self.expect_tokens.is_empty() && self.expect_tokens.contains(&token.kind) {
                return true;
            }
            if !self.expect_keywords.is_empty() {
                let upper = token.text.to_ascii_uppercase();
                if self.expect_keywords.contains(&upper) {
                    return true;
                }
            }
        }
        false
    }

    /// Evaluate all four predicates, including the dialect-classification
    /// one.
    pub fn matches_with_dialect(&self, node: &Node, dialect: &dyn Dialect) -> bool {
        if self.matches(node) {
            return true;
        }
        if !self.expect_sql_type.is_empty() {
            if let Some(token) = node.as_item() {
                if token.is_ident() {
                    if let Some(class) = dialect.classify(&token.text) {
                        if self.expect_sql_type.contains(&class) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }
}
