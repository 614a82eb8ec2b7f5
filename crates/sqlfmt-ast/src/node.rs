use sqlfmt_common::token::{Token, TokenKind};

/// The tree data model: every node is either a leaf wrapping one token, or
/// one of the closed set of `TokenList` variants wrapping an ordered
/// sequence of child nodes.
///
/// This is a genuine Rust enum with exhaustive matching, not a
/// homogeneous kind-tagged node -- each variant carries its own payload
/// and the compiler enforces that every consumer handles all of them.
/// Typed "projections" (left/right operand, parent/child, keyword roster,
/// ...) mentioned in the tree's design are not cached side fields; they
/// are computed on demand from `children()` by the accessor methods below,
/// so the render-consistency invariant -- a list's rendered text is always
/// the concatenation of its children's rendered text -- holds by
/// construction rather than by convention.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf wrapping exactly one token.
    Item(Token),

    /// Top-level tree; children are statements and inter-statement
    /// whitespace.
    Query(ListNode),
    /// One statement, terminated by a semicolon or the tail of the
    /// enclosing list.
    Statement(ListNode),
    /// A balanced left/right paren pair with inner children between them.
    Parenthesis(ListNode),
    /// `{ function-name identifier, parenthesis of args }`.
    FunctionLiteral(ListNode),
    /// `{ parent node, period, child node }`; parent or child may be
    /// absent when partially parsed.
    MemberIdentifer(ListNode),
    /// A fused run of keywords, e.g. `ORDER BY`, `INSERT INTO`,
    /// `LEFT OUTER JOIN`.
    MultiKeyword(ListNode),
    /// `{ left, operator token, right }`; right may be absent (trailing).
    Operator(ListNode),
    /// `{ left, comparator token or keyword, right }`; right may be absent.
    Comparison(ListNode),
    /// `{ real-name, optional AS token, aliased-name }`.
    Aliased(ListNode),
    /// An ordered list of identifier-like children separated by commas.
    IdentiferList(ListNode),
    /// Spans `CASE ... END`.
    SwitchCase(ListNode),
    /// A single token promoted to an identifier node.
    Identifer(ListNode),
    /// Formatter-generated: a decoration wrapper whose children are
    /// inlined into the parent's child stream once produced.
    Formatted(ListNode),
    /// Formatter-generated: `indentLevel` copies of the unit-indent item.
    Indent(ListNode),
    /// Formatter-generated: a single line-break leaf, wrapped for
    /// uniformity with the rest of the closed set.
    LineBreak(ListNode),
}

/// The common payload of every non-leaf variant: an ordered, mutable
/// sequence of child nodes. Passes reassign `children` in place; nothing
/// else about a `ListNode` carries state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListNode {
    pub children: Vec<Node>,
}

impl ListNode {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn empty() -> Self {
        Self { children: Vec::new() }
    }
}

/// Discriminant used by [`crate::matcher::Matcher`] to test a node's
/// variant without needing a reference to the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Item,
    Query,
    Statement,
    Parenthesis,
    FunctionLiteral,
    MemberIdentifer,
    MultiKeyword,
    Operator,
    Comparison,
    Aliased,
    IdentiferList,
    SwitchCase,
    Identifer,
    Formatted,
    Indent,
    LineBreak,
}

impl Node {
    /// This node's variant tag, for matching against `Matcher::node_types`.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Item(_) => NodeKind::Item,
            Node::Query(_) => NodeKind::Query,
            Node::Statement(_) => NodeKind::Statement,
            Node::Parenthesis(_) => NodeKind::Parenthesis,
            Node::FunctionLiteral(_) => NodeKind::FunctionLiteral,
            Node::MemberIdentifer(_) => NodeKind::MemberIdentifer,
            Node::MultiKeyword(_) => NodeKind::MultiKeyword,
            Node::Operator(_) => NodeKind::Operator,
            Node::Comparison(_) => NodeKind::Comparison,
            Node::Aliased(_) => NodeKind::Aliased,
            Node::IdentiferList(_) => NodeKind::IdentiferList,
            Node::SwitchCase(_) => NodeKind::SwitchCase,
            Node::Identifer(_) => NodeKind::Identifer,
            Node::Formatted(_) => NodeKind::Formatted,
            Node::Indent(_) => NodeKind::Indent,
            Node::LineBreak(_) => NodeKind::LineBreak,
        }
    }

    /// Children of a list node, or `None` for a leaf.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Item(_) => None,
            Node::Query(l)
            | Node::Statement(l)
            | Node::Parenthesis(l)
            | Node::FunctionLiteral(l)
            | Node::MemberIdentifer(l)
            | Node::MultiKeyword(l)
            | Node::Operator(l)
            | Node::Comparison(l)
            | Node::Aliased(l)
            | Node::IdentiferList(l)
            | Node::SwitchCase(l)
            | Node::Identifer(l)
            | Node::Formatted(l)
            | Node::Indent(l)
            | Node::LineBreak(l) => Some(&l.children),
        }
    }

    /// Mutable children of a list node, or `None` for a leaf.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Item(_) => None,
            Node::Query(l)
            | Node::Statement(l)
            | Node::Parenthesis(l)
            | Node::FunctionLiteral(l)
            | Node::MemberIdentifer(l)
            | Node::MultiKeyword(l)
            | Node::Operator(l)
            | Node::Comparison(l)
            | Node::Aliased(l)
            | Node::IdentiferList(l)
            | Node::SwitchCase(l)
            | Node::Identifer(l)
            | Node::Formatted(l)
            | Node::Indent(l)
            | Node::LineBreak(l) => Some(&mut l.children),
        }
    }

    /// Whether this node is a whitespace leaf.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Node::Item(t) if t.is_whitespace())
    }

    /// The underlying token of an `Item` leaf.
    pub fn as_item(&self) -> Option<&Token> {
        match self {
            Node::Item(t) => Some(t),
            _ => None,
        }
    }

    /// The rendered text of this node: the leaf's token text, or the
    /// concatenation of every child's rendered text. This is the
    /// authoritative render used to check the render-consistency
    /// invariant; the formatter's own `Render` stage (in `sqlfmt-format`)
    /// additionally honors the lowercase-keywords flag.
    pub fn raw_text(&self) -> String {
        match self {
            Node::Item(t) => t.text.clone(),
            _ => self
                .children()
                .unwrap_or(&[])
                .iter()
                .map(Node::raw_text)
                .collect(),
        }
    }

    /// Construct an `Item` leaf directly from a token.
    pub fn item(token: Token) -> Node {
        Node::Item(token)
    }

    /// Clone this node with its children replaced, keeping the same
    /// variant. A no-op clone for a leaf `Item`. Used by passes that
    /// rebuild a node's contents without needing to match every variant
    /// themselves.
    pub fn with_children(&self, children: Vec<Node>) -> Node {
        let mut cloned = self.clone();
        if let Some(slot) = cloned.children_mut() {
            *slot = children;
        }
        cloned
    }
}

/// Typed projections, computed on demand from `children()` rather than
/// cached, so they can never drift out of sync when a pass reassigns a
/// list's children.
impl ListNode {
    /// First non-whitespace child.
    pub fn first_significant(&self) -> Option<&Node> {
        self.children.iter().find(|c| !c.is_whitespace())
    }

    /// Last non-whitespace child.
    pub fn last_significant(&self) -> Option<&Node> {
        self.children.iter().rev().find(|c| !c.is_whitespace())
    }

    /// Non-whitespace children, in order.
    pub fn significant(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| !c.is_whitespace())
    }
}

/// `Operator` / `Comparison` projections: `{ left, operator, right? }`.
/// Both variants share this shape, so one accessor type serves both.
pub struct BinaryView<'a> {
    pub left: &'a Node,
    pub operator: &'a Token,
    pub right: Option<&'a Node>,
}

impl ListNode {
    /// View this list's children as `{ left, operator, right? }`. Panics
    /// if the first two significant children are not `(node, Item)` --
    /// callers only invoke this on lists they just built as `Operator` or
    /// `Comparison`.
    pub fn as_binary(&self) -> BinaryView<'_> {
        let mut sig = self.significant();
        let left = sig.next().expect("binary node has a left operand");
        let op_node = sig.next().expect("binary node has an operator token");
        let operator = op_node.as_item().expect("operator child is a leaf token");
        let right = sig.next();
        BinaryView { left, operator, right }
    }
}

/// `MemberIdentifer` projection: `{ parent?, period, child? }`.
pub struct MemberView<'a> {
    pub parent: Option<&'a Node>,
    pub child: Option<&'a Node>,
}

impl ListNode {
    pub fn as_member(&self) -> MemberView<'_> {
        let period_idx = self
            .children
            .iter()
            .position(|c| matches!(c.as_item(), Some(t) if t.kind == TokenKind::Period));
        match period_idx {
            Some(idx) => {
                let parent = self.children[..idx].iter().rev().find(|c| !c.is_whitespace());
                let child = self.children[idx + 1..].iter().find(|c| !c.is_whitespace());
                MemberView { parent, child }
            }
            None => MemberView { parent: None, child: None },
        }
    }
}

/// `Aliased` projection: `{ real, as_token?, aliased, is_as }`.
pub struct AliasedView<'a> {
    pub real: &'a Node,
    pub as_token: Option<&'a Token>,
    pub aliased: &'a Node,
}

impl ListNode {
    pub fn as_aliased(&self) -> AliasedView<'_> {
        let mut sig = self.significant();
        let real = sig.next().expect("aliased node has a real name");
        let second = sig.next().expect("aliased node has an aliased name");
        if let Some(tok) = second
            .as_item()
            .filter(|t| t.text.eq_ignore_ascii_case("AS"))
        {
            let aliased = sig.next().expect("AS-form aliased node has an alias name");
            AliasedView {
                real,
                as_token: Some(tok),
                aliased,
            }
        } else {
            AliasedView {
                real,
                as_token: None,
                aliased: second,
            }
        }
    }

    pub fn is_as(&self) -> bool {
        self.as_aliased().as_token.is_some()
    }
}

/// `FunctionLiteral` projection: `{ name, args parenthesis }`.
pub struct FunctionView<'a> {
    pub name: &'a Node,
    pub args: &'a Node,
}

impl ListNode {
    pub fn as_function(&self) -> FunctionView<'_> {
        let mut sig = self.significant();
        let name = sig.next().expect("function literal has a name");
        let args = sig.next().expect("function literal has a parenthesis");
        FunctionView { name, args }
    }
}

/// `MultiKeyword` projection: the ordered, non-whitespace keyword tokens.
impl ListNode {
    pub fn keywords(&self) -> Vec<&Token> {
        self.children
            .iter()
            .filter(|c| !c.is_whitespace())
            .filter_map(Node::as_item)
            .collect()
    }
}

/// `Parenthesis` projection: the children strictly between the opening
/// and (if present) closing paren.
impl ListNode {
    pub fn paren_inner(&self) -> &[Node] {
        let has_close = matches!(
            self.children.last().and_then(Node::as_item).map(|t| t.kind),
            Some(TokenKind::RightParen)
        );
        let end = if has_close {
            self.children.len() - 1
        } else {
            self.children.len()
        };
        &self.children[1.min(end)..end]
    }

    pub fn is_balanced(&self) -> bool {
        matches!(
            self.children.last().and_then(Node::as_item).map(|t| t.kind),
            Some(TokenKind::RightParen)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_common::position::Position;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text, Position::new(1, 1), Position::new(1, 1))
    }

    #[test]
    fn raw_text_concatenates_children() {
        let list = Node::Operator(ListNode::new(vec![
            Node::Item(tok(TokenKind::Ident, "a")),
            Node::Item(tok(TokenKind::Whitespace, " ")),
            Node::Item(tok(TokenKind::Plus, "+")),
            Node::Item(tok(TokenKind::Whitespace, " ")),
            Node::Item(tok(TokenKind::Ident, "b")),
        ]));
        assert_eq!(list.raw_text(), "a + b");
    }

    #[test]
    fn binary_view_finds_operands_skipping_whitespace() {
        let list = ListNode::new(vec![
            Node::Item(tok(TokenKind::Ident, "a")),
            Node::Item(tok(TokenKind::Whitespace, " ")),
            Node::Item(tok(TokenKind::Plus, "+")),
            Node::Item(tok(TokenKind::Whitespace, " ")),
            Node::Item(tok(TokenKind::Ident, "b")),
        ]);
        let view = list.as_binary();
        assert_eq!(view.left.raw_text(), "a");
        assert_eq!(view.operator.text, "+");
        assert_eq!(view.right.unwrap().raw_text(), "b");
    }

    #[test]
    fn member_view_handles_missing_parent() {
        let list = ListNode::new(vec![
            Node::Item(tok(TokenKind::Period, ".")),
            Node::Item(tok(TokenKind::Ident, "col")),
        ]);
        let view = list.as_member();
        assert!(view.parent.is_none());
        assert_eq!(view.child.unwrap().raw_text(), "col");
    }

    #[test]
    fn aliased_view_distinguishes_as_form() {
        let with_as = ListNode::new(vec![
            Node::Item(tok(TokenKind::Ident, "a")),
            Node::Item(tok(TokenKind::Whitespace, " ")),
            Node::Item(tok(TokenKind::Ident, "AS")),
            Node::Item(tok(TokenKind::Whitespace, " ")),
            Node::Item(tok(TokenKind::Ident, "x")),
        ]);
        assert!(with_as.is_as());

        let without_as = ListNode::new(vec![
            Node::Item(tok(TokenKind::Ident, "a")),
            Node::Item(tok(TokenKind::Whitespace, " ")),
            Node::Item(tok(TokenKind::Ident, "x")),
        ]);
        assert!(!without_as.is_as());
    }

    #[test]
    fn parenthesis_inner_excludes_delimiters_when_balanced() {
        let list = ListNode::new(vec![
            Node::Item(tok(TokenKind::LeftParen, "(")),
            Node::Item(tok(TokenKind::Ident, "a")),
            Node::Item(tok(TokenKind::RightParen, ")")),
        ]);
        assert!(list.is_balanced());
        assert_eq!(list.paren_inner().len(), 1);
    }

    #[test]
    fn parenthesis_inner_includes_everything_after_open_when_unbalanced() {
        let list = ListNode::new(vec![
            Node::Item(tok(TokenKind::LeftParen, "(")),
            Node::Item(tok(TokenKind::Ident, "a")),
        ]);
        assert!(!list.is_balanced());
        assert_eq!(list.paren_inner().len(), 1);
    }
}
