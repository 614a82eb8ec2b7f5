//! The formatter's walk state: the live indent counter and the memoized
//! unit-indent node it stamps out on every `get_indent()` call.

use sqlfmt_ast::{ListNode, Node};
use sqlfmt_common::position::Position;
use sqlfmt_common::token::{Token, TokenKind};
use sqlfmt_common::FormatOptions;

/// Sentinel position for formatter-synthesized nodes. These never existed
/// in the source, so there is no real (line, col) to stamp on them; the
/// edit returned by `format_document` is keyed off the original tree's
/// first/last token positions instead.
const SYNTHETIC: Position = Position { line: 0, col: 0 };

/// Carries the live `indentLevel` counter and the whitespace/tab
/// preferences through one `Eval` walk. One `FormatEnvironment` is created
/// per `format_document` call and never shared across documents.
pub struct FormatEnvironment {
    indent_level: u32,
    options: FormatOptions,
    unit_indent: Node,
}

impl FormatEnvironment {
    pub fn new(options: FormatOptions) -> Self {
        let unit_text = if options.insert_spaces {
            " ".repeat(options.tab_size.max(1) as usize)
        } else {
            "\t".to_string()
        };
        let unit_indent = Node::Item(Token::new(TokenKind::Whitespace, unit_text, SYNTHETIC, SYNTHETIC));
        Self {
            indent_level: 0,
            options,
            unit_indent,
        }
    }

    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    pub fn set_indent_level(&mut self, level: u32) {
        self.indent_level = level;
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrement the indent level, clamping to zero with a warning rather
    /// than underflowing -- the counter must never go negative.
    pub fn outdent(&mut self) {
        match self.indent_level.checked_sub(1) {
            Some(level) => self.indent_level = level,
            None => tracing::warn!("indent level underflow, clamping to zero"),
        }
    }

    /// `indentLevel` copies of the unit-indent, as an `Indent` list.
    pub fn get_indent(&self) -> Node {
        Node::Indent(ListNode::new(vec![self.unit_indent.clone(); self.indent_level as usize]))
    }

    /// A single line-break leaf, wrapped for uniformity with the rest of
    /// the closed node set.
    pub fn linebreak(&self) -> Node {
        Node::LineBreak(ListNode::new(vec![Node::Item(Token::new(
            TokenKind::Whitespace,
            "\n",
            SYNTHETIC,
            SYNTHETIC,
        ))]))
    }

    /// A single literal-space whitespace leaf, used to join operands and
    /// keywords the formatter rewrites (e.g. around `AS`, binary
    /// operators, `MemberIdentifer` is the one exception that joins with
    /// no whitespace at all).
    pub fn space(&self) -> Node {
        Node::Item(Token::new(TokenKind::Whitespace, " ", SYNTHETIC, SYNTHETIC))
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }
}
