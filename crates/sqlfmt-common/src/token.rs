use serde::Serialize;

use crate::position::Position;

/// A lexical token produced by the tokenizer.
///
/// Every token carries its kind, its exact source text (so rendering is
/// always a straight concatenation, never a re-synthesis from the kind),
/// and the source range it spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
    pub end: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position, end: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
            end,
        }
    }

    /// Whether this token is whitespace (including newlines).
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Whether this token is an identifier or quoted identifier -- the only
    /// kind the dialect ever classifies as a keyword.
    pub fn is_ident(&self) -> bool {
        self.kind == TokenKind::Ident
    }
}

/// Every kind of lexical token the tokenizer produces.
///
/// Keywords are not a separate kind: an `Ident` token whose uppercased text
/// the dialect recognizes *is* a keyword for matching purposes (see
/// `sqlfmt_common::dialect`). This mirrors spec.md's "all other identifiers
/// are unclassified" rule directly in the type system instead of forcing
/// the lexer to consult a dialect table it shouldn't need to know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// Runs of spaces, tabs, and newlines, collapsed into one token.
    Whitespace,
    /// A bare or double-quoted identifier.
    Ident,
    /// `*`
    Star,
    /// Integer or decimal number literal.
    Number,
    /// A single-quoted string literal, e.g. `'abc'`.
    SingleQuotedString,
    /// A national string literal, e.g. `N'abc'`.
    NationalString,
    /// A character literal (reserved for dialects with `'c'`-style chars;
    /// the tokenizer currently folds these into `SingleQuotedString`, kept
    /// as a distinct kind so matchers from spec.md §3 can reference it).
    CharLiteral,

    // -- punctuation --
    /// `.`
    Period,
    /// `,`
    Comma,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `;`
    Semicolon,

    // -- arithmetic operators --
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*` used as multiplication (lexed the same as `Star`; parser
    /// distinguishes by position, per spec.md §4.4 step 9).
    Mult,
    /// `/`
    Div,
    /// `%`
    Mod,

    // -- comparison operators --
    /// `=`
    Eq,
    /// `<>` or `!=`
    Neq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Lte,
    /// `>=`
    Gte,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Whether this kind is a comparison operator per spec.md §4.4 step 10.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::Neq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Lte
                | TokenKind::Gte
        )
    }

    /// Whether this kind is an arithmetic operator per spec.md §4.4 step 9.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Mult | TokenKind::Div | TokenKind::Mod
        )
    }

    /// Whether this kind is a literal (number, string, national string, char).
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::SingleQuotedString
                | TokenKind::NationalString
                | TokenKind::CharLiteral
        )
    }
}
