//! Tokenizer for the sqlfmt SQL formatter.
//!
//! Turns source text into a flat `Vec<Token>` terminated by an `Eof` token.
//! Comments (`--` line comments and `/* ... */` block comments) are dropped
//! permanently here -- they never reach the parser or formatter, per the
//! tokenizer's documented lifecycle. Whitespace runs (including newlines)
//! are preserved as single `Whitespace` tokens so the `NodeReader` layer
//! can skip over them without losing the information that they were there.

pub mod cursor;

use cursor::Cursor;
use sqlfmt_common::position::{LineIndex, Position};
use sqlfmt_common::token::{Token, TokenKind};

/// Failure raised when a string or block comment is left unterminated at
/// end of input. This is the only failure mode the tokenizer has.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizeError {
    pub message: String,
    pub at: Position,
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.message, self.at.line, self.at.col)
    }
}

impl std::error::Error for TokenizeError {}

/// Tokenize `source` into a flat token stream, ending in `TokenKind::Eof`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    Lexer::new(source).run()
}

struct Lexer<'src> {
    cursor: Cursor<'src>,
    line_index: LineIndex,
    tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            line_index: LineIndex::new(source),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, TokenizeError> {
        loop {
            let start = self.cursor.pos();
            let Some(c) = self.cursor.peek() else {
                break;
            };

            if c.is_whitespace() {
                self.lex_whitespace(start);
                continue;
            }
            if c == '-' && self.cursor.peek_next() == Some('-') {
                self.skip_line_comment();
                continue;
            }
            if c == '/' && self.cursor.peek_next() == Some('*') {
                self.skip_block_comment(start)?;
                continue;
            }
            if c == '\'' {
                self.lex_string(start, TokenKind::SingleQuotedString)?;
                continue;
            }
            if c == '"' {
                self.lex_quoted_ident(start)?;
                continue;
            }
            if (c == 'n' || c == 'N') && self.cursor.peek_next() == Some('\'') {
                self.cursor.advance();
                self.lex_string(start, TokenKind::NationalString)?;
                continue;
            }
            if is_ident_start(c) {
                self.lex_ident(start);
                continue;
            }
            if c.is_ascii_digit() {
                self.lex_number(start);
                continue;
            }

            self.lex_punct_or_operator(start);
        }

        let eof_pos = self.position(self.cursor.pos());
        self.tokens.push(Token::new(TokenKind::Eof, "", eof_pos, eof_pos));
        Ok(self.tokens)
    }

    fn position(&self, offset: u32) -> Position {
        self.line_index.position(offset)
    }

    fn push(&mut self, kind: TokenKind, start: u32) {
        let end = self.cursor.pos();
        let text = self.cursor.slice(start, end);
        self.tokens
            .push(Token::new(kind, text, self.position(start), self.position(end)));
    }

    fn lex_whitespace(&mut self, start: u32) {
        self.cursor.eat_while(|c| c.is_whitespace());
        self.push(TokenKind::Whitespace, start);
    }

    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '\n');
    }

    fn skip_block_comment(&mut self, start: u32) -> Result<(), TokenizeError> {
        self.cursor.advance();
        self.cursor.advance();
        loop {
            match self.cursor.peek() {
                None => {
                    return Err(TokenizeError {
                        message: "unterminated block comment".into(),
                        at: self.position(start),
                    })
                }
                Some('*') if self.cursor.peek_next() == Some('/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return Ok(());
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Lex a `'...'` or `N'...'` string literal, with `''` as an escaped
    /// single quote inside the literal.
    fn lex_string(&mut self, start: u32, kind: TokenKind) -> Result<(), TokenizeError> {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.peek() {
                None => {
                    return Err(TokenizeError {
                        message: "unterminated string literal".into(),
                        at: self.position(start),
                    })
                }
                Some('\'') => {
                    self.cursor.advance();
                    if self.cursor.peek() == Some('\'') {
                        self.cursor.advance();
                        continue;
                    }
                    break;
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
        self.push(kind, start);
        Ok(())
    }

    /// Lex a `"..."` quoted identifier, with `""` as an escaped quote.
    fn lex_quoted_ident(&mut self, start: u32) -> Result<(), TokenizeError> {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.peek() {
                None => {
                    return Err(TokenizeError {
                        message: "unterminated quoted identifier".into(),
                        at: self.position(start),
                    })
                }
                Some('"') => {
                    self.cursor.advance();
                    if self.cursor.peek() == Some('"') {
                        self.cursor.advance();
                        continue;
                    }
                    break;
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
        self.push(TokenKind::Ident, start);
        Ok(())
    }

    fn lex_ident(&mut self, start: u32) {
        self.cursor.eat_while(is_ident_continue);
        self.push(TokenKind::Ident, start);
    }

    fn lex_number(&mut self, start: u32) {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.peek() == Some('.') && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
        self.push(TokenKind::Number, start);
    }

    fn lex_punct_or_operator(&mut self, start: u32) {
        let c = self.cursor.advance().expect("peeked above");
        let kind = match c {
            '.' => TokenKind::Period,
            ',' => TokenKind::Comma,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ';' => TokenKind::Semicolon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Div,
            '%' => TokenKind::Mod,
            '=' => TokenKind::Eq,
            '<' => {
                if self.cursor.peek() == Some('>') {
                    self.cursor.advance();
                    TokenKind::Neq
                } else if self.cursor.peek() == Some('=') {
                    self.cursor.advance();
                    TokenKind::Lte
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.advance();
                    TokenKind::Gte
                } else {
                    TokenKind::Gt
                }
            }
            '!' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.advance();
                    TokenKind::Neq
                } else {
                    // An unmatched `!` still produces a one-character
                    // identifier-shaped token rather than failing the whole
                    // document; the Matcher layer never recognizes it as
                    // anything meaningful.
                    TokenKind::Ident
                }
            }
            _ => TokenKind::Ident,
        };
        self.push(kind, start);
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
