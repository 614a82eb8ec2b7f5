//! SQL code formatter.
//!
//! Takes a document's full text and produces a single [`Edit`] replacing
//! it with a canonical, indented rendering, for a language server's
//! `textDocument/formatting` request. The pipeline is:
//!
//! 1. Tokenize the source (`sqlfmt-lexer`).
//! 2. Parse the tokens into a tree (`sqlfmt-parser`).
//! 3. `Eval` the tree, threading a live indent counter through a
//!    keyword-driven rewrite ([`eval`]).
//! 4. Trim dangling end-of-line whitespace ([`trailing_ws`]).
//! 5. Render the result to text, honoring the lowercase-keywords option
//!    ([`render`]).

pub mod env;
pub mod eval;
pub mod render;
pub mod trailing_ws;

use sqlfmt_common::dialect::Dialect;
use sqlfmt_common::position::Position;
use sqlfmt_common::token::TokenKind;
use sqlfmt_common::{Edit, FormatError, FormatOptions};

pub use env::FormatEnvironment;

/// Format `text` and return the single edit that replaces it.
///
/// Fails with [`FormatError::EmptyInput`] on an empty document, or
/// [`FormatError::TokenizeFailed`] if the tokenizer rejects the text. A
/// syntactically imperfect document never fails here -- the parse and
/// format passes tolerate it and produce partial structure instead (see
/// `sqlfmt-parser`).
pub fn format_document(
    text: &str,
    options: &FormatOptions,
    dialect: &dyn Dialect,
    lowercase_keywords: bool,
) -> Result<Edit, FormatError> {
    if text.is_empty() {
        return Err(FormatError::EmptyInput);
    }

    let tokens = sqlfmt_lexer::tokenize(text)
        .map_err(|err| FormatError::TokenizeFailed { message: err.message, at: err.at })?;

    let start = tokens.first().map(|t| t.pos).unwrap_or(Position::new(1, 1));
    let end = tokens
        .iter()
        .rev()
        .find(|t| t.kind != TokenKind::Eof)
        .map(|t| t.end)
        .unwrap_or(start);

    let tree = sqlfmt_parser::parse(tokens, dialect);

    let mut environment = FormatEnvironment::new(*options);
    let formatted = eval::eval(&tree, &mut environment, dialect);
    let trimmed = trailing_ws::trim_trailing_whitespace(&formatted);
    let new_text = render::render(&trimmed, dialect, lowercase_keywords);

    Ok(Edit::new(start, end, new_text))
}
