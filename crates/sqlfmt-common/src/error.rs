use std::fmt;

use crate::position::Position;

/// An error surfaced to the formatter's caller. None of these are retried
/// (spec.md §7) -- partial parses inside a successfully-tokenized document
/// never produce a `ParseFailed`; that variant is reserved for failures
/// raised outside the normal partial-node tolerance (it exists for
/// completeness and for future parse stages, but the current pipeline
/// never constructs it because every parse pass is total).
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// `text` has zero length.
    EmptyInput,
    /// The tokenizer reported a failure (e.g. an unterminated string or
    /// block comment), propagated verbatim with its position.
    TokenizeFailed { message: String, at: Position },
    /// A parse pass raised an error.
    ParseFailed(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input text is empty"),
            Self::TokenizeFailed { message, at } => {
                write!(f, "tokenize failed at {}:{}: {message}", at.line, at.col)
            }
            Self::ParseFailed(message) => write!(f, "parse failed: {message}"),
        }
    }
}

impl std::error::Error for FormatError {}
