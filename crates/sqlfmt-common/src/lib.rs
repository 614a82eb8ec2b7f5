//! Shared types used across every stage of the sqlfmt pipeline: positions,
//! tokens, the dialect contract, user-facing options, errors, and the
//! final edit type. Kept dependency-free beyond `serde` so every other
//! crate in the workspace can depend on it without pulling in the lexer,
//! AST, parser, or formatter.

pub mod dialect;
pub mod edit;
pub mod error;
pub mod options;
pub mod position;
pub mod token;

pub use dialect::{AnsiDialect, Dialect, KeywordClass};
pub use edit::Edit;
pub use error::FormatError;
pub use options::{FormatConfig, FormatOptions};
pub use position::{LineIndex, Position};
pub use token::{Token, TokenKind};
