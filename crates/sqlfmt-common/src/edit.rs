use serde::Serialize;

use crate::position::Position;

/// A single text replacement, per spec.md §6: the formatter always replaces
/// the whole document with one edit rather than emitting a diff of many
/// small edits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edit {
    pub start: Position,
    pub end: Position,
    pub new_text: String,
}

impl Edit {
    pub fn new(start: Position, end: Position, new_text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            new_text: new_text.into(),
        }
    }
}
