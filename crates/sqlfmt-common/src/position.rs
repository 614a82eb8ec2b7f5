use serde::Serialize;

/// A 1-based (line, column) position in source text.
///
/// Positions are computed on demand from byte offsets via [`LineIndex`],
/// then stamped onto each [`crate::token::Token`] at lex time so downstream
/// stages never have to re-derive them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Pre-computed index of line start byte offsets, for on-demand byte-offset
/// to (line, column) conversion.
///
/// Constructed once per source document, then used to convert the lexer's
/// internal byte-offset cursor positions into human-readable positions.
#[derive(Debug)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build a line index by scanning the source text for newline characters.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a 1-based (line, column) position.
    pub fn position(&self, offset: u32) -> Position {
        let line_idx = self.line_starts.partition_point(|&start| start <= offset);
        let line_idx = line_idx.saturating_sub(1);
        let line = (line_idx as u32) + 1;
        let col = offset - self.line_starts[line_idx] + 1;
        Position::new(line, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let idx = LineIndex::new("hello");
        assert_eq!(idx.position(0), Position::new(1, 1));
        assert_eq!(idx.position(4), Position::new(1, 5));
    }

    #[test]
    fn multiple_lines() {
        let idx = LineIndex::new("select\n*\nfrom t");
        assert_eq!(idx.position(0), Position::new(1, 1));
        assert_eq!(idx.position(7), Position::new(2, 1));
        assert_eq!(idx.position(9), Position::new(3, 1));
    }
}
