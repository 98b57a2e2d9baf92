//! Source position tracking
//!
//! - line/column: human readable error display (1-based)
//! - byte_offset: slicing the source text (0-based, UTF-8)

use serde::Serialize;

/// Source position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourcePosition {
    /// Line number, 1-based
    pub line: usize,
    /// Column number, 1-based, counted in Unicode code points
    pub column: usize,
    /// Byte offset, 0-based
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Start of the input
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Step over one character
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.byte_offset += c.len_utf8();
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

/// Half-open source range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    pub fn range(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.byte_offset - self.start.byte_offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_start() {
        let pos = SourcePosition::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.byte_offset, 0);
        assert_eq!(pos, SourcePosition::default());
    }

    #[test]
    fn test_position_advance_ascii() {
        let mut pos = SourcePosition::start();
        pos.advance('a');
        pos.advance('b');
        assert_eq!(pos.column, 3);
        assert_eq!(pos.byte_offset, 2);
    }

    #[test]
    fn test_position_advance_newline() {
        let mut pos = SourcePosition::start();
        pos.advance('a');
        pos.advance('\n');
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.byte_offset, 2);
    }

    #[test]
    fn test_position_advance_multibyte() {
        let mut pos = SourcePosition::start();
        // multi-byte in UTF-8, one column each
        pos.advance('é');
        pos.advance('中');
        assert_eq!(pos.column, 3);
        assert_eq!(pos.byte_offset, 5);
    }

    #[test]
    fn test_span_len() {
        let start = SourcePosition::new(1, 3, 2);
        let end = SourcePosition::new(1, 6, 5);
        let span = SourceSpan::range(start, end);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(SourceSpan::range(start, start).is_empty());
    }
}
