//! Character stream abstraction
//!
//! Wraps any `char` iterator with one character of lookahead and position
//! tracking. Source held behind an `io::Read` is loaded and UTF-8 validated
//! up front by [`read_source`].

use std::io::Read;
use std::iter::Peekable;
use std::str::Chars;

use tracing::warn;

use super::position::SourcePosition;

/// Errors raised while loading source text
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("I/O error while reading source: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 decode error at byte offset {0}")]
    Utf8Error(usize),
}

/// Character stream
///
/// The scanner owns the stream exclusively while it runs.
pub struct CharStream<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    /// Position of the next unconsumed character
    position: SourcePosition,
}

impl<'a> CharStream<Chars<'a>> {
    /// Stream over an in-memory string
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> CharStream<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
            position: SourcePosition::start(),
        }
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Look at the next character without consuming it
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consume the next character
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position.advance(c);
        Some(c)
    }

    /// Check whether the next character matches (does not consume)
    pub fn check(&mut self, expected: char) -> bool {
        self.peek() == Some(expected)
    }
}

/// Read a whole source into memory, rejecting invalid UTF-8
pub fn read_source<R: Read>(mut reader: R, capacity: usize) -> Result<String, StreamError> {
    let mut bytes = Vec::with_capacity(capacity);
    reader.read_to_end(&mut bytes).map_err(|e| {
        warn!(target: "gfn::lexer::stream", error = %e, "Failed to read source");
        StreamError::Io(e)
    })?;

    String::from_utf8(bytes).map_err(|e| {
        let offset = e.utf8_error().valid_up_to();
        warn!(target: "gfn::lexer::stream", offset, "Source is not valid UTF-8");
        StreamError::Utf8Error(offset)
    })
}
