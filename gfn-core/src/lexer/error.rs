//! Lexer error types
//!
//! Every lexical error aborts the scan; no partial token stream survives.

use super::core::{SourcePosition, StreamError};

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Matches no whitespace, letter, digit, quote, `;` or operator
    #[error("Scanner encountered unrecognized character '{0}'")]
    UnrecognizedCharacter(char),

    /// Input ended before the closing `"`
    #[error("unterminated string literal")]
    UnterminatedStringLiteral,

    /// Digit run does not fit in an `i64`; keeps only the leading digits
    #[error("integer literal '{prefix}...' ({digits} digits) is too large")]
    IntegerOverflow { prefix: String, digits: usize },
}

impl ErrorKind {
    /// Leading digits kept in an overflow error
    pub const OVERFLOW_PREFIX_LEN: usize = 20;

    /// Overflow error for an all-ASCII digit run
    pub fn integer_overflow(digits: &str) -> Self {
        ErrorKind::IntegerOverflow {
            prefix: digits.chars().take(Self::OVERFLOW_PREFIX_LEN).collect(),
            digits: digits.len(),
        }
    }
}

/// Lexical error with the position where the offending construct starts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{}:{}] {}", .position.line, .position.column, .kind)]
pub struct LexerError {
    pub kind: ErrorKind,
    pub position: SourcePosition,
}

impl LexerError {
    pub fn at(kind: ErrorKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// Line number (1-based)
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// Column number (1-based)
    pub fn column(&self) -> usize {
        self.position.column
    }
}

/// Failure scanning a source read from an `io::Read`
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Lex(#[from] LexerError),

    #[error(transparent)]
    Stream(#[from] StreamError),
}
