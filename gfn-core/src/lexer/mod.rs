//! Gfn lexer
//!
//! Single pass over a peekable character stream with one character of
//! lookahead. The whole input is scanned eagerly: a [`Scanner`] either holds
//! the complete token stream or was never built.

pub mod core;
pub mod error;
pub mod scanner;
pub mod token;

pub use core::{CharStream, SourcePosition, SourceSpan, StreamError};
pub use error::{ErrorKind, LexerError, ScanError};
pub use scanner::{scan, Scanner};
pub use token::{ArithOp, SpannedToken, Token};
