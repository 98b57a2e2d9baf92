//! Gfn Core - the scanner (pure logic, no IO beyond reading a source)
//!
//! Turns source text into the token stream consumed by the Gfn parser.
//! Configuration is passed explicitly via parameters, not via global state.

pub mod lexer;

// Re-export common types
pub use lexer::{
    scan, ArithOp, CharStream, ErrorKind, LexerError, ScanError, Scanner, SourcePosition,
    SourceSpan, SpannedToken, StreamError, Token,
};

// Re-export config types from gfn-config
pub use gfn_config::ScannerConfig;
