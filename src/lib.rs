//! Gfn - scanner for a small arithmetic/statement language
//!
//! Converts source text into the ordered token stream a parser consumes.
//!
//! # Architecture
//!
//! ```text
//! gfn-config/  - Pure configuration data
//! gfn-core/    - Character stream, tokens, scanner
//! src/         - Facade: re-exports and logging setup
//! ```
//!
//! # Quick Start
//!
//! ```
//! use gfn::{scan, ArithOp, Token};
//!
//! let tokens = scan("x = 10 + 5;").unwrap();
//! assert_eq!(tokens[1], Token::ArithOp(ArithOp::Equal));
//! ```

use std::io::Read;

pub mod logging;

// Re-export common types
pub use gfn_config::{Config, ConfigError, LogConfig, LogFormat, LogLevel, ScannerConfig};
pub use gfn_core::lexer::core::read_source;
pub use gfn_core::{
    scan, ArithOp, CharStream, ErrorKind, LexerError, ScanError, Scanner, SourcePosition,
    SourceSpan, SpannedToken, StreamError, Token,
};
pub use logging::LoggingError;

/// Read a whole source and scan it
pub fn scan_reader<R: Read>(reader: R, config: &ScannerConfig) -> Result<Vec<Token>, ScanError> {
    Scanner::from_reader(reader, config).map(Scanner::into_tokens)
}
