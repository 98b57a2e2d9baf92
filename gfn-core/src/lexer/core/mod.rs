//! Character-level building blocks for the scanner

pub mod position;
pub mod stream;

pub use position::{SourcePosition, SourceSpan};
pub use stream::{read_source, CharStream, StreamError};
