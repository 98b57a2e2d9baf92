//! Gfn token types

use std::fmt;

use serde::Serialize;

use super::core::{SourcePosition, SourceSpan};

/// Arithmetic and assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Equal,
}

impl ArithOp {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(ArithOp::Add),
            '-' => Some(ArithOp::Sub),
            '*' => Some(ArithOp::Mul),
            '/' => Some(ArithOp::Div),
            '=' => Some(ArithOp::Equal),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
            ArithOp::Mul => '*',
            ArithOp::Div => '/',
            ArithOp::Equal => '=',
        }
    }
}

/// A lexical unit handed to the parser
///
/// Keywords are not distinguished from identifiers here; that is left to the
/// parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    ArithOp(ArithOp),
    Semicolon,
    IntegerLiteral(i64),
    /// Raw text between the quotes, no escapes
    StringLiteral(String),
    Identifier(String),
}

/// Renders the token the way it is written in source
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::ArithOp(op) => write!(f, "{}", op.as_char()),
            Token::Semicolon => f.write_str(";"),
            Token::IntegerLiteral(value) => write!(f, "{}", value),
            Token::StringLiteral(text) => write!(f, "\"{}\"", text),
            Token::Identifier(name) => f.write_str(name),
        }
    }
}

/// Token plus the source range it was scanned from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: SourceSpan,
}

impl SpannedToken {
    pub fn new(token: Token, span: SourceSpan) -> Self {
        Self { token, span }
    }

    pub fn start(&self) -> SourcePosition {
        self.span.start
    }

    pub fn end(&self) -> SourcePosition {
        self.span.end
    }
}
