//! Test helpers
//!
//! Shorthand constructors and a renderer for comparing token streams

use gfn::{ArithOp, Token};

pub fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

pub fn string(text: &str) -> Token {
    Token::StringLiteral(text.to_string())
}

pub fn int(value: i64) -> Token {
    Token::IntegerLiteral(value)
}

pub fn op(c: char) -> Token {
    Token::ArithOp(ArithOp::from_char(c).expect("not an operator"))
}

/// Render tokens back to source, one space apart
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
