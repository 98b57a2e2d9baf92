//! Gfn scanner
//!
//! Dispatches on one character of lookahead:
//! - whitespace is skipped
//! - letter or `_` starts an identifier
//! - `"` starts a string literal
//! - ASCII digit starts an integer literal
//! - `;` and `+ - * / =` are single-character tokens
//!
//! Each mode accumulates into its own local buffer and leaves the boundary
//! character unconsumed for the next dispatch.

use std::io::Read;

use gfn_config::ScannerConfig;
use tracing::{debug, trace, warn};
use unicode_general_category::{get_general_category, GeneralCategory};

use super::core::{read_source, CharStream, SourcePosition, SourceSpan};
use super::error::{ErrorKind, LexerError, ScanError};
use super::token::{ArithOp, SpannedToken, Token};

/// Fully materialized token stream
///
/// Built once from a character source; the tokens never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanner {
    tokens: Vec<Token>,
    /// `spans[i]` is the source range of `tokens[i]`
    spans: Vec<SourceSpan>,
}

impl Scanner {
    /// Scan the whole stream
    pub fn new<I: Iterator<Item = char>>(stream: CharStream<I>) -> Result<Self, LexerError> {
        trace!(target: "gfn::lexer::scanner", "Creating new Scanner");
        let (tokens, spans) = ScanState::new(stream).run()?;
        Ok(Self { tokens, spans })
    }

    pub fn from_source(source: &str) -> Result<Self, LexerError> {
        Self::new(CharStream::from_source(source))
    }

    /// Read the whole source, then scan it
    pub fn from_reader<R: Read>(reader: R, config: &ScannerConfig) -> Result<Self, ScanError> {
        let source = read_source(reader, config.read_capacity)?;
        debug!(target: "gfn::lexer::scanner", bytes = source.len(), "Loaded source");
        Ok(Self::from_source(&source)?)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn spans(&self) -> &[SourceSpan] {
        &self.spans
    }

    /// Tokens paired with their source ranges
    pub fn spanned_tokens(&self) -> impl Iterator<Item = SpannedToken> + '_ {
        self.tokens
            .iter()
            .zip(&self.spans)
            .map(|(token, span)| SpannedToken::new(token.clone(), *span))
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a Scanner {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Scan `source` and return its tokens
pub fn scan(source: &str) -> Result<Vec<Token>, LexerError> {
    Scanner::from_source(source).map(Scanner::into_tokens)
}

/// Letter (Lu, Ll, Lt, Lm, Lo) or underscore; digits are excluded
fn is_identifier_char(c: char) -> bool {
    c == '_' || is_letter(c)
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// State of a single scan, dropped when the scan ends
struct ScanState<I: Iterator<Item = char>> {
    stream: CharStream<I>,
    /// Start of the token being scanned
    token_start: SourcePosition,
    tokens: Vec<Token>,
    spans: Vec<SourceSpan>,
}

impl<I: Iterator<Item = char>> ScanState<I> {
    fn new(stream: CharStream<I>) -> Self {
        Self {
            stream,
            token_start: SourcePosition::start(),
            tokens: Vec::new(),
            spans: Vec::new(),
        }
    }

    fn run(mut self) -> Result<(Vec<Token>, Vec<SourceSpan>), LexerError> {
        while let Some(c) = self.stream.peek() {
            self.token_start = self.stream.position();

            let token = if c.is_whitespace() {
                self.stream.advance();
                continue;
            } else if is_identifier_char(c) {
                self.scan_identifier()
            } else if c == '"' {
                self.scan_string()?
            } else if c.is_ascii_digit() {
                self.scan_number()?
            } else if c == ';' {
                self.stream.advance();
                Token::Semicolon
            } else {
                self.scan_arith(c)?
            };

            self.emit(token);
        }

        debug!(
            target: "gfn::lexer::scanner",
            count = self.tokens.len(),
            "Scan complete"
        );
        Ok((self.tokens, self.spans))
    }

    fn emit(&mut self, token: Token) {
        let span = SourceSpan::range(self.token_start, self.stream.position());
        trace!(
            target: "gfn::lexer::scanner",
            ?token,
            line = span.start.line,
            column = span.start.column,
            "Produced token"
        );
        self.tokens.push(token);
        self.spans.push(span);
    }

    fn error(&self, kind: ErrorKind) -> LexerError {
        let err = LexerError::at(kind, self.token_start);
        warn!(target: "gfn::lexer::scanner", error = %err, "Lex error, aborting scan");
        err
    }

    fn scan_identifier(&mut self) -> Token {
        trace!(target: "gfn::lexer::scanner", "Entering identifier mode");
        let mut name = String::new();

        while let Some(c) = self.stream.peek() {
            if !is_identifier_char(c) {
                break;
            }
            name.push(c);
            self.stream.advance();
        }

        Token::Identifier(name)
    }

    fn scan_string(&mut self) -> Result<Token, LexerError> {
        trace!(target: "gfn::lexer::scanner", "Entering string mode");
        self.stream.advance(); // opening quote
        let mut text = String::new();

        while !self.stream.check('"') {
            match self.stream.advance() {
                Some(c) => text.push(c),
                None => return Err(self.error(ErrorKind::UnterminatedStringLiteral)),
            }
        }

        self.stream.advance(); // closing quote
        Ok(Token::StringLiteral(text))
    }

    fn scan_number(&mut self) -> Result<Token, LexerError> {
        trace!(target: "gfn::lexer::scanner", "Entering number mode");
        let mut digits = String::new();

        while let Some(c) = self.stream.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.stream.advance();
        }

        // only ASCII digits were accumulated, so parsing fails on overflow alone
        match digits.parse::<i64>() {
            Ok(value) => Ok(Token::IntegerLiteral(value)),
            Err(_) => Err(self.error(ErrorKind::integer_overflow(&digits))),
        }
    }

    fn scan_arith(&mut self, c: char) -> Result<Token, LexerError> {
        match ArithOp::from_char(c) {
            Some(op) => {
                self.stream.advance();
                Ok(Token::ArithOp(op))
            }
            None => Err(self.error(ErrorKind::UnrecognizedCharacter(c))),
        }
    }
}
