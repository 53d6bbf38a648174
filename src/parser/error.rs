//! Parse error type.

use crate::token::{Token, TokenKind};

/// An error that occurred during parsing.
///
/// `ParseError` carries the full offending [`Token`], not just a line,
/// because the diagnostic format disambiguates an EOF-anchored error
/// (`" at end"`) from one anchored at a concrete lexeme (`" at '...'"`).
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub token: Token,
}

impl ParseError {
    pub fn new(message: impl Into<String>, token: Token) -> Self {
        ParseError {
            message: message.into(),
            token,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = if self.token.kind == TokenKind::Eof {
            " at end".to_string()
        } else {
            format!(" at '{}'", self.token.lexeme)
        };
        write!(f, "[line {}] Error{}: {}", self.token.line, location, self.message)
    }
}

impl std::error::Error for ParseError {}
