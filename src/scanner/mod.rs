//! Lexical analyzer for Lox.
//!
//! This module provides the [`Scanner`] struct which converts source code
//! text into a stream of [`Token`]s for the parser.
//!
//! # Overview
//!
//! The scanner performs the following tasks:
//! - Scans the input character by character
//! - Recognizes identifiers, keywords, string and number literals
//! - Tracks line numbers for error reporting
//! - Skips whitespace, line comments (`//`), and C-style block comments (`/* */`)
//!
//! # Failure semantics
//!
//! Lexical errors are reported but scanning continues to the end of
//! input, surfacing every error in one pass rather than stopping at the
//! first one (§4.1, §7). No exceptions are thrown upward; callers inspect
//! [`Scanner::scan_tokens`]'s returned error list.
//!
//! # Module Structure
//!
//! - [`error`] - [`ScanError`], the lexical error type
//! - `cursor` - position tracking and character navigation
//! - `skip` - whitespace and comment handling
//! - `tokens` - token recognition and reading
//! - `tests` - unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - token type definitions
//! * [`crate::parser`] - the parser that consumes this module's output

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::ScanError;

use crate::token::{Token, TokenKind};

/// A lexical analyzer that tokenizes Lox source code.
///
/// Maintains three indices over the source: `start` (the beginning of the
/// lexeme currently being scanned), `current` (the next unread
/// character), and `line` (the running 1-based line counter). Built once
/// per source string and consumed by [`Scanner::scan_tokens`].
pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
    start: usize,
    current: usize,
    line: usize,
}

impl Scanner {
    /// Creates a new `Scanner` over `source`.
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the entire input, returning the token stream (always ending
    /// in exactly one `Eof`) and any lexical errors encountered.
    ///
    /// Scanning never stops early on an error; every error in the source
    /// is collected, matching the "had-error, but keep going" failure
    /// semantics of §4.1/§7. A non-empty error list means the caller
    /// should treat the token stream as unusable (the driver skips
    /// parsing entirely per §6/§7) even though one was produced.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<ScanError>) {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        tracing::trace!(token_count = self.tokens.len(), "scan complete");
        (self.tokens, self.errors)
    }

    fn emit(&mut self, kind: TokenKind) {
        let lexeme = self.current_lexeme();
        tracing::trace!(?kind, %lexeme, line = self.line, "token");
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }

    fn report_error(&mut self, message: impl Into<String>) {
        self.errors.push(ScanError::new(message, self.line));
    }
}
