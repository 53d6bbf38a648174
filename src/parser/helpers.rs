//! Token navigation and basic parsing operations shared by the expression
//! and statement grammars.

use super::Parser;
use super::error::ParseError;
use crate::token::{Token, TokenKind};

impl Parser {
    /// Returns a reference to the current (not yet consumed) token.
    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the most recently consumed token.
    ///
    /// # Panics
    /// Panics if called before any token has been consumed. Every grammar
    /// rule calls `advance` before relying on `previous`, so this never
    /// fires in practice.
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    /// Returns `true` once the current token is `Eof`.
    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes and returns the current token, unless already at `Eof`.
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Returns `true` if the current token's kind equals `kind`, without
    /// consuming it.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        !self.is_at_end() && &self.peek().kind == kind
    }

    /// If the current token matches any of `kinds`, consumes it and
    /// returns `true`; otherwise leaves the cursor untouched.
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Consumes the current token if it matches `kind`, else reports
    /// `message` as a [`ParseError`] anchored at the current token.
    pub(super) fn consume(&mut self, kind: &TokenKind, message: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::new(message, self.peek().clone()))
        }
    }

    /// Consumes an `Identifier` token and returns it, or reports `message`.
    pub(super) fn consume_identifier(&mut self, message: &str) -> Result<Token, ParseError> {
        if self.check(&TokenKind::Identifier) {
            Ok(self.advance().clone())
        } else {
            Err(ParseError::new(message, self.peek().clone()))
        }
    }

    /// Recovers from a parse error by discarding tokens until a plausible
    /// statement boundary: either a consumed `;`, or a token that starts a
    /// new declaration/statement.
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
