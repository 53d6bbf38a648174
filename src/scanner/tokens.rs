//! Token recognition: the scan-one-token dispatch and the string/number/
//! identifier sub-scanners.

use super::Scanner;
use crate::token::{TokenKind, keyword};

impl Scanner {
    /// Scans exactly one token (or zero, for whitespace/comments) starting
    /// at `self.start == self.current`, dispatching on the first
    /// character per the specification's dispatch table.
    pub(super) fn scan_token(&mut self) {
        let c = self.advance();
        match c {
            '(' => self.emit(TokenKind::LeftParen),
            ')' => self.emit(TokenKind::RightParen),
            '{' => self.emit(TokenKind::LeftBrace),
            '}' => self.emit(TokenKind::RightBrace),
            ',' => self.emit(TokenKind::Comma),
            '.' => self.emit(TokenKind::Dot),
            '-' => self.emit(TokenKind::Minus),
            '+' => self.emit(TokenKind::Plus),
            ';' => self.emit(TokenKind::Semicolon),
            '*' => self.emit(TokenKind::Star),
            '!' => {
                let kind = if self.matches('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.emit(kind);
            }
            '=' => {
                let kind = if self.matches('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.emit(kind);
            }
            '<' => {
                let kind = if self.matches('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.emit(kind);
            }
            '>' => {
                let kind = if self.matches('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.emit(kind);
            }
            '/' => {
                if self.matches('/') {
                    self.skip_line_comment();
                } else if self.matches('*') {
                    self.skip_block_comment();
                } else {
                    self.emit(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.scan_string(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_start(c) => self.scan_identifier(),
            _ => self.report_error("Unexpected character."),
        }
    }

    /// Scans a string literal, already past the opening `"`.
    ///
    /// Multi-line strings are permitted; each embedded newline increments
    /// the line counter. Reaching end of input before the closing quote
    /// is reported as "Unterminated string." and no token is emitted.
    fn scan_string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.report_error("Unterminated string.");
            return;
        }

        // The closing quote.
        self.advance();

        let content: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        self.emit(TokenKind::String(content));
    }

    /// Scans a number literal: leading digits, then optionally a `.`
    /// followed by at least one more digit and further digits.
    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.current_lexeme();
        let value: f64 = text
            .parse()
            .expect("number lexeme scanned from ASCII digits and at most one '.' must parse");
        self.emit(TokenKind::Number(value));
    }

    /// Scans an identifier or keyword: `[A-Za-z0-9_]*` after an already-
    /// consumed leading alpha/underscore character.
    fn scan_identifier(&mut self) {
        while is_identifier_continue(self.peek()) {
            self.advance();
        }

        let text = self.current_lexeme();
        match keyword(&text) {
            Some(kind) => self.emit(kind),
            None => self.emit(TokenKind::Identifier),
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
