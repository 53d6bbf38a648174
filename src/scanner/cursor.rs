//! Position tracking and character navigation for the scanner.

use super::Scanner;

impl Scanner {
    /// True once `current` has run past the end of the source.
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consumes and returns the character at `current`, advancing past it.
    pub(super) fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// Returns the character at `current` without consuming it, or `'\0'`
    /// at end of input.
    pub(super) fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Returns the character one past `current` without consuming
    /// anything, or `'\0'` if that's past the end of input.
    pub(super) fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    /// Consumes the character at `current` if it equals `expected`,
    /// returning whether it did. Used to disambiguate one- vs
    /// two-character tokens (`!` vs `!=`, etc.).
    pub(super) fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// The exact source slice from `start` to `current`.
    pub(super) fn current_lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }
}
