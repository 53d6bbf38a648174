//! Whitespace and comment handling.

use super::Scanner;

impl Scanner {
    /// Consumes a `//` line comment up to (but not including) the
    /// newline.
    pub(super) fn skip_line_comment(&mut self) {
        while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
        }
    }

    /// Consumes a C-style `/* ... */` block comment, already past the
    /// opening `/*`.
    ///
    /// Embedded newlines increment the line counter. A `/*` encountered
    /// inside the comment is reported as "Nested comments disallowed."
    /// (keeping the lexical grammar regular) and scanning continues past
    /// it rather than aborting. Reaching end of input before the closing
    /// `*/` is reported as "Unterminated comment."
    pub(super) fn skip_block_comment(&mut self) {
        loop {
            if self.is_at_end() {
                self.report_error("Unterminated comment.");
                return;
            }
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return;
            }
            if self.peek() == '/' && self.peek_next() == '*' {
                self.report_error("Nested comments disallowed.");
                self.advance();
                self.advance();
                continue;
            }
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }
    }
}
