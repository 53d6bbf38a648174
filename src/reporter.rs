//! Diagnostic reporting: the single place that turns the three error
//! kinds (§7) into the one-line stderr format §6 specifies, and tracks
//! the "had-error" flags the driver gates later pipeline stages on.
//!
//! Each pipeline stage (scanner, parser, interpreter) already collects
//! its own typed errors and returns them to its caller rather than
//! reaching into a shared reporter mid-pass (§4.1/§4.2/§4.6); this
//! keeps every stage testable in isolation, the way `src/scanner/tests`
//! and `src/parser/tests` already do. [`Reporter`] is what `main.rs`
//! hands those errors to afterward, centralizing the textual rendering
//! and exit-code bookkeeping in one place instead of duplicating
//! `eprintln!` calls at every call site.

use crate::interpreter::RuntimeError;
use crate::parser::ParseError;
use crate::scanner::ScanError;

/// Receives diagnostics from every pipeline stage and renders them to
/// stderr, tracking whether a lexical/syntactic error or a runtime error
/// has been seen.
///
/// `had_error` is cleared between REPL lines; `had_runtime_error` is not
/// (§6). A REPL session that has hit a runtime error once continues to
/// accept input, but the process still exits `70` if it was the last
/// thing that happened in batch mode.
#[derive(Default)]
pub struct Reporter {
    had_error: bool,
    had_runtime_error: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Renders every scan error and flips `had_error`.
    pub fn report_scan_errors(&mut self, errors: &[ScanError]) {
        for error in errors {
            eprintln!("{error}");
            self.had_error = true;
        }
    }

    /// Renders every parse error and flips `had_error`.
    pub fn report_parse_errors(&mut self, errors: &[ParseError]) {
        for error in errors {
            eprintln!("{error}");
            self.had_error = true;
        }
    }

    /// Renders a runtime error and flips `had_runtime_error`.
    pub fn report_runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{error}");
        self.had_runtime_error = true;
    }

    /// Whether any lexical or syntactic error has been reported since the
    /// last [`Reporter::reset_error`].
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Whether any runtime error has ever been reported.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears `had_error` for the next REPL line. `had_runtime_error` is
    /// intentionally untouched (§6).
    pub fn reset_error(&mut self) {
        self.had_error = false;
    }
}
