//! Runtime error type.

use crate::token::Token;

/// An error raised while executing an already-parsed program.
///
/// Carries the offending [`Token`] (for line attribution) rather than a
/// bare line number, mirroring [`crate::parser::ParseError`]; runtime
/// diagnostics never need the `" at '...'"` disambiguation parse errors
/// do, so `Display` always renders an empty `{where}`.
#[derive(Debug)]
pub struct RuntimeError {
    pub message: String,
    pub token: Token,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>, token: Token) -> Self {
        RuntimeError {
            message: message.into(),
            token,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.token.line, self.message)
    }
}

impl std::error::Error for RuntimeError {}
