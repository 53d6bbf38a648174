//! Recursive-descent parser for Lox.
//!
//! This module turns the scanner's token stream into an AST of [`Stmt`]
//! nodes, one statement at a time, following the grammar's precedence
//! chain directly: each level of `expr.rs` is a named method
//! (`assignment`, `logic_or`, ..., `primary`) that calls the next-tighter
//! level exactly once before looping on its own operators.
//!
//! # Module Structure
//!
//! - [`error`] - the [`ParseError`] type
//! - `helpers` - token navigation, `consume`, and error-recovery
//!   synchronization
//! - `expr` - the expression grammar
//! - `stmt` - the statement/declaration grammar, including `for`
//!   desugaring
//! - `tests` - unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::scanner`] - produces the token stream consumed here
//! * [`crate::ast`] - defines the `Expr`/`Stmt` types produced here
//! * [`crate::interpreter`] - consumes the statement list this module
//!   returns

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::ast::Stmt;
use crate::token::Token;

/// A recursive-descent parser over a token stream.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    /// Errors reported without aborting the production that found them
    /// (invalid assignment targets, over-limit call arguments), alongside
    /// the ones `parse()` collects from a `declaration()` that threw and
    /// had to synchronize.
    errors: Vec<ParseError>,
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    /// Panics if the token list is empty. The scanner always produces at
    /// least an `Eof` token, so this never fires on scanner output.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "token list must not be empty");
        Parser {
            tokens,
            current: 0,
            errors: Vec::new(),
        }
    }

    /// Parses the entire token stream into a statement list.
    ///
    /// Per the output contract: if any syntax error fired, the returned
    /// AST is `None` and the driver skips evaluation entirely; otherwise
    /// it's `Some` and covers the whole input up to `Eof`. Either way,
    /// every error encountered is returned alongside, since parsing keeps
    /// going (via [`Parser::synchronize`]) after a fatal one, and a
    /// non-fatal one (§4.2's invalid-assignment-target and over-limit
    /// call-argument cases) never interrupts parsing in the first place.
    pub fn parse(mut self) -> (Option<Vec<Stmt>>, Vec<ParseError>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }

        if self.errors.is_empty() {
            (Some(statements), self.errors)
        } else {
            (None, self.errors)
        }
    }

    /// Records a non-fatal error without aborting the production it was
    /// found in, per §4.2's "report ... (non-fatal)" cases.
    pub(super) fn report(&mut self, error: ParseError) {
        self.errors.push(error);
    }
}
