//! Tree-walking evaluator for Lox.
//!
//! [`Interpreter`] walks an already-parsed statement list, evaluating
//! expressions and executing statements against a chain of
//! [`crate::environment::Environment`] frames. It is the one component
//! with observable side effects (`print` writes to stdout); everything
//! upstream of it is pure data transformation.
//!
//! # Module Structure
//!
//! - [`error`] - [`RuntimeError`], the runtime diagnostic type
//! - `control_flow` - [`Unwind`], the statement-level signal `return`
//!   unwinds through
//! - `callable` - the two concrete [`crate::value::Callable`]
//!   implementors: `clock` and user-defined [`Function`]s
//! - `expr` - expression evaluation
//! - `stmt` - statement execution, including the block-scope guard
//! - [`tests`] - end-to-end interpretation scenarios (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - the AST this module interprets
//! * [`crate::environment`] - the lexical scope chain mutated here

mod callable;
mod control_flow;
mod error;
mod expr;
mod stmt;


pub use callable::{Function, NativeClock};
pub use error::RuntimeError;

use control_flow::Unwind;

use crate::ast::Stmt;
use crate::environment::Environment;
use crate::value::Value;

/// Interprets an already-parsed Lox program against a chain of lexical
/// environments.
///
/// One `Interpreter` is built per run (batch-mode file or REPL session);
/// its `globals` environment persists across every `interpret` call in a
/// REPL, so definitions from one line are visible to the next.
pub struct Interpreter {
    globals: Environment,
    environment: Environment,
}

impl Interpreter {
    /// Creates an interpreter with a fresh global environment,
    /// pre-populated with the native functions every Lox program starts
    /// with (`clock`, per spec.md §3/§4.6).
    pub fn new() -> Self {
        let globals = Environment::new();
        globals.define("clock", Value::Callable(std::rc::Rc::new(NativeClock)));
        Interpreter {
            environment: globals.clone(),
            globals,
        }
    }

    /// The root environment, kept alongside `environment` (which may be a
    /// nested child frame at any given point) mostly for clarity of
    /// intent: a future resolver pass would use this to implement proper
    /// global-vs-local variable resolution.
    #[allow(dead_code)]
    pub(crate) fn globals(&self) -> &Environment {
        &self.globals
    }

    /// Interprets `statements` in order.
    ///
    /// A `RuntimeError` escaping any statement is reported to the caller
    /// and aborts the remaining batch (remaining statements are never
    /// executed, §4.6). A top-level `return` (outside any function, which
    /// nothing short of a resolver pass rules out syntactically) simply
    /// ends interpretation early, the same as falling off the end of the
    /// statement list: there is no function call boundary to unwind to,
    /// so the carried value has nowhere to go.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => {}
                Err(Unwind::Error(error)) => return Err(error),
                Err(Unwind::Return(_)) => return Ok(()),
            }
        }
        Ok(())
    }

    /// Executes `statements` inside a fresh child environment enclosed by
    /// `env`, restoring the interpreter's previous environment on every
    /// exit path (success, a propagated `RuntimeError`, or a propagated
    /// `return`, per §5, §9).
    ///
    /// Used both for plain `{ }` blocks (child of the current
    /// environment) and for function call bodies (child of the
    /// function's captured closure). The previous environment is
    /// restored unconditionally before the result is returned, the same
    /// "evaluate then restore" shape a `try`/`finally` would give this in
    /// a language with one.
    pub(crate) fn execute_block(&mut self, statements: &[Stmt], env: Environment) -> Result<(), Unwind> {
        let previous = std::mem::replace(&mut self.environment, env);

        let result = statements.iter().try_for_each(|statement| self.execute(statement));

        self.environment = previous;
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
