//! The non-local control-flow signal statement execution can unwind with.
//!
//! Expression evaluation only ever fails with a plain [`RuntimeError`]
//! (see [`crate::value::Callable::call`]'s signature); statement execution
//! can additionally unwind with a `return` value, which must propagate
//! past any number of enclosing blocks until it reaches the function call
//! boundary that catches it. `Unwind` is that second, statement-level
//! failure type.

use super::RuntimeError;
use crate::value::Value;

/// What interrupted a statement sequence before it ran to completion.
pub(super) enum Unwind {
    /// A runtime error, to be reported and to terminate the batch.
    Error(RuntimeError),
    /// A `return value?;` unwinding toward the nearest function call.
    Return(Value),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}
