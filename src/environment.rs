//! Lexical scope: a singly-linked chain of variable-binding frames.
//!
//! [`Environment`] is a cheap-to-clone handle (`Rc<RefCell<EnvironmentData>>`)
//! rather than an owned struct. This is what lets a [`crate::value::Callable`]
//! closure capture "the environment active when the function was declared"
//! and keep it alive by reference count past the declaring block's exit,
//! the defining mechanism behind Lox closures (§4.4, §9).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::interpreter::RuntimeError;
use crate::token::Token;
use crate::value::Value;

struct EnvironmentData {
    values: HashMap<String, Value>,
    enclosing: Option<Environment>,
}

/// A handle to one frame in the lexical scope chain.
///
/// Cloning an `Environment` clones the handle (an `Rc` bump), not the
/// underlying bindings; every clone observes the same frame.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

impl Environment {
    /// Creates a new top-level (global) environment with no enclosing
    /// frame.
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentData {
            values: HashMap::new(),
            enclosing: None,
        })))
    }

    /// Creates a fresh child frame enclosed by `parent`.
    pub fn with_enclosing(parent: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentData {
            values: HashMap::new(),
            enclosing: Some(parent.clone()),
        })))
    }

    /// Unconditionally binds `name` to `value` in this frame. Redefining a
    /// name already present in the same scope silently replaces it,
    /// that's Lox's stated rule, not an error.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().values.insert(name.into(), value);
    }

    /// Looks up `name_token.lexeme`, walking outward through enclosing
    /// frames. Fails with `RuntimeError("Undefined variable 'X'.")` if no
    /// frame in the chain defines it.
    pub fn get(&self, name_token: &Token) -> Result<Value, RuntimeError> {
        let data = self.0.borrow();
        if let Some(value) = data.values.get(&name_token.lexeme) {
            return Ok(value.clone());
        }
        match &data.enclosing {
            Some(enclosing) => enclosing.get(name_token),
            None => Err(undefined_variable(name_token)),
        }
    }

    /// Walks the chain to the first frame already defining `name_token`
    /// and overwrites the binding there. Assignment never creates a new
    /// binding: a miss all the way to the root is the same
    /// "Undefined variable" error as `get`.
    pub fn assign(&self, name_token: &Token, value: Value) -> Result<(), RuntimeError> {
        let mut data = self.0.borrow_mut();
        if data.values.contains_key(&name_token.lexeme) {
            data.values.insert(name_token.lexeme.clone(), value);
            return Ok(());
        }
        match &data.enclosing {
            Some(enclosing) => enclosing.assign(name_token, value),
            None => Err(undefined_variable(name_token)),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

fn undefined_variable(name_token: &Token) -> RuntimeError {
    RuntimeError::new(
        format!("Undefined variable '{}'.", name_token.lexeme),
        name_token.clone(),
    )
}
