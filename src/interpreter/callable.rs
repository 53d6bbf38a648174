//! The two kinds of callable Lox value: native functions supplied by the
//! host, and user-defined functions declared with `fun`.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use super::control_flow::Unwind;
use super::{Interpreter, RuntimeError};
use crate::ast::Stmt;
use crate::environment::Environment;
use crate::token::Token;
use crate::value::{Callable, Value};

/// `clock`, the one native function every global environment starts
/// with. Zero arguments, returns seconds since the Unix epoch.
pub struct NativeClock;

impl Callable for NativeClock {
    fn arity(&self) -> usize {
        0
    }

    fn call(&self, _interpreter: &mut Interpreter, _args: Vec<Value>) -> Result<Value, RuntimeError> {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();
        Ok(Value::Number(seconds))
    }

    fn render(&self) -> String {
        "<native fn>".to_string()
    }
}

/// A user-defined Lox function: its declaration plus the environment that
/// was active when it was declared.
///
/// Capturing `closure` (not the environment active at the *call* site) is
/// what makes closures work: a function returned out of an enclosing
/// scope still sees the variables that were in scope where it was
/// written, kept alive by the `Rc` inside [`Environment`].
pub struct Function {
    name: Token,
    params: Vec<Token>,
    body: Rc<Vec<Stmt>>,
    closure: Environment,
}

impl Function {
    pub fn new(name: Token, params: Vec<Token>, body: Rc<Vec<Stmt>>, closure: Environment) -> Self {
        Function {
            name,
            params,
            body,
            closure,
        }
    }
}

impl Callable for Function {
    fn arity(&self) -> usize {
        self.params.len()
    }

    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let call_env = Environment::with_enclosing(&self.closure);
        for (param, arg) in self.params.iter().zip(args) {
            call_env.define(param.lexeme.clone(), arg);
        }

        match interpreter.execute_block(&self.body, call_env) {
            Ok(()) => Ok(Value::Nil),
            Err(Unwind::Return(value)) => Ok(value),
            Err(Unwind::Error(error)) => Err(error),
        }
    }

    fn render(&self) -> String {
        format!("<fn {}>", self.name.lexeme)
    }
}
