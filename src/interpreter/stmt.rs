//! Statement execution.

use std::rc::Rc;

use super::control_flow::Unwind;
use super::{Function, Interpreter};
use crate::ast::Stmt;
use crate::environment::Environment;
use crate::value::Value;

impl Interpreter {
    /// Executes one statement, per the semantics of §4.6.
    ///
    /// Returns `Err(Unwind::Error(..))` for a runtime error and
    /// `Err(Unwind::Return(..))` for a `return` unwinding toward the
    /// nearest enclosing function call; both propagate through any
    /// number of enclosing blocks via `?` until something catches them
    /// ([`Interpreter::execute_block`] restores environments along the
    /// way; [`Function::call`](super::callable::Function) is what
    /// actually catches a `Return`).
    pub(crate) fn execute(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                println!("{}", value.render());
                Ok(())
            }
            Stmt::Var { name, initializer } => {
                let value = self.evaluate(initializer)?;
                self.environment.define(name.lexeme.clone(), value);
                Ok(())
            }
            Stmt::Block(statements) => {
                let child = Environment::with_enclosing(&self.environment);
                self.execute_block(statements, child)
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
            Stmt::Function { name, params, body } => {
                let function = Function::new(
                    name.clone(),
                    params.clone(),
                    Rc::new(body.clone()),
                    self.environment.clone(),
                );
                self.environment
                    .define(name.lexeme.clone(), Value::Callable(Rc::new(function)));
                Ok(())
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Err(Unwind::Return(value))
            }
        }
    }
}
