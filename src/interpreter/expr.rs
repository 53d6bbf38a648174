//! Expression evaluation.

use super::{Interpreter, RuntimeError};
use crate::ast::Expr;
use crate::token::TokenKind;
use crate::value::Value;

impl Interpreter {
    /// Evaluates `expr` to a [`Value`], per the semantics of §4.5/§4.6.
    pub(crate) fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, right } => self.evaluate_unary(op, right),
            Expr::Binary { left, op, right } => self.evaluate_binary(left, op, right),
            Expr::Logical { left, op, right } => self.evaluate_logical(left, op, right),
            Expr::Variable(name) => self.environment.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            }
            Expr::Call { callee, paren, args } => self.evaluate_call(callee, paren, args),
        }
    }

    fn evaluate_unary(&mut self, op: &crate::token::Token, right: &Expr) -> Result<Value, RuntimeError> {
        let right = self.evaluate(right)?;
        match op.kind {
            TokenKind::Minus => Ok(Value::Number(-expect_number(&right, op)?)),
            TokenKind::Bang => Ok(Value::Boolean(!right.is_truthy())),
            _ => unreachable!("parser only produces Minus/Bang as unary operators"),
        }
    }

    /// Evaluates `left` before `right`, exactly as §4.6 specifies.
    fn evaluate_binary(
        &mut self,
        left: &Expr,
        op: &crate::token::Token,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match op.kind {
            TokenKind::Plus => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
                _ => Err(RuntimeError::new(
                    "Operands must be two numbers or two strings.",
                    op.clone(),
                )),
            },
            TokenKind::Minus => Ok(Value::Number(expect_number(&left, op)? - expect_number(&right, op)?)),
            TokenKind::Star => Ok(Value::Number(expect_number(&left, op)? * expect_number(&right, op)?)),
            TokenKind::Slash => Ok(Value::Number(expect_number(&left, op)? / expect_number(&right, op)?)),
            TokenKind::Greater => Ok(Value::Boolean(expect_number(&left, op)? > expect_number(&right, op)?)),
            TokenKind::GreaterEqual => {
                Ok(Value::Boolean(expect_number(&left, op)? >= expect_number(&right, op)?))
            }
            TokenKind::Less => Ok(Value::Boolean(expect_number(&left, op)? < expect_number(&right, op)?)),
            TokenKind::LessEqual => {
                Ok(Value::Boolean(expect_number(&left, op)? <= expect_number(&right, op)?))
            }
            TokenKind::EqualEqual => Ok(Value::Boolean(left.lox_eq(&right))),
            TokenKind::BangEqual => Ok(Value::Boolean(!left.lox_eq(&right))),
            _ => unreachable!("parser only produces arithmetic/comparison/equality operators as Binary"),
        }
    }

    /// `and`/`or` short-circuit and return the operand value itself, not a
    /// coerced boolean (§4.5).
    fn evaluate_logical(
        &mut self,
        left: &Expr,
        op: &crate::token::Token,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;
        match op.kind {
            TokenKind::And if !left.is_truthy() => Ok(left),
            TokenKind::Or if left.is_truthy() => Ok(left),
            TokenKind::And | TokenKind::Or => self.evaluate(right),
            _ => unreachable!("parser only produces And/Or as logical operators"),
        }
    }

    fn evaluate_call(
        &mut self,
        callee: &Expr,
        paren: &crate::token::Token,
        args: &[Expr],
    ) -> Result<Value, RuntimeError> {
        let callee = self.evaluate(callee)?;

        let mut evaluated_args = Vec::with_capacity(args.len());
        for arg in args {
            evaluated_args.push(self.evaluate(arg)?);
        }

        let Value::Callable(callable) = callee else {
            return Err(RuntimeError::new(
                "Can only call functions and classes.",
                paren.clone(),
            ));
        };

        if callable.arity() != evaluated_args.len() {
            return Err(RuntimeError::new(
                format!(
                    "Expected {} arguments but got {}.",
                    callable.arity(),
                    evaluated_args.len()
                ),
                paren.clone(),
            ));
        }

        callable.call(self, evaluated_args)
    }
}

fn expect_number(value: &Value, op: &crate::token::Token) -> Result<f64, RuntimeError> {
    match value {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError::new("Operands must be numbers.", op.clone())),
    }
}
