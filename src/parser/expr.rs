//! Expression parsing: one method per precedence level, from loosest
//! (`assignment`) to tightest (`primary`), exactly mirroring the grammar's
//! named productions.

use super::Parser;
use super::error::ParseError;
use crate::ast::Expr;
use crate::token::TokenKind;
use crate::value::Value;

/// The call-argument limit enforced by [`Parser::finish_call`].
const MAX_ARGS: usize = 255;

impl Parser {
    /// `expression → assignment`
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// `assignment → IDENTIFIER "=" assignment | logic_or`
    ///
    /// Right-associative: parses the left side as an ordinary expression
    /// first, and only special-cases it into an `Assign` node if `=`
    /// follows. An invalid target (anything but a bare `Variable`) is
    /// reported but non-fatal: the right-hand side is still parsed and
    /// the original left expression returned, so parsing continues as if
    /// the `=` had never been there (jlox's `error()` does the same,
    /// never throwing out of this production).
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.logic_or()?;

        if self.match_any(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            return Ok(match expr {
                Expr::Variable(name) => Expr::Assign {
                    name,
                    value: Box::new(value),
                },
                other => {
                    self.report(ParseError::new("Invalid assignment target.", equals));
                    other
                }
            });
        }

        Ok(expr)
    }

    /// `logic_or → logic_and ( "or" logic_and )*`
    fn logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.logic_and()?;
        while self.match_any(&[TokenKind::Or]) {
            let op = self.previous().clone();
            let right = self.logic_and()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    /// `logic_and → equality ( "and" equality )*`
    fn logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.match_any(&[TokenKind::And]) {
            let op = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    /// `equality → comparison ( ( "==" | "!=" ) comparison )*`
    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;
        while self.match_any(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let op = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    /// `comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*`
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        while self.match_any(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let op = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    /// `term → factor ( ( "+" | "-" ) factor )*`
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        while self.match_any(&[TokenKind::Plus, TokenKind::Minus]) {
            let op = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    /// `factor → unary ( ( "*" | "/" ) unary )*`
    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        while self.match_any(&[TokenKind::Star, TokenKind::Slash]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    /// `unary → ( "-" | "!" ) unary | call`
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::Unary {
                op,
                right: Box::new(right),
            });
        }
        self.call()
    }

    /// `call → primary ( "(" arguments? ")" )*`
    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        while self.match_any(&[TokenKind::LeftParen]) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    /// `arguments → expression ( "," expression )*` (≤255 args), already
    /// past the opening `(`.
    ///
    /// Exceeding the limit reports an error at the closing `)` but still
    /// builds the `Call` node (best-effort, mirroring `assignment`'s
    /// non-fatal recovery).
    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }

        let paren = self
            .consume(&TokenKind::RightParen, "Expect ')' after arguments.")?
            .clone();

        if args.len() > MAX_ARGS {
            self.report(ParseError::new(
                format!("Can't have more than {MAX_ARGS} arguments."),
                paren.clone(),
            ));
        }

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            args,
        })
    }

    /// `primary → NUMBER | STRING | "true" | "false" | "nil"
    ///          | IDENTIFIER | "(" expression ")"`
    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&[TokenKind::False]) {
            return Ok(Expr::Literal(Value::Boolean(false)));
        }
        if self.match_any(&[TokenKind::True]) {
            return Ok(Expr::Literal(Value::Boolean(true)));
        }
        if self.match_any(&[TokenKind::Nil]) {
            return Ok(Expr::Literal(Value::Nil));
        }

        if let TokenKind::Number(n) = self.peek().kind {
            self.advance();
            return Ok(Expr::Literal(Value::Number(n)));
        }
        if let TokenKind::String(_) = self.peek().kind {
            let text = match self.advance().kind.clone() {
                TokenKind::String(s) => s,
                _ => unreachable!(),
            };
            return Ok(Expr::Literal(Value::String(text)));
        }

        if self.check(&TokenKind::Identifier) {
            return Ok(Expr::Variable(self.advance().clone()));
        }

        if self.match_any(&[TokenKind::LeftParen]) {
            let inner = self.expression()?;
            self.consume(&TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(inner)));
        }

        Err(ParseError::new("Expect expression.", self.peek().clone()))
    }
}
