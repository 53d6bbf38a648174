//! Statement and declaration parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, Stmt};
use crate::token::TokenKind;
use crate::value::Value;

/// The call-argument limit enforced by [`Parser::function_params`],
/// mirroring [`super::expr::MAX_ARGS`] on the call side.
const MAX_PARAMS: usize = 255;

impl Parser {
    /// `declaration → varDecl | funDecl | statement`
    ///
    /// The single entry point `parse()` (in `mod.rs`) calls this in a
    /// loop, synchronizing after any error so one bad statement doesn't
    /// abort the whole file.
    pub(super) fn declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.match_any(&[TokenKind::Var]) {
            return self.var_declaration();
        }
        if self.match_any(&[TokenKind::Fun]) {
            return self.function_declaration("function");
        }
        self.statement()
    }

    /// `varDecl → "var" IDENTIFIER ( "=" expression )? ";"`
    ///
    /// A missing initializer defaults to `Expr::Literal(Nil)`, matching
    /// the AST shape every other pass expects to see.
    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume_identifier("Expect variable name.")?;

        let initializer = if self.match_any(&[TokenKind::Equal]) {
            self.expression()?
        } else {
            Expr::Literal(Value::Nil)
        };

        self.consume(&TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    /// `funDecl → "fun" IDENTIFIER "(" params? ")" block`
    ///
    /// `kind` names the declaration in error messages ("function"); kept
    /// as a parameter the way the source grammar anticipates methods
    /// reusing this same production under a different label.
    fn function_declaration(&mut self, kind: &str) -> Result<Stmt, ParseError> {
        let name = self.consume_identifier(&format!("Expect {kind} name."))?;
        self.consume(&TokenKind::LeftParen, &format!("Expect '(' after {kind} name."))?;

        let mut params = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_PARAMS {
                    return Err(ParseError::new(
                        format!("Can't have more than {MAX_PARAMS} parameters."),
                        self.peek().clone(),
                    ));
                }
                params.push(self.consume_identifier("Expect parameter name.")?);
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        self.consume(&TokenKind::RightParen, "Expect ')' after parameters.")?;

        self.consume(&TokenKind::LeftBrace, &format!("Expect '{{' before {kind} body."))?;
        let body = self.block()?;

        Ok(Stmt::Function { name, params, body })
    }

    /// `statement → exprStmt | printStmt | block | ifStmt
    ///            | whileStmt | forStmt | returnStmt`
    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_any(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.match_any(&[TokenKind::Return]) {
            return self.return_statement();
        }
        if self.match_any(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block(self.block()?));
        }
        if self.match_any(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.match_any(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.match_any(&[TokenKind::For]) {
            return self.for_statement();
        }
        self.expression_statement()
    }

    /// `exprStmt → expression ";"`
    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume(&TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    /// `printStmt → "print" expression ";"`, already past `print`.
    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.consume(&TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    /// `returnStmt → "return" expression? ";"`, already past `return`.
    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous().clone();

        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };

        self.consume(&TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return { keyword, value })
    }

    /// `block → "{" declaration* "}"`, already past the opening `{`.
    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.declaration()?);
        }

        self.consume(&TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    /// `ifStmt → "if" "(" expression ")" statement ( "else" statement )?`,
    /// already past `if`.
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(&TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(&TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_any(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// `whileStmt → "while" "(" expression ")" statement`, already past
    /// `while`.
    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(&TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(&TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// `forStmt → "for" "(" ( varDecl | exprStmt | ";" )
    ///                      expression? ";"
    ///                      expression? ")" statement`, already past
    /// `for`.
    ///
    /// Desugars into `{ init; while (cond) { body; incr; } }` right here
    /// in the parser; the interpreter never sees a `for` loop, only the
    /// `Block`/`While` nodes it already knows how to run. A missing
    /// condition defaults to `Literal(true)`; a missing `init`/`incr` is
    /// simply omitted from the rewritten tree.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(&TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_any(&[TokenKind::Semicolon]) {
            None
        } else if self.match_any(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            Expr::Literal(Value::Boolean(true))
        } else {
            self.expression()?
        };
        self.consume(&TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(&TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        body = Stmt::While {
            condition,
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }
}
