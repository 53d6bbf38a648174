//! Statement nodes.

use crate::ast::Expr;
use crate::token::Token;

/// A statement in the Lox language.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// An expression evaluated for its side effects; the value is
    /// discarded.
    Expression(Expr),
    /// `print expr;`.
    Print(Expr),
    /// `var name = initializer;`. `initializer` is `Expr::Literal(Nil)`
    /// when the source omits it (§3).
    Var { name: Token, initializer: Expr },
    /// A `{ ... }` block, introducing a child lexical scope.
    Block(Vec<Stmt>),
    /// `if (cond) then_branch else else_branch?`.
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while (cond) body`.
    While { condition: Expr, body: Box<Stmt> },
    /// `fun name(params) { body }`.
    Function {
        name: Token,
        params: Vec<Token>,
        body: Vec<Stmt>,
    },
    /// `return value?;`. `value` is `None` for a bare `return;`, which
    /// the interpreter treats as returning `Nil` (§3/§9 Open Question).
    Return { keyword: Token, value: Option<Expr> },
}
