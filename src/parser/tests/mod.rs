//! Parser unit tests, organized by concern.
//!
//! - [`expr`] - precedence, associativity, and grouping
//! - [`stmt`] - declarations, control flow, and `for` desugaring
//! - [`functions`] - function declarations and `return`
//! - [`errors`] - error messages and recovery/synchronization
//! - [`helpers`] - token-navigation edge cases

mod errors;
mod helpers;

use crate::ast::Stmt;
use crate::ast::printer::AstPrinter;
use crate::parser::{ParseError, Parser};
use crate::scanner::Scanner;

/// Scans and parses `source`, returning the raw `(ast, errors)` pair.
fn parse_source(source: &str) -> (Option<Vec<Stmt>>, Vec<ParseError>) {
    let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
    assert!(
        scan_errors.is_empty(),
        "unexpected scan errors for {:?}: {:?}",
        source,
        scan_errors.iter().map(|e| e.to_string()).collect::<Vec<_>>()
    );
    Parser::new(tokens).parse()
}

/// Parses `source` and asserts it produced no errors, returning the AST.
fn parse_ok(source: &str) -> Vec<Stmt> {
    let (ast, errors) = parse_source(source);
    assert!(
        errors.is_empty(),
        "unexpected parse errors for {:?}: {:?}",
        source,
        errors.iter().map(|e| e.to_string()).collect::<Vec<_>>()
    );
    ast.expect("no errors reported, so the AST must be Some")
}

/// Parses `source` and asserts it failed, returning the error list.
fn parse_err(source: &str) -> Vec<ParseError> {
    let (ast, errors) = parse_source(source);
    assert!(ast.is_none(), "expected parsing to fail for {:?}", source);
    assert!(!errors.is_empty());
    errors
}

/// Parses a single expression statement (`{source_expr};`) and renders it
/// with [`AstPrinter`], which is the simplest way to assert on shape and
/// precedence without hand-building `Expr` trees in every test.
fn print_expr(source_expr: &str) -> String {
    let wrapped = format!("{source_expr};");
    let stmts = parse_ok(&wrapped);
    match stmts.as_slice() {
        [Stmt::Expression(expr)] => AstPrinter::print(expr),
        other => panic!("expected a single expression statement, got {other:?}"),
    }
}
