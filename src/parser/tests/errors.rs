//! Error messages, anchoring, and synchronization.

use super::*;
use crate::token::TokenKind;

#[test]
fn missing_semicolon_is_reported() {
    let errors = parse_err("1 + 2");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Expect ';' after expression.");
}

#[test]
fn error_at_eof_renders_at_end() {
    let errors = parse_err("print 1");
    assert_eq!(errors[0].token.kind, TokenKind::Eof);
    assert!(errors[0].to_string().ends_with(" at end: Expect ';' after value."));
}

#[test]
fn error_at_a_concrete_token_renders_its_lexeme() {
    let errors = parse_err("var 1 = 2;");
    assert!(errors[0].to_string().contains(" at '1': "));
}

#[test]
fn invalid_assignment_target_is_reported_but_non_fatal() {
    // "1 = 2;" is well-formed enough to keep parsing afterward; the
    // left-hand side just isn't a valid assignment target. Unlike a
    // thrown parse error, this never triggers synchronization, so the
    // following statement is parsed normally rather than being folded
    // into the same recovered statement.
    let (ast, errors) = parse_source("1 = 2; print 3;");
    assert!(ast.is_none());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Invalid assignment target.");
}

#[test]
fn nested_invalid_assignment_targets_each_report_independently() {
    // Every "=" in "1 = 2 = 3" fails the same way: assignment() reports
    // and keeps going rather than throwing, so the inner "2 = 3" reports
    // its own error before control even returns to the outer "1 = ...".
    let errors = parse_err("1 = 2 = 3;");
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.message == "Invalid assignment target."));
}

#[test]
fn synchronization_recovers_at_the_next_statement_boundary() {
    // The first line is missing its semicolon; synchronization should
    // still let the second, valid statement be discovered as an error
    // (since the overall parse fails, only error reporting is checked,
    // not successful AST production).
    let errors = parse_err("var a = ; print a;");
    assert_eq!(errors.len(), 1);
}

#[test]
fn multiple_independent_errors_are_all_collected_in_one_pass() {
    let errors = parse_err("var; var;");
    assert_eq!(errors.len(), 2);
}

#[test]
fn synchronization_stops_at_statement_leading_keywords() {
    // A malformed var decl is followed directly (no semicolon) by a
    // `print` statement; synchronization must stop *before* consuming
    // `print`, since it's one of the recognized statement-start keywords.
    let (ast, errors) = parse_source("var 1; print 2;");
    assert!(ast.is_none());
    assert_eq!(errors.len(), 1);
}
