//! Token-navigation edge cases on the `Parser` struct itself.

use super::*;
use crate::parser::Parser;
use crate::token::{Token, TokenKind};

fn tokens(kinds: &[TokenKind]) -> Vec<Token> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, k)| Token::new(k.clone(), format!("t{i}"), 1))
        .collect()
}

#[test]
#[should_panic(expected = "token list must not be empty")]
fn new_panics_on_empty_token_list() {
    Parser::new(Vec::new());
}

#[test]
fn advance_does_not_move_past_eof() {
    let mut parser = Parser::new(tokens(&[TokenKind::Semicolon, TokenKind::Eof]));
    parser.advance();
    assert!(parser.is_at_end());
    parser.advance();
    parser.advance();
    assert!(parser.is_at_end(), "advance past Eof must be a no-op");
}

#[test]
fn check_does_not_consume() {
    let parser = Parser::new(tokens(&[TokenKind::Semicolon, TokenKind::Eof]));
    assert!(parser.check(&TokenKind::Semicolon));
    assert!(parser.check(&TokenKind::Semicolon), "check must not consume");
}

#[test]
fn match_any_consumes_only_on_a_hit() {
    let mut parser = Parser::new(tokens(&[TokenKind::Plus, TokenKind::Eof]));
    assert!(!parser.match_any(&[TokenKind::Minus]));
    assert!(parser.match_any(&[TokenKind::Plus, TokenKind::Minus]));
    assert!(parser.is_at_end());
}

#[test]
fn consume_reports_an_error_anchored_at_the_current_token() {
    let mut parser = Parser::new(tokens(&[TokenKind::Plus, TokenKind::Eof]));
    let err = parser.consume(&TokenKind::Semicolon, "Expect ';'.").unwrap_err();
    assert_eq!(err.message, "Expect ';'.");
    assert_eq!(err.token.kind, TokenKind::Plus);
}
