//! Scanner unit tests, grouped by concern.

mod errors;
mod newlines;
mod numbers;

use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

/// Scans `source` and asserts no lexical errors were reported, returning
/// the token stream.
fn scan_ok(source: &str) -> Vec<Token> {
    let (tokens, errors) = Scanner::new(source).scan_tokens();
    assert!(errors.is_empty(), "unexpected scan errors: {:?}", errors_to_strings(&errors));
    tokens
}

fn errors_to_strings(errors: &[crate::scanner::ScanError]) -> Vec<String> {
    errors.iter().map(|e| e.to_string()).collect()
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind.clone()).collect()
}

#[test]
fn empty_source_yields_only_eof() {
    let tokens = scan_ok("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn whitespace_only_source_yields_only_eof_with_correct_line() {
    let tokens = scan_ok("   \n\n  \t \n");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].line, 4);
}

#[test]
fn every_nonempty_source_ends_in_eof() {
    for source in ["1", "\"hi\"", "a + b;", "// just a comment"] {
        let tokens = scan_ok(source);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }
}
