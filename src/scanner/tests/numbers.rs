use super::*;

#[test]
fn integer_literal() {
    let tokens = scan_ok("42");
    assert_eq!(tokens[0].kind, TokenKind::Number(42.0));
}

#[test]
fn decimal_literal() {
    let tokens = scan_ok("3.14");
    assert_eq!(tokens[0].kind, TokenKind::Number(3.14));
}

#[test]
fn trailing_dot_without_digits_is_not_consumed() {
    // "1." is the number "1" followed by a Dot token, not a malformed
    // number literal: a fractional part requires at least one digit
    // after the '.'.
    let kinds = kinds(&scan_ok("1."));
    assert_eq!(kinds, vec![TokenKind::Number(1.0), TokenKind::Dot, TokenKind::Eof]);
}

#[test]
fn leading_dot_is_not_a_number() {
    let kinds = kinds(&scan_ok(".5"));
    assert_eq!(
        kinds,
        vec![TokenKind::Dot, TokenKind::Number(5.0), TokenKind::Eof]
    );
}
