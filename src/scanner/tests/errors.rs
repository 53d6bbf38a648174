use super::*;

#[test]
fn unexpected_character_is_reported() {
    let (_, errors) = Scanner::new("@").scan_tokens();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Unexpected character.");
    assert_eq!(errors[0].line, 1);
}

#[test]
fn unexpected_character_does_not_stop_scanning() {
    // A bad character is skipped and scanning resumes on what follows.
    let (tokens, errors) = Scanner::new("1 @ 2").scan_tokens();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]
    );
}

#[test]
fn multiple_errors_in_one_pass_are_all_collected() {
    let (_, errors) = Scanner::new("@ # $").scan_tokens();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.message == "Unexpected character."));
}

#[test]
fn error_line_numbers_track_the_offending_line() {
    let (_, errors) = Scanner::new("1\n2\n@").scan_tokens();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 3);
}

#[test]
fn scan_error_display_matches_the_diagnostic_format() {
    let (_, errors) = Scanner::new("@").scan_tokens();
    assert_eq!(errors[0].to_string(), "[line 1] Error: Unexpected character.");
}
