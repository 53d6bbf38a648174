use super::*;

#[test]
fn line_counter_increments_across_plain_source() {
    let tokens = scan_ok("1\n2\n3");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].line, 3);
}

#[test]
fn blank_lines_still_count() {
    let tokens = scan_ok("1\n\n\n2");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 4);
}

#[test]
fn carriage_return_and_tab_do_not_advance_the_line_counter() {
    let tokens = scan_ok("1 \t\r 2");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 1);
}

#[test]
fn eof_token_line_reflects_trailing_newlines() {
    let tokens = scan_ok("1\n2\n");
    assert_eq!(tokens.last().unwrap().line, 3);
}
