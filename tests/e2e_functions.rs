//! End-to-end tests for function declarations, `return`, recursion, and
//! closures.

mod common;

use common::run_and_capture;

#[test]
fn function_call_adds_its_arguments() {
    let (stdout, code) = run_and_capture("fun add(a, b) { return a + b; } print add(1, 2);");
    assert_eq!(stdout, "3\n");
    assert_eq!(code, Some(0));
}

#[test]
fn bare_return_yields_nil() {
    let (stdout, code) = run_and_capture("fun noop() { return; } print noop();");
    assert_eq!(stdout, "nil\n");
    assert_eq!(code, Some(0));
}

#[test]
fn function_with_no_return_falls_off_the_end_as_nil() {
    let (stdout, code) = run_and_capture("fun f() { print \"ran\"; } print f();");
    assert_eq!(stdout, "ran\nnil\n");
    assert_eq!(code, Some(0));
}

#[test]
fn recursive_fibonacci() {
    let (stdout, code) = run_and_capture(
        "fun fib(n) { if (n <= 1) return n; return fib(n-1) + fib(n-2); } print fib(6);",
    );
    assert_eq!(stdout, "8\n");
    assert_eq!(code, Some(0));
}

#[test]
fn closures_capture_their_defining_environment() {
    let (stdout, code) = run_and_capture(
        "fun makeCounter() { \
            var i = 0; \
            fun count() { i = i + 1; return i; } \
            return count; \
        } \
        var c = makeCounter(); \
        print c(); \
        print c();",
    );
    assert_eq!(stdout, "1\n2\n");
    assert_eq!(code, Some(0));
}

#[test]
fn function_renders_as_fn_name() {
    let (stdout, code) = run_and_capture("fun greet() {} print greet;");
    assert_eq!(stdout, "<fn greet>\n");
    assert_eq!(code, Some(0));
}

#[test]
fn native_clock_is_callable_and_renders_distinctly() {
    let (stdout, code) = run_and_capture("print clock;");
    assert_eq!(stdout, "<native fn>\n");
    assert_eq!(code, Some(0));
}
