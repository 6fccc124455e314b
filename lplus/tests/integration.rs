//! Integration tests for the L+ interpreter
//!
//! Runs whole blocks through a buffered session and checks what the session
//! printed, what it stored, and which lines fail hard.

use lplus::interp::{Buffer, Interpreter};
use lplus::{LineError, SyntaxError};

/// Helper to run a block and return everything it printed
fn run(source: &str) -> String {
    let mut interp = Interpreter::buffered();
    interp.run_block(source).expect("block should not fail hard");
    interp.into_sink().contents()
}

/// Helper to run a block that must fail hard
fn run_fails(source: &str) -> (LineError, Interpreter<Buffer>) {
    let mut interp = Interpreter::buffered();
    let err = interp
        .run_block(source)
        .expect_err("block should fail hard");
    (err, interp)
}

// ============================================
// Variables and printing
// ============================================

#[test]
fn test_declared_value_prints_unchanged() {
    for v in [0i64, 1, -1, 42, -9_000_000_000, i64::MAX, i64::MIN] {
        assert_eq!(run(&format!("var x = {v}\nprint x")), v.to_string());
    }
}

#[test]
fn test_redeclaration_overwrites() {
    assert_eq!(run("var x = 1\nvar x = 2\nprint x"), "2");
}

#[test]
fn test_left_to_right_without_precedence() {
    assert_eq!(run("var x = 2\nprint x + 3 * 2"), "10.0");
    assert_eq!(run("print 2 + 3 * 2"), "10.0");
    assert_eq!(run("print 10 - 4 / 2"), "3.0");
}

#[test]
fn test_float_literal_seed() {
    assert_eq!(run("print 1.5 * 2"), "3.0");
    assert_eq!(run("print 0.5 - 1"), "-0.5");
}

#[test]
fn test_division_by_zero_keeps_accumulator() {
    insta::assert_snapshot!(run("var x = 4\nprint x / 0 + 1"), @r"
    Division by zero!
    5.0
    ");
}

#[test]
fn test_stray_operator_anywhere_enables_expression_mode() {
    insta::assert_snapshot!(run("print 5 6 +"), @r"
    Invalid operator: (none)
    5.0
    ");
}

// ============================================
// Dispatch
// ============================================

#[test]
fn test_unknown_keyword() {
    assert_eq!(run("foo bar"), "Invalid statement: foo bar");
}

#[test]
fn test_keywords_are_case_insensitive() {
    assert_eq!(run("VAR x = 3\nPrint x\nIF 1 < 2"), "3\nResult: true");
}

#[test]
fn test_diagnostics_do_not_stop_the_block() {
    let source = "\
var x = 1
var y
print z
if 1 ? 2
print x";
    insta::assert_snapshot!(run(source), @r"
    Invalid variable declaration: var y
    smt- we support only numbers for now: z
    Invalid operator: ?
    1
    ");
}

// ============================================
// Conditions
// ============================================

#[test]
fn test_condition_operators() {
    assert_eq!(run("if 3 < 5"), "Result: true");
    assert_eq!(run("if 5 < 5"), "Result: false");
    assert_eq!(run("if 5 = 5"), "Result: true");
    assert_eq!(run("if 5 > 7"), "Result: false");
}

#[test]
fn test_condition_requires_literals() {
    assert_eq!(
        run("var a = 1\nif a = 1"),
        "Invalid operands for operation: a = 1"
    );
    assert_eq!(run("if 1 <"), "Invalid if statement: 1 <");
}

// ============================================
// Function definitions
// ============================================

#[test]
fn test_function_definition_is_stored_without_side_effects() {
    let mut interp = Interpreter::buffered();
    interp
        .run_block("fun add % a b % $ print a $")
        .expect("valid definition");
    assert!(interp.sink().lines().is_empty());
    assert!(interp.variables().is_empty());
    let def = interp.function("add").expect("stored");
    assert_eq!(def.params, ["a", "b"]);
    assert_eq!(def.body, ["print", "a"]);
}

#[test]
fn test_digit_only_parameters_fail_hard() {
    let (err, interp) = run_fails("fun bad % 1 2 % $ $");
    assert!(matches!(err.source, SyntaxError::NumericParameter { .. }));
    assert!(interp.function("bad").is_none());
}

#[test]
fn test_missing_second_percent_fails_hard() {
    let (err, interp) = run_fails("fun f % a b $ $");
    assert!(matches!(err.source, SyntaxError::UnclosedParams { .. }));
    assert!(interp.functions().is_empty());
}

#[test]
fn test_hard_failure_reports_line_and_stops() {
    let (err, interp) = run_fails("var x = 1\nprint x\nfun f\nprint 99");
    assert_eq!(err.line, 3);
    assert!(matches!(err.source, SyntaxError::TooShort { .. }));
    assert_eq!(interp.sink().lines(), ["1"]);
}

#[test]
fn test_caller_may_continue_after_hard_failure() {
    let mut interp = Interpreter::buffered();
    assert!(interp.execute_line("fun f % a % print a $").is_err());
    interp.execute_line("print 2").expect("next line still runs");
    assert_eq!(interp.sink().lines(), ["2"]);
}

// ============================================
// Blocks
// ============================================

#[test]
fn test_blank_lines_are_no_ops() {
    assert_eq!(run(""), "");
    assert_eq!(run("\n   \n\t\n"), "");
    assert_eq!(run("\n  print 1  \n\n   \nprint 2\n"), "1\n2");
}

#[test]
fn test_non_ascii_whitespace_is_part_of_a_word() {
    assert_eq!(run("print\u{A0}1"), "Invalid statement: print\u{A0}1");
    assert_eq!(run("\u{A0}"), "Invalid statement: \u{A0}");
    assert_eq!(
        run("var x = 3\nprint x\u{A0}+ 1"),
        "smt- we support only numbers for now: x\u{A0}+"
    );
}

#[test]
fn test_extreme_results_keep_a_fraction() {
    insta::assert_snapshot!(run("print 10000000 * 1\nprint 10000000000000000 * 1\nprint 1 / 100000000"), @r"
    10000000.0
    1.0e16
    1.0e-8
    ");
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(run("var x = 7\r\nprint x\r\n"), "7");
}
