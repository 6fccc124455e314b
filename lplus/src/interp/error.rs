//! Soft diagnostics
//!
//! A diagnostic is reported to the session sink and the statement that caused
//! it leaves all state untouched. Execution carries on with the next line.

use serde::Serialize;
use std::fmt;

/// Reported problem with a single statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Kinds of diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// First word is not a keyword
    InvalidStatement,
    /// `var` without `<name> = <value>`
    InvalidVarDecl,
    /// `var` value is not an integer
    InvalidVarValue,
    /// `print` without an operand
    InvalidPrint,
    /// `print` operand is neither a variable nor a number
    UnsupportedOperand,
    /// `if` with fewer than three tokens
    InvalidIf,
    /// `if` operands are not integers
    InvalidOperands,
    /// Unknown comparison operator, or an operand with no pending operator
    InvalidOperator,
    /// Expression operand is neither a variable nor a number
    InvalidOperand,
    /// Division by a zero-valued operand
    DivisionByZero,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, message: String) -> Self {
        Diagnostic { kind, message }
    }

    pub fn invalid_statement(line: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidStatement,
            format!("Invalid statement: {line}"),
        )
    }

    pub fn invalid_var_decl(tokens: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidVarDecl,
            format!("Invalid variable declaration: {tokens}"),
        )
    }

    pub fn invalid_var_value(token: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidVarValue,
            format!("Invalid variable value: {token}"),
        )
    }

    pub fn invalid_print(tokens: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidPrint,
            format!("Invalid print statement: {tokens}"),
        )
    }

    pub fn unsupported_operand(token: &str) -> Self {
        Self::new(
            DiagnosticKind::UnsupportedOperand,
            format!("smt- we support only numbers for now: {token}"),
        )
    }

    pub fn invalid_if(tokens: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidIf,
            format!("Invalid if statement: {tokens}"),
        )
    }

    pub fn invalid_operands(tokens: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidOperands,
            format!("Invalid operands for operation: {tokens}"),
        )
    }

    /// `None` means an operand showed up before any operator
    pub fn invalid_operator(op: Option<&str>) -> Self {
        Self::new(
            DiagnosticKind::InvalidOperator,
            format!("Invalid operator: {}", op.unwrap_or("(none)")),
        )
    }

    pub fn invalid_operand(token: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidOperand,
            format!("Invalid operand: {token}"),
        )
    }

    pub fn division_by_zero() -> Self {
        Self::new(DiagnosticKind::DivisionByZero, "Division by zero!".to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Diagnostic {}
