//! Statement model
//!
//! One input line becomes at most one [`Statement`]. Statements are produced by
//! [`crate::parser::parse_line`] and executed by [`crate::interp::Interpreter`].

mod span;

pub use span::*;

use crate::interp::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statement kind, decided by the first token of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Var,
    Print,
    If,
    Fun,
    Unrecognized,
}

/// A parsed statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// `var <name> = <int>`
    Var(VarDecl),
    /// `print <operand> [<op> <operand>]...`
    Print(PrintStmt),
    /// `if <int> <cmp> <int>`
    If(Condition),
    /// `fun <name> % <param>* % $ <body>* $`
    Fun(FnDef),
    /// Rejected statement; the diagnostic is reported and nothing else happens
    Invalid(Diagnostic),
}

/// Variable declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: String,
    pub value: i64,
}

/// Print statement.
///
/// The operand is kept as raw text because whether it names a variable is only
/// known at execution time. `tail` holds every token after the operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintStmt {
    pub operand: String,
    pub tail: Vec<String>,
}

impl PrintStmt {
    /// Expression mode is entered when any tail token is an operator,
    /// regardless of where it appears.
    pub fn is_expression(&self) -> bool {
        self.tail.iter().any(|tok| ArithOp::from_token(tok).is_some())
    }
}

/// Single comparison between two integer literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub lhs: i64,
    pub op: CmpOp,
    pub rhs: i64,
}

impl Condition {
    pub fn holds(&self) -> bool {
        match self.op {
            CmpOp::Lt => self.lhs < self.rhs,
            CmpOp::Gt => self.lhs > self.rhs,
            CmpOp::Eq => self.lhs == self.rhs,
        }
    }
}

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Lt,
    Gt,
    Eq,
}

impl CmpOp {
    pub fn from_token(tok: &str) -> Option<Self> {
        match tok {
            "<" => Some(CmpOp::Lt),
            ">" => Some(CmpOp::Gt),
            "=" => Some(CmpOp::Eq),
            _ => None,
        }
    }
}

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    /// Only a whole token of exactly one operator character counts.
    pub fn from_token(tok: &str) -> Option<Self> {
        match tok {
            "+" => Some(ArithOp::Add),
            "-" => Some(ArithOp::Sub),
            "*" => Some(ArithOp::Mul),
            "/" => Some(ArithOp::Div),
            _ => None,
        }
    }
}

/// Function definition.
///
/// Bodies are stored verbatim and never executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FnDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<String>,
}

impl fmt::Display for FnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fun {} %", self.name)?;
        for param in &self.params {
            write!(f, " {param}")?;
        }
        write!(f, " % $")?;
        for tok in &self.body {
            write!(f, " {tok}")?;
        }
        write!(f, " $")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arith_op_from_token() {
        assert_eq!(ArithOp::from_token("+"), Some(ArithOp::Add));
        assert_eq!(ArithOp::from_token("/"), Some(ArithOp::Div));
        assert_eq!(ArithOp::from_token("+5"), None);
        assert_eq!(ArithOp::from_token("**"), None);
        assert_eq!(ArithOp::from_token("%"), None);
    }

    #[test]
    fn test_cmp_op_from_token() {
        assert_eq!(CmpOp::from_token("<"), Some(CmpOp::Lt));
        assert_eq!(CmpOp::from_token("="), Some(CmpOp::Eq));
        assert_eq!(CmpOp::from_token("=="), None);
        assert_eq!(CmpOp::from_token("<="), None);
    }

    #[test]
    fn test_condition_holds() {
        let c = |lhs, op, rhs| Condition { lhs, op, rhs }.holds();
        assert!(c(3, CmpOp::Lt, 5));
        assert!(!c(5, CmpOp::Lt, 5));
        assert!(c(6, CmpOp::Gt, 5));
        assert!(c(5, CmpOp::Eq, 5));
        assert!(!c(-5, CmpOp::Eq, 5));
    }

    #[test]
    fn test_print_expression_mode() {
        let stmt = |tail: &[&str]| PrintStmt {
            operand: "x".to_string(),
            tail: tail.iter().map(|s| s.to_string()).collect(),
        };
        assert!(stmt(&["+", "1"]).is_expression());
        assert!(stmt(&["1", "2", "*"]).is_expression());
        assert!(!stmt(&["1", "2"]).is_expression());
        assert!(!stmt(&[]).is_expression());
    }

    #[test]
    fn test_fn_def_display() {
        let def = FnDef {
            name: "add".to_string(),
            params: vec!["a".to_string(), "b".to_string()],
            body: vec!["print".to_string(), "a".to_string()],
        };
        assert_eq!(def.to_string(), "fun add % a b % $ print a $");
    }
}
