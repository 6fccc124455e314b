//! L+ interpreter library
//!
//! A line-oriented toy language: every line is one statement (`var`, `print`,
//! `if` or `fun`), classified by its first word and executed immediately.

pub mod ast;
pub mod error;
pub mod interp;
pub mod lexer;
pub mod parser;
pub mod repl;

pub use ast::Span;
pub use error::{LineError, Result, SyntaxError};
pub use interp::Interpreter;
