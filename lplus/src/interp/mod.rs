//! Statement interpreter
//!
//! An [`Interpreter`] is one session: it owns the variable store, the function
//! table and the sink that results and diagnostics are written to.

mod env;
mod error;
mod eval;
mod sink;
mod value;

pub use env::Environment;
pub use error::{Diagnostic, DiagnosticKind};
pub use eval::Interpreter;
pub use sink::{Buffer, Sink, Stdout};
pub use value::{Value, parse_number};
