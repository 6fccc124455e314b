//! Statement execution and expression evaluation

use super::env::Environment;
use super::error::Diagnostic;
use super::sink::{Buffer, Sink, Stdout};
use super::value::{Value, parse_number};
use crate::ast::{ArithOp, Condition, FnDef, PrintStmt, Statement};
use crate::error::LineError;
use crate::lexer::trim;
use crate::parser::parse_line;
use std::collections::HashMap;

/// The interpreter
pub struct Interpreter<S: Sink = Stdout> {
    /// Variable store
    env: Environment,
    /// Stored function definitions, keyed by name
    functions: HashMap<String, FnDef>,
    /// Where results and diagnostics go
    sink: S,
}

impl Interpreter<Stdout> {
    /// Create an interpreter that prints to standard output
    pub fn new() -> Self {
        Self::with_sink(Stdout)
    }
}

impl Default for Interpreter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter<Buffer> {
    /// Create an interpreter that collects its output in memory
    pub fn buffered() -> Self {
        Self::with_sink(Buffer::new())
    }
}

impl<S: Sink> Interpreter<S> {
    pub fn with_sink(sink: S) -> Self {
        Interpreter {
            env: Environment::new(),
            functions: HashMap::new(),
            sink,
        }
    }

    /// Run every line of `text` in order.
    ///
    /// Stops at the first malformed function definition; the lines after it
    /// are not executed.
    pub fn run_block(&mut self, text: &str) -> Result<(), LineError> {
        for (idx, line) in text.lines().enumerate() {
            let line = trim(line);
            self.execute_line(line).map_err(|source| LineError {
                line: idx + 1,
                text: line.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Parse and execute a single line.
    ///
    /// Soft diagnostics are written to the sink and never returned; only a
    /// malformed function definition comes back as an error.
    pub fn execute_line(&mut self, line: &str) -> crate::Result<()> {
        if let Some(stmt) = parse_line(line)? {
            self.execute(stmt);
        }
        Ok(())
    }

    /// Execute an already parsed statement
    pub fn execute(&mut self, stmt: Statement) {
        match stmt {
            Statement::Var(decl) => self.env.set(decl.name, decl.value),
            Statement::Print(print) => self.exec_print(&print),
            Statement::If(cond) => self.exec_if(&cond),
            Statement::Fun(def) => {
                self.functions.insert(def.name.clone(), def);
            }
            Statement::Invalid(diag) => self.report(&diag),
        }
    }

    fn exec_print(&mut self, print: &PrintStmt) {
        let seed = match self.env.get(&print.operand) {
            Some(value) if print.is_expression() => value as f64,
            Some(value) => return self.emit(&Value::Int(value)),
            None => match parse_number(&print.operand) {
                Some(seed) if print.is_expression() => seed,
                Some(_) => return self.emit(&Value::Text(print.operand.clone())),
                None => return self.report(&Diagnostic::unsupported_operand(&print.operand)),
            },
        };

        let result = self.eval_chain(seed, &print.tail);
        self.emit(&Value::Float(result));
    }

    fn exec_if(&mut self, cond: &Condition) {
        let line = format!("Result: {}", Value::Bool(cond.holds()));
        self.sink.line(&line);
    }

    /// Fold `tail` left to right onto `seed`, without precedence.
    ///
    /// A later operator replaces a pending one, and the pending operator stays
    /// in effect for following operands. An unresolvable operand abandons the
    /// chain with a result of zero; division by zero skips only that step.
    pub fn eval_chain(&mut self, seed: f64, tail: &[String]) -> f64 {
        let mut acc = seed;
        let mut pending: Option<ArithOp> = None;

        for tok in tail {
            if let Some(op) = ArithOp::from_token(tok) {
                pending = Some(op);
                continue;
            }
            let Some(operand) = self.resolve_operand(tok) else {
                self.report(&Diagnostic::invalid_operand(tok));
                return 0.0;
            };
            match pending {
                Some(ArithOp::Add) => acc += operand,
                Some(ArithOp::Sub) => acc -= operand,
                Some(ArithOp::Mul) => acc *= operand,
                Some(ArithOp::Div) if operand == 0.0 => {
                    self.report(&Diagnostic::division_by_zero());
                }
                Some(ArithOp::Div) => acc /= operand,
                None => self.report(&Diagnostic::invalid_operator(None)),
            }
        }

        acc
    }

    /// Variable lookup first, then a numeric literal
    fn resolve_operand(&self, tok: &str) -> Option<f64> {
        match self.env.get(tok) {
            Some(value) => Some(value as f64),
            None => parse_number(tok),
        }
    }

    fn emit(&mut self, value: &Value) {
        self.sink.line(&value.to_string());
    }

    fn report(&mut self, diag: &Diagnostic) {
        self.sink.line(&diag.message);
    }

    pub fn variable(&self, name: &str) -> Option<i64> {
        self.env.get(name)
    }

    pub fn variables(&self) -> &Environment {
        &self.env
    }

    pub fn function(&self, name: &str) -> Option<&FnDef> {
        self.functions.get(name)
    }

    /// All stored definitions ordered by name
    pub fn functions(&self) -> Vec<&FnDef> {
        let mut defs: Vec<_> = self.functions.values().collect();
        defs.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
