//! L+ interpreter CLI

use clap::{Parser, Subcommand};
use lplus::error::report_error;
use lplus::lexer::{tokenize, trim};
use lplus::parser::parse_line;
use lplus::repl::{Repl, ReplConfig};
use lplus::Interpreter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lplus", version, about = "L+ - line-oriented toy language interpreter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session (default)
    Repl {
        /// End the session on a malformed function definition
        #[arg(long)]
        strict: bool,
        /// Do not load or save line history
        #[arg(long)]
        no_history: bool,
    },
    /// Run a source file, one statement per line
    Run {
        /// Source file to run
        file: PathBuf,
        /// Report malformed function definitions and keep running
        #[arg(long)]
        keep_going: bool,
    },
    /// Tokenize and dump classified tokens (debug)
    Tokens {
        /// Source file to tokenize
        file: PathBuf,
    },
    /// Parse and dump statements as JSON (debug)
    Parse {
        /// Source file to parse
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::Repl {
        strict: false,
        no_history: false,
    });
    let result = match command {
        Command::Repl { strict, no_history } => run_repl(ReplConfig {
            strict,
            history: !no_history,
        }),
        Command::Run { file, keep_going } => run_file(&file, keep_going),
        Command::Tokens { file } => tokenize_file(&file),
        Command::Parse { file } => parse_file(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_repl(config: ReplConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut repl = Repl::new(config)?;
    repl.run()?;
    Ok(())
}

fn run_file(path: &PathBuf, keep_going: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();
    let mut interp = Interpreter::new();

    if !keep_going {
        if let Err(err) = interp.run_block(&source) {
            report_error(&format!("{filename}:{}", err.line), &err.text, &err.source)?;
            return Err(format!("run aborted at line {}", err.line).into());
        }
        return Ok(());
    }

    for (idx, line) in source.lines().enumerate() {
        let line = trim(line);
        if let Err(err) = interp.execute_line(line) {
            report_error(&format!("{filename}:{}", idx + 1), line, &err)?;
        }
    }
    Ok(())
}

fn tokenize_file(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;

    for (idx, line) in source.lines().enumerate() {
        for lex in tokenize(line) {
            println!("{}:{} {} {:?}", idx + 1, lex.span, lex.token, lex.text);
        }
    }

    Ok(())
}

fn parse_file(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;

    let mut entries = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let entry = match parse_line(line) {
            Ok(None) => continue,
            Ok(Some(stmt)) => serde_json::json!({ "line": idx + 1, "statement": stmt }),
            Err(err) => serde_json::json!({ "line": idx + 1, "error": err.to_string() }),
        };
        entries.push(entry);
    }

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
