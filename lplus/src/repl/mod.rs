//! REPL (Read-Eval-Print Loop) for L+
//!
//! `exit` and `clear` are handled here and never reach the interpreter.

use crate::error::report_error;
use crate::interp::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

const PROMPT: &str = ">> ";
const HISTORY_FILE: &str = ".lplus_history";
const BANNER: &str =
    "Enter your code below. Type 'clear' to clear the screen, 'exit' on a new line to exit:";

/// REPL settings
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// End the session on a malformed function definition
    pub strict: bool,
    /// Load and save line history in the home directory
    pub history: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            strict: false,
            history: true,
        }
    }
}

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// REPL state
pub struct Repl {
    editor: DefaultEditor,
    interpreter: Interpreter,
    config: ReplConfig,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Create a new REPL
    pub fn new(config: ReplConfig) -> RlResult<Self> {
        let editor = DefaultEditor::new()?;

        let history_path = if config.history {
            dirs_home().map(|h| h.join(HISTORY_FILE))
        } else {
            None
        };

        let mut repl = Repl {
            editor,
            interpreter: Interpreter::new(),
            config,
            history_path,
        };

        if let Some(ref path) = repl.history_path {
            let _ = repl.editor.load_history(path);
        }

        Ok(repl)
    }

    /// Run the REPL
    pub fn run(&mut self) -> RlResult<()> {
        println!("{BANNER}");

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    if self.handle_line(&line) == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {err}");
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = self.editor.save_history(path);
        }

        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let trimmed = line.trim();
        match trimmed {
            "exit" => Flow::Exit,
            "clear" => {
                print!("\x1B[2J\x1B[1;1H");
                Flow::Continue
            }
            cmd if cmd.starts_with(':') => self.handle_command(cmd),
            _ => self.eval_input(line),
        }
    }

    /// Handle REPL commands (starting with :)
    fn handle_command(&mut self, cmd: &str) -> Flow {
        match cmd {
            ":quit" | ":q" => Flow::Exit,
            ":help" | ":h" | ":?" => {
                print_help();
                Flow::Continue
            }
            ":vars" => {
                for (name, value) in self.interpreter.variables().sorted() {
                    println!("{name} = {value}");
                }
                Flow::Continue
            }
            ":funs" => {
                for def in self.interpreter.functions() {
                    println!("{def}");
                }
                Flow::Continue
            }
            _ => {
                println!("Unknown command: {cmd}");
                println!("Type :help for help.");
                Flow::Continue
            }
        }
    }

    fn eval_input(&mut self, input: &str) -> Flow {
        match self.interpreter.run_block(input) {
            Ok(()) => Flow::Continue,
            Err(err) => {
                if report_error("<repl>", &err.text, &err.source).is_err() {
                    eprintln!("{}", err.source);
                }
                if self.config.strict {
                    Flow::Exit
                } else {
                    Flow::Continue
                }
            }
        }
    }
}

fn print_help() {
    println!("L+ REPL Commands:");
    println!("  exit, :quit, :q   Exit the REPL");
    println!("  clear             Clear the screen");
    println!("  :vars             List variables");
    println!("  :funs             List stored function definitions");
    println!("  :help, :h, :?     Show this help");
    println!();
    println!("Statements:");
    println!("  var x = 5                  Declare an integer variable");
    println!("  print x + 3 * 2            Print a value, evaluated left to right");
    println!("  if 3 < 5                   Compare two integers (< > =)");
    println!("  fun add % a b % $ ... $    Store a function definition");
}

/// Get home directory
fn dirs_home() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
