//! The Lox interpreter CLI.
//!
//! Accepts zero or one positional argument: no argument starts a REPL,
//! one argument runs that file in batch mode. Exit codes follow the
//! `sysexits.h`-flavored convention §6 specifies: `0` clean, `65` a
//! lexical/syntactic error, `70` a runtime error, `74` a file that
//! couldn't be read at all.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser as ClapParser;

use lox::interpreter::Interpreter;
use lox::parser::Parser;
use lox::reporter::Reporter;
use lox::scanner::Scanner;

/// Command-line interface for the Lox interpreter.
#[derive(ClapParser)]
#[command(name = "lox")]
#[command(about = "A tree-walking interpreter for Lox", long_about = None)]
struct Cli {
    /// The source file to run. Omit to start a REPL.
    path: Option<PathBuf>,
}

const EX_DATAERR: i32 = 65;
const EX_SOFTWARE: i32 = 70;
const EX_IOERR: i32 = 74;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.path {
        Some(path) => run_file(&path),
        None => run_repl(),
    };

    std::process::exit(exit_code);
}

/// Runs a single source file to completion, returning the process exit
/// code per §6.
fn run_file(path: &PathBuf) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not read file '{}': {error}", path.display());
            return EX_IOERR;
        }
    };

    let mut reporter = Reporter::new();
    let mut interpreter = Interpreter::new();
    run_source(&source, &mut interpreter, &mut reporter);

    if reporter.had_error() {
        EX_DATAERR
    } else if reporter.had_runtime_error() {
        EX_SOFTWARE
    } else {
        0
    }
}

/// Runs an interactive REPL: prompt `> `, one physical line per
/// iteration, until stdin hits EOF.
///
/// The interpreter (and thus its global environment) persists across
/// lines; `had_error` is cleared after each line so one bad line doesn't
/// poison the rest of the session, but `had_runtime_error` is not (§6).
fn run_repl() -> i32 {
    let mut reporter = Reporter::new();
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };

        run_source(&line, &mut interpreter, &mut reporter);
        reporter.reset_error();
    }

    0
}

/// Scans, parses, and interprets `source` against `interpreter`,
/// reporting every diagnostic via `reporter`. Each stage gates the next:
/// a lexical error skips parsing, a syntactic error skips interpretation
/// (§4.1/§4.2/§6).
fn run_source(source: &str, interpreter: &mut Interpreter, reporter: &mut Reporter) {
    let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
    if !scan_errors.is_empty() {
        reporter.report_scan_errors(&scan_errors);
        return;
    }

    let (ast, parse_errors) = Parser::new(tokens).parse();
    if !parse_errors.is_empty() {
        reporter.report_parse_errors(&parse_errors);
        return;
    }
    let statements = ast.expect("no parse errors means parse() produced an AST");

    if let Err(error) = interpreter.interpret(&statements) {
        reporter.report_runtime_error(&error);
    }
}
