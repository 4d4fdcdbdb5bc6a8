use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
    rc::Rc,
};

use clap::Parser;
use monkey::{
    error::ParseErrors,
    get_result,
    interpreter::{environment::Environment, object::Object},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const PROMPT: &str = ">> ";

/// monkey is a small, dynamically typed programming language with first-class
/// functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value
    /// of a monkey script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script to run, or its path with `--file`. Starts the REPL when
    /// omitted.
    contents: Option<String>,
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set.
///
/// Without `RUST_LOG` nothing is installed, so the interpreter prints nothing
/// beyond program output.
fn init_tracing() {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                      .with(filter)
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        return match start_repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    run_script(&script, args.pipe_mode)
}

fn run_script(script: &str, pipe_mode: bool) -> ExitCode {
    match get_result(script, &Environment::new()) {
        Err(errors) => {
            eprintln!("{errors}");
            ExitCode::FAILURE
        },
        Ok(Some(Object::Error(error))) => {
            eprintln!("ERROR: {error}");
            ExitCode::FAILURE
        },
        Ok(value) => {
            if pipe_mode && let Some(value) = value {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
    }
}

/// Reads lines from standard input and evaluates each one in a shared
/// environment until end of input or `.quit`.
fn start_repl() -> io::Result<()> {
    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line == ".quit" {
            return Ok(());
        }

        eval_line(line, &env, &mut stdout)?;
    }
}

fn eval_line(line: &str, env: &Rc<Environment>, out: &mut impl Write) -> io::Result<()> {
    match get_result(line, env) {
        Ok(Some(value)) => writeln!(out, "{value}"),
        Ok(None) => Ok(()),
        Err(errors) => print_parser_errors(out, &errors),
    }
}

fn print_parser_errors(out: &mut impl Write, errors: &ParseErrors) -> io::Result<()> {
    writeln!(out, "parser errors:")?;
    for error in errors.iter() {
        writeln!(out, "\t{error}")?;
    }
    Ok(())
}
