use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use rc::{
    ast::printer::print_tree,
    compiler::compiler::compile,
    config::CompilerOptions,
    errors::report::{render_diagnostics, render_error},
    lexer::lexer::tokenize,
    parser::parser::parse_with_options,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compiled when no input file is given.
const DEFAULT_SOURCE: &str = "fn main() -> i32 {\n\treturn 23;\n}\n";
const DEFAULT_FILE_NAME: &str = "<builtin>";

/// Front end for a small C-like language: lexes, parses with error recovery
/// and emits C.
#[derive(Parser, Debug)]
#[command(name = "rc", version)]
struct Args {
    /// Source file to compile. Without it a built-in example is used.
    file: Option<PathBuf>,

    /// Print the parsed syntax tree.
    #[arg(long)]
    print_ast: bool,

    /// Print the generated C to stdout.
    #[arg(long)]
    emit_c: bool,

    /// Write the generated C to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Syntax errors reported before the rest are dropped.
    #[arg(long, default_value_t = rc::config::MAX_DIAGNOSTICS)]
    max_diagnostics: usize,

    /// Deepest expression nesting accepted.
    #[arg(long = "max-nesting", default_value_t = rc::config::MAX_NESTING_DEPTH)]
    max_nesting_depth: usize,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> CompilerOptions {
        CompilerOptions {
            max_diagnostics: self.max_diagnostics,
            max_nesting_depth: self.max_nesting_depth,
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let (file_name, source) = match &args.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => (path.display().to_string(), source),
            Err(error) => {
                eprintln!("error: failed to read {}: {}", path.display(), error);
                return ExitCode::FAILURE;
            }
        },
        None => (String::from(DEFAULT_FILE_NAME), String::from(DEFAULT_SOURCE)),
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    let parse_start = Instant::now();
    let (diagnostics, program) = parse_with_options(tokens, &args.options());

    info!(elapsed = ?parse_start.elapsed(), "parsed");

    if !diagnostics.is_empty() {
        eprint!("{}", render_diagnostics(&diagnostics, &source, &file_name));
    }

    let program = match program {
        Ok(program) => program,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    if args.print_ast {
        print!("{}", print_tree(&program, &source));
    }

    if !diagnostics.is_empty() {
        return ExitCode::FAILURE;
    }

    let compile_start = Instant::now();
    let output = match compile(&program, &source) {
        Ok(output) => output,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    info!(elapsed = ?compile_start.elapsed(), total = ?start.elapsed(), "compiled");

    if args.emit_c {
        print!("{}", output);
    }

    if let Some(path) = &args.output {
        if let Err(error) = fs::write(path, &output) {
            eprintln!("error: failed to write {}: {}", path.display(), error);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
