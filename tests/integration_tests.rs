//! Integration tests for end-to-end compilation.
//!
//! These tests drive the complete pipeline through the public API: source
//! text is tokenized, parsed with error recovery and emitted as C.

use rc::{
    ast::{ast::Stmt, printer::print_tree},
    compiler::compiler::compile,
    config::CompilerOptions,
    errors::report::{render_diagnostics, render_error},
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_with_options},
};

fn compile_source(source: &str) -> Result<String, String> {
    let tokens = tokenize(source).map_err(|error| error.to_string())?;
    let (diagnostics, program) = parse(tokens);

    if !diagnostics.is_empty() {
        return Err(diagnostics.all()[0].message.clone());
    }

    let program = program.map_err(|error| error.to_string())?;
    compile(&program, source).map_err(|error| error.to_string())
}

#[test]
fn test_compile_main_function() {
    let output = compile_source("fn main() -> i32 {\n\treturn 23;\n}").unwrap();
    assert_eq!(output, "int main() {\n  return 23;\n}\n");
}

#[test]
fn test_compile_with_comments() {
    let source = "// entry point\nfn main() -> u32 {\n  /* answer */ return 4 * (5 + 6);\n}\n";
    let output = compile_source(source).unwrap();

    assert_eq!(output, "unsigned int main() {\n  return (4 * (5 + 6));\n}\n");
}

#[test]
fn test_lexical_error_stops_pipeline() {
    let source = "fn main() -> i32 {\n  return 1 @ 2;\n}";
    let error = tokenize(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedSymbol");
    assert_eq!(error.get_span().slice(source), "@");
}

#[test]
fn test_recovered_program_is_not_compiled() {
    let error = compile_source("fn main() { return 0; }").unwrap_err();
    assert_eq!(error, "expected `->`, found `{`");
}

#[test]
fn test_recovery_keeps_function_shape() {
    let source = "fn main() i32 { return 0; }";
    let (diagnostics, program) = parse(tokenize(source).unwrap());
    let program = program.unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(program.function.body, Stmt::Return(_)));
    assert_eq!(
        print_tree(&program, source),
        "Program\n  Function main -> Unresolved\n    ReturnStmt\n      ConstExpr 0\n"
    );
}

#[test]
fn test_render_diagnostics() {
    colored::control::set_override(false);

    let source = "fn main() {\n  return 0;\n}";
    let (diagnostics, _) = parse(tokenize(source).unwrap());
    let rendered = render_diagnostics(&diagnostics, source, "main.rc");

    assert!(rendered.starts_with("error: expected `->`, found `{`\n"));
    assert!(rendered.contains("main.rc:1:11"));
    assert!(!rendered.contains("truncated"));
}

#[test]
fn test_truncation_note() {
    colored::control::set_override(false);

    let source = "fn main() { return ; }";
    let options = CompilerOptions {
        max_diagnostics: 1,
        ..CompilerOptions::default()
    };
    let (diagnostics, program) = parse_with_options(tokenize(source).unwrap(), &options);

    assert!(program.is_ok());
    let rendered = render_diagnostics(&diagnostics, source, "main.rc");
    assert!(rendered.ends_with("note: 1 further errors truncated\n"));
}

#[test]
fn test_fatal_error_rendering() {
    colored::control::set_override(false);

    let source = "fn main() -> i32 { return";
    let (_, program) = parse(tokenize(source).unwrap());
    let error = program.unwrap_err();
    let rendered = render_error(&error, source, "main.rc");

    assert!(rendered.starts_with("error: UnexpectedEndOfInput"));
}

#[test]
fn test_unknown_return_type() {
    let error = compile_source("fn main() -> float { return 1; }").unwrap_err();
    assert_eq!(error, "unknown type float found");
}
