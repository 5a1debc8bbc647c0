//! Unit tests for the C emitter.

use super::compiler::{c_type, compile};
use crate::{
    ast::ast::Program,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn parse_clean(source: &str) -> Program {
    let (diagnostics, result) = parse(tokenize(source).unwrap());
    assert!(diagnostics.is_empty(), "{:?}", diagnostics.all());
    result.unwrap()
}

fn compile_source(source: &str) -> String {
    compile(&parse_clean(source), source).unwrap()
}

#[test]
fn test_compile_main() {
    let output = compile_source("fn main() -> i32 {\n\treturn 23;\n}");
    assert_eq!(output, "int main() {\n  return 23;\n}\n");
}

#[test]
fn test_compile_parenthesizes_operators() {
    let output = compile_source("fn f() -> i64 { return -(1 + 2) * 3 % ~4; }");
    assert_eq!(output, "long long f() {\n  return (((-(1 + 2)) * 3) % (~4));\n}\n");
}

#[test]
fn test_compile_logical_operators() {
    let output = compile_source("fn f() -> bool { return !0 && 1 <= 2 || 3 != 4; }");
    assert_eq!(output, "int f() {\n  return (((!0) && (1 <= 2)) || (3 != 4));\n}\n");
}

#[test]
fn test_c_types() {
    let name = |source: &str| c_type(source).map(|c_type| c_type.name);

    assert_eq!(name("i32"), Some("int"));
    assert_eq!(name("i64"), Some("long long"));
    assert_eq!(name("u32"), Some("unsigned int"));
    assert_eq!(name("u64"), Some("unsigned long long"));
    assert_eq!(name("bool"), Some("int"));
    assert_eq!(name("f32"), None);

    assert_eq!(c_type("u32").unwrap().max, u32::MAX as u64);
    assert_eq!(c_type("i64").unwrap().max, i64::MAX as u64);
}

#[test]
fn test_unknown_return_type() {
    let source = "fn main() -> string { return 0; }";
    let error = compile(&parse_clean(source), source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnknownType");
    assert_eq!(error.get_span().slice(source), "string");
}

#[test]
fn test_unresolved_nodes_are_rejected() {
    let source = "fn main() -> i32 { return ; }";
    let (diagnostics, result) = parse(tokenize(source).unwrap());
    assert_eq!(diagnostics.len(), 1);

    let error = compile(&result.unwrap(), source).unwrap_err();
    assert_eq!(error.get_error_name(), "UnresolvedNode");
}

#[test]
fn test_missing_return_type_is_rejected() {
    let source = "fn main() { return 0; }";
    let (_, result) = parse(tokenize(source).unwrap());

    let error = compile(&result.unwrap(), source).unwrap_err();
    assert_eq!(error.get_error_name(), "UnresolvedNode");
}

#[test]
fn test_literal_overflow() {
    let source = "fn main() -> i64 { return 99999999999999999999; }";
    let error = compile(&parse_clean(source), source).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_literal_out_of_range_for_return_type() {
    let source = "fn main() -> i32 { return 3000000000; }";
    let error = compile(&parse_clean(source), source).unwrap_err();

    assert_eq!(error.get_error_name(), "LiteralOutOfRange");
    assert_eq!(error.get_span().slice(source), "3000000000");
}

#[test]
fn test_literal_fits_wider_return_types() {
    let output = compile_source("fn f() -> u32 { return 4000000000; }");
    assert_eq!(output, "unsigned int f() {\n  return 4000000000;\n}\n");

    let output = compile_source("fn f() -> i32 { return 2147483647; }");
    assert_eq!(output, "int f() {\n  return 2147483647;\n}\n");
}

#[test]
fn test_u64_literal_above_i64_range() {
    let output = compile_source("fn f() -> u64 { return 18446744073709551615; }");
    assert_eq!(
        output,
        "unsigned long long f() {\n  return 18446744073709551615ULL;\n}\n"
    );

    let source = "fn f() -> i64 { return 9223372036854775808; }";
    let error = compile(&parse_clean(source), source).unwrap_err();
    assert_eq!(error.get_error_name(), "LiteralOutOfRange");
}
