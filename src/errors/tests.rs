//! Unit tests for error handling.
//!
//! Covers fatal error metadata, the diagnostic emitter's capacity contract and
//! report rendering.

use crate::errors::emitter::{DiagnosticEmitter, EmitterError};
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::errors::report::{render_diagnostic, render_diagnostics, render_error};
use crate::Span;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedSymbol {
            symbol: '@',
            line: 1,
        },
        Span::point(10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedSymbol");
    assert_eq!(error.get_span(), Span::point(10));
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: String::from("`}`"),
        },
        Span::point(0),
    );

    assert_eq!(error.to_string(), "unexpected end of input, expected `}`");
}

#[test]
fn test_unterminated_comment_error() {
    let error = Error::new(ErrorImpl::UnterminatedComment { line: 3 }, Span::new(4, 5));

    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert!(matches!(error.get_kind(), ErrorImpl::UnterminatedComment { line: 3 }));
}

#[test]
fn test_unknown_type_error() {
    let error = Error::new(
        ErrorImpl::UnknownType {
            type_: "CustomType".to_string(),
        },
        Span::point(0),
    );

    assert_eq!(error.get_error_name(), "UnknownType");
    assert_eq!(error.get_tip().to_string(), "Unknown type `CustomType` found");
}

#[test]
fn test_literal_out_of_range_error() {
    let error = Error::new(
        ErrorImpl::LiteralOutOfRange {
            literal: "3000000000".to_string(),
            type_: "i32".to_string(),
        },
        Span::new(26, 35),
    );

    assert_eq!(error.get_error_name(), "LiteralOutOfRange");
    assert_eq!(error.to_string(), "literal 3000000000 does not fit in i32");
    assert_eq!(
        error.get_tip().to_string(),
        "`3000000000` is larger than the largest `i32`"
    );
}

#[test]
fn test_lexical_errors_are_fatal() {
    // The lexer has no emitter; an unknown symbol ends compilation at once
    let error = crate::lexer::lexer::tokenize("fn main() -> i32 { return @1; }").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedSymbol");
    assert_eq!(error.get_span(), Span::point(26));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnresolvedNode, Span::point(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_emitter_keeps_insertion_order() {
    let mut emitter = DiagnosticEmitter::new();

    emitter.add("second", Span::new(10, 12), vec![]).unwrap();
    emitter.add("first", Span::new(0, 1), vec![Span::point(5)]).unwrap();

    let messages: Vec<&str> = emitter.all().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["second", "first"]);
    assert_eq!(emitter.all()[1].squiggles, vec![Span::point(5)]);
}

#[test]
fn test_emitter_does_not_deduplicate() {
    let mut emitter = DiagnosticEmitter::new();

    emitter.add("same", Span::point(1), vec![]).unwrap();
    emitter.add("same", Span::point(1), vec![]).unwrap();

    assert_eq!(emitter.len(), 2);
}

#[test]
fn test_emitter_rejects_twenty_first_diagnostic() {
    let mut emitter = DiagnosticEmitter::new();

    for i in 0..20 {
        assert!(emitter.add(format!("error {}", i), Span::point(i), vec![]).is_ok());
    }

    let result = emitter.add("error 20", Span::point(20), vec![]);
    assert_eq!(result, Err(EmitterError::CapacityExceeded { capacity: 20 }));

    assert_eq!(emitter.len(), 20);
    assert_eq!(emitter.dropped(), 1);
    for (i, diagnostic) in emitter.all().iter().enumerate() {
        assert_eq!(diagnostic.message, format!("error {}", i));
        assert_eq!(diagnostic.span, Span::point(i));
    }
}

#[test]
fn test_emitter_custom_capacity() {
    let mut emitter = DiagnosticEmitter::with_capacity(1);

    assert!(emitter.add("kept", Span::point(0), vec![]).is_ok());
    assert!(emitter.add("dropped", Span::point(1), vec![]).is_err());
    assert!(emitter.add("dropped", Span::point(2), vec![]).is_err());

    assert_eq!(emitter.capacity(), 1);
    assert_eq!(emitter.dropped(), 2);
}

#[test]
fn test_render_error_points_at_column() {
    colored::control::set_override(false);

    let source = "fn main() -> i32 {\n  return @;\n}";
    let error = Error::new(
        ErrorImpl::UnexpectedSymbol {
            symbol: '@',
            line: 2,
        },
        Span::point(28),
    );

    let rendered = render_error(&error, source, "main.rc");

    assert!(rendered.starts_with("error: UnexpectedSymbol (Unexpected symbol `@`)"));
    assert!(rendered.contains("-> main.rc:2:10"));
    assert!(rendered.contains("2 |   return @;"));
    assert!(rendered.contains("  |          ^"));
}

#[test]
fn test_render_diagnostic_with_squiggle() {
    colored::control::set_override(false);

    let mut emitter = DiagnosticEmitter::new();
    emitter
        .add("expected `)`, found `;`", Span::point(10), vec![Span::point(7)])
        .unwrap();

    let source = "return (1 ;";
    let rendered = render_diagnostic(&emitter.all()[0], source, "main.rc");

    assert!(rendered.contains("error: expected `)`, found `;`"));
    assert!(rendered.contains("  |        -  ^"));
}

#[test]
fn test_render_diagnostics_reports_truncation() {
    colored::control::set_override(false);

    let mut emitter = DiagnosticEmitter::with_capacity(1);
    emitter.add("first", Span::point(0), vec![]).unwrap();
    let _ = emitter.add("second", Span::point(1), vec![]);

    let rendered = render_diagnostics(&emitter, "ab", "main.rc");

    assert!(rendered.contains("error: first"));
    assert!(!rendered.contains("second"));
    assert!(rendered.contains("note: 1 further errors truncated"));
}
