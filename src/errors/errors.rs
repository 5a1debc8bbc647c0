use std::fmt::Display;

use thiserror::Error;

use crate::Span;

/// A fatal error: something the lexer, parser or code emitter cannot continue
/// past. Recoverable syntax errors are reported as diagnostics instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedSymbol { .. } => "UnexpectedSymbol",
            ErrorImpl::UnterminatedComment { .. } => "UnterminatedComment",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnrecoverableSyntax { .. } => "UnrecoverableSyntax",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::LiteralOutOfRange { .. } => "LiteralOutOfRange",
            ErrorImpl::UnresolvedNode => "UnresolvedNode",
            ErrorImpl::UnknownType { .. } => "UnknownType",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedSymbol { symbol, .. } => {
                ErrorTip::Suggestion(format!("Unexpected symbol `{}`", symbol.escape_default()))
            }
            ErrorImpl::UnterminatedComment { .. } => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Input ended while expecting {}",
                expected
            )),
            ErrorImpl::UnrecoverableSyntax { expected } => ErrorTip::Suggestion(format!(
                "Could not find a place to resume parsing after expecting {}",
                expected
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels deep",
                limit
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::LiteralOutOfRange { literal, type_ } => ErrorTip::Suggestion(format!(
                "`{}` is larger than the largest `{}`",
                literal, type_
            )),
            ErrorImpl::UnresolvedNode => ErrorTip::None,
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected symbol {symbol:?} on line {line}")]
    UnexpectedSymbol { symbol: char, line: u32 },
    #[error("unterminated block comment starting on line {line}")]
    UnterminatedComment { line: u32 },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unable to recover from syntax error, expected {expected}")]
    UnrecoverableSyntax { expected: String },
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("literal {literal} does not fit in {type_}")]
    LiteralOutOfRange { literal: String, type_: String },
    #[error("cannot generate code for an unresolved node")]
    UnresolvedNode,
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
}
