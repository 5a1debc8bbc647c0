use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    Span,
};

use super::ast::Expr;

// LITERALS

/// Constant Expression
/// An integer literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstExpr {
    pub value: Token,
}

impl ConstExpr {
    pub fn get_span(&self) -> Span {
        self.value.span
    }

    /// Parses the literal's digits. Literals are unsigned; negation is a
    /// `UnaryExpr`.
    pub fn parse_value(&self, source: &str) -> Result<u64, Error> {
        let text = self.value.lexeme(source);

        text.parse().map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: text.to_string(),
                },
                self.value.span,
            )
        })
    }
}

// OPERATORS

/// Unary Expression
/// A prefix operator applied to its operand, e.g. `-x` or `~x`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: Token,
    pub rhs: Box<Expr>,
}

impl UnaryExpr {
    pub fn get_span(&self) -> Span {
        Span::new(self.op.span.start, self.rhs.get_span().end)
    }
}

/// Binary Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub lhs: Box<Expr>,
    pub op: Token,
    pub rhs: Box<Expr>,
}

impl BinaryExpr {
    pub fn get_span(&self) -> Span {
        Span::new(self.lhs.get_span().start, self.rhs.get_span().end)
    }
}

// RECOVERY

/// Stands in for a statement or expression that could not be parsed, so the
/// tree stays complete. Anchored at the token where parsing gave up.
#[derive(Debug, Clone, PartialEq)]
pub struct DummyNode {
    pub token: Token,
}

impl DummyNode {
    pub fn get_span(&self) -> Span {
        Span::point(self.token.span.start)
    }
}
