use crate::Span;

use super::ast::Expr;

/// Return Statement
///
/// `return <expr>;`. The span is that of the expression alone, without the
/// keyword and semicolon.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub expr: Expr,
}

impl ReturnStmt {
    pub fn get_span(&self) -> Span {
        self.expr.get_span()
    }
}
