use crate::{lexer::tokens::Token, Span};

use super::{
    expressions::{BinaryExpr, ConstExpr, DummyNode, UnaryExpr},
    statements::ReturnStmt,
};

/// Root of the tree. The grammar currently admits exactly one function.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub function: Function,
}

impl Program {
    pub fn get_span(&self) -> Span {
        self.function.get_span()
    }
}

/// `fn name() -> type { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// `None` when recovery could not find the function name.
    pub name: Option<Token>,
    /// `None` when recovery could not find the return type.
    pub return_type: Option<Token>,
    pub body: Stmt,
    /// From the `fn` keyword through the closing brace.
    pub span: Span,
}

impl Function {
    pub fn get_span(&self) -> Span {
        self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Return(ReturnStmt),
    Dummy(DummyNode),
}

impl Stmt {
    pub fn get_span(&self) -> Span {
        match self {
            Stmt::Return(stmt) => stmt.get_span(),
            Stmt::Dummy(dummy) => dummy.get_span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(ConstExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Dummy(DummyNode),
}

impl Expr {
    pub fn get_span(&self) -> Span {
        match self {
            Expr::Const(expr) => expr.get_span(),
            Expr::Unary(expr) => expr.get_span(),
            Expr::Binary(expr) => expr.get_span(),
            Expr::Dummy(dummy) => dummy.get_span(),
        }
    }
}
