//! Dispatch for passes that walk a finished tree.
//!
//! The node set is closed, so dispatch is a plain `match`; adding a node kind
//! forces every visitor to handle it.

use super::{
    ast::{Expr, Function, Program, Stmt},
    expressions::{BinaryExpr, ConstExpr, DummyNode, UnaryExpr},
    statements::ReturnStmt,
};

pub trait Visitor {
    type Output;

    fn visit_program(&mut self, program: &Program) -> Self::Output;
    fn visit_function(&mut self, function: &Function) -> Self::Output;
    fn visit_return_statement(&mut self, stmt: &ReturnStmt) -> Self::Output;
    fn visit_unary_expression(&mut self, expr: &UnaryExpr) -> Self::Output;
    fn visit_binary_expression(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_const_expression(&mut self, expr: &ConstExpr) -> Self::Output;
    fn visit_dummy(&mut self, dummy: &DummyNode) -> Self::Output;
}

impl Program {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_program(self)
    }
}

impl Function {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_function(self)
    }
}

impl Stmt {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Return(stmt) => visitor.visit_return_statement(stmt),
            Stmt::Dummy(dummy) => visitor.visit_dummy(dummy),
        }
    }
}

impl Expr {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Const(expr) => visitor.visit_const_expression(expr),
            Expr::Unary(expr) => visitor.visit_unary_expression(expr),
            Expr::Binary(expr) => visitor.visit_binary_expression(expr),
            Expr::Dummy(dummy) => visitor.visit_dummy(dummy),
        }
    }
}
