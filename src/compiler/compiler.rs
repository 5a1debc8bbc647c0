//! Main compiler module.
//!
//! Walks the AST with a [`Visitor`] and produces C source. Every operator
//! application is parenthesized so the output does not depend on C's
//! precedence rules.

use tracing::debug;

use crate::{
    ast::{
        ast::{Function, Program},
        expressions::{BinaryExpr, ConstExpr, DummyNode, UnaryExpr},
        statements::ReturnStmt,
        visitor::Visitor,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

const INDENT: &str = "  ";

/// The C type a source-level type lowers to, with the largest literal it
/// can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CType {
    pub name: &'static str,
    pub max: u64,
}

/// Maps a source-level type name onto the C type it lowers to.
pub fn c_type(name: &str) -> Option<CType> {
    let (name, max) = match name {
        "i32" | "bool" => ("int", i32::MAX as u64),
        "i64" => ("long long", i64::MAX as u64),
        "u32" => ("unsigned int", u32::MAX as u64),
        "u64" => ("unsigned long long", u64::MAX),
        _ => return None,
    };

    Some(CType { name, max })
}

/// Compiles `program` into C source text.
pub fn compile(program: &Program, source: &str) -> Result<String, Error> {
    let mut emitter = CEmitter {
        source,
        return_type: None,
    };
    let output = program.accept(&mut emitter)?;

    debug!(bytes = output.len(), "emitted C");
    Ok(output)
}

/// The C code emitter. Holds the source so token text can be recovered from
/// spans.
pub struct CEmitter<'src> {
    source: &'src str,
    /// Source name and C type of the function being emitted; literals are
    /// range-checked against it.
    return_type: Option<(&'src str, CType)>,
}

impl CEmitter<'_> {
    fn resolved(&self, token: Option<Token>, function: &Function) -> Result<Token, Error> {
        token.ok_or_else(|| Error::new(ErrorImpl::UnresolvedNode, function.get_span()))
    }
}

impl Visitor for CEmitter<'_> {
    type Output = Result<String, Error>;

    fn visit_program(&mut self, program: &Program) -> Self::Output {
        program.function.accept(self)
    }

    fn visit_function(&mut self, function: &Function) -> Self::Output {
        let name = self.resolved(function.name, function)?;
        let return_type = self.resolved(function.return_type, function)?;

        let type_name = return_type.lexeme(self.source);
        let Some(c_return_type) = c_type(type_name) else {
            return Err(Error::new(
                ErrorImpl::UnknownType {
                    type_: type_name.to_string(),
                },
                return_type.span,
            ));
        };
        self.return_type = Some((type_name, c_return_type));

        let body = function.body.accept(self)?;

        Ok(format!(
            "{} {}() {{\n{}}}\n",
            c_return_type.name,
            name.lexeme(self.source),
            body
        ))
    }

    fn visit_return_statement(&mut self, stmt: &ReturnStmt) -> Self::Output {
        let expr = stmt.expr.accept(self)?;
        Ok(format!("{}return {};\n", INDENT, expr))
    }

    fn visit_unary_expression(&mut self, expr: &UnaryExpr) -> Self::Output {
        let rhs = expr.rhs.accept(self)?;
        Ok(format!("({}{})", expr.op.lexeme(self.source), rhs))
    }

    fn visit_binary_expression(&mut self, expr: &BinaryExpr) -> Self::Output {
        let lhs = expr.lhs.accept(self)?;
        let rhs = expr.rhs.accept(self)?;
        Ok(format!("({} {} {})", lhs, expr.op.lexeme(self.source), rhs))
    }

    fn visit_const_expression(&mut self, expr: &ConstExpr) -> Self::Output {
        let value = expr.parse_value(self.source)?;

        if let Some((type_name, c_type)) = self.return_type {
            if value > c_type.max {
                return Err(Error::new(
                    ErrorImpl::LiteralOutOfRange {
                        literal: value.to_string(),
                        type_: type_name.to_string(),
                    },
                    expr.get_span(),
                ));
            }
        }

        // Decimal literals above `long long` need an explicit unsigned suffix
        if value > i64::MAX as u64 {
            Ok(format!("{}ULL", value))
        } else {
            Ok(value.to_string())
        }
    }

    fn visit_dummy(&mut self, dummy: &DummyNode) -> Self::Output {
        Err(Error::new(ErrorImpl::UnresolvedNode, dummy.get_span()))
    }
}
