//! Indented tree dump, mostly for tests and `--print-ast`.
//!
//! ```text
//! Program
//!   Function main -> i32
//!     ReturnStmt
//!       BinaryExpr +
//!         ConstExpr 1
//!         ConstExpr 2
//! ```

use crate::lexer::tokens::Token;

use super::{
    ast::{Function, Program},
    expressions::{BinaryExpr, ConstExpr, DummyNode, UnaryExpr},
    statements::ReturnStmt,
    visitor::Visitor,
};

const UNRESOLVED: &str = "Unresolved";

pub fn print_tree(program: &Program, source: &str) -> String {
    let mut printer = TreePrinter {
        source,
        depth: 0,
        out: String::new(),
    };

    program.accept(&mut printer);
    printer.out
}

struct TreePrinter<'src> {
    source: &'src str,
    depth: usize,
    out: String,
}

impl TreePrinter<'_> {
    fn line(&mut self, text: &str) {
        self.out.push_str(&"  ".repeat(self.depth));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn lexeme_or_unresolved(&self, token: Option<&Token>) -> String {
        token.map_or_else(
            || String::from(UNRESOLVED),
            |token| token.lexeme(self.source).to_string(),
        )
    }

    fn nested(&mut self, visit: impl FnOnce(&mut Self)) {
        self.depth += 1;
        visit(self);
        self.depth -= 1;
    }
}

impl Visitor for TreePrinter<'_> {
    type Output = ();

    fn visit_program(&mut self, program: &Program) {
        self.line("Program");
        self.nested(|printer| program.function.accept(printer));
    }

    fn visit_function(&mut self, function: &Function) {
        let name = self.lexeme_or_unresolved(function.name.as_ref());
        let return_type = self.lexeme_or_unresolved(function.return_type.as_ref());

        self.line(&format!("Function {} -> {}", name, return_type));
        self.nested(|printer| function.body.accept(printer));
    }

    fn visit_return_statement(&mut self, stmt: &ReturnStmt) {
        self.line("ReturnStmt");
        self.nested(|printer| stmt.expr.accept(printer));
    }

    fn visit_unary_expression(&mut self, expr: &UnaryExpr) {
        self.line(&format!("UnaryExpr {}", expr.op.lexeme(self.source)));
        self.nested(|printer| expr.rhs.accept(printer));
    }

    fn visit_binary_expression(&mut self, expr: &BinaryExpr) {
        self.line(&format!("BinaryExpr {}", expr.op.lexeme(self.source)));
        self.nested(|printer| {
            expr.lhs.accept(printer);
            expr.rhs.accept(printer);
        });
    }

    fn visit_const_expression(&mut self, expr: &ConstExpr) {
        self.line(&format!("ConstExpr {}", expr.value.lexeme(self.source)));
    }

    fn visit_dummy(&mut self, _dummy: &DummyNode) {
        self.line(UNRESOLVED);
    }
}
