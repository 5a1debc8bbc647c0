use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, ConstExpr, DummyNode, UnaryExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{BindingPower, SyncSet, LED_LOOKUP, NUD_LOOKUP, PREFIX_BINDING_POWER},
    parser::Parser,
};

/// Parses an expression whose operators all bind at least as tightly as
/// `min_bp`.
pub fn parse_expr(parser: &mut Parser, min_bp: u8) -> Result<Expr, Error> {
    let mut parser = parser.enter(SyncSet::Expression);
    parser.check_nesting()?;

    if parser.is_recovering() {
        return Ok(Expr::Dummy(DummyNode {
            token: parser.current_token(),
        }));
    }

    let token = parser.current_token();
    let mut lhs = match NUD_LOOKUP.get(&token.kind).copied() {
        Some(nud) => {
            parser.advance();
            nud(&mut parser, token)?
        }
        None => parse_invalid_operand(&mut parser, token)?,
    };

    // While the next operator binds tighter than the caller allows, fold it into lhs
    loop {
        let op = parser.current_token();

        if parser.is_recovering() || op.kind == TokenKind::Eof || !op.kind.is_operator() {
            break;
        }

        let Some((bp, led)) = LED_LOOKUP.get(&op.kind).copied() else {
            break;
        };

        if bp.left < min_bp {
            break;
        }

        trace!(op = ?op.kind, left = bp.left, right = bp.right, "infix");
        parser.advance();
        lhs = led(&mut parser, lhs, op, bp)?;
    }

    Ok(lhs)
}

/// A token that cannot start an expression. The operand becomes a dummy and
/// the parser starts recovering. The token is discarded unless it closes a
/// statement or expression enclosing this one.
fn parse_invalid_operand(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    if token.kind == TokenKind::Eof {
        return Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("expression"),
            },
            token.span,
        ));
    }

    parser.report(
        format!("expected expression, found {}", token.kind),
        token.span,
        vec![],
    );

    if !parser.closes_enclosing_production(token.kind) {
        parser.advance();
    }
    parser.start_recovering();

    Ok(Expr::Dummy(DummyNode { token }))
}

pub fn parse_const_expr(_parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    Ok(Expr::Const(ConstExpr { value: token }))
}

/// `( expr )`. Parentheses only group; they produce no node of their own.
pub fn parse_grouping_expr(parser: &mut Parser, open: Token) -> Result<Expr, Error> {
    let inner = parse_expr(parser, 0)?;
    parser.expect_closing_with_squiggles(TokenKind::RightParen, vec![open.span])?;

    Ok(inner)
}

pub fn parse_prefix_expr(parser: &mut Parser, op: Token) -> Result<Expr, Error> {
    let rhs = parse_expr(parser, PREFIX_BINDING_POWER)?;

    Ok(Expr::Unary(UnaryExpr {
        op,
        rhs: Box::new(rhs),
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, lhs: Expr, op: Token, bp: BindingPower) -> Result<Expr, Error> {
    let rhs = parse_expr(parser, bp.right)?;

    Ok(Expr::Binary(BinaryExpr {
        lhs: Box::new(lhs),
        op,
        rhs: Box::new(rhs),
    }))
}
