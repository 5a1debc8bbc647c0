use tracing::debug;

use crate::{
    ast::{
        ast::{Function, Program, Stmt},
        expressions::DummyNode,
        statements::ReturnStmt,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{expr::parse_expr, lookups::SyncSet, parser::Parser};

pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let function = parse_function(parser)?;

    if parser.has_tokens() {
        let first = parser.current_token();
        let mut last = first;
        while parser.has_tokens() {
            last = parser.advance();
        }

        parser.report(
            format!("expected {}, found {}", TokenKind::Eof, first.kind),
            Span::new(first.span.start, last.span.end),
            vec![],
        );
    }

    Ok(Program { function })
}

/// `fn <identifier> ( ) -> <identifier> { <statement> }`
pub fn parse_function(parser: &mut Parser) -> Result<Function, Error> {
    let mut parser = parser.enter(SyncSet::Function);
    let start = parser.current_token().span.start;

    parser.expect(TokenKind::Fn)?;
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::LeftParen)?;
    parser.expect(TokenKind::RightParen)?;
    parser.expect(TokenKind::Arrow)?;
    let return_type = parser.expect(TokenKind::Identifier)?;
    let open = parser.expect(TokenKind::LeftBrace)?;

    let body = parse_stmt(&mut parser)?;

    let squiggles = open.map(|token| vec![token.span]).unwrap_or_default();
    let close = parser.expect_closing_with_squiggles(TokenKind::RightBrace, squiggles)?;
    let end = close.map_or(body.get_span().end, |token| token.span.end);

    debug!(
        name = ?name.map(|token| token.span),
        resolved = close.is_some(),
        "parsed function"
    );

    Ok(Function {
        name,
        return_type,
        body,
        span: Span::new(start, end.max(start)),
    })
}

/// `return <expression> ;`
///
/// A statement whose `return` keyword could not be found becomes a dummy
/// anchored where the statement should have started.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let mut parser = parser.enter(SyncSet::Statement);
    let anchor = parser.current_token();

    let keyword = parser.expect(TokenKind::Return)?;
    let expr = parse_expr(&mut parser, 0)?;
    parser.expect_closing(TokenKind::Semicolon)?;

    match keyword {
        Some(_) => Ok(Stmt::Return(ReturnStmt { expr })),
        None => Ok(Stmt::Dummy(DummyNode { token: anchor })),
    }
}
