//! Parser state and the panic-mode recovery machinery.
//!
//! Every nonterminal enters a [`SyncScope`] for its grammar level. When an
//! expected token is missing the parser records one diagnostic, skips to a
//! synchronization token and switches to recovering mode. While recovering,
//! expectations are not re-checked: a token of the expected kind ends
//! recovery, a synchronization token of another kind is left in place and the
//! expectation is reported as unresolved (`Ok(None)`). This keeps a single
//! root error from producing a diagnostic for every expectation that follows
//! it.
//!
//! Expectations inside a production stop on the innermost production's
//! synchronization tokens. The token closing a production stops only on its
//! own kind or on tokens the enclosing productions wait for, so a pending
//! synchronization token is never left behind when a production ends.

use std::ops::{Deref, DerefMut};

use tracing::{debug, trace, warn};

use crate::{
    ast::ast::Program,
    config::CompilerOptions,
    errors::{
        emitter::DiagnosticEmitter,
        errors::{Error, ErrorImpl},
    },
    lexer::tokens::{Token, TokenKind},
    Span, MK_TOKEN,
};

use super::{lookups::SyncSet, stmt::parse_program};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The tokens to parse, always terminated by an `Eof` token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Set between a failed expectation and the token that resynchronizes
    recovering: bool,
    /// Synchronization sets of the nonterminals currently being parsed
    sync_stack: Vec<SyncSet>,
    diagnostics: DiagnosticEmitter,
    max_nesting_depth: usize,
    truncation_reported: bool,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>, options: &CompilerOptions) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
            let offset = tokens.last().map_or(0, |token| token.span.end + 1);
            tokens.push(MK_TOKEN!(TokenKind::Eof, offset, offset));
        }

        Parser {
            tokens,
            pos: 0,
            recovering: false,
            sync_stack: vec![],
            diagnostics: DiagnosticEmitter::with_capacity(options.max_diagnostics),
            max_nesting_depth: options.max_nesting_depth,
            truncation_reported: false,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Token {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one. Never moves
    /// past `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::Eof
    }

    pub fn is_recovering(&self) -> bool {
        self.recovering
    }

    pub fn diagnostics(&self) -> &DiagnosticEmitter {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> DiagnosticEmitter {
        self.diagnostics
    }

    /// Pushes `set` for the lifetime of the returned guard.
    pub fn enter(&mut self, set: SyncSet) -> SyncScope<'_> {
        trace!(?set, depth = self.sync_stack.len() + 1, "push sync set");
        self.sync_stack.push(set);
        SyncScope { parser: self }
    }

    /// Fails once more expressions are open than the configured limit allows.
    pub fn check_nesting(&self) -> Result<(), Error> {
        let depth = self
            .sync_stack
            .iter()
            .filter(|set| **set == SyncSet::Expression)
            .count();

        if depth > self.max_nesting_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_nesting_depth,
                },
                self.current_token().span,
            ));
        }

        Ok(())
    }

    /// Whether `kind` can terminate a statement or expression enclosing the
    /// innermost scope. Function-level tokens (`{`, `->`, `(`) never do.
    pub fn closes_enclosing_production(&self, kind: TokenKind) -> bool {
        self.enclosing_sync_sets()
            .filter(|set| *set != SyncSet::Function)
            .any(|set| set.contains(kind))
    }

    /// Switches to recovering mode after an error the caller has already
    /// reported, so following expectations do not report it again.
    pub fn start_recovering(&mut self) {
        debug!(at = ?self.current_token_kind(), "entering recovery");
        self.recovering = true;
    }

    fn enclosing_sync_sets(&self) -> impl Iterator<Item = SyncSet> + '_ {
        self.sync_stack.iter().rev().skip(1).copied()
    }

    fn peek_kind(&self) -> TokenKind {
        self.tokens[(self.pos + 1).min(self.tokens.len() - 1)].kind
    }

    /// Records a diagnostic. Once the emitter is full further diagnostics are
    /// dropped; the first drop is logged.
    pub fn report(&mut self, message: String, span: Span, squiggles: Vec<Span>) {
        debug!(%message, start = span.start, end = span.end, "syntax error");

        if let Err(error) = self.diagnostics.add(message, span, squiggles) {
            if !self.truncation_reported {
                warn!(%error, "further syntax errors will be dropped");
                self.truncation_reported = true;
            }
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// Returns `Ok(Some(token))` when it is consumed and `Ok(None)` when the
    /// parser is recovering and stopped on a synchronization token instead.
    /// Fails only when the input runs out.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Option<Token>, Error> {
        self.expect_with_squiggles(expected_kind, vec![])
    }

    /// Like [`Parser::expect`], attaching `squiggles` to the diagnostic if
    /// the expectation fails.
    pub fn expect_with_squiggles(
        &mut self,
        expected_kind: TokenKind,
        squiggles: Vec<Span>,
    ) -> Result<Option<Token>, Error> {
        self.expect_at(expected_kind, squiggles, Resync::Innermost)
    }

    /// Expects the token that ends the innermost production. No later
    /// expectation of that production can use a synchronization token, so
    /// recovery only stops on the expected kind or on a token an enclosing
    /// production is waiting for.
    pub fn expect_closing(&mut self, expected_kind: TokenKind) -> Result<Option<Token>, Error> {
        self.expect_closing_with_squiggles(expected_kind, vec![])
    }

    pub fn expect_closing_with_squiggles(
        &mut self,
        expected_kind: TokenKind,
        squiggles: Vec<Span>,
    ) -> Result<Option<Token>, Error> {
        self.expect_at(expected_kind, squiggles, Resync::Enclosing)
    }

    fn expect_at(
        &mut self,
        expected_kind: TokenKind,
        squiggles: Vec<Span>,
        resync: Resync,
    ) -> Result<Option<Token>, Error> {
        if !self.recovering {
            let token = self.current_token();

            if token.kind == expected_kind {
                return Ok(Some(self.advance()));
            }

            if token.kind == TokenKind::Eof {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput {
                        expected: expected_kind.to_string(),
                    },
                    token.span,
                ));
            }

            self.begin_recovery(expected_kind, squiggles, resync)?;
        }

        self.resume(expected_kind, resync)
    }

    fn unrecoverable(&self, expected_kind: TokenKind) -> Error {
        Error::new(
            ErrorImpl::UnrecoverableSyntax {
                expected: expected_kind.to_string(),
            },
            self.current_token().span,
        )
    }

    /// Whether recovery for `resync` may stop on a token of `kind` without
    /// consuming it.
    fn is_sync_point(&self, kind: TokenKind, resync: Resync) -> bool {
        match resync {
            Resync::Innermost => self.sync_stack.last().is_some_and(|set| set.contains(kind)),
            Resync::Enclosing => self.enclosing_sync_sets().any(|set| set.contains(kind)),
        }
    }

    /// Advances until the current token is `expected_kind`, a sync point or
    /// the end of input.
    fn skip_until(&mut self, expected_kind: TokenKind, resync: Resync) {
        while self.has_tokens() {
            let kind = self.current_token_kind();
            if kind == expected_kind || self.is_sync_point(kind, resync) {
                break;
            }

            let skipped = self.advance();
            trace!(kind = ?skipped.kind, "skipped");
        }
    }

    fn begin_recovery(
        &mut self,
        expected_kind: TokenKind,
        squiggles: Vec<Span>,
        resync: Resync,
    ) -> Result<(), Error> {
        if self.sync_stack.is_empty() {
            return Err(self.unrecoverable(expected_kind));
        }

        let bad = self.current_token();

        // A single stray token in front of the expected one
        if self.peek_kind() == expected_kind {
            self.advance();
        } else {
            self.skip_until(expected_kind, resync);
        }

        self.recovering = true;

        let resync_token = self.current_token();
        let message = format!("expected {}, found {}", expected_kind, bad.kind);

        if resync_token.kind == TokenKind::Eof {
            let last = self.tokens[self.pos.saturating_sub(1)];
            self.report(message, bad.span.merge(last.span), squiggles);

            return Err(self.unrecoverable(expected_kind));
        }

        debug!(?resync, at = ?resync_token.kind, "entering recovery");
        self.report(message, bad.span.merge(resync_token.span), squiggles);

        Ok(())
    }

    fn resume(&mut self, expected_kind: TokenKind, resync: Resync) -> Result<Option<Token>, Error> {
        if self.sync_stack.is_empty() {
            return Err(self.unrecoverable(expected_kind));
        }

        loop {
            let token = self.current_token();

            if token.kind == expected_kind {
                debug!(kind = ?token.kind, "recovered");
                self.recovering = false;
                return Ok(Some(self.advance()));
            }

            if token.kind == TokenKind::Eof {
                return Err(self.unrecoverable(expected_kind));
            }

            if self.is_sync_point(token.kind, resync) {
                return Ok(None);
            }

            self.skip_until(expected_kind, resync);
        }
    }
}

/// Where recovery may stop for a failed expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resync {
    /// On the innermost production's synchronization tokens.
    Innermost,
    /// Only on tokens of the productions enclosing the innermost one.
    Enclosing,
}

/// Keeps a synchronization set on the parser's stack until dropped, so the
/// set is popped on every exit path including `?`.
pub struct SyncScope<'p> {
    parser: &'p mut Parser,
}

impl Deref for SyncScope<'_> {
    type Target = Parser;

    fn deref(&self) -> &Self::Target {
        self.parser
    }
}

impl DerefMut for SyncScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.parser
    }
}

impl Drop for SyncScope<'_> {
    fn drop(&mut self) {
        let set = self.parser.sync_stack.pop();
        trace!(?set, depth = self.parser.sync_stack.len(), "pop sync set");
    }
}

/// Parses a token stream into a [`Program`] with default options.
///
/// Syntax errors never fail the parse: they are returned as diagnostics and
/// the tree contains placeholder nodes where input was discarded. `Err` is
/// returned only when the parser cannot continue at all, in which case the
/// diagnostics explain the syntax errors seen up to that point.
pub fn parse(tokens: Vec<Token>) -> (DiagnosticEmitter, Result<Program, Error>) {
    parse_with_options(tokens, &CompilerOptions::default())
}

pub fn parse_with_options(
    tokens: Vec<Token>,
    options: &CompilerOptions,
) -> (DiagnosticEmitter, Result<Program, Error>) {
    let mut parser = Parser::new(tokens, options);
    let program = parse_program(&mut parser);

    debug!(
        diagnostics = parser.diagnostics().len(),
        fatal = program.is_err(),
        "parsed program"
    );

    (parser.into_diagnostics(), program)
}
