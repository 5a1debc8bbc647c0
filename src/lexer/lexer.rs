use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

/// Characters that may be followed by a second character forming a longer
/// token. The table is tried in order; the first match wins, otherwise the
/// single-character kind is used.
type MunchTable = (TokenKind, &'static [(char, TokenKind)]);

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: number_handler },
    ];

    static ref MUNCH_LOOKUP: HashMap<char, MunchTable> = {
        let mut map: HashMap<char, MunchTable> = HashMap::new();
        map.insert('(', (TokenKind::LeftParen, &[]));
        map.insert(')', (TokenKind::RightParen, &[]));
        map.insert('{', (TokenKind::LeftBrace, &[]));
        map.insert('}', (TokenKind::RightBrace, &[]));
        map.insert(':', (TokenKind::Colon, &[]));
        map.insert(';', (TokenKind::Semicolon, &[]));
        map.insert(',', (TokenKind::Comma, &[]));
        map.insert('%', (TokenKind::Percent, &[]));
        map.insert('~', (TokenKind::Tilde, &[]));
        map.insert('-', (TokenKind::Minus, &[
            ('>', TokenKind::Arrow),
            ('=', TokenKind::MinusAssign),
            ('-', TokenKind::MinusMinus),
        ]));
        map.insert('+', (TokenKind::Plus, &[('=', TokenKind::PlusAssign), ('+', TokenKind::PlusPlus)]));
        map.insert('*', (TokenKind::Star, &[('=', TokenKind::StarAssign)]));
        map.insert('/', (TokenKind::Slash, &[('=', TokenKind::SlashAssign)]));
        map.insert('=', (TokenKind::Assign, &[('=', TokenKind::Equals)]));
        map.insert('!', (TokenKind::Not, &[('=', TokenKind::NotEquals)]));
        map.insert('&', (TokenKind::Ampersand, &[('&', TokenKind::AmpersandAmpersand)]));
        map.insert('|', (TokenKind::Bar, &[('|', TokenKind::BarBar)]));
        map.insert('<', (TokenKind::Less, &[('=', TokenKind::LessEqual)]));
        map.insert('>', (TokenKind::Greater, &[('=', TokenKind::GreaterEqual)]));
        map
    };
}

pub struct Lexer<'src> {
    tokens: Vec<Token>,
    source: &'src str,
    pos: usize,
    /// 1-based; only used to annotate lexical errors.
    line: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = ?token.kind, start = token.span.start, end = token.span.end, "token");
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The character after the current one.
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.remainder().chars();
        chars.next();
        chars.next()
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    fn scan_token(&mut self, ch: char) -> Result<(), Error> {
        match ch {
            '\n' => {
                self.line += 1;
                self.advance_n(1);
            }
            ' ' | '\t' | '\r' => self.advance_n(1),
            '/' if self.peek() == Some('/') => self.skip_line_comment(),
            '/' if self.peek() == Some('*') => self.skip_block_comment()?,
            _ => {
                if let Some((kind, table)) = MUNCH_LOOKUP.get(&ch) {
                    self.munch(*kind, table);
                    return Ok(());
                }

                for pattern in PATTERNS.iter() {
                    if let Some(matched) = pattern.regex.find(self.remainder()) {
                        (pattern.handler)(self, matched.as_str());
                        return Ok(());
                    }
                }

                return Err(Error::new(
                    ErrorImpl::UnexpectedSymbol {
                        symbol: ch,
                        line: self.line,
                    },
                    Span::point(self.pos),
                ));
            }
        }

        Ok(())
    }

    fn munch(&mut self, single: TokenKind, table: &[(char, TokenKind)]) {
        let start = self.pos;
        let next = self.peek();

        if let Some((_, kind)) = table.iter().find(|(expected, _)| Some(*expected) == next) {
            self.push(MK_TOKEN!(*kind, start, start + 1));
            self.advance_n(2);
        } else {
            self.push(MK_TOKEN!(single, start, start));
            self.advance_n(1);
        }
    }

    /// Skips `// ...` up to and including the terminating newline.
    fn skip_line_comment(&mut self) {
        match self.remainder().find('\n') {
            Some(newline) => {
                self.line += 1;
                self.advance_n(newline + 1);
            }
            None => self.pos = self.source.len(),
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), Error> {
        let start = self.pos;
        let body = &self.remainder()[2..];

        match body.find("*/") {
            Some(close) => {
                self.line += body[..close].matches('\n').count() as u32;
                self.advance_n(2 + close + 2);
                Ok(())
            }
            None => Err(Error::new(
                ErrorImpl::UnterminatedComment { line: self.line },
                Span::new(start, start + 1),
            )),
        }
    }
}

/// Span of a lexeme starting at `start`; the end points at its last character.
fn lexeme_span(start: usize, lexeme: &str) -> Span {
    let last = lexeme.char_indices().last().map_or(0, |(offset, _)| offset);
    Span::new(start, start + last)
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexeme_span(lexer.pos, matched);
    lexer.push(MK_TOKEN!(TokenKind::IntegerNumber, span.start, span.end));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexeme_span(lexer.pos, matched);
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, span.start, span.end));
    lexer.advance_n(matched.len());
}

/// Converts source text into tokens.
///
/// Whitespace and comments produce no tokens, and no end-of-input token is
/// appended. The first unexpected character, or an unterminated block comment,
/// aborts the whole pass.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while let Some(ch) = lex.at() {
        lex.scan_token(ch)?;
    }

    debug!(tokens = lex.tokens.len(), lines = lex.line(), "tokenized source");
    Ok(lex.tokens)
}
