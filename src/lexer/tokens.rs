use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Colon,
    Semicolon,
    Comma,
    Arrow,

    Minus,
    Plus,
    Star,
    Slash,
    Percent,
    Tilde,
    Not,
    Ampersand,
    AmpersandAmpersand,
    Bar,
    BarBar,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Assign,    // =
    Equals,    // ==
    NotEquals, // !=

    MinusAssign,
    PlusAssign,
    StarAssign,
    SlashAssign,
    PlusPlus,
    MinusMinus,

    Identifier,
    IntegerNumber,

    // Reserved
    Fn,
    Return,

    Eof,
}

impl TokenKind {
    /// Whether the expression parser treats this kind as an operator.
    ///
    /// This is independent of precedence: `)` is an operator with no infix
    /// binding power, so it ends an expression.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::Minus
                | TokenKind::Plus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Tilde
                | TokenKind::Not
                | TokenKind::Ampersand
                | TokenKind::AmpersandAmpersand
                | TokenKind::Bar
                | TokenKind::BarBar
                | TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::MinusAssign
                | TokenKind::PlusAssign
                | TokenKind::StarAssign
                | TokenKind::SlashAssign
                | TokenKind::PlusPlus
                | TokenKind::MinusMinus
        )
    }

    /// Source text of fixed-spelling kinds.
    pub fn symbol(self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Arrow => "->",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Tilde => "~",
            TokenKind::Not => "!",
            TokenKind::Ampersand => "&",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::Bar => "|",
            TokenKind::BarBar => "||",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Assign => "=",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::MinusAssign => "-=",
            TokenKind::PlusAssign => "+=",
            TokenKind::StarAssign => "*=",
            TokenKind::SlashAssign => "/=",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Fn => "fn",
            TokenKind::Return => "return",
            TokenKind::Identifier | TokenKind::IntegerNumber | TokenKind::Eof => return None,
        };

        Some(symbol)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::IntegerNumber => write!(f, "integer literal"),
            TokenKind::Eof => write!(f, "end of input"),
            kind => write!(f, "`{}`", kind.symbol().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The token's text, sliced out of the source it was lexed from.
    pub fn lexeme<'src>(&self, source: &'src str) -> &'src str {
        if self.kind == TokenKind::Eof {
            return "";
        }

        self.span.slice(source)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} [{}..={}]", self.kind, self.span.start, self.span.end)
    }
}
