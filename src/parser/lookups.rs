use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::{Token, TokenKind}};

use super::{expr::*, parser::Parser};

/// Left and right binding power of an infix operator. Higher binds tighter;
/// `left < right` makes the operator left-associative.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BindingPower {
    pub left: u8,
    pub right: u8,
}

impl BindingPower {
    const fn left_assoc(precedence: u8) -> Self {
        BindingPower {
            left: precedence,
            right: precedence + 1,
        }
    }
}

pub const PREFIX_BINDING_POWER: u8 = 13;

/// Handles a token in prefix position; receives the already-consumed token.
pub type NUDHandler = fn(&mut Parser, Token) -> Result<Expr, Error>;
/// Handles an infix operator; receives the left operand and the consumed operator.
pub type LEDHandler = fn(&mut Parser, Expr, Token, BindingPower) -> Result<Expr, Error>;

pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, (BindingPower, LEDHandler)>;
pub type SyncLookup = HashSet<TokenKind>;

lazy_static! {
    pub static ref NUD_LOOKUP: NUDLookup = {
        let mut map: NUDLookup = HashMap::new();
        map.insert(TokenKind::IntegerNumber, parse_const_expr);
        map.insert(TokenKind::LeftParen, parse_grouping_expr);
        map.insert(TokenKind::Plus, parse_prefix_expr);
        map.insert(TokenKind::Minus, parse_prefix_expr);
        map.insert(TokenKind::Tilde, parse_prefix_expr);
        map.insert(TokenKind::Not, parse_prefix_expr);
        map
    };

    pub static ref LED_LOOKUP: LEDLookup = {
        let mut map: LEDLookup = HashMap::new();

        // Logical
        map.insert(TokenKind::BarBar, (BindingPower::left_assoc(1), parse_binary_expr as LEDHandler));
        map.insert(TokenKind::AmpersandAmpersand, (BindingPower::left_assoc(3), parse_binary_expr));

        // Equality
        map.insert(TokenKind::Equals, (BindingPower::left_assoc(5), parse_binary_expr));
        map.insert(TokenKind::NotEquals, (BindingPower::left_assoc(5), parse_binary_expr));

        // Relational
        map.insert(TokenKind::Less, (BindingPower::left_assoc(7), parse_binary_expr));
        map.insert(TokenKind::LessEqual, (BindingPower::left_assoc(7), parse_binary_expr));
        map.insert(TokenKind::Greater, (BindingPower::left_assoc(7), parse_binary_expr));
        map.insert(TokenKind::GreaterEqual, (BindingPower::left_assoc(7), parse_binary_expr));

        // Additive and multiplicative
        map.insert(TokenKind::Plus, (BindingPower::left_assoc(9), parse_binary_expr));
        map.insert(TokenKind::Minus, (BindingPower::left_assoc(9), parse_binary_expr));
        map.insert(TokenKind::Star, (BindingPower::left_assoc(11), parse_binary_expr));
        map.insert(TokenKind::Slash, (BindingPower::left_assoc(11), parse_binary_expr));
        map.insert(TokenKind::Percent, (BindingPower::left_assoc(11), parse_binary_expr));
        map
    };

    pub static ref FUNCTION_SYNC_SET: SyncLookup = HashSet::from([
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Arrow,
        TokenKind::Semicolon,
        TokenKind::LeftParen,
    ]);

    pub static ref STATEMENT_SYNC_SET: SyncLookup = HashSet::from([
        TokenKind::Semicolon,
        TokenKind::RightBrace,
    ]);

    pub static ref EXPRESSION_SYNC_SET: SyncLookup = HashSet::from([
        TokenKind::Comma,
        TokenKind::RightParen,
    ]);
}

/// A grammar level with its own set of safe resumption tokens.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SyncSet {
    Function,
    Statement,
    Expression,
}

impl SyncSet {
    pub fn kinds(self) -> &'static SyncLookup {
        match self {
            SyncSet::Function => &FUNCTION_SYNC_SET,
            SyncSet::Statement => &STATEMENT_SYNC_SET,
            SyncSet::Expression => &EXPRESSION_SYNC_SET,
        }
    }

    pub fn contains(self, kind: TokenKind) -> bool {
        self.kinds().contains(&kind)
    }
}

/// Infix binding power of `kind`, if it is an infix operator.
pub fn infix_binding_power(kind: TokenKind) -> Option<BindingPower> {
    LED_LOOKUP.get(&kind).map(|(bp, _)| *bp)
}
