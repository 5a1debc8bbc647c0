//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! and recursive descent for the function and statement productions.
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.
//! Syntax errors are collected as diagnostics; the parser resynchronizes
//! on per-production token sets and keeps going.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
