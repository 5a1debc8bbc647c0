//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Maximal-munch recognition of punctuation and compound operators
//! - Identifiers, keywords and unsigned integer literals
//! - Skipping whitespace and `//` / `/* */` comments
//! - Token spans for error reporting

pub mod lexer;
pub mod tokens;
