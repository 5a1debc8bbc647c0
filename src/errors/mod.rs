//! Error types and error handling for the compiler.
//!
//! This module defines:
//!
//! - Fatal errors with source span information (`errors`)
//! - The bounded diagnostic emitter the parser records syntax errors in
//!   (`emitter`); lexical errors are always fatal
//! - Terminal rendering of errors and diagnostics (`report`)

pub mod emitter;
pub mod errors;
pub mod report;

#[cfg(test)]
mod tests;
