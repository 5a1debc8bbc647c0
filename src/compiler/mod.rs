//! Code generation module for the compiler.
//!
//! This module contains the C emitter that serializes a parsed program into
//! C source text. Trees that still contain placeholders from error recovery
//! are rejected rather than emitted.

pub mod compiler;

#[cfg(test)]
mod tests;
