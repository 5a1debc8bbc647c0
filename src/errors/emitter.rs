//! Bounded collection of syntax diagnostics.
//!
//! The lexer stops at its first failure, but the parser keeps going after a
//! syntax error and records one diagnostic per independent violation here.
//! The emitter caps how many it keeps so pathological input cannot produce
//! unbounded output.

use thiserror::Error;

use crate::{config::MAX_DIAGNOSTICS, Span};

/// A single recoverable syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    /// Primary location of the problem.
    pub span: Span,
    /// Secondary locations worth underlining, e.g. an unclosed `(`.
    pub squiggles: Vec<Span>,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterError {
    #[error("maximum number of diagnostics ({capacity}) reached")]
    CapacityExceeded { capacity: usize },
}

#[derive(Debug, Clone)]
pub struct DiagnosticEmitter {
    diagnostics: Vec<Diagnostic>,
    capacity: usize,
    dropped: usize,
}

impl Default for DiagnosticEmitter {
    fn default() -> Self {
        DiagnosticEmitter::with_capacity(MAX_DIAGNOSTICS)
    }
}

impl DiagnosticEmitter {
    pub fn new() -> Self {
        DiagnosticEmitter::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DiagnosticEmitter {
            diagnostics: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Records a diagnostic.
    ///
    /// Fails once `capacity` diagnostics are already held; the rejected
    /// diagnostic is counted in [`DiagnosticEmitter::dropped`].
    pub fn add(
        &mut self,
        message: impl Into<String>,
        span: Span,
        squiggles: Vec<Span>,
    ) -> Result<(), EmitterError> {
        if self.diagnostics.len() >= self.capacity {
            self.dropped += 1;
            return Err(EmitterError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.diagnostics.push(Diagnostic {
            message: message.into(),
            span,
            squiggles,
        });

        Ok(())
    }

    /// All recorded diagnostics in insertion order.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of diagnostics rejected because the emitter was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
