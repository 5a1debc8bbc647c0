//! Tunable limits for a single compilation unit.

/// Maximum number of diagnostics retained per compilation unit.
pub const MAX_DIAGNOSTICS: usize = 20;

/// Maximum expression nesting depth accepted by the parser.
pub const MAX_NESTING_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerOptions {
    /// How many diagnostics the emitter records before rejecting new ones.
    pub max_diagnostics: usize,
    /// How deeply expressions may nest before parsing is aborted.
    pub max_nesting_depth: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            max_diagnostics: MAX_DIAGNOSTICS,
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}
