//! Utility macros for the compiler.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Keeps the lexer's token construction terse.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$start` - Offset of the first character of the token
/// * `$end` - Offset of the last character of the token (inclusive)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Arrow, 10, 11);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            span: Span {
                start: $start,
                end: $end,
            },
        }
    };
}
