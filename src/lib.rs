#![allow(clippy::module_inception)]

pub mod ast;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// An inclusive range of byte offsets into the source buffer.
///
/// Spans never own text. `start == end` covers a single character, which is
/// also how collapsed spans (see [`Span::point`]) are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// A span collapsed onto a single offset.
    pub const fn point(offset: usize) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Creates a span covering both `self` and `other`.
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns the text covered by the span, or an empty string if the span
    /// does not lie within `source`.
    pub fn slice(self, source: &str) -> &str {
        let width = source
            .get(self.end..)
            .and_then(|tail| tail.chars().next())
            .map_or(0, char::len_utf8);

        source.get(self.start..self.end + width).unwrap_or("")
    }
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line's text (including its trailing
/// newline, if any) and the offset of `position` within that line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    // Offsets one past the final character point at the end of the last line.
    let last = source.split_inclusive('\n').last().unwrap_or("");
    if last.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        Some(((line_number - 1).max(1), last.to_string(), last.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, Span};

    const SOURCE: &str = "Hello, world!\nfn main()\n\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 33).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = get_line_at_position("return 1", 8).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "return 1");
        assert_eq!(line_pos, 8);

        assert!(get_line_at_position("abc", 10).is_none());
    }

    #[test]
    fn test_span_slice_is_inclusive() {
        let source = "fn main() -> i32";
        assert_eq!(Span::new(3, 6).slice(source), "main");
        assert_eq!(Span::point(0).slice(source), "f");
        assert_eq!(Span::new(40, 41).slice(source), "");
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::new(4, 6).merge(Span::new(1, 2));
        assert_eq!(merged, Span::new(1, 6));
    }
}
