//! Terminal rendering for fatal errors and diagnostics.
//!
//! ```text
//! error: expected `->`, found `{`
//! -> main.rc:1:11
//!   |
//! 1 | fn main() { return 23; }
//!   |           ^
//! ```

use colored::Colorize;

use crate::{get_line_at_position, Span};

use super::{
    emitter::{Diagnostic, DiagnosticEmitter},
    errors::{Error, ErrorTip},
};

pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    match error.get_tip() {
        ErrorTip::None => out.push_str(&format!(
            "{}: {}\n",
            "error".red().bold(),
            error.get_error_name().bold()
        )),
        tip => out.push_str(&format!(
            "{}: {} ({})\n",
            "error".red().bold(),
            error.get_error_name().bold(),
            tip
        )),
    }

    render_snippet(&mut out, source, file, error.get_span(), &[]);
    out
}

pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str, file: &str) -> String {
    let mut out = format!(
        "{}: {}\n",
        "error".red().bold(),
        diagnostic.message.bold()
    );

    render_snippet(&mut out, source, file, diagnostic.span, &diagnostic.squiggles);
    out
}

/// Renders every diagnostic the emitter holds, followed by a truncation note
/// when some were dropped.
pub fn render_diagnostics(emitter: &DiagnosticEmitter, source: &str, file: &str) -> String {
    let mut out = String::new();

    for diagnostic in emitter.all() {
        out.push_str(&render_diagnostic(diagnostic, source, file));
        out.push('\n');
    }

    if emitter.dropped() > 0 {
        out.push_str(&format!(
            "{}: {} further errors truncated\n",
            "note".cyan().bold(),
            emitter.dropped()
        ));
    }

    out
}

fn render_snippet(out: &mut String, source: &str, file: &str, span: Span, squiggles: &[Span]) {
    let Some((line, line_text, column)) = get_line_at_position(source, span.start) else {
        out.push_str(&format!("{} {}\n", "->".blue(), file));
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let line_text = line_text.trim_end_matches(['\n', '\r']);

    out.push_str(&format!("{} {}:{}:{}\n", "->".blue(), file, line, column + 1));
    out.push_str(&format!("{:>padding$}\n", "|".blue()));
    out.push_str(&format!(
        "{} {} {}\n",
        line_string.blue().bold(),
        "|".blue(),
        line_text
    ));

    let line_start = span.start - column;
    let line_end = line_start + line_text.len();
    let mut marks: Vec<char> = vec![' '; line_text.len().max(column + 1)];

    for squiggle in squiggles {
        mark(&mut marks, *squiggle, line_start, line_end, '-');
    }
    mark(&mut marks, span, line_start, line_end, '^');

    // A collapsed span at end of line still gets a caret.
    if let Some(slot) = marks.get_mut(column) {
        *slot = '^';
    }

    let underline: String = marks.into_iter().collect();
    out.push_str(&format!(
        "{:>padding$} {}\n",
        "|".blue(),
        underline.trim_end().red().bold()
    ));

    for squiggle in squiggles {
        if squiggle.start < line_start || squiggle.start > line_end {
            render_snippet(out, source, file, *squiggle, &[]);
        }
    }
}

fn mark(marks: &mut [char], span: Span, line_start: usize, line_end: usize, symbol: char) {
    if span.end < line_start || span.start > line_end {
        return;
    }

    let from = span.start.max(line_start);
    let to = span.end.min(line_end.saturating_sub(1)).max(from);

    for offset in from..=to {
        if let Some(slot) = marks.get_mut(offset - line_start) {
            *slot = symbol;
        }
    }
}
