//! rustc-style rendering for terminals.
//!
//! Each diagnostic is rendered into a `String` first and written in one
//! call, so interleaved program output never splits a diagnostic.

use std::fmt::Write as _;
use std::io::{self, Write};

use star_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// Whether to emit ANSI escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_tty,
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Error,
    Warning,
    Help,
    Secondary,
    Bold,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Help => "\x1b[1;32m",
            Style::Secondary => "\x1b[1;34m",
            Style::Bold => "\x1b[1m",
        }
    }

    fn of(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// The file diagnostics point into.
struct Source {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Writes diagnostics to any [`Write`], optionally with color and source
/// snippets.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<Source>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Resolve spans against `text`, printing `path:line:col` and a snippet.
    ///
    /// Without a source, labels print raw byte ranges.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = LineOffsetTable::build(&text);
        self.source = Some(Source {
            path: path.into(),
            text,
            lines,
        });
        self
    }

    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, out: &mut String, text: &str, style: Style) {
        if self.colors {
            let _ = write!(out, "{}{text}{RESET}", style.ansi());
        } else {
            out.push_str(text);
        }
    }

    fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();
        let severity = diagnostic.severity;
        self.paint(&mut out, severity.as_str(), Style::of(severity));
        out.push(' ');
        self.paint(&mut out, &format!("[{}]", diagnostic.code), Style::Bold);
        let _ = writeln!(out, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.render_label(&mut out, label, diagnostic.severity);
        }
        for note in &diagnostic.notes {
            out.push_str("  = ");
            self.paint(&mut out, "note", Style::Bold);
            let _ = writeln!(out, ": {note}");
        }
        for suggestion in &diagnostic.suggestions {
            out.push_str("  = ");
            self.paint(&mut out, "help", Style::Help);
            let _ = writeln!(out, ": {suggestion}");
        }
        out.push('\n');
        out
    }

    fn render_label(&self, out: &mut String, label: &Label, severity: Severity) {
        let (marker, style) = if label.is_primary {
            ("-->", Style::of(severity))
        } else {
            (":::", Style::Secondary)
        };

        let Some(source) = &self.source else {
            let _ = write!(out, "  {marker} {:?}: ", label.span);
            self.paint(out, &label.message, style);
            out.push('\n');
            return;
        };

        let (line, col) = source.lines.offset_to_line_col(&source.text, label.span.start);
        let line_text = source.lines.line_text(&source.text, line).unwrap_or_default();
        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());

        let _ = writeln!(out, "{pad}{marker} {}:{line}:{col}", source.path);
        let _ = writeln!(out, "{pad} |");
        let _ = writeln!(out, "{gutter} | {line_text}");
        let _ = write!(out, "{pad} | ");
        let underline = caret_line(line_text, col, label.span, label.is_primary);
        self.paint(out, &format!("{underline} {}", label.message), style);
        out.push('\n');
    }
}

/// Build the `^^^` (primary) or `---` (secondary) underline for a label.
///
/// Spans reaching past the end of the line are cut at the line end.
fn caret_line(line_text: &str, col: u32, span: Span, primary: bool) -> String {
    let start = (col as usize).saturating_sub(1);
    let available = line_text.chars().count().saturating_sub(start).max(1);
    let width = (span.len() as usize).clamp(1, available);
    let mark = if primary { "^" } else { "-" };
    format!("{}{}", " ".repeat(start), mark.repeat(width))
}

/// The closing line after a batch, or `None` when there is nothing to say.
fn summary(errors: usize, warnings: usize) -> Option<(Style, &'static str, String)> {
    let warned = |n: usize| format!("{n} warning{} emitted", if n == 1 { "" } else { "s" });
    match (errors, warnings) {
        (0, 0) => None,
        (0, w) => Some((Style::Warning, "warning", warned(w))),
        (e, w) => {
            let previous = if e == 1 {
                "previous error".to_owned()
            } else {
                format!("{e} previous errors")
            };
            let text = if w == 0 {
                format!("aborting due to {previous}")
            } else {
                format!("aborting due to {previous}; {}", warned(w))
            };
            Some((Style::Error, "error", text))
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let rendered = self.render(diagnostic);
        let _ = self.writer.write_all(rendered.as_bytes());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let Some((style, label, text)) = summary(error_count, warning_count) else {
            return;
        };
        let mut out = String::new();
        self.paint(&mut out, label, style);
        let _ = writeln!(out, ": {text}");
        let _ = self.writer.write_all(out.as_bytes());
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "emitter output is always UTF-8")]
mod tests;
