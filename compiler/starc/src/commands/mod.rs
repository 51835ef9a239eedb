//! CLI commands.

mod check;
mod debug;
mod run;

#[cfg(test)]
mod tests;

pub use check::{check_file, check_source};
pub use debug::{lex_file, parse_file, write_ast, write_tokens};
pub use run::{run_file, run_source};

use std::io;

use star_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use star_diagnostic::{count_by_severity, Diagnostic};
use star_ir::StringInterner;
use star_lexer::LexError;
use star_parse::{ParseError, ParseOutput};
use star_patterns::{compile_program, CompileOutput};
use tracing::debug;

/// Everything the front end produced for one source file.
pub struct Frontend {
    pub interner: StringInterner,
    pub parsed: ParseOutput,
    pub compiled: CompileOutput,
}

/// Lex, parse and compile `source`, emitting every diagnostic.
///
/// Lex errors stop before parsing and parse errors stop before pattern
/// compilation. Returns `None` if any error was reported.
pub fn compile_frontend<E: DiagnosticEmitter>(
    source: &str,
    deny_warnings: bool,
    emitter: &mut E,
) -> Option<Frontend> {
    let interner = StringInterner::new();

    let lexed = star_lexer::lex_with_errors(source, &interner);
    if lexed.has_errors() {
        let diagnostics: Vec<_> = lexed.errors.iter().map(LexError::to_diagnostic).collect();
        report(&diagnostics, emitter);
        return None;
    }

    let parsed = star_parse::parse(&lexed.tokens, &interner);
    if parsed.has_errors() {
        let diagnostics: Vec<_> = parsed.errors.iter().map(ParseError::to_diagnostic).collect();
        report(&diagnostics, emitter);
        return None;
    }

    let compiled = compile_program(&parsed.program, &parsed.arena, &interner);
    let diagnostics: Vec<Diagnostic> = if deny_warnings {
        compiled.diagnostics.iter().cloned().map(Diagnostic::into_error).collect()
    } else {
        compiled.diagnostics.clone()
    };
    let (errors, _) = report(&diagnostics, emitter);
    debug!(sites = compiled.len(), errors, "front end finished");
    if errors > 0 {
        return None;
    }

    Some(Frontend {
        interner,
        parsed,
        compiled,
    })
}

/// Emit `diagnostics` followed by a summary line, returning
/// `(errors, warnings)`.
fn report<E: DiagnosticEmitter>(diagnostics: &[Diagnostic], emitter: &mut E) -> (usize, usize) {
    emitter.emit_all(diagnostics);
    let (errors, warnings) = count_by_severity(diagnostics);
    emitter.emit_summary(errors, warnings);
    emitter.flush();
    (errors, warnings)
}

/// Emitter writing to stderr, resolving spans against `source`.
fn stderr_emitter(path: &str, source: &str) -> TerminalEmitter<io::Stderr> {
    let is_tty = io::IsTerminal::is_terminal(&io::stderr());
    TerminalEmitter::<io::Stderr>::stderr(ColorMode::Auto, is_tty).with_source(path, source)
}

/// Read a source file, describing the failure on error.
fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
