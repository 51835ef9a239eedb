//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::io::{self, Write};
use std::process::ExitCode;

use star_ir::StringInterner;

use super::read_file;

/// Write the token stream of `source`, one token per line.
pub fn write_tokens(source: &str, out: &mut impl Write) -> io::Result<()> {
    let interner = StringInterner::new();
    let lexed = star_lexer::lex_with_errors(source, &interner);
    writeln!(out, "{} tokens", lexed.tokens.len())?;
    for token in &lexed.tokens {
        writeln!(out, "  {:?} @ {}", token.kind, token.span)?;
    }
    for error in &lexed.errors {
        writeln!(out, "  error at {}: {}", error.span, error.to_diagnostic().message)?;
    }
    Ok(())
}

/// Write a summary and the debug form of the parsed program.
pub fn write_ast(source: &str, out: &mut impl Write) -> io::Result<()> {
    let interner = StringInterner::new();
    let tokens = star_lexer::lex(source, &interner);
    let parsed = star_parse::parse(&tokens, &interner);

    writeln!(out, "  Statements: {}", parsed.program.stmts.len())?;
    writeln!(out, "  Expressions: {}", parsed.arena.len())?;
    writeln!(out, "  switch* sites: {}", parsed.program.switch_count)?;
    writeln!(out, "  Errors: {}", parsed.errors.len())?;

    if !parsed.program.stmts.is_empty() {
        writeln!(out)?;
        writeln!(out, "{:#?}", parsed.program.stmts)?;
    }

    if !parsed.errors.is_empty() {
        writeln!(out)?;
        writeln!(out, "Errors:")?;
        for error in &parsed.errors {
            let diagnostic = error.to_diagnostic();
            let at = diagnostic
                .primary_span()
                .map_or_else(String::new, |span| format!("{span}: "));
            writeln!(out, "  {at}{}", diagnostic.message)?;
        }
    }
    Ok(())
}

pub fn parse_file(path: &str) -> ExitCode {
    dump(path, "Parse result", write_ast)
}

pub fn lex_file(path: &str) -> ExitCode {
    dump(path, "Tokens", write_tokens)
}

fn dump(
    path: &str,
    title: &str,
    write: fn(&str, &mut io::StdoutLock<'static>) -> io::Result<()>,
) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };
    let mut out = io::stdout().lock();
    let written = writeln!(out, "{title} for '{path}':").and_then(|()| write(&source, &mut out));
    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
