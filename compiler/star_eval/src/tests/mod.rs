//! End-to-end tests: source text through lexer, parser, pattern compiler
//! and interpreter, with output captured by a buffer print handler.

mod control_tests;
mod expr_tests;
mod switch_star_tests;

use star_diagnostic::Diagnostic;
use star_ir::StringInterner;
use star_patterns::{compile_program, EvalError, EvalResult};

use crate::{buffer_handler, InterpreterBuilder};

/// Compile and run `source`, letting `configure` adjust the builder.
/// Returns captured output and the program result.
fn run_configured<F>(source: &str, configure: F) -> (String, EvalResult)
where
    F: for<'b> FnOnce(InterpreterBuilder<'b>) -> InterpreterBuilder<'b>,
{
    let interner = StringInterner::new();
    let lexed = star_lexer::lex_with_errors(source, &interner);
    assert!(!lexed.has_errors(), "lex errors: {:?}", lexed.errors);
    let parsed = star_parse::parse(&lexed.tokens, &interner);
    assert!(!parsed.has_errors(), "parse errors: {:?}", parsed.errors);
    let compiled = compile_program(&parsed.program, &parsed.arena, &interner);
    assert!(
        !compiled.has_errors(),
        "compile errors: {:?}",
        compiled.diagnostics
    );

    let handler = buffer_handler();
    let builder = InterpreterBuilder::new(&interner, &parsed.arena, &compiled)
        .print_handler(handler.clone());
    let mut interpreter = configure(builder).build();
    let result = interpreter.run(&parsed.program);
    (handler.get_output(), result)
}

/// Run `source` and return its output, failing the test on a runtime error.
fn run(source: &str) -> String {
    match run_configured(source, |b| b) {
        (output, Ok(_)) => output,
        (output, Err(error)) => panic!("runtime error: {error}\noutput so far:\n{output}"),
    }
}

/// Run `source`, expecting a runtime error. Returns it with the output
/// produced before it.
fn run_err(source: &str) -> (String, EvalError) {
    match run_configured(source, |b| b) {
        (output, Err(error)) => (output, error),
        (output, Ok(value)) => panic!("expected an error, got {value}\noutput:\n{output}"),
    }
}

fn compile_diagnostics(source: &str) -> Vec<Diagnostic> {
    let interner = StringInterner::new();
    let tokens = star_lexer::lex(source, &interner);
    let parsed = star_parse::parse(&tokens, &interner);
    assert!(!parsed.has_errors(), "parse errors: {:?}", parsed.errors);
    compile_program(&parsed.program, &parsed.arena, &interner).diagnostics
}
