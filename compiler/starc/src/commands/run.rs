//! The `run` command: compile every `switch*` site, then execute.

use std::process::ExitCode;

use star_diagnostic::emitter::DiagnosticEmitter;
use star_eval::{stdout_handler, InterpreterBuilder, SharedPrintHandler};

use super::{compile_frontend, read_file, stderr_emitter};
use crate::RunConfig;

/// Compile and run `source`. Returns `false` if a compile or runtime error
/// was reported.
pub fn run_source<E: DiagnosticEmitter>(
    source: &str,
    config: &RunConfig,
    print_handler: SharedPrintHandler,
    emitter: &mut E,
) -> bool {
    let Some(frontend) = compile_frontend(source, config.deny_warnings, emitter) else {
        return false;
    };

    let mut interpreter =
        InterpreterBuilder::new(&frontend.interner, &frontend.parsed.arena, &frontend.compiled)
            .print_handler(print_handler)
            .prelude(config.prelude)
            .build();

    match interpreter.run(&frontend.parsed.program) {
        Ok(_) => true,
        Err(error) => {
            emitter.emit(&error.to_diagnostic());
            emitter.flush();
            false
        }
    }
}

pub fn run_file(config: &RunConfig) -> ExitCode {
    let source = match read_file(&config.path) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };
    let mut emitter = stderr_emitter(&config.path, &source);
    if run_source(&source, config, stdout_handler(), &mut emitter) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
