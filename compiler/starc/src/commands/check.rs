//! The `check` command: compile without running.

use std::process::ExitCode;

use star_diagnostic::emitter::DiagnosticEmitter;

use super::{compile_frontend, read_file, stderr_emitter};
use crate::RunConfig;

/// Compile `source`, returning the number of `switch*` sites on success.
pub fn check_source<E: DiagnosticEmitter>(
    source: &str,
    config: &RunConfig,
    emitter: &mut E,
) -> Option<usize> {
    compile_frontend(source, config.deny_warnings, emitter).map(|frontend| frontend.compiled.len())
}

pub fn check_file(config: &RunConfig) -> ExitCode {
    let source = match read_file(&config.path) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };
    let mut emitter = stderr_emitter(&config.path, &source);
    match check_source(&source, config, &mut emitter) {
        Some(sites) => {
            let plural = if sites == 1 { "" } else { "s" };
            println!("OK: {} ({sites} switch* site{plural})", config.path);
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}
