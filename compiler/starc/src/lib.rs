//! starc: lex, parse, compile and run star programs.
//!
//! The binary in `main.rs` only parses arguments; every command lives in
//! [`commands`] and reports through a [`TerminalEmitter`] so tests can
//! capture its output.
//!
//! [`TerminalEmitter`]: star_diagnostic::emitter::TerminalEmitter

pub mod commands;
mod config;
mod tracing_setup;

pub use config::{ConfigError, RunConfig};
pub use tracing_setup::init_tracing;
