//! Diagnostic system for star.
//!
//! Every phase (lexer, parser, pattern compiler, interpreter) reports
//! problems as a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a primary span saying where
//! - optional secondary labels, notes and suggestions
//!
//! Rendering lives in [`emitter`]; line/column math in [`span_utils`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;

/// Count errors and warnings in a batch of diagnostics.
pub fn count_by_severity(diagnostics: &[Diagnostic]) -> (usize, usize) {
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    (errors, diagnostics.len() - errors)
}
