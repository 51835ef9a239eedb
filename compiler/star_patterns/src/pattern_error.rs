//! Compile-time `switch*` pattern errors.

use star_diagnostic::{Diagnostic, ErrorCode};
use star_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternErrorKind {
    /// Pattern-only syntax in a slot that is not a valid target.
    #[error("case pattern is neither an expression nor a destructuring target")]
    Malformed { reason: &'static str },
    #[error("`{name}` is bound more than once in the same pattern")]
    DuplicateBinding { name: String, first: Span },
    #[error("`default` must be the last clause of a `switch*`")]
    MisplacedDefault { last_clause: Span },
    #[error("a destructuring pattern must be the only pattern in its clause")]
    MixedClause,
}

impl PatternErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            PatternErrorKind::Malformed { .. } => ErrorCode::E3001,
            PatternErrorKind::DuplicateBinding { .. } => ErrorCode::E3002,
            PatternErrorKind::MisplacedDefault { .. } => ErrorCode::E3003,
            PatternErrorKind::MixedClause => ErrorCode::E3005,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct PatternError {
    pub kind: PatternErrorKind,
    pub span: Span,
}

impl PatternError {
    pub fn new(kind: PatternErrorKind, span: Span) -> Self {
        PatternError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match &self.kind {
            PatternErrorKind::Malformed { reason } => diagnostic.with_label(self.span, *reason),
            PatternErrorKind::DuplicateBinding { first, .. } => diagnostic
                .with_label(self.span, "bound again here")
                .with_secondary_label(*first, "first bound here")
                .with_suggestion("rename one of the bindings"),
            PatternErrorKind::MisplacedDefault { last_clause } => diagnostic
                .with_label(self.span, "`default` clause")
                .with_secondary_label(*last_clause, "clause after `default`")
                .with_note("clauses after `default` can never be selected"),
            PatternErrorKind::MixedClause => diagnostic
                .with_label(self.span, "destructuring pattern")
                .with_suggestion("move the destructuring pattern into its own `case`"),
        }
    }
}
