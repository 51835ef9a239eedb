//! Parse errors.
//!
//! Each [`ParseErrorKind`] maps to one [`ErrorCode`]; [`ParseError`] adds
//! the location and converts to a [`Diagnostic`] for reporting.

use star_diagnostic::{Diagnostic, ErrorCode};
use star_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected token: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected expression, found {found}")]
    ExpectedExpression { found: &'static str },

    #[error("unclosed delimiter `{open}`")]
    UnclosedDelimiter { open: char, open_span: Span },

    #[error("expected identifier, found {found}")]
    ExpectedIdent { found: &'static str },

    #[error("expected `*` after `switch`: only `switch*` is supported")]
    SwitchWithoutStar,

    #[error("shorthand property initializers are only allowed in `case` patterns")]
    ShorthandInitOutsidePattern,

    #[error("`case` needs at least one pattern")]
    EmptyPatternList,

    #[error("invalid assignment target")]
    InvalidAssignmentTarget,

    #[error("invalid token")]
    InvalidToken,
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedToken { .. } | ParseErrorKind::InvalidToken => {
                ErrorCode::E1001
            }
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdent { .. } => ErrorCode::E1004,
            ParseErrorKind::SwitchWithoutStar => ErrorCode::E1005,
            ParseErrorKind::ShorthandInitOutsidePattern => ErrorCode::E1006,
            ParseErrorKind::EmptyPatternList => ErrorCode::E1007,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1008,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// Optional label text for the primary span.
    pub context: Option<String>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => {
                diag.with_label(self.span, format!("expected {expected}"))
            }
            ParseErrorKind::UnclosedDelimiter { open, open_span } => diag
                .with_label(self.span, format!("expected `{}`", closing(*open)))
                .with_secondary_label(*open_span, "unclosed delimiter opened here"),
            ParseErrorKind::ShorthandInitOutsidePattern => diag
                .with_label(self.span, "`=` default outside a pattern")
                .with_suggestion("use `key: value` to build an object"),
            _ => diag.with_label(self.span, self.context.as_deref().unwrap_or("here")),
        }
    }
}

fn closing(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        other => other,
    }
}
