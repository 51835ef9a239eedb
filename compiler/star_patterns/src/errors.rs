//! Runtime error types shared by the matcher and the interpreter.
//!
//! `EvalErrorKind` is the typed category; the factory functions below are
//! the public way to build an [`EvalError`] and keep `message` in sync with
//! the kind's `Display` output.

use star_diagnostic::{Diagnostic, ErrorCode};
use star_ir::Span;
use thiserror::Error;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalErrorKind {
    /// Array shape against a non-iterable, or object shape against a
    /// nullish value.
    #[error("cannot destructure {type_name} with an {shape} pattern")]
    CannotDestructure {
        type_name: &'static str,
        shape: &'static str,
    },
    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("cannot read property `{property}` of {type_name}")]
    PropertyOfNullish {
        property: String,
        type_name: &'static str,
    },
    #[error("{type_name} is not iterable")]
    NotIterable { type_name: &'static str },
    #[error("`{function}` expects {expected} argument(s), got {got}")]
    WrongArgCount {
        function: String,
        expected: usize,
        got: usize,
    },
    #[error("`{function}` expects {expected}")]
    WrongArgType {
        function: String,
        expected: &'static str,
    },
    /// A value raised by `throw` that nothing caught.
    #[error("uncaught exception: {value}")]
    Thrown { value: Value },
    #[error("`{keyword}` outside of an enclosing construct")]
    ControlEscape { keyword: &'static str },
    #[error("`{name}` is bound more than once by one pattern")]
    BindingCollision { name: String },
    #[error("{message}")]
    Custom { message: String },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::CannotDestructure { .. } => ErrorCode::E6001,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6002,
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6003,
            EvalErrorKind::PropertyOfNullish { .. }
            | EvalErrorKind::NotIterable { .. }
            | EvalErrorKind::WrongArgCount { .. }
            | EvalErrorKind::WrongArgType { .. } => ErrorCode::E6004,
            EvalErrorKind::Thrown { .. } => ErrorCode::E6005,
            EvalErrorKind::ControlEscape { .. } => ErrorCode::E6006,
            EvalErrorKind::BindingCollision { .. } => ErrorCode::E6007,
            EvalErrorKind::Custom { .. } => ErrorCode::E6099,
        }
    }
}

/// Secondary information attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
    pub span: Option<Span>,
}

impl EvalNote {
    pub fn new(message: impl Into<String>) -> Self {
        EvalNote {
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(message: impl Into<String>, span: Span) -> Self {
        EvalNote {
            message: message.into(),
            span: Some(span),
        }
    }
}

/// Runtime error.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()` for factory-built errors.
    pub message: String,
    /// Source location where the error occurred.
    pub span: Option<Span>,
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    /// Build a [`EvalErrorKind::Custom`] error.
    #[cold]
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            message: kind.to_string(),
            kind,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Attach a span unless one is already set; the innermost location wins.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// The thrown value, if this error is an uncaught `throw`.
    pub fn thrown_value(&self) -> Option<&Value> {
        match &self.kind {
            EvalErrorKind::Thrown { value } => Some(value),
            _ => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diagnostic = Diagnostic::error(self.code()).with_message(&self.message);
        if let Some(span) = self.span {
            diagnostic = diagnostic.with_label(span, self.kind.code().description());
        }
        for note in &self.notes {
            diagnostic = match note.span {
                Some(span) => diagnostic.with_secondary_label(span, &note.message),
                None => diagnostic.with_note(&note.message),
            };
        }
        diagnostic
    }
}

#[cold]
pub fn cannot_destructure(value: &Value, shape: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CannotDestructure {
        type_name: value.type_name(),
        shape,
    })
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    })
}

#[cold]
pub fn property_of_nullish(property: &str, value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::PropertyOfNullish {
        property: property.to_owned(),
        type_name: value.type_name(),
    })
}

#[cold]
pub fn not_iterable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIterable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn wrong_arg_count(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgCount {
        function: function.to_owned(),
        expected,
        got,
    })
}

#[cold]
pub fn wrong_arg_type(function: &str, expected: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgType {
        function: function.to_owned(),
        expected,
    })
}

#[cold]
pub fn thrown(value: Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Thrown { value })
}

#[cold]
pub fn control_escape(keyword: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ControlEscape { keyword })
}

#[cold]
pub fn binding_collision(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BindingCollision {
        name: name.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_matches_kind() {
        let err = cannot_destructure(&Value::Null, "object");
        assert_eq!(err.message, "cannot destructure null with an object pattern");
        assert_eq!(err.code(), ErrorCode::E6001);
    }

    #[test]
    fn innermost_span_wins() {
        let err = not_callable(&Value::Number(1.0))
            .with_span(Span::new(4, 5))
            .with_span(Span::new(0, 10));
        assert_eq!(err.span, Some(Span::new(4, 5)));
    }

    #[test]
    fn thrown_value_is_kept() {
        let err = thrown(Value::string("boom"));
        assert_eq!(err.thrown_value(), Some(&Value::string("boom")));
        assert_eq!(err.message, "uncaught exception: boom");
        assert_eq!(err.code(), ErrorCode::E6005);
    }

    #[test]
    fn diagnostic_carries_notes() {
        let err = EvalError::new("bad")
            .with_span(Span::new(1, 2))
            .with_note(EvalNote::new("while matching clause 2"));
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E6099);
        assert_eq!(diag.message, "bad");
        assert_eq!(diag.notes, vec!["while matching clause 2".to_owned()]);
    }
}
