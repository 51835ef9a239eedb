//! The matching predicate for literal patterns.

use star_ir::Span;

use crate::compile::CompiledSwitch;
use crate::errors::not_callable;
use crate::{EvalError, PatternHost, Value};

/// Decides whether a literal pattern's value selects the subject.
///
/// Called as `comparator(candidate, subject)`, once per literal trial.
#[derive(Clone, Debug, Default)]
pub enum Comparator {
    /// `candidate === subject`.
    #[default]
    StrictEquality,
    /// A callable; its result is tested for truthiness.
    Custom(Value),
}

impl Comparator {
    /// Wrap a user-supplied value, which must be callable.
    pub fn custom(value: Value) -> Result<Self, EvalError> {
        if value.is_callable() {
            Ok(Comparator::Custom(value))
        } else {
            Err(not_callable(&value))
        }
    }

    /// The comparator for one dispatch of `switch`: its own comparator
    /// expression evaluated once, or `default`.
    pub fn for_site<H: PatternHost + ?Sized>(
        switch: &CompiledSwitch,
        default: &Comparator,
        host: &mut H,
    ) -> Result<Comparator, EvalError> {
        match switch.comparator {
            Some(expr) => {
                let value = host.evaluate(expr)?;
                Comparator::custom(value).map_err(|e| e.with_span(switch.span))
            }
            None => Ok(default.clone()),
        }
    }

    pub fn matches<H: PatternHost + ?Sized>(
        &self,
        candidate: &Value,
        subject: &Value,
        host: &mut H,
        span: Span,
    ) -> Result<bool, EvalError> {
        match self {
            Comparator::StrictEquality => Ok(candidate.strict_equals(subject)),
            Comparator::Custom(func) => {
                let result = host.call(func, &[candidate.clone(), subject.clone()], span)?;
                Ok(result.is_truthy())
            }
        }
    }
}
