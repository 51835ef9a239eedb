//! What pattern matching needs from the surrounding interpreter.

use star_ir::{ExprId, Span, StringInterner};

use crate::{EvalResult, Value};

/// Callbacks into the host evaluator.
///
/// Expressions are evaluated in the scope where the `switch*` statement
/// runs; matching never sees bindings from the clause being tried.
pub trait PatternHost {
    /// Evaluate a literal pattern, predicate, comparator or default.
    fn evaluate(&mut self, expr: ExprId) -> EvalResult;

    /// Call a comparator or predicate.
    fn call(&mut self, callee: &Value, args: &[Value], span: Span) -> EvalResult;

    /// Resolves binding names for error messages.
    fn interner(&self) -> &StringInterner;
}
