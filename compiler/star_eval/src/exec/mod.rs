//! Statement execution, expression evaluation and `switch*` dispatch.

mod expr;
mod stmt;
mod switch_star;

use star_patterns::Value;

/// How a statement finished.
///
/// A `throw` is not a completion: it travels as an `EvalError` whose kind
/// carries the thrown value.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    Normal,
    Return(Value),
    /// Consumed by the nearest enclosing `switch*`.
    Break,
}

impl Completion {
    #[inline]
    pub fn is_normal(&self) -> bool {
        matches!(self, Completion::Normal)
    }
}
