//! `switch*` patterns: classification, compilation, and matching.
//!
//! - [`classify_slot`]: decide whether a `case (...)` slot is a literal
//!   expression, a predicate, or a destructuring target
//! - [`compile_program`] / [`compile_switch`]: build immutable
//!   [`CompiledSwitch`] sites and their diagnostics
//! - [`match_shape`]: structural matcher for array and object shapes
//! - [`Comparator`]: strict equality or a user-supplied function
//! - [`select_clause`]: first-match, no-fallthrough clause selection
//!
//! Runtime values ([`Value`]) and runtime errors ([`EvalError`]) live here
//! too, since the matcher produces and consumes both. Executing the selected
//! clause body is the interpreter's job.

mod classify;
mod comparator;
mod compile;
pub mod errors;
mod host;
mod lint;
mod matcher;
mod pattern_error;
mod select;
mod shape;
mod value;

#[cfg(test)]
mod test_helpers;

pub use classify::{classify_slot, Pattern};
pub use comparator::Comparator;
pub use compile::{
    compile_program, compile_switch, CompileOutput, CompiledClause, CompiledSwitch, Matcher,
};
pub use errors::{EvalError, EvalErrorKind, EvalNote, EvalResult};
pub use host::PatternHost;
pub use matcher::{match_shape, Bindings};
pub use pattern_error::{PatternError, PatternErrorKind};
pub use select::{select_clause, MatchResult};
pub use shape::{
    ArrayShape, ArrayShapeElement, ObjectShape, PropertyShape, RestBinding, Shape, ShapeElement,
};
pub use value::{FunctionValue, Heap, NativeFn, ObjectValue, Value};
