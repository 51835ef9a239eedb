//! The tree-walking interpreter.

mod builder;

pub use builder::InterpreterBuilder;

use star_ir::{ExprArena, ExprId, Program, Span, StringInterner};
use star_patterns::errors::{control_escape, not_callable};
use star_patterns::{CompileOutput, Comparator, EvalResult, PatternHost, Value};
use tracing::trace;

use crate::exec::Completion;
use crate::{Environment, SharedPrintHandler};

/// Runs a parsed and compiled program.
///
/// Borrows the arena, interner and compiled `switch*` sites for its whole
/// lifetime; owns the environment.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) arena: &'a ExprArena,
    pub(crate) switches: &'a CompileOutput,
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    /// Used by every `switch*` without its own comparator.
    pub(crate) default_comparator: Comparator,
}

impl<'a> Interpreter<'a> {
    /// Execute `program` top to bottom.
    ///
    /// Returns the value of a top-level `return`, or `undefined` when the
    /// program runs off the end. A `break` that no `switch*` consumed is
    /// an error.
    #[tracing::instrument(level = "debug", skip_all, fields(stmts = program.stmts.len()))]
    pub fn run(&mut self, program: &Program) -> EvalResult {
        match self.exec_stmts(&program.stmts)? {
            Completion::Normal => Ok(Value::Undefined),
            Completion::Return(value) => Ok(value),
            Completion::Break => Err(control_escape("break")),
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Call a function value.
    pub fn call_value(&mut self, callee: &Value, args: &[Value], span: Span) -> EvalResult {
        let Value::Function(func) = callee else {
            return Err(not_callable(callee).with_span(span));
        };
        trace!(function = func.name(), args = args.len(), "call");
        func.call(args).map_err(|e| e.with_span(span))
    }
}

impl PatternHost for Interpreter<'_> {
    fn evaluate(&mut self, expr: ExprId) -> EvalResult {
        self.eval_expr(expr)
    }

    fn call(&mut self, callee: &Value, args: &[Value], span: Span) -> EvalResult {
        self.call_value(callee, args, span)
    }

    fn interner(&self) -> &StringInterner {
        self.interner
    }
}
