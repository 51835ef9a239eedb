//! `InterpreterBuilder`: print handler, default comparator, prelude and
//! host globals for a new [`Interpreter`].

use star_ir::{ExprArena, StringInterner};
use star_patterns::{CompileOutput, Comparator, Value};

use super::Interpreter;
use crate::prelude::register_prelude;
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: stdout printing, strict-equality comparator, prelude loaded.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    switches: &'a CompileOutput,
    print_handler: Option<SharedPrintHandler>,
    default_comparator: Comparator,
    prelude: bool,
    globals: Vec<(String, Value)>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(
        interner: &'a StringInterner,
        arena: &'a ExprArena,
        switches: &'a CompileOutput,
    ) -> Self {
        Self {
            interner,
            arena,
            switches,
            print_handler: None,
            default_comparator: Comparator::StrictEquality,
            prelude: true,
            globals: Vec::new(),
        }
    }

    /// Where `print` writes. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Comparator for every `switch*` that does not name its own.
    #[must_use]
    pub fn default_comparator(mut self, comparator: Comparator) -> Self {
        self.default_comparator = comparator;
        self
    }

    /// Whether to define the prelude natives.
    #[must_use]
    pub fn prelude(mut self, enabled: bool) -> Self {
        self.prelude = enabled;
        self
    }

    /// Define an extra immutable global, after the prelude.
    #[must_use]
    pub fn global(mut self, name: impl Into<String>, value: Value) -> Self {
        self.globals.push((name.into(), value));
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let mut env = Environment::new();
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);
        if self.prelude {
            register_prelude(&mut env, self.interner, &print_handler);
        }
        for (name, value) in self.globals {
            env.define_global(self.interner.intern(&name), value);
        }

        Interpreter {
            interner: self.interner,
            arena: self.arena,
            switches: self.switches,
            env,
            print_handler,
            default_comparator: self.default_comparator,
        }
    }
}
