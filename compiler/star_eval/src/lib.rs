//! Star Eval - tree-walking interpreter for star programs.
//!
//! The interpreter evaluates expressions and statements directly from the
//! AST. `switch*` statements are dispatched through the sites compiled by
//! `star_patterns`: clause selection happens there, and this crate runs the
//! selected body in a scope holding the pattern's bindings.
//!
//! ```text
//! let interpreter = InterpreterBuilder::new(&interner, &arena, &compiled)
//!     .print_handler(buffer_handler())
//!     .build();
//! ```

mod environment;
mod exec;
mod interpreter;
mod operators;
mod prelude;
mod print_handler;

pub use environment::{AssignError, Environment, Mutability, Scope};
pub use exec::Completion;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_unary};
pub use prelude::register_prelude;
pub use print_handler::{buffer_handler, stdout_handler, PrintHandler, SharedPrintHandler};

#[cfg(test)]
mod tests;
