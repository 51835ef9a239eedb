//! Grammar rules, split by construct.

mod expr;
mod literal;
mod stmt;
mod switch_star;
