//! Star IR - shared syntax types for the star toolchain.
//!
//! - [`Span`]: byte ranges into source text
//! - [`Name`] / [`StringInterner`]: interned identifiers and string literals
//! - [`Token`] / [`TokenList`]: lexer output
//! - [`ExprArena`], [`Stmt`], [`SwitchStar`]: the parsed program
//!
//! This crate has no knowledge of runtime values or of how `switch*`
//! patterns are classified; it only records what the source says.

mod ast;
mod interner;
mod name;
mod number;
mod span;
mod token;

pub use ast::{
    ArrayElement, BinaryOp, Block, CaseClause, ClauseKind, Expr, ExprArena, ExprId, ExprKind,
    ObjectMember, PatternSlot, Program, SlotKind, Stmt, StmtKind, SwitchId, SwitchStar, UnaryOp,
};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use number::format_number;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
