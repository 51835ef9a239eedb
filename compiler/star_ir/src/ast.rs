//! Syntax tree for star programs.
//!
//! Expressions live in a flat [`ExprArena`] and are referenced by
//! [`ExprId`]; statements own their children. Array and object literals are
//! parsed with the destructuring "cover grammar": the same node shapes serve
//! as expressions and, inside `case (...)` slots, as candidate destructuring
//! targets. Deciding which one a slot is happens later, in
//! `star_patterns::classify`.

use std::fmt;

use crate::{Name, Span};

/// Index of an expression in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Neg,
    Typeof,
}

/// One slot of an array literal.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayElement {
    /// Elision, as in `[ , , x]`.
    Hole(Span),
    Expr(ExprId),
    /// `...expr`
    Spread { expr: ExprId, span: Span },
}

/// One member of an object literal.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectMember {
    /// `key: value`, or `key` alone when `shorthand` is set.
    Property {
        key: Name,
        key_span: Span,
        value: ExprId,
        shorthand: bool,
    },
    /// `key = default`. Only legal where the literal is read as a
    /// destructuring target.
    ShorthandInit {
        key: Name,
        key_span: Span,
        default: ExprId,
    },
    /// `...expr`
    Spread { expr: ExprId, span: Span },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Number(f64),
    Str(Name),
    Bool(bool),
    Null,
    Undefined,
    Ident(Name),
    Array(Vec<ArrayElement>),
    Object(Vec<ObjectMember>),
    Member {
        object: ExprId,
        property: Name,
    },
    Index {
        object: ExprId,
        index: ExprId,
    },
    Call {
        callee: ExprId,
        args: Vec<ExprId>,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `target = value`. Inside array/object literals this is also the
    /// cover form of a defaulted destructuring element.
    Assign {
        target: ExprId,
        value: ExprId,
    },
    /// Parenthesized expression. Kept so `([x])` is not mistaken for a
    /// destructuring target.
    Paren(ExprId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Flat storage for expressions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded {} entries", u32::MAX));
        self.exprs.push(Expr { kind, span });
        ExprId::new(index)
    }

    /// # Panics
    /// Panics if `id` came from a different arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get_expr(id).kind
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get_expr(id).span
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

/// Identifies one `switch*` site within a program.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SwitchId(u32);

impl SwitchId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        SwitchId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A pattern slot inside `case (...)`, before classification.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotKind {
    /// Either a literal expression or a destructuring target.
    Expr(ExprId),
    /// `is expr`: capability predicate applied to the subject.
    Predicate(ExprId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PatternSlot {
    pub kind: SlotKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClauseKind {
    Case(Vec<PatternSlot>),
    Default,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CaseClause {
    pub kind: ClauseKind,
    pub body: Block,
    /// Covers the `case (...)` / `default` head, not the body.
    pub head_span: Span,
}

impl CaseClause {
    pub fn is_default(&self) -> bool {
        matches!(self.kind, ClauseKind::Default)
    }
}

/// `switch* (subject [; comparator]) { clauses }`
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchStar {
    pub id: SwitchId,
    pub subject: ExprId,
    pub comparator: Option<ExprId>,
    pub clauses: Vec<CaseClause>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Let { name: Name, init: ExprId },
    Expr(ExprId),
    Return(Option<ExprId>),
    Throw(ExprId),
    Break,
    Block(Block),
    SwitchStar(SwitchStar),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

/// A parsed source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    /// Number of `switch*` sites; ids are `0..switch_count`.
    pub switch_count: u32,
}

impl Program {
    /// Visit every `switch*` site in source order, outer sites first.
    pub fn for_each_switch<'a>(&'a self, mut f: impl FnMut(&'a SwitchStar)) {
        fn walk<'a>(stmts: &'a [Stmt], f: &mut dyn FnMut(&'a SwitchStar)) {
            for stmt in stmts {
                match &stmt.kind {
                    StmtKind::Block(block) => walk(&block.stmts, f),
                    StmtKind::SwitchStar(switch) => {
                        f(switch);
                        for clause in &switch.clauses {
                            walk(&clause.body.stmts, f);
                        }
                    }
                    StmtKind::Let { .. }
                    | StmtKind::Expr(_)
                    | StmtKind::Return(_)
                    | StmtKind::Throw(_)
                    | StmtKind::Break => {}
                }
            }
        }
        walk(&self.stmts, &mut f);
    }
}
