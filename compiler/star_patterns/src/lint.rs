//! Unreachable pattern lint.
//!
//! A pattern is unreachable when an earlier pattern of the same site,
//! in the same or an earlier clause, already selects every subject it
//! could select.

use star_diagnostic::{Diagnostic, ErrorCode};
use star_ir::{ExprArena, ExprId, ExprKind, Name, Span, UnaryOp};

use crate::compile::{CompiledSwitch, Matcher};
use crate::shape::Shape;

/// Literal patterns the lint can compare without evaluating them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ConstKey {
    Number(u64),
    Str(Name),
    Bool(bool),
    Null,
    Undefined,
    /// The same variable read twice.
    Ident(Name),
}

fn number_key(n: f64) -> ConstKey {
    // +0 and -0 are strictly equal.
    ConstKey::Number(if n == 0.0 { 0.0_f64.to_bits() } else { n.to_bits() })
}

fn constant_key(arena: &ExprArena, expr: ExprId) -> Option<ConstKey> {
    match arena.kind(expr) {
        ExprKind::Number(n) if !n.is_nan() => Some(number_key(*n)),
        ExprKind::Str(name) => Some(ConstKey::Str(*name)),
        ExprKind::Bool(b) => Some(ConstKey::Bool(*b)),
        ExprKind::Null => Some(ConstKey::Null),
        ExprKind::Undefined => Some(ConstKey::Undefined),
        ExprKind::Ident(name) => Some(ConstKey::Ident(*name)),
        ExprKind::Unary {
            op: UnaryOp::Neg,
            operand,
        } => match arena.kind(*operand) {
            ExprKind::Number(n) if !n.is_nan() => Some(number_key(-n)),
            _ => None,
        },
        ExprKind::Paren(inner) => constant_key(arena, *inner),
        _ => None,
    }
}

fn unreachable(span: Span, earlier: Span) -> Diagnostic {
    Diagnostic::warning(ErrorCode::E3004)
        .with_message("unreachable pattern")
        .with_label(span, "this pattern can never be selected")
        .with_secondary_label(earlier, "an earlier pattern already matches every such subject")
}

pub fn unreachable_patterns(switch: &CompiledSwitch, arena: &ExprArena) -> Vec<Diagnostic> {
    let mut constants: Vec<(ConstKey, Span)> = Vec::new();
    let mut shapes: Vec<&Shape> = Vec::new();
    let mut diagnostics = Vec::new();

    for clause in &switch.clauses {
        for matcher in &clause.matchers {
            match matcher {
                Matcher::Literal { expr, span, .. } => {
                    let Some(key) = constant_key(arena, *expr) else {
                        continue;
                    };
                    match constants.iter().find(|(k, _)| *k == key) {
                        Some(&(_, earlier)) => diagnostics.push(unreachable(*span, earlier)),
                        None => constants.push((key, *span)),
                    }
                }
                Matcher::Destructure(shape) => {
                    match shapes.iter().find(|earlier| earlier.covers(shape)) {
                        Some(earlier) => {
                            diagnostics.push(unreachable(shape.span(), earlier.span()));
                        }
                        None => shapes.push(shape),
                    }
                }
                Matcher::Predicate { .. } | Matcher::Default => {}
            }
        }
    }
    diagnostics
}
