//! Pattern classification.
//!
//! A `case (...)` slot parsed with the cover grammar is a destructuring
//! target if it is an array or object literal that reads as a binding
//! target all the way down; anything else is a literal expression. The
//! decision is purely syntactic.

use star_ir::{
    ArrayElement, ExprArena, ExprId, ExprKind, ObjectMember, PatternSlot, SlotKind, Span,
    StringInterner,
};

use crate::pattern_error::{PatternError, PatternErrorKind};
use crate::shape::{
    ArrayShape, ArrayShapeElement, ObjectShape, PropertyShape, RestBinding, Shape, ShapeElement,
};

/// A classified pattern slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// Compared to the subject with the active comparator.
    Literal(ExprId),
    /// `is expr`: evaluates to a function applied to the subject.
    Predicate(ExprId),
    Destructure(Shape),
}

/// Classify one slot.
pub fn classify_slot(
    arena: &ExprArena,
    interner: &StringInterner,
    slot: &PatternSlot,
) -> Result<Pattern, PatternError> {
    let id = match slot.kind {
        SlotKind::Predicate(id) => return Ok(Pattern::Predicate(id)),
        SlotKind::Expr(id) => id,
    };

    if matches!(arena.kind(id), ExprKind::Array(_) | ExprKind::Object(_)) {
        let builder = ShapeBuilder { arena, interner };
        if let Ok(shape) = builder.target(id) {
            if let Some(span) = defaults_with_pattern_syntax(arena, &shape) {
                return Err(PatternError::new(
                    PatternErrorKind::Malformed {
                        reason: "default values must be plain expressions",
                    },
                    span,
                ));
            }
            return Ok(Pattern::Destructure(shape));
        }
    }

    match find_pattern_syntax(arena, id) {
        Some(span) => Err(PatternError::new(
            PatternErrorKind::Malformed {
                reason: "destructuring syntax in a pattern that is not a valid target",
            },
            span,
        )),
        None => Ok(Pattern::Literal(id)),
    }
}

/// Reason a literal is not a binding target. Only the span is kept.
struct NotATarget(Span);

struct ShapeBuilder<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl ShapeBuilder<'_> {
    fn target(&self, id: ExprId) -> Result<Shape, NotATarget> {
        let span = self.arena.span(id);
        match self.arena.kind(id) {
            ExprKind::Ident(name) => Ok(Shape::Identifier { name: *name, span }),
            ExprKind::Array(elements) => self.array(elements, span).map(Shape::Array),
            ExprKind::Object(members) => self.object(members, span).map(Shape::Object),
            _ => Err(NotATarget(span)),
        }
    }

    fn element(&self, id: ExprId) -> Result<ShapeElement, NotATarget> {
        if let ExprKind::Assign { target, value } = self.arena.kind(id) {
            return Ok(ShapeElement {
                target: self.target(*target)?,
                default: Some(*value),
            });
        }
        Ok(ShapeElement {
            target: self.target(id)?,
            default: None,
        })
    }

    fn rest(&self, expr: ExprId, span: Span, is_last: bool) -> Result<RestBinding, NotATarget> {
        match self.arena.kind(expr) {
            ExprKind::Ident(name) if is_last => Ok(RestBinding { name: *name, span }),
            _ => Err(NotATarget(span)),
        }
    }

    fn array(&self, elements: &[ArrayElement], span: Span) -> Result<ArrayShape, NotATarget> {
        let mut shape = ArrayShape {
            elements: Vec::with_capacity(elements.len()),
            rest: None,
            span,
        };
        for (i, element) in elements.iter().enumerate() {
            match element {
                ArrayElement::Hole(span) => shape.elements.push(ArrayShapeElement::Hole(*span)),
                ArrayElement::Expr(id) => {
                    shape.elements.push(ArrayShapeElement::Element(self.element(*id)?));
                }
                ArrayElement::Spread { expr, span } => {
                    shape.rest = Some(self.rest(*expr, *span, i + 1 == elements.len())?);
                }
            }
        }
        Ok(shape)
    }

    fn object(&self, members: &[ObjectMember], span: Span) -> Result<ObjectShape, NotATarget> {
        let mut shape = ObjectShape {
            properties: Vec::with_capacity(members.len()),
            rest: None,
            span,
        };
        for (i, member) in members.iter().enumerate() {
            match member {
                ObjectMember::Property {
                    key,
                    key_span,
                    value,
                    ..
                } => shape.properties.push(PropertyShape {
                    key: self.interner.lookup(*key).to_owned(),
                    key_span: *key_span,
                    element: self.element(*value)?,
                }),
                ObjectMember::ShorthandInit {
                    key,
                    key_span,
                    default,
                } => shape.properties.push(PropertyShape {
                    key: self.interner.lookup(*key).to_owned(),
                    key_span: *key_span,
                    element: ShapeElement {
                        target: Shape::Identifier {
                            name: *key,
                            span: *key_span,
                        },
                        default: Some(*default),
                    },
                }),
                ObjectMember::Spread { expr, span } => {
                    shape.rest = Some(self.rest(*expr, *span, i + 1 == members.len())?);
                }
            }
        }
        Ok(shape)
    }
}

/// Span of the first default expression that itself contains pattern-only
/// syntax.
fn defaults_with_pattern_syntax(arena: &ExprArena, shape: &Shape) -> Option<Span> {
    let check = |element: &ShapeElement| {
        element
            .default
            .and_then(|d| find_pattern_syntax(arena, d))
            .or_else(|| defaults_with_pattern_syntax(arena, &element.target))
    };
    match shape {
        Shape::Identifier { .. } => None,
        Shape::Array(array) => array.elements.iter().find_map(|e| match e {
            ArrayShapeElement::Hole(_) => None,
            ArrayShapeElement::Element(element) => check(element),
        }),
        Shape::Object(object) => object.properties.iter().find_map(|p| check(&p.element)),
    }
}

/// Span of the first construct that is only legal in a destructuring
/// target: a shorthand initializer, or an assignment to something other
/// than a variable.
fn find_pattern_syntax(arena: &ExprArena, id: ExprId) -> Option<Span> {
    star_stack::ensure_sufficient_stack(|| match arena.kind(id) {
        ExprKind::Number(_)
        | ExprKind::Str(_)
        | ExprKind::Bool(_)
        | ExprKind::Null
        | ExprKind::Undefined
        | ExprKind::Ident(_) => None,
        ExprKind::Array(elements) => elements.iter().find_map(|e| match e {
            ArrayElement::Hole(_) => None,
            ArrayElement::Expr(expr) | ArrayElement::Spread { expr, .. } => {
                find_pattern_syntax(arena, *expr)
            }
        }),
        ExprKind::Object(members) => members.iter().find_map(|m| match m {
            ObjectMember::ShorthandInit { key_span, .. } => Some(*key_span),
            ObjectMember::Property { value: expr, .. } | ObjectMember::Spread { expr, .. } => {
                find_pattern_syntax(arena, *expr)
            }
        }),
        ExprKind::Assign { target, value } => {
            if matches!(arena.kind(*target), ExprKind::Ident(_)) {
                find_pattern_syntax(arena, *value)
            } else {
                Some(arena.span(*target))
            }
        }
        ExprKind::Member { object, .. } => find_pattern_syntax(arena, *object),
        ExprKind::Index { object, index } => {
            find_pattern_syntax(arena, *object).or_else(|| find_pattern_syntax(arena, *index))
        }
        ExprKind::Call { callee, args } => find_pattern_syntax(arena, *callee)
            .or_else(|| args.iter().find_map(|a| find_pattern_syntax(arena, *a))),
        ExprKind::Unary { operand, .. } => find_pattern_syntax(arena, *operand),
        ExprKind::Binary { left, right, .. } => {
            find_pattern_syntax(arena, *left).or_else(|| find_pattern_syntax(arena, *right))
        }
        ExprKind::Paren(inner) => find_pattern_syntax(arena, *inner),
    })
}
