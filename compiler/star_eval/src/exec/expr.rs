use star_ir::{ArrayElement, BinaryOp, ExprId, ExprKind, ObjectMember, Span};
use star_patterns::errors::{not_iterable, property_of_nullish, undefined_variable};
use star_patterns::{EvalError, EvalResult, ObjectValue, Value};
use star_stack::ensure_sufficient_stack;

use crate::environment::AssignError;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::Interpreter;

impl Interpreter<'_> {
    /// Evaluate an expression in the current scope.
    pub fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        let arena = self.arena;
        let expr = arena.get_expr(id);
        let span = expr.span;
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(name) => Ok(Value::string(self.interner.lookup(*name))),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Null => Ok(Value::Null),
            ExprKind::Undefined => Ok(Value::Undefined),
            ExprKind::Ident(name) => self
                .env
                .lookup(*name)
                .ok_or_else(|| undefined_variable(self.interner.lookup(*name)).with_span(span)),
            ExprKind::Paren(inner) => self.eval_expr(*inner),
            ExprKind::Array(elements) => self.eval_array(elements),
            ExprKind::Object(members) => self.eval_object(members),
            ExprKind::Member { object, property } => {
                let object = self.eval_expr(*object)?;
                get_property(&object, self.interner.lookup(*property), span)
            }
            ExprKind::Index { object, index } => {
                let object = self.eval_expr(*object)?;
                let key = self.eval_expr(*index)?.to_string();
                get_property(&object, &key, span)
            }
            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(*callee)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(*arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call_value(&callee, &args, span)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(*operand)?;
                Ok(evaluate_unary(*op, &operand))
            }
            ExprKind::Binary {
                op: BinaryOp::And,
                left,
                right,
            } => {
                let left = self.eval_expr(*left)?;
                if left.is_truthy() {
                    self.eval_expr(*right)
                } else {
                    Ok(left)
                }
            }
            ExprKind::Binary {
                op: BinaryOp::Or,
                left,
                right,
            } => {
                let left = self.eval_expr(*left)?;
                if left.is_truthy() {
                    Ok(left)
                } else {
                    self.eval_expr(*right)
                }
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(*left)?;
                let right = self.eval_expr(*right)?;
                Ok(evaluate_binary(*op, &left, &right))
            }
            ExprKind::Assign { target, value } => self.eval_assign(*target, *value, span),
        }
    }

    fn eval_array(&mut self, elements: &[ArrayElement]) -> EvalResult {
        let mut items = Vec::with_capacity(elements.len());
        for element in elements {
            match element {
                ArrayElement::Hole(_) => items.push(Value::Undefined),
                ArrayElement::Expr(expr) => items.push(self.eval_expr(*expr)?),
                ArrayElement::Spread { expr, span } => {
                    let value = self.eval_expr(*expr)?;
                    let Some(spread) = value.iter_elements() else {
                        return Err(not_iterable(&value).with_span(*span));
                    };
                    items.extend(spread);
                }
            }
        }
        Ok(Value::array(items))
    }

    fn eval_object(&mut self, members: &[ObjectMember]) -> EvalResult {
        let mut object = ObjectValue::new();
        for member in members {
            match member {
                ObjectMember::Property { key, value, .. } => {
                    let value = self.eval_expr(*value)?;
                    object.insert(self.interner.lookup(*key), value);
                }
                ObjectMember::Spread { expr, .. } => {
                    for (key, value) in self.eval_expr(*expr)?.own_entries() {
                        object.insert(key, value);
                    }
                }
                ObjectMember::ShorthandInit { key_span, .. } => {
                    return Err(EvalError::new("shorthand initializer outside a pattern")
                        .with_span(*key_span));
                }
            }
        }
        Ok(Value::object(object))
    }

    fn eval_assign(&mut self, target: ExprId, value: ExprId, span: Span) -> EvalResult {
        let ExprKind::Ident(name) = self.arena.kind(target) else {
            return Err(EvalError::new("invalid assignment target").with_span(span));
        };
        let value = self.eval_expr(value)?;
        match self.env.assign(*name, value.clone()) {
            Ok(()) => Ok(value),
            Err(AssignError::Undefined) => {
                Err(undefined_variable(self.interner.lookup(*name)).with_span(span))
            }
            Err(AssignError::Immutable) => Err(EvalError::new(format!(
                "cannot assign to immutable binding `{}`",
                self.interner.lookup(*name)
            ))
            .with_span(span)),
        }
    }
}

/// Member access: `undefined` for absent properties, an error on nullish
/// receivers.
fn get_property(object: &Value, key: &str, span: Span) -> EvalResult {
    if object.is_nullish() {
        return Err(property_of_nullish(key, object).with_span(span));
    }
    Ok(object.property(key).unwrap_or(Value::Undefined))
}
