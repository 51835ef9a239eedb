//! Binary and unary operators on runtime values.
//!
//! `&&` and `||` short-circuit in the evaluator; the entries here are the
//! non-short-circuit fallback so the table stays total.

use std::cmp::Ordering;

use star_ir::{BinaryOp, UnaryOp};
use star_patterns::Value;

pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Value {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => Value::Number(left.to_number() - right.to_number()),
        BinaryOp::Mul => Value::Number(left.to_number() * right.to_number()),
        BinaryOp::Div => Value::Number(left.to_number() / right.to_number()),
        BinaryOp::Mod => Value::Number(left.to_number() % right.to_number()),
        BinaryOp::Eq => Value::Bool(left.loose_equals(right)),
        BinaryOp::NotEq => Value::Bool(!left.loose_equals(right)),
        BinaryOp::StrictEq => Value::Bool(left.strict_equals(right)),
        BinaryOp::StrictNotEq => Value::Bool(!left.strict_equals(right)),
        BinaryOp::Lt => relational(left, right, Ordering::is_lt),
        BinaryOp::LtEq => relational(left, right, Ordering::is_le),
        BinaryOp::Gt => relational(left, right, Ordering::is_gt),
        BinaryOp::GtEq => relational(left, right, Ordering::is_ge),
        BinaryOp::And => {
            if left.is_truthy() {
                right.clone()
            } else {
                left.clone()
            }
        }
        BinaryOp::Or => {
            if left.is_truthy() {
                left.clone()
            } else {
                right.clone()
            }
        }
    }
}

/// `+` concatenates when either side is a string, otherwise adds.
fn add(left: &Value, right: &Value) -> Value {
    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        return Value::string(format!("{left}{right}"));
    }
    Value::Number(left.to_number() + right.to_number())
}

/// Strings compare lexicographically, everything else numerically.
/// Comparisons involving `NaN` are false.
fn relational(left: &Value, right: &Value, test: fn(Ordering) -> bool) -> Value {
    let ordering = match (left, right) {
        (Value::Str(a), Value::Str(b)) => Some((**a).cmp(&**b)),
        _ => left.to_number().partial_cmp(&right.to_number()),
    };
    Value::Bool(ordering.is_some_and(test))
}

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Value {
    match op {
        UnaryOp::Not => Value::Bool(!operand.is_truthy()),
        UnaryOp::Neg => Value::Number(-operand.to_number()),
        UnaryOp::Typeof => Value::string(operand.type_of()),
    }
}
