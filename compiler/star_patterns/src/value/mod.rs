//! Runtime values for the star interpreter.
//!
//! Heap values (strings, arrays, objects) are wrapped in [`Heap`] and can
//! only be built through the factory methods on [`Value`]. They are
//! immutable once built: matching and dispatch never mutate a subject.

mod composite;
mod heap;

pub use composite::{FunctionValue, NativeFn, ObjectValue};
pub use heap::Heap;

use std::fmt;

use star_ir::format_number;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(Heap<str>),
    Array(Heap<Vec<Value>>),
    Object(Heap<ObjectValue>),
    Function(FunctionValue),
}

impl Value {
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Heap::from_text(s.as_ref()))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    #[inline]
    pub fn object(object: ObjectValue) -> Self {
        Value::Object(Heap::new(object))
    }

    /// Build an object from `(key, value)` pairs, keeping first-insertion
    /// order.
    pub fn object_from<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::object(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn native(
        name: &str,
        func: impl Fn(&[Value]) -> Result<Value, crate::EvalError> + Send + Sync + 'static,
    ) -> Self {
        Value::Function(FunctionValue::new(name, func))
    }

    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    #[inline]
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// Result of the `typeof` operator.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Null | Value::Array(_) | Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Finer-grained name than [`Value::type_of`], used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Numeric conversion used by arithmetic and relational operators.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            Value::Undefined | Value::Array(_) | Value::Object(_) | Value::Function(_) => f64::NAN,
        }
    }

    /// `===`: primitives by value, heap values by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            #[expect(clippy::float_cmp, reason = "strict equality is exact IEEE comparison")]
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Array(a), Value::Array(b)) => Heap::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// `==`: nullish values equal each other, mixed primitives compare
    /// numerically, everything else falls back to [`Value::strict_equals`].
    pub fn loose_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (a, b) if a.is_nullish() || b.is_nullish() => a.is_nullish() && b.is_nullish(),
            (
                Value::Str(_) | Value::Number(_) | Value::Bool(_),
                Value::Str(_) | Value::Number(_) | Value::Bool(_),
            ) if std::mem::discriminant(self) != std::mem::discriminant(other) =>
            {
                #[expect(clippy::float_cmp, reason = "loose equality is exact IEEE comparison")]
                let equal = self.to_number() == other.to_number();
                equal
            }
            _ => self.strict_equals(other),
        }
    }

    /// Property lookup.
    ///
    /// Objects expose their own properties; arrays and strings expose
    /// `length` and canonical indices. Returns `None` when the property is
    /// absent, including for every property of a nullish value; callers
    /// that must reject nullish receivers check [`Value::is_nullish`] first.
    pub fn property(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.get(key).cloned(),
            Value::Array(items) => {
                if key == "length" {
                    return Some(Value::Number(len_to_number(items.len())));
                }
                parse_index(key).and_then(|i| items.get(i).cloned())
            }
            Value::Str(s) => {
                if key == "length" {
                    return Some(Value::Number(len_to_number(s.chars().count())));
                }
                parse_index(key)
                    .and_then(|i| s.chars().nth(i))
                    .map(|c| Value::string(c.to_string()))
            }
            Value::Function(f) if key == "name" => Some(Value::string(f.name())),
            _ => None,
        }
    }

    /// Own enumerable properties in order, as object rest capture sees them.
    pub fn own_entries(&self) -> Vec<(String, Value)> {
        match self {
            Value::Object(obj) => obj.iter().map(|(k, v)| (k.to_owned(), v.clone())).collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect(),
            Value::Str(s) => s
                .chars()
                .enumerate()
                .map(|(i, c)| (i.to_string(), Value::string(c.to_string())))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Elements in iteration order, or `None` if the value is not iterable.
    /// Strings iterate by character.
    pub fn iter_elements(&self) -> Option<Vec<Value>> {
        match self {
            Value::Array(items) => Some(items.to_vec()),
            Value::Str(s) => Some(s.chars().map(|c| Value::string(c.to_string())).collect()),
            _ => None,
        }
    }

    /// Type tag of a tagged object.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Value::Object(obj) => obj.tag(),
            _ => None,
        }
    }

    /// Render for nesting inside an array or object: strings are quoted.
    pub fn inspect(&self) -> String {
        match self {
            Value::Str(s) => format!("{:?}", &**s),
            other => other.to_string(),
        }
    }
}

fn parse_index(key: &str) -> Option<usize> {
    // Canonical indices only: "01" and "+1" are ordinary keys.
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

#[expect(clippy::cast_precision_loss, reason = "lengths stay far below 2^53")]
fn len_to_number(len: usize) -> f64 {
    len as f64
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&item.inspect())?;
                }
                f.write_str("]")
            }
            Value::Object(obj) => {
                if let Some(tag) = obj.tag() {
                    write!(f, "{tag} ")?;
                }
                if obj.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (key, value)) in obj.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {}", value.inspect())?;
                }
                f.write_str(" }")
            }
            Value::Function(func) => write!(f, "[Function: {}]", func.name()),
        }
    }
}

/// Structural equality for tests and diagnostics. Unlike
/// [`Value::strict_equals`] this compares heap values by content and treats
/// `NaN` as equal to itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            #[expect(clippy::float_cmp, reason = "exact comparison after the bit check")]
            (Value::Number(a), Value::Number(b)) => a.to_bits() == b.to_bits() || a == b,
            (Value::Array(a), Value::Array(b)) => **a == **b,
            (Value::Object(a), Value::Object(b)) => **a == **b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => self.strict_equals(other),
        }
    }
}

#[cfg(test)]
mod tests;
