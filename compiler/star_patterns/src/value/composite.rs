//! Objects and native functions.

use std::fmt;
use std::sync::Arc;

use crate::{EvalError, Value};

/// Keyed record with insertion-ordered own properties and an optional
/// nominal type tag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectValue {
    properties: Vec<(String, Value)>,
    tag: Option<String>,
}

impl ObjectValue {
    pub fn new() -> Self {
        ObjectValue::default()
    }

    /// Set `key`, keeping its original position if already present.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.properties.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

impl FromIterator<(String, Value)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut object = ObjectValue::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

/// Signature of native functions.
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync;

/// A callable implemented in Rust. Closures may capture state, which is
/// how the prelude builds predicates such as `hasCallable("quack")`.
#[derive(Clone)]
pub struct FunctionValue {
    name: Arc<str>,
    func: Arc<NativeFn>,
}

impl FunctionValue {
    pub fn new(
        name: impl Into<Arc<str>>,
        func: impl Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync + 'static,
    ) -> Self {
        FunctionValue {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        (self.func)(args)
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({})", self.name)
    }
}
