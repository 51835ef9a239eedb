//! Environment for variable scoping in the interpreter.
//!
//! Blocks and `switch*` clause bodies each push a scope; a clause's scope
//! starts out holding the names its pattern bound.

use rustc_hash::FxHashMap;

use star_ir::Name;
use star_patterns::Value;

/// Whether a variable binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// `let` bindings and pattern bindings.
    Mutable,
    /// Prelude and host-provided globals.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Why [`Environment::assign`] failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable exists but is immutable.
    Immutable,
    /// Variable not found in any scope.
    Undefined,
}

/// One level of the scope stack.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Binding>,
}

#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Define a variable in this scope, replacing any binding of the same
    /// name at this level.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value, mutability: Mutability) {
        self.bindings.insert(name, Binding { value, mutability });
    }

    #[inline]
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name).map(|binding| &binding.value)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// `None` if `name` is not bound at this level.
    fn assign(&mut self, name: Name, value: Value) -> Option<Result<(), AssignError>> {
        let binding = self.bindings.get_mut(&name)?;
        if !binding.mutability.is_mutable() {
            return Some(Err(AssignError::Immutable));
        }
        binding.value = value;
        Some(Ok(()))
    }
}

/// Scope stack. The bottom scope holds globals and is never popped.
///
/// Lookups walk from the innermost scope outwards; nothing captures a
/// scope, so a plain stack suffices.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new()],
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Enter a scope pre-populated with a clause's pattern bindings.
    pub fn push_bindings(&mut self, bindings: impl IntoIterator<Item = (Name, Value)>) {
        let mut scope = Scope::new();
        for (name, value) in bindings {
            scope.define(name, value, Mutability::Mutable);
        }
        self.scopes.push(scope);
    }

    /// Pop the current scope. The global scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    #[inline]
    pub fn define(&mut self, name: Name, value: Value, mutability: Mutability) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.define(name, value, mutability);
        }
    }

    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .cloned()
    }

    /// Assign to the innermost binding of `name`.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(result) = scope.assign(name, value.clone()) {
                return result;
            }
        }
        Err(AssignError::Undefined)
    }

    /// Define an immutable global.
    pub fn define_global(&mut self, name: Name, value: Value) {
        if let Some(global) = self.scopes.first_mut() {
            global.define(name, value, Mutability::Immutable);
        }
    }

    /// The innermost scope.
    pub fn current(&self) -> Option<&Scope> {
        self.scopes.last()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
