use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The single mutable name-to-value store shared by an entire evaluation.
///
/// One environment is created by the caller, threaded by mutable reference
/// through every recursive evaluation call, and discarded (or reused across
/// programs) by the caller afterwards. The interpreter never clears it.
///
/// A name maps to at most one value at a time. Rebinding silently replaces
/// any prior value *and its type*: a name may transition from scalar to
/// array to subroutine body over the course of a program.
///
/// # Example
/// ```
/// use revpol::interpreter::{environment::Environment, value::Value};
///
/// let mut env = Environment::new();
/// env.bind("x", Value::Integer(3));
///
/// assert_eq!(env.get("x"), Some(&Value::Integer(3)));
/// assert!(env.get("y").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    slots: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { slots: HashMap::new(), }
    }

    /// Looks up the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.slots.insert(name.into(), value);
    }

    /// Returns `true` if `name` is currently bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Returns the number of current bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
