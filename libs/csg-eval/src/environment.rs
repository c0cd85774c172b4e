//! # Environment
//!
//! Chained name → value scopes.
//!
//! Lookup walks outward through enclosing scopes; `let` and parameter binding
//! write to the innermost scope only. Scopes are shared through
//! [`Env`] so closures keep their defining scope alive.
//!
//! ## Example
//!
//! ```rust
//! use csg_eval::{Environment, Object};
//!
//! let global = Environment::new();
//! global.borrow_mut().set("x", Object::Integer(10));
//!
//! let inner = Environment::enclosed(&global);
//! inner.borrow_mut().set("x", Object::Integer(20));
//! assert_eq!(inner.borrow().get("x"), Some(Object::Integer(20)));
//! assert_eq!(global.borrow().get("x"), Some(Object::Integer(10)));
//! ```

use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a scope.
pub type Env = Rc<RefCell<Environment>>;

/// A single scope with an optional enclosing scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Create a new top-level scope.
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Create a scope nested inside `outer`.
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: Some(Rc::clone(outer)),
        }))
    }

    /// Look a name up, walking outward.
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref()?.borrow().get(name),
        }
    }

    /// Bind a name in this scope.
    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.store.insert(name.into(), value);
    }
}

// =============================================================================
// TESTS
// =============================================================================
