use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::object::Object;

/// A lexical scope: a binding table plus an optional enclosing scope.
///
/// One environment is created per program run and one per function call.
/// A call's environment is enclosed by the environment the function captured
/// when it was defined, which is what makes closures see their defining scope
/// rather than their caller's.
///
/// Environments are shared through `Rc`. A function stored into the scope that
/// defined it forms a reference cycle; that is expected and is not treated as
/// a leak.
///
/// ## Example
/// ```
/// use monkey::interpreter::{environment::Environment, object::Object};
///
/// let global = Environment::new();
/// global.set("x", Object::Integer(1));
///
/// let local = Environment::new_enclosed(&global);
/// local.set("y", Object::Integer(2));
///
/// assert_eq!(local.get("x"), Some(Object::Integer(1)));
/// assert_eq!(global.get("y"), None);
/// ```
#[derive(Default)]
pub struct Environment {
    store: RefCell<HashMap<String, Object>>,
    outer: Option<Rc<Self>>,
}

impl Environment {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates an empty environment whose lookups fall back to `outer`.
    #[must_use]
    pub fn new_enclosed(outer: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { store: RefCell::default(),
                       outer: Some(Rc::clone(outer)), })
    }

    /// Looks `name` up in this scope, then in each enclosing scope outwards.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.store.borrow().get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds `name` in this scope, shadowing any enclosing binding.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.store.borrow_mut().insert(name.into(), value);
    }
}

// Bindings may hold closures over this environment, so only names are shown.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.borrow();
        let mut names = store.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("outer", &self.outer)
         .finish()
    }
}
