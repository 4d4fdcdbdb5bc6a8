use std::{fmt, ptr, rc::Rc};

use crate::{
    ast::{BlockStatement, Identifier, write_joined},
    interpreter::{
        environment::Environment, evaluator::core::EvalResult, object::core::Object,
    },
};

/// A user-defined function value: a closure.
///
/// `env` is the environment that was active when the function literal was
/// evaluated, not the environment of any later caller. Calls bind parameters
/// in a fresh environment enclosed by `env`.
pub struct Function {
    /// Declared parameter names.
    pub parameters: Rc<[Identifier]>,
    /// The function body, shared with the literal it came from.
    pub body:       Rc<BlockStatement>,
    /// The captured defining environment.
    pub env:        Rc<Environment>,
}

/// Functions are equal only to themselves.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

// The captured environment may contain this very function, so it is left out.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn (")?;
        write_joined(f, self.parameters.iter())?;
        write!(f, ") {{\n{}\n}}", self.body)
    }
}

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments after its arity has been
/// checked against [`Builtin::arity`].
pub type BuiltinFn = fn(&[Object]) -> EvalResult<Object>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` accepts any number, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Any,
}

/// An entry of the builtin function table.
pub struct Builtin {
    pub name:  &'static str,
    pub arity: Arity,
    pub func:  BuiltinFn,
}

/// Builtins are identified by name.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}
