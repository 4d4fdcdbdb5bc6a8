use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, eval_block},
            function::{builtin, print},
        },
        object::{Arity, Builtin, Function, NULL, Object},
    },
    util::stack::enter_call,
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "first" => { arity: Arity::Exact(1), func: builtin::first },
    "last"  => { arity: Arity::Exact(1), func: builtin::last },
    "rest"  => { arity: Arity::Exact(1), func: builtin::rest },
    "push"  => { arity: Arity::Exact(2), func: builtin::push },
    "puts"  => { arity: Arity::Any, func: print::puts },
}

/// Looks up a builtin by name.
///
/// The evaluator consults this table only after the environment chain fails
/// to resolve a name, so user bindings shadow builtins.
///
/// # Example
/// ```
/// use monkey::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert_eq!(lookup_builtin("len").map(|b| b.name), Some("len"));
/// assert!(lookup_builtin("map").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// Applies a callable value to already evaluated arguments.
///
/// User functions run their body in a fresh scope enclosed by the
/// environment they captured, with each parameter bound to its argument. A
/// `return` inside the body is unwrapped here so it never leaks into the
/// caller. Builtins have their arity checked and are then invoked directly.
///
/// # Errors
/// - The callee is not a function or builtin.
/// - The argument count does not match.
/// - The body or builtin fails.
#[tracing::instrument(level = "trace", skip_all, fields(callee = %function.object_type(), argc = arguments.len()))]
pub(crate) fn apply_function(function: &Object, arguments: Vec<Object>) -> EvalResult<Object> {
    match function {
        Object::Function(function) => call_user_defined_function(function, arguments),
        Object::Builtin(builtin) => call_builtin(builtin, &arguments),
        _ => Err(RuntimeError::NotAFunction { found: function.object_type() }),
    }
}

fn call_builtin(builtin: &Builtin, arguments: &[Object]) -> EvalResult<Object> {
    if let Arity::Exact(want) = builtin.arity
       && arguments.len() != want
    {
        return Err(RuntimeError::ArgumentCountMismatch { got: arguments.len(),
                                                         want });
    }
    tracing::trace!(name = builtin.name, "calling builtin");
    (builtin.func)(arguments)
}

/// Executes a user-defined function.
///
/// Its parameter count must match the number of supplied arguments, and at
/// most [`MAX_CALL_DEPTH`](crate::util::stack::MAX_CALL_DEPTH) user-defined
/// calls may be active at once.
fn call_user_defined_function(function: &Function, arguments: Vec<Object>) -> EvalResult<Object> {
    if arguments.len() != function.parameters.len() {
        return Err(RuntimeError::ArgumentCountMismatch { got:  arguments.len(),
                                                         want: function.parameters.len(), });
    }

    let _depth = enter_call()?;
    let env = Environment::new_enclosed(&function.env);
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        env.set(parameter.name.as_str(), argument);
    }

    Ok(match eval_block(&function.body, &env)? {
        Some(Object::ReturnValue(value)) => *value,
        Some(value) => value,
        None => NULL,
    })
}
