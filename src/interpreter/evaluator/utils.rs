use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        object::Object,
    },
};

/// Ensures that a builtin received exactly `expected` arguments.
///
/// The function table checks arity before dispatch as well; builtins repeat
/// the check so they are safe to call directly.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::utils::check_arity, object::Object};
///
/// assert!(check_arity(&[Object::Integer(1)], 1).is_ok());
///
/// let err = check_arity(&[], 2).unwrap_err();
/// assert_eq!(err.to_string(), "wrong number of arguments: got=0, want=2");
/// ```
pub fn check_arity(args: &[Object], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { got:  args.len(),
                                                  want: expected, })
    }
}

/// Borrows the elements of an array argument, or reports the builtin as
/// not supporting the argument's type.
pub fn expect_array<'a>(function: &'static str, value: &'a Object) -> EvalResult<&'a [Object]> {
    match value {
        Object::Array(elements) => Ok(elements.as_slice()),
        _ => Err(RuntimeError::UnsupportedArgument { function,
                                                     found: value.object_type() }),
    }
}
