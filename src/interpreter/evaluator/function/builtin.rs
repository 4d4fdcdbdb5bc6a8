use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, expect_array},
        },
        object::{NULL, Object},
    },
    util::num::usize_to_i64_checked,
};

/// Returns the length of a string or an array.
///
/// Strings are measured in characters, not bytes.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::len, object::Object};
///
/// assert_eq!(len(&[Object::from("héllo")]).unwrap(), Object::Integer(5));
///
/// let err = len(&[Object::Integer(1)]).unwrap_err();
/// assert_eq!(err.to_string(), "argument to 'len' not supported, got INTEGER");
/// ```
pub fn len(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    let length = match &args[0] {
        Object::String(value) => value.chars().count(),
        Object::Array(elements) => elements.len(),
        other => {
            return Err(RuntimeError::UnsupportedArgument { function: "len",
                                                           found:    other.object_type(), });
        },
    };
    Ok(Object::Integer(usize_to_i64_checked(length)?))
}

/// Returns the first element of an array, or `null` if it is empty.
pub fn first(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    let elements = expect_array("first", &args[0])?;
    Ok(elements.first().cloned().unwrap_or(NULL))
}

/// Returns the last element of an array, or `null` if it is empty.
pub fn last(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    let elements = expect_array("last", &args[0])?;
    Ok(elements.last().cloned().unwrap_or(NULL))
}

/// Returns a new array holding every element but the first.
///
/// The argument is left untouched. An empty array yields `null`.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::rest, object::{NULL, Object}};
///
/// let array = Object::from(vec![Object::Integer(1), Object::Integer(2)]);
///
/// assert_eq!(rest(&[array]).unwrap(), Object::from(vec![Object::Integer(2)]));
/// assert_eq!(rest(&[Object::from(vec![])]).unwrap(), NULL);
/// ```
pub fn rest(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    let elements = expect_array("rest", &args[0])?;
    Ok(match elements.split_first() {
        Some((_, rest)) => Object::Array(Rc::new(rest.to_vec())),
        None => NULL,
    })
}

/// Returns a new array with the second argument appended to the first.
///
/// The original array is left untouched.
pub fn push(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 2)?;

    let elements = expect_array("push", &args[0])?;
    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend_from_slice(elements);
    pushed.push(args[1].clone());
    Ok(Object::Array(Rc::new(pushed)))
}
