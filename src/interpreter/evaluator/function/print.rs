use crate::interpreter::{evaluator::core::EvalResult, object::{NULL, Object}};

/// Prints each argument on its own line and returns `null`.
///
/// Accepts any number of arguments. Each is written in its inspected form,
/// so strings appear without quotes.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::print::puts, object::{NULL, Object}};
///
/// // The function prints to stdout, but the doctest
/// // only checks the returned result.
/// let result = puts(&[Object::from("hello"), Object::Integer(42)]).unwrap();
///
/// assert_eq!(result, NULL);
/// ```
pub fn puts(args: &[Object]) -> EvalResult<Object> {
    for arg in args {
        println!("{arg}");
    }
    Ok(NULL)
}
