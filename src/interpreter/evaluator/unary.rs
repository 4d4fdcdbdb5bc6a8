use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, object::Object},
};

/// Evaluates a prefix operation on a value.
///
/// Supported operators:
/// - `Not`: logical negation of the operand's truthiness. `!null` is `true`,
///   and every integer, zero included, is truthy.
/// - `Negate`: integer negation. Any other operand type is an error.
///
/// # Parameters
/// - `operator`: Prefix operator.
/// - `right`: The evaluated operand.
///
/// # Returns
/// The computed `Object` wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use monkey::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_prefix, object::Object},
/// };
///
/// let v = eval_prefix(UnaryOperator::Negate, &Object::Integer(5)).unwrap();
/// assert_eq!(v, Object::Integer(-5));
///
/// let v = eval_prefix(UnaryOperator::Not, &Object::Integer(0)).unwrap();
/// assert_eq!(v, Object::Boolean(false));
///
/// let err = eval_prefix(UnaryOperator::Negate, &Object::Boolean(true)).unwrap_err();
/// assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
/// ```
pub fn eval_prefix(operator: UnaryOperator, right: &Object) -> EvalResult<Object> {
    match operator {
        UnaryOperator::Not => Ok(Object::from(!right.is_truthy())),
        UnaryOperator::Negate => match right {
            Object::Integer(value) => Ok(Object::Integer(value.wrapping_neg())),
            _ => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                           right: right.object_type() }),
        },
    }
}
