use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, object::Object},
};

/// Evaluates an infix operation between two values.
///
/// The operation is routed on the operand types, in this order:
/// - two integers go to [`eval_integer_infix`](super::scalar::eval_integer_infix),
/// - two strings go to [`eval_string_infix`](super::string::eval_string_infix),
/// - operands of different types are a type mismatch,
/// - `==` and `!=` on any other pair of same-typed values compare them by
///   value,
/// - anything else is an unknown operator.
///
/// # Parameters
/// - `operator`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Object>` containing the evaluated result.
///
/// # Example
/// ```
/// use monkey::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_infix, object::Object},
/// };
///
/// let result = eval_infix(BinaryOperator::Add, &Object::Integer(3), &Object::Integer(4));
/// assert_eq!(result.unwrap(), Object::Integer(7));
///
/// let result = eval_infix(BinaryOperator::Add, &Object::Integer(5), &Object::Boolean(true));
/// assert_eq!(result.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn eval_infix(operator: BinaryOperator, left: &Object, right: &Object) -> EvalResult<Object> {
    use BinaryOperator::{Equal, NotEqual};

    match (left, right) {
        (Object::Integer(left), Object::Integer(right)) => {
            super::scalar::eval_integer_infix(operator, *left, *right)
        },
        (Object::String(left), Object::String(right)) => {
            super::string::eval_string_infix(operator, left, right)
        },
        _ if left.object_type() != right.object_type() => {
            Err(RuntimeError::TypeMismatch { left: left.object_type(),
                                             operator,
                                             right: right.object_type() })
        },
        _ => match operator {
            Equal => Ok(Object::from(left == right)),
            NotEqual => Ok(Object::from(left != right)),
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.object_type(),
                                                          operator,
                                                          right: right.object_type() }),
        },
    }
}
