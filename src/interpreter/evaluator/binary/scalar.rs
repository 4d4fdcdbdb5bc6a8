use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, object::Object},
};

/// Evaluates an infix operation on two integers.
///
/// Arithmetic wraps on overflow. Division truncates toward zero and a zero
/// divisor is an error. Comparisons produce booleans.
///
/// # Parameters
/// - `operator`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Object>` containing the computed value.
///
/// # Example
/// ```
/// use monkey::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::scalar::eval_integer_infix, object::Object},
/// };
///
/// assert_eq!(eval_integer_infix(BinaryOperator::Div, -7, 2).unwrap(), Object::Integer(-3));
/// assert_eq!(eval_integer_infix(BinaryOperator::Less, 1, 2).unwrap(), Object::Boolean(true));
/// assert!(eval_integer_infix(BinaryOperator::Div, 1, 0).is_err());
/// ```
pub fn eval_integer_infix(operator: BinaryOperator,
                          left: i64,
                          right: i64)
                          -> EvalResult<Object> {
    use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    Ok(match operator {
        Add => Object::Integer(left.wrapping_add(right)),
        Sub => Object::Integer(left.wrapping_sub(right)),
        Mul => Object::Integer(left.wrapping_mul(right)),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Object::Integer(left.wrapping_div(right))
        },
        Less => Object::from(left < right),
        Greater => Object::from(left > right),
        Equal => Object::from(left == right),
        NotEqual => Object::from(left != right),
    })
}
