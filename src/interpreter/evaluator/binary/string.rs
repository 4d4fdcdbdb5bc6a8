use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        object::{Object, ObjectType},
    },
};

/// Evaluates an infix operation on two strings.
///
/// `+` concatenates, `==` and `!=` compare contents. Ordering comparisons
/// and arithmetic other than `+` are unknown operators for strings.
pub fn eval_string_infix(operator: BinaryOperator, left: &str, right: &str) -> EvalResult<Object> {
    match operator {
        BinaryOperator::Add => Ok(Object::String(Rc::from([left, right].concat()))),
        BinaryOperator::Equal => Ok(Object::from(left == right)),
        BinaryOperator::NotEqual => Ok(Object::from(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left: ObjectType::String,
                                                      operator,
                                                      right: ObjectType::String }),
    }
}
