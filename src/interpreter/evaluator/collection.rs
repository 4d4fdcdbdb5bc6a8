use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_expression, eval_expressions},
        object::{HashPair, NULL, Object},
    },
    util::num::i64_to_usize_checked,
};

/// Evaluates the elements of an array literal left to right.
pub(crate) fn eval_array_literal(elements: &[Expression],
                                 env: &Rc<Environment>)
                                 -> EvalResult<Object> {
    Ok(Object::from(eval_expressions(elements, env)?))
}

/// Evaluates a hash literal.
///
/// Each key is evaluated and checked for hashability before its value is
/// evaluated. Pairs keep their source order; a repeated key keeps its first
/// position and takes the last value.
pub(crate) fn eval_hash_literal(pairs: &[(Expression, Expression)],
                                env: &Rc<Environment>)
                                -> EvalResult<Object> {
    let mut map = IndexMap::with_capacity(pairs.len());

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env)?;
        let hash_key = key.hash_key()
                          .ok_or(RuntimeError::UnusableHashKey { found: key.object_type() })?;
        let value = eval_expression(value_expression, env)?;
        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Object::Hash(Rc::new(map)))
}

/// Evaluates `left[index]`.
///
/// Arrays take integer indices; a negative or out of range index yields
/// `null`. Hashes take any hashable key; a missing key yields `null`.
///
/// # Errors
/// - The hash key is not hashable.
/// - The left operand is neither an array indexed by an integer nor a hash.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     evaluator::collection::eval_index_expression,
///     object::{NULL, Object},
/// };
///
/// let array = Object::from(vec![Object::Integer(1), Object::Integer(2)]);
///
/// assert_eq!(eval_index_expression(&array, &Object::Integer(1)).unwrap(), Object::Integer(2));
/// assert_eq!(eval_index_expression(&array, &Object::Integer(-1)).unwrap(), NULL);
/// ```
pub fn eval_index_expression(left: &Object, index: &Object) -> EvalResult<Object> {
    match (left, index) {
        (Object::Array(elements), Object::Integer(position)) => {
            Ok(i64_to_usize_checked(*position).and_then(|position| elements.get(position))
                                              .cloned()
                                              .unwrap_or(NULL))
        },
        (Object::Hash(pairs), _) => {
            let key = index.hash_key()
                           .ok_or(RuntimeError::UnusableHashKey { found: index.object_type() })?;
            Ok(pairs.get(&key).map_or(NULL, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { found: left.object_type() }),
    }
}
