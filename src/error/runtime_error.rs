use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::object::ObjectType,
};

/// Represents all errors that can occur during evaluation.
///
/// The `Display` output of each variant is the exact message exposed by
/// `Object::Error`, so two errors compare equal exactly when their messages
/// do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A name was bound neither in the environment chain nor as a builtin.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A prefix operator was applied to an operand it does not support.
    #[error("unknown operator: {operator}{right}")]
    UnknownPrefixOperator {
        /// The operator.
        operator: UnaryOperator,
        /// Type of the operand.
        right:    ObjectType,
    },
    /// An infix operator is not defined for two operands of the same type.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: BinaryOperator,
        /// Type of the right operand.
        right:    ObjectType,
    },
    /// The operands of an infix operator have different types.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: BinaryOperator,
        /// Type of the right operand.
        right:    ObjectType,
    },
    /// The callee of a call expression is not callable.
    #[error("not a function: {found}")]
    NotAFunction {
        /// Type of the callee.
        found: ObjectType,
    },
    /// A value without a hash key was used as a hash key.
    #[error("unusable as hash key: {found}")]
    UnusableHashKey {
        /// Type of the rejected key.
        found: ObjectType,
    },
    /// The index operator was applied to a value that cannot be indexed.
    #[error("index operator not supported: {found}")]
    IndexNotSupported {
        /// Type of the indexed value.
        found: ObjectType,
    },
    /// A function was called with the wrong number of arguments.
    #[error("wrong number of arguments: got={got}, want={want}")]
    ArgumentCountMismatch {
        /// Number of arguments supplied.
        got:  usize,
        /// Number of arguments expected.
        want: usize,
    },
    /// A builtin received an argument of a type it has no behaviour for.
    #[error("argument to '{function}' not supported, got {found}")]
    UnsupportedArgument {
        /// Name of the builtin.
        function: &'static str,
        /// Type of the argument.
        found:    ObjectType,
    },
    /// Nested user-defined function calls exceeded the call depth limit.
    #[error("maximum recursion depth exceeded (limit: {depth})")]
    RecursionLimit {
        /// The limit that was hit.
        depth: usize,
    },
    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// A length or count does not fit in a 64-bit signed integer.
    #[error("value out of integer range")]
    OutOfRange,
}
