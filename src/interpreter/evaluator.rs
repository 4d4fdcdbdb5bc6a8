/// Infix operator evaluation.
///
/// Dispatches on the operand types: integer arithmetic and comparison, string
/// concatenation, and equality for the remaining types.
pub mod binary;

/// Prefix operator evaluation (`!` and `-`).
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluation entry points, statement and block evaluation, the
/// expression dispatcher and error propagation.
pub mod core;

/// Array literals, hash literals and the index operator.
pub mod collection;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the builtin functions.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value unwrapping.
pub mod function;
