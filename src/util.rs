/// Integer conversion helpers.
///
/// Converts between the language's 64-bit signed integers and host sizes
/// without silent truncation.
pub mod num;
/// Recursion safety for the parser and evaluator.
///
/// Grows the native stack on demand and bounds the depth of nested
/// user-defined calls.
pub mod stack;
