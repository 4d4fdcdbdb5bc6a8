/// Built-in functions over strings and arrays.
///
/// Implements `len`, `first`, `last`, `rest` and `push`. None of them mutate
/// their arguments.
pub mod builtin;
/// The `puts` function implementation.
///
/// Writes the inspected form of each argument to standard output.
pub mod print;

/// Builtin lookup table and function application.
pub mod core;
