/// Dispatch of infix operators on operand types.
pub mod core;
/// Integer arithmetic and comparison.
pub mod scalar;
/// String concatenation.
pub mod string;
