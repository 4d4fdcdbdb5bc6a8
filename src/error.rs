/// Parsing errors.
///
/// Defines every diagnostic the parser can record while turning a token
/// stream into a program. Parse errors never abort parsing; they are
/// accumulated and inspected by the caller afterwards.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every failure the evaluator can produce. Runtime errors are not
/// returned through `Result` to the caller of the evaluator; they travel as
/// the payload of `Object::Error` values.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
