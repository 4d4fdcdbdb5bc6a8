/// Runtime values and their type tags.
///
/// Defines the `Object` enum, the canonical `TRUE`/`FALSE`/`NULL` constants
/// and the textual inspection of every value.
pub mod core;
/// Callable values.
///
/// User functions capture the environment they were defined in; builtins are
/// entries of a static table.
pub mod function;
/// Hash keys.
///
/// Derives comparable keys from integers, booleans and strings so hashes
/// look values up by content rather than by identity.
pub mod hash;

pub use self::{
    core::{FALSE, NULL, Object, ObjectType, TRUE},
    function::{Arity, Builtin, BuiltinFn, Function},
    hash::{HashKey, HashPair},
};
