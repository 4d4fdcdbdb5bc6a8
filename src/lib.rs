//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming language,
//! written in Rust. It lexes, parses and evaluates programs made of integers,
//! booleans, strings, arrays, hashes, first-class functions and closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::{
    error::ParseErrors,
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        lexer::Lexer,
        object::Object,
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expression` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Renders every node in a deterministic, fully parenthesized form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code, with the exact messages shown to the user.
///
/// # Responsibilities
/// - Defines error enums for both failure channels (parser, evaluator).
/// - Attaches line numbers to parse errors for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, runtime values and
/// environments to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and objects.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for numeric conversion and recursion safety.
///
/// # Responsibilities
/// - Safely convert between `i64` and `usize` without silent data loss.
/// - Keep deeply nested programs from overflowing the host stack.
pub mod util;

/// Parses and evaluates `source` against `env`.
///
/// The whole source is parsed first. If any parse error was recorded, none of
/// the program is evaluated and every error is returned. Otherwise the program
/// runs to completion and its final value is returned.
///
/// Runtime errors are values: they come back as `Ok(Some(Object::Error(..)))`.
/// `Ok(None)` means the program produced no value, as when it ends with a
/// `let` statement.
///
/// Bindings made by the program stay in `env`, so calling this repeatedly
/// with the same environment behaves like successive REPL lines.
///
/// # Examples
/// ```
/// use monkey::{get_result, interpreter::{environment::Environment, object::Object}};
///
/// let env = Environment::new();
///
/// assert_eq!(get_result("let x = 2 + 2;", &env).unwrap(), None);
/// assert_eq!(get_result("x * 10", &env).unwrap(), Some(Object::Integer(40)));
///
/// // An unknown identifier is a runtime error, not a parse error.
/// let result = get_result("y + 1", &env).unwrap();
/// assert!(result.is_some_and(|value| value.is_error()));
///
/// // A malformed statement is a parse error.
/// assert!(get_result("let = 1;", &env).is_err());
/// ```
pub fn get_result(source: &str, env: &Rc<Environment>) -> Result<Option<Object>, ParseErrors> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let errors = parser.into_errors();
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "skipping evaluation after parse errors");
        return Err(ParseErrors(errors));
    }

    Ok(eval_program(&program, env))
}
