/// Parser state, the precedence table and the Pratt expression loop.
///
/// Contains the entry point for whole programs, the token cursor and error
/// recording.
pub mod core;

/// Prefix parse functions.
///
/// Handles every construct that can start an expression: literals,
/// identifiers, unary operators, grouping, conditionals, function literals,
/// arrays and hashes.
pub mod prefix;

/// Infix parse functions.
///
/// Implements binary operators, call expressions and index expressions.
pub mod infix;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by conditionals and
/// function bodies.
pub mod block;

/// Utility functions for the parser.
///
/// Provides the shared comma-separated list routine and identifier parsing.
pub mod utils;

/// Statement parsing.
///
/// Implements `let`, `return` and expression statements.
pub mod statement;
