/// The environment module stores variable bindings.
///
/// Environments form a chain of scopes. Each function call creates a new scope
/// enclosed by the environment the function captured when it was created,
/// which is what makes closures work.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages variable state, and produces results. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, builtins, and `return` unwinding.
/// - Reports runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and line.
/// - Skips whitespace and `//` comments.
/// - Marks unrecognized input as `ILLEGAL` instead of failing.
pub mod lexer;
/// The object module defines the runtime values produced by evaluation.
///
/// # Responsibilities
/// - Defines the `Object` enum and its type tags.
/// - Derives hash keys for hashable values.
/// - Renders values in the form shown by the REPL and `puts`.
pub mod object;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt parser: every token kind maps to an optional prefix
/// parse function, an optional infix parse function and a precedence.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar, recording errors with line information and
///   continuing with the next statement.
pub mod parser;
