use std::fmt;

use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can be recorded during parsing.
///
/// Every variant carries the source line of the token that triggered it. The
/// `Display` output is the bare diagnostic; the line is exposed separately via
/// [`ParseError::line`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token after the current one was not the required kind.
    #[error("expected next token to be {expected}, got {found}")]
    UnexpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with the current token.
    #[error("no prefix parse function for {kind}")]
    NoPrefixParseFn {
        /// The offending token kind.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit in 64 signed bits.
    #[error("could not parse {literal} as integer")]
    InvalidInteger {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A block was still open when the token stream ended.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the source line the error was recorded on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseFn { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::UnexpectedEndOfInput { line } => *line,
        }
    }
}

/// Every error recorded while parsing one source text.
///
/// Returned by [`crate::get_result`] when the program could not be parsed
/// cleanly. Rendering lists one error per line, prefixed with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// Iterates over the recorded errors in the order they were found.
    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "Error on line {}: {error}", error.line())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
