use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind, TokenSource},
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding power of an operator, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `-` and `!`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl Precedence {
    /// Maps a token kind to its infix precedence.
    ///
    /// Kinds that cannot continue an expression map to `Lowest`, which stops
    /// the expression loop.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            TokenKind::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// A Pratt parser over any [`TokenSource`].
///
/// The parser keeps the current token and one token of lookahead. Errors are
/// recorded rather than returned: a malformed statement is dropped and
/// parsing resumes with the next token, so one call to
/// [`Parser::parse_program`] reports every error it can find.
///
/// ## Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("let x = 1 + 2 * 3;"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
pub struct Parser<S: TokenSource> {
    source:          S,
    pub(crate) cur:  Token,
    pub(crate) peek: Token,
    errors:          Vec<ParseError>,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and fills the current and lookahead tokens.
    pub fn new(mut source: S) -> Self {
        let cur = source.next_token();
        let peek = source.next_token();
        Self { source,
               cur,
               peek,
               errors: Vec::new() }
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Statements that fail to parse are left out of the program; their
    /// errors are available through [`Parser::errors`] afterwards.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => self.record(error),
            }
            self.next_token();
        }

        program
    }

    /// Errors recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its recorded errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// The prefix function for the current token builds the left operand.
    /// While the lookahead is an operator binding tighter than `precedence`,
    /// the parser advances onto it and lets its infix function extend the
    /// expression. Equal precedence stops the loop, which makes binary
    /// operators left-associative.
    ///
    /// On return the current token is the last token of the expression.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        ensure_sufficient_stack(|| self.parse_operators(precedence))
    }

    fn parse_operators(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let Some(prefix) = Self::prefix_parse_fn(self.cur.kind) else {
            return Err(ParseError::NoPrefixParseFn { kind: self.cur.kind,
                                                     line: self.cur.line, });
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            let Some(infix) = Self::infix_parse_fn(self.peek.kind) else {
                return Ok(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    /// Advances the cursor by one token.
    pub(crate) fn next_token(&mut self) {
        let next = self.source.next_token();
        self.cur = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead is `kind`, otherwise fails without moving.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: kind,
                                              found:    self.peek.kind,
                                              line:     self.peek.line, })
        }
    }

    /// Records an error without aborting the current construct.
    pub(crate) fn record(&mut self, error: ParseError) {
        tracing::debug!(line = error.line(), %error, "parse error");
        self.errors.push(error);
    }
}
