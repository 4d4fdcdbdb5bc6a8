use std::rc::Rc;

use crate::{
    ast::{Expression, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// A prefix parse function. Called with the first token of the construct as
/// the current token.
pub(crate) type PrefixParseFn<S> = fn(&mut Parser<S>) -> ParseResult<Expression>;

impl<S: TokenSource> Parser<S> {
    /// Looks up the prefix parse function for a token kind.
    ///
    /// Returns `None` for kinds that cannot start an expression.
    pub(crate) fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<S>> {
        Some(match kind {
            TokenKind::Ident => Self::parse_identifier_expression,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::String => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::LBracket => Self::parse_array_literal,
            TokenKind::LBrace => Self::parse_hash_literal,
            _ => return None,
        })
    }

    fn parse_identifier_expression(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(self.parse_identifier()?))
    }

    fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        self.cur
            .literal
            .parse()
            .map(Expression::IntegerLiteral)
            .map_err(|_| ParseError::InvalidInteger { literal: self.cur.literal.clone(),
                                                      line:    self.cur.line, })
    }

    fn parse_string_literal(&mut self) -> ParseResult<Expression> {
        Ok(Expression::StringLiteral(self.cur.literal.clone()))
    }

    fn parse_boolean(&mut self) -> ParseResult<Expression> {
        Ok(Expression::BoolLiteral(self.cur_is(TokenKind::True)))
    }

    /// Parses `!x` or `-x`.
    ///
    /// The operand is parsed at `Prefix` precedence, so `-a * b` groups as
    /// `((-a) * b)` while `-a[0]` negates the indexed element.
    fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let operator = if self.cur_is(TokenKind::Bang) {
            UnaryOperator::Not
        } else {
            UnaryOperator::Negate
        };
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::Prefix { operator,
                                right: Box::new(right) })
    }

    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expression)
    }

    /// Parses an `if` expression with an optional `else` block.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <consequence> }
    ///     if (<condition>) { <consequence> } else { <alternative> }
    /// ```
    /// The parentheses are parsed as a grouped expression, so they may be
    /// omitted.
    ///
    /// # Errors
    /// - `UnexpectedToken` if a `{` is missing after the condition or after
    ///   `else`.
    /// - Propagates any errors from the condition or the blocks.
    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Parses `fn(<parameters>) { <body> }`.
    ///
    /// Every parameter must be a bare identifier.
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_comma_separated(TokenKind::RParen, Self::parse_identifier)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::FunctionLiteral { parameters: parameters.into(),
                                         body:       Rc::new(body), })
    }

    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let elements = self.parse_comma_separated(TokenKind::RBracket, |parser| {
                               parser.parse_expression(Precedence::Lowest)
                           })?;
        Ok(Expression::ArrayLiteral(elements))
    }

    /// Parses `{<key>: <value>, ...}`.
    ///
    /// Keys may be arbitrary expressions; whether a key is hashable is only
    /// known at evaluation time.
    fn parse_hash_literal(&mut self) -> ParseResult<Expression> {
        let pairs = self.parse_comma_separated(TokenKind::RBrace, |parser| {
                            let key = parser.parse_expression(Precedence::Lowest)?;
                            parser.expect_peek(TokenKind::Colon)?;
                            parser.next_token();
                            let value = parser.parse_expression(Precedence::Lowest)?;
                            Ok((key, value))
                        })?;
        Ok(Expression::HashLiteral(pairs))
    }
}
