use crate::{
    ast::{BinaryOperator, Expression},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// An infix parse function. Called with the operator token as the current
/// token and the expression parsed so far as the left operand.
pub(crate) type InfixParseFn<S> = fn(&mut Parser<S>, Expression) -> ParseResult<Expression>;

/// Maps a token kind to the binary operator it denotes, if any.
const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    Some(match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Asterisk => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Lt => BinaryOperator::Less,
        TokenKind::Gt => BinaryOperator::Greater,
        TokenKind::Eq => BinaryOperator::Equal,
        TokenKind::NotEq => BinaryOperator::NotEqual,
        _ => return None,
    })
}

impl<S: TokenSource> Parser<S> {
    /// Looks up the infix parse function for a token kind.
    pub(crate) fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<S>> {
        match kind {
            TokenKind::LParen => Some(Self::parse_call_expression),
            TokenKind::LBracket => Some(Self::parse_index_expression),
            _ if token_to_binary_operator(kind).is_some() => Some(Self::parse_infix_expression),
            _ => None,
        }
    }

    /// Parses the right operand of a binary operator.
    ///
    /// The operator's precedence is captured before advancing, and the right
    /// operand only absorbs operators that bind tighter. This keeps
    /// `a - b - c` as `((a - b) - c)`.
    fn parse_infix_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let kind = self.cur.kind;
        let Some(operator) = token_to_binary_operator(kind) else {
            return Ok(left);
        };
        let precedence = Precedence::of(kind);
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Ok(Expression::Infix { left: Box::new(left),
                               operator,
                               right: Box::new(right) })
    }

    fn parse_call_expression(&mut self, function: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_comma_separated(TokenKind::RParen, |parser| {
                                parser.parse_expression(Precedence::Lowest)
                            })?;
        Ok(Expression::Call { function: Box::new(function),
                              arguments })
    }

    fn parse_index_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expression::Index { left:  Box::new(left),
                               index: Box::new(index), })
    }
}
