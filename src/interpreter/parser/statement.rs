use crate::{
    ast::Statement,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a single statement starting at the current token.
    ///
    /// Grammar:
    /// ```text
    ///     statement := "let" IDENT "=" expression ";"?
    ///                | "return" expression ";"?
    ///                | expression ";"?
    /// ```
    /// On return the current token is the last token of the statement,
    /// including the optional semicolon.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = self.parse_identifier()?;

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression { expression })
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
