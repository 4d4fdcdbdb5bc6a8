use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a block delimited by braces.
    ///
    /// The current token must be the opening `{`. Statements are collected
    /// until the matching `}`, which becomes the current token on return.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// A malformed statement is recorded and dropped, and parsing resumes
    /// with the next token, as at the top level. If the token stream ends
    /// first, an `UnexpectedEndOfInput` error is recorded and the statements
    /// parsed so far are returned.
    pub(crate) fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        let mut block = BlockStatement::default();
        self.next_token();

        while !self.cur_is(TokenKind::RBrace) {
            if self.cur_is(TokenKind::Eof) {
                self.record(ParseError::UnexpectedEndOfInput { line: self.cur.line });
                break;
            }
            match self.parse_statement() {
                Ok(statement) => block.statements.push(statement),
                Err(error) => {
                    self.record(error);
                    // A statement that failed on the closing brace must not consume it.
                    if self.cur_is(TokenKind::RBrace) {
                        continue;
                    }
                },
            }
            self.next_token();
        }

        Ok(block)
    }
}
