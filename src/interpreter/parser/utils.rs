use crate::{
    ast::Identifier,
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by function parameters, call arguments, array
    /// literals and hash literals. The current token must be the opening
    /// delimiter. `parse_item` is called with the first token of each item as
    /// the current token and must leave the cursor on the item's last token.
    ///
    /// An immediately following closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := item ("," item)*`
    ///
    /// # Parameters
    /// - `closing`: The token kind that terminates the list (e.g., `]` or
    ///   `)`).
    /// - `parse_item`: Function used to parse each list element.
    ///
    /// # Returns
    /// A vector of parsed items; the closing token is the current token.
    ///
    /// # Errors
    /// - an item fails to parse,
    /// - the token after an item is neither a comma nor `closing`.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        closing: TokenKind,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.next_token();
            return Ok(items);
        }

        self.next_token();
        items.push(parse_item(self)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(parse_item(self)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses the current token as a plain identifier.
    ///
    /// Used for `let` names and function parameters, where only a bare name
    /// is allowed.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<Identifier> {
        if self.cur_is(TokenKind::Ident) {
            Ok(Identifier::new(self.cur.literal.as_str()))
        } else {
            Err(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                              found:    self.cur.kind,
                                              line:     self.cur.line, })
        }
    }
}
