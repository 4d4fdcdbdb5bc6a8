use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// This enum defines all recognized token kinds in the language. Kinds carry
/// no payload; the source text of a token lives in [`Token::literal`].
/// `Illegal` and `Eof` are never matched by a pattern: the [`Lexer`] produces
/// them for unrecognized input and for the end of the stream.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Unrecognized input.
    Illegal,
    /// End of the token stream.
    Eof,

    /// Identifier tokens; binding names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens, such as `"hello"`. No escape sequences.
    #[regex(r#""[^"]*""#, allow_greedy = true)]
    String,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line feeds. Skipped, but counted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token: its kind, its source text and the line it starts on.
///
/// Equality is structural over `kind` and `literal`; the line is diagnostic
/// metadata and does not take part in comparisons.
#[derive(Debug, Clone)]
pub struct Token {
    /// The token kind.
    pub kind:    TokenKind,
    /// The source text. String literals exclude their quotes.
    pub literal: String,
    /// The source line, starting at one.
    pub line:    usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.literal == other.literal
    }
}

impl Eq for Token {}

/// A source of tokens consumed by the parser one at a time.
///
/// Once the end of input is reached, implementations must keep returning
/// `Eof` tokens on every further call.
pub trait TokenSource {
    /// Produces the next token.
    fn next_token(&mut self) -> Token;
}

/// Turns source text into a stream of [`Token`]s.
///
/// ## Example
/// ```
/// use monkey::interpreter::lexer::{Lexer, TokenKind, TokenSource};
///
/// let mut lexer = Lexer::new("let x = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "x");
/// ```
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, TokenKind>,
}

impl<'source> Lexer<'source> {
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        let next = self.inner.next();
        let line = self.inner.extras.line;
        let slice = self.inner.slice();
        let token = match next {
            Some(Ok(TokenKind::String)) => {
                Token::new(TokenKind::String, &slice[1..slice.len() - 1], line)
            },
            Some(Ok(kind)) => Token::new(kind, slice, line),
            Some(Err(())) => Token::new(TokenKind::Illegal, slice, line),
            None => return Token::new(TokenKind::Eof, "", line),
        };
        // Tokens carry the line they start on; a string literal may span several.
        self.inner.extras.line += slice.matches('\n').count();
        token
    }
}

/// Replays a pre-built token sequence, then yields `Eof` forever.
///
/// The synthesized `Eof` reports the line of the last replayed token, so
/// errors at the end of input point at the end of the sequence.
///
/// ## Example
/// ```
/// use monkey::interpreter::lexer::{Token, TokenKind, TokenReplay, TokenSource};
///
/// let mut tokens = TokenReplay::from(vec![Token::new(TokenKind::Int, "1", 3)]);
///
/// assert_eq!(tokens.next_token().line, 3);
/// assert_eq!(tokens.next_token().kind, TokenKind::Eof);
/// assert_eq!(tokens.next_token().line, 3);
/// ```
#[derive(Debug)]
pub struct TokenReplay {
    tokens: std::vec::IntoIter<Token>,
    line:   usize,
}

impl From<Vec<Token>> for TokenReplay {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens: tokens.into_iter(),
               line:   1, }
    }
}

impl TokenSource for TokenReplay {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.line = token.line;
                token
            },
            None => Token::new(TokenKind::Eof, "", self.line),
        }
    }
}
