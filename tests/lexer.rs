use monkey::interpreter::lexer::{Lexer, Token, TokenKind, TokenSource};
use pretty_assertions::assert_eq;

fn tokens(src: &str) -> Vec<(TokenKind, String)> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            return tokens;
        }
        tokens.push((token.kind, token.literal));
    }
}

fn kinds(src: &str) -> Vec<TokenKind> {
    tokens(src).into_iter().map(|(kind, _)| kind).collect()
}

#[test]
fn operators_and_delimiters() {
    use TokenKind::{
        Assign, Asterisk, Bang, Colon, Comma, Eq, Gt, LBrace, LBracket, LParen, Lt, Minus, NotEq,
        Plus, RBrace, RBracket, RParen, Semicolon, Slash,
    };

    assert_eq!(kinds("=+-!*/<>==!=,;:(){}[]"),
               [Assign, Plus, Minus, Bang, Asterisk, Slash, Lt, Gt, Eq, NotEq, Comma, Semicolon,
                Colon, LParen, RParen, LBrace, RBrace, LBracket, RBracket]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::{Else, False, Function, Ident, If, Let, Return, True};

    assert_eq!(kinds("fn let true false if else return letter _x9 iffy"),
               [Function, Let, True, False, If, Else, Return, Ident, Ident, Ident]);
}

#[test]
fn full_program() {
    let src = r#"
        let five = 5;
        let add = fn(x, y) { x + y; };
        let result = add(five, 10);
        "foo bar";
        [1, 2];
        {"foo": "bar"}
    "#;

    let expected: Vec<(TokenKind, String)> =
        [(TokenKind::Let, "let"),
         (TokenKind::Ident, "five"),
         (TokenKind::Assign, "="),
         (TokenKind::Int, "5"),
         (TokenKind::Semicolon, ";"),
         (TokenKind::Let, "let"),
         (TokenKind::Ident, "add"),
         (TokenKind::Assign, "="),
         (TokenKind::Function, "fn"),
         (TokenKind::LParen, "("),
         (TokenKind::Ident, "x"),
         (TokenKind::Comma, ","),
         (TokenKind::Ident, "y"),
         (TokenKind::RParen, ")"),
         (TokenKind::LBrace, "{"),
         (TokenKind::Ident, "x"),
         (TokenKind::Plus, "+"),
         (TokenKind::Ident, "y"),
         (TokenKind::Semicolon, ";"),
         (TokenKind::RBrace, "}"),
         (TokenKind::Semicolon, ";"),
         (TokenKind::Let, "let"),
         (TokenKind::Ident, "result"),
         (TokenKind::Assign, "="),
         (TokenKind::Ident, "add"),
         (TokenKind::LParen, "("),
         (TokenKind::Ident, "five"),
         (TokenKind::Comma, ","),
         (TokenKind::Int, "10"),
         (TokenKind::RParen, ")"),
         (TokenKind::Semicolon, ";"),
         (TokenKind::String, "foo bar"),
         (TokenKind::Semicolon, ";"),
         (TokenKind::LBracket, "["),
         (TokenKind::Int, "1"),
         (TokenKind::Comma, ","),
         (TokenKind::Int, "2"),
         (TokenKind::RBracket, "]"),
         (TokenKind::Semicolon, ";"),
         (TokenKind::LBrace, "{"),
         (TokenKind::String, "foo"),
         (TokenKind::Colon, ":"),
         (TokenKind::String, "bar"),
         (TokenKind::RBrace, "}")].into_iter()
                                  .map(|(kind, literal)| (kind, literal.to_string()))
                                  .collect();

    assert_eq!(tokens(src), expected);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(tokens("let x = 1; // the rest is ignored\n\tx"),
               [(TokenKind::Let, "let".to_string()),
                (TokenKind::Ident, "x".to_string()),
                (TokenKind::Assign, "=".to_string()),
                (TokenKind::Int, "1".to_string()),
                (TokenKind::Semicolon, ";".to_string()),
                (TokenKind::Ident, "x".to_string())]);
}

#[test]
fn empty_string_literal() {
    assert_eq!(tokens(r#""""#), [(TokenKind::String, String::new())]);
}

#[test]
fn unrecognized_input_is_illegal_and_lexing_continues() {
    assert_eq!(tokens("1 @ 2"),
               [(TokenKind::Int, "1".to_string()),
                (TokenKind::Illegal, "@".to_string()),
                (TokenKind::Int, "2".to_string())]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn lines_are_counted() {
    let mut lexer = Lexer::new("a\nb\n\nc");
    let lines: Vec<usize> = (0..3).map(|_| lexer.next_token().line).collect();

    assert_eq!(lines, [1, 2, 4]);
}

#[test]
fn multi_line_strings_advance_the_line_count() {
    let mut lexer = Lexer::new("\"a\nb\n\" x\ny");
    let tokens: Vec<Token> = (0..3).map(|_| lexer.next_token()).collect();

    assert_eq!(tokens.iter().map(|token| token.line).collect::<Vec<_>>(), [1, 3, 4]);
    assert_eq!(tokens[0].literal, "a\nb\n");
}

#[test]
fn token_equality_ignores_line() {
    assert_eq!(Token::new(TokenKind::Int, "5", 1), Token::new(TokenKind::Int, "5", 7));
    assert_ne!(Token::new(TokenKind::Int, "5", 1), Token::new(TokenKind::Int, "6", 1));
}

#[test]
fn token_kinds_render_conventional_names() {
    let names: Vec<String> = [TokenKind::Ident,
                              TokenKind::Int,
                              TokenKind::Eof,
                              TokenKind::Function,
                              TokenKind::NotEq].iter()
                                               .map(ToString::to_string)
                                               .collect();

    assert_eq!(names, ["IDENT", "INT", "EOF", "FUNCTION", "!="]);
}
