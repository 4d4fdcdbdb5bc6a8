use monkey::{
    ast::{Expression, Identifier, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind, TokenReplay},
        parser::core::Parser,
    },
};
use pretty_assertions::assert_eq;

fn parse(src: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(src));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "unexpected parse errors for {src:?}: {:?}",
            parser.errors());
    program
}

fn parse_errors(src: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(src));
    parser.parse_program();
    parser.into_errors().iter().map(ToString::to_string).collect()
}

fn assert_renders(src: &str, expected: &str) {
    assert_eq!(parse(src).to_string(), expected, "while parsing {src:?}");
}

#[test]
fn let_statements() {
    let program = parse("let x = 5; let y = true; let foobar = y;");

    assert_eq!(program.statements,
               vec![Statement::Let { name:  Identifier::new("x"),
                                     value: Expression::IntegerLiteral(5), },
                    Statement::Let { name:  Identifier::new("y"),
                                     value: Expression::BoolLiteral(true), },
                    Statement::Let { name:  Identifier::new("foobar"),
                                     value: Expression::Identifier(Identifier::new("y")), },]);
}

#[test]
fn return_statements() {
    let program = parse("return 5; return x; return add(1, 2);");

    assert_eq!(program.statements.len(), 3);
    assert!(program.statements
                   .iter()
                   .all(|statement| matches!(statement, Statement::Return { .. })));
    assert_eq!(program.to_string(), "return 5;return x;return add(1, 2);");
}

#[test]
fn trailing_semicolons_are_optional() {
    assert_eq!(parse("let x = 5").statements, parse("let x = 5;").statements);
    assert_eq!(parse("x + 1").statements, parse("x + 1;").statements);
}

#[test]
fn literal_expressions() {
    let program = parse(r#"5; "hello world"; true; foobar;"#);

    assert_eq!(program.statements,
               vec![Statement::Expression { expression: Expression::IntegerLiteral(5) },
                    Statement::Expression { expression:
                                                Expression::StringLiteral("hello world".into()) },
                    Statement::Expression { expression: Expression::BoolLiteral(true) },
                    Statement::Expression { expression:
                                                Expression::Identifier(Identifier::new("foobar")) },]);
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),
                 ("-a[0]", "(-(a[0]))")];

    for (src, expected) in cases {
        assert_renders(src, expected);
    }
}

#[test]
fn if_expressions() {
    assert_renders("if (x < y) { x }", "if(x < y) x");
    assert_renders("if (x < y) { x } else { y }", "if(x < y) xelse y");
    assert_renders("if x < y { x }", "if(x < y) x");
}

#[test]
fn function_literals() {
    let program = parse("fn(x, y) { x + y; }");

    let [Statement::Expression { expression: Expression::FunctionLiteral { parameters, body } }] =
        program.statements.as_slice()
    else {
        panic!("expected a single function literal, got {program:?}");
    };
    assert_eq!(&parameters[..], [Identifier::new("x"), Identifier::new("y")]);
    assert_eq!(body.to_string(), "(x + y)");
}

#[test]
fn function_parameters() {
    assert_renders("fn() {};", "fn() ");
    assert_renders("fn(x) {};", "fn(x) ");
    assert_renders("fn(x, y, z) {};", "fn(x, y, z) ");
}

#[test]
fn call_expressions() {
    assert_renders("add(1, 2 * 3, 4 + 5);", "add(1, (2 * 3), (4 + 5))");
    assert_renders("add();", "add()");
    assert_renders("fn(x) { x }(5)", "fn(x) x(5)");
}

#[test]
fn array_and_index_expressions() {
    assert_renders("[1, 2 * 2, 3 + 3]", "[1, (2 * 2), (3 + 3)]");
    assert_renders("[]", "[]");
    assert_renders("myArray[1 + 1]", "(myArray[(1 + 1)])");
}

#[test]
fn hash_literals() {
    assert_renders(r#"{"one": 1, "two": 2, "three": 3}"#, "{one:1, two:2, three:3}");
    assert_renders("{}", "{}");
    assert_renders(r#"{"one": 0 + 1, "two": 10 - 8, "three": 15 / 5}"#,
                   "{one:(0 + 1), two:(10 - 8), three:(15 / 5)}");
    assert_renders("{1: true, false: 2}", "{1:true, false:2}");
}

#[test]
fn hash_literal_keeps_source_order() {
    let program = parse(r#"{"b": 1, "a": 2}"#);

    let [Statement::Expression { expression: Expression::HashLiteral(pairs) }] =
        program.statements.as_slice()
    else {
        panic!("expected a single hash literal, got {program:?}");
    };
    let keys: Vec<String> = pairs.iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(keys, ["b", "a"]);
}

#[test]
fn errors_accumulate_and_parsing_continues() {
    let mut parser = Parser::new(Lexer::new("let x 5;\nlet y = 10;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors(),
               [ParseError::UnexpectedToken { expected: TokenKind::Assign,
                                              found:    TokenKind::Int,
                                              line:     1, }]);
    assert!(program.statements
                   .contains(&Statement::Let { name:  Identifier::new("y"),
                                               value: Expression::IntegerLiteral(10), }));
}

#[test]
fn error_messages() {
    assert_eq!(parse_errors("let = 10;"),
               ["expected next token to be IDENT, got =", "no prefix parse function for ="]);
    assert_eq!(parse_errors("let 838383;"), ["expected next token to be IDENT, got INT"]);
    assert_eq!(parse_errors("+ 1"), ["no prefix parse function for +"]);
    assert_eq!(parse_errors("99999999999999999999"),
               ["could not parse 99999999999999999999 as integer"]);
    assert_eq!(parse_errors("fn(1) { }"), ["expected next token to be IDENT, got INT",
                                           "no prefix parse function for )"]);
    assert_eq!(parse_errors("add(1, 2"), ["expected next token to be ), got EOF"]);
}

#[test]
fn unterminated_block_is_reported() {
    let mut parser = Parser::new(Lexer::new("if (x < 1) { let y = 1;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors(), [ParseError::UnexpectedEndOfInput { line: 1 }]);
    assert_eq!(program.to_string(), "if(x < 1) let y = 1;");
}

#[test]
fn errors_inside_a_block_do_not_abandon_the_block() {
    let mut parser = Parser::new(Lexer::new("let f = fn() { let = 1; 2 }; let y = 3;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().iter().map(ToString::to_string).collect::<Vec<_>>(),
               ["expected next token to be IDENT, got =", "no prefix parse function for ="]);
    assert_eq!(program.to_string(), "let f = fn() 12;let y = 3;");
}

#[test]
fn failed_statement_keeps_the_closing_brace() {
    let mut parser = Parser::new(Lexer::new("fn() { x + }; let z = 1;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().iter().map(ToString::to_string).collect::<Vec<_>>(),
               ["no prefix parse function for }"]);
    assert_eq!(program.to_string(), "fn() let z = 1;");
}

#[test]
fn error_lines_follow_the_source() {
    let mut parser = Parser::new(Lexer::new("let a = 1;\n\nlet b 2;"));
    parser.parse_program();

    assert_eq!(parser.errors().iter().map(ParseError::line).collect::<Vec<_>>(), [3]);
}

#[test]
fn parses_from_any_token_source() {
    let tokens = vec![Token::new(TokenKind::Let, "let", 1),
                      Token::new(TokenKind::Ident, "x", 1),
                      Token::new(TokenKind::Assign, "=", 1),
                      Token::new(TokenKind::Int, "1", 1),
                      Token::new(TokenKind::Plus, "+", 1),
                      Token::new(TokenKind::Int, "2", 1),
                      Token::new(TokenKind::Semicolon, ";", 1)];
    let mut parser = Parser::new(TokenReplay::from(tokens));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "let x = (1 + 2);");
}

#[test]
fn end_of_input_errors_from_replayed_tokens_keep_the_last_line() {
    let tokens = vec![Token::new(TokenKind::Ident, "add", 4),
                      Token::new(TokenKind::LParen, "(", 4),
                      Token::new(TokenKind::Int, "1", 5)];
    let mut parser = Parser::new(TokenReplay::from(tokens));
    parser.parse_program();

    assert_eq!(parser.errors(),
               [ParseError::UnexpectedToken { expected: TokenKind::RParen,
                                              found:    TokenKind::Eof,
                                              line:     5, }]);
    assert_eq!(parser.errors()[0].line(), 5);
}
