use calcrs::{
    ast::Function,
    error::LexError,
    interpreter::lexer::{Operator, Paren, Token, TokenKind},
    tokenize,
};

fn number(text: &str) -> Token {
    Token::Number(text.to_string())
}

const fn op(operator: Operator) -> Token {
    Token::Operator(operator)
}

fn assert_tokens(src: &str, expected: &[Token]) {
    match tokenize(src) {
        Ok(tokens) => assert_eq!(tokens, expected, "tokens of {src:?}"),
        Err(e) => panic!("Tokenizing {src:?} failed: {e}"),
    }
}

fn assert_lex_error(src: &str, expected: &str) {
    match tokenize(src) {
        Ok(tokens) => panic!("Tokenizing {src:?} succeeded with {tokens:?} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), expected),
    }
}

#[test]
fn numbers() {
    assert_tokens("42", &[number("42")]);
    assert_tokens("42 17", &[number("42"), number("17")]);
    assert_tokens("42.17", &[number("42.17")]);
    assert_tokens("4.", &[number("4.")]);
    assert_tokens("-42", &[op(Operator::Sub), number("42")]);
}

#[test]
fn second_decimal_point_is_invalid() {
    assert_lex_error("42.17.42", "Invalid character: . at position 5");
    assert_eq!(tokenize("1..2"),
               Err(LexError::InvalidCharacter { character: '.',
                                                position:  2, }));
}

#[test]
fn operators() {
    assert_tokens("+", &[op(Operator::Add)]);
    assert_tokens("-", &[op(Operator::Sub)]);
    assert_tokens("*", &[op(Operator::Mul)]);
    assert_tokens("/", &[op(Operator::Div)]);
    assert_tokens("^", &[op(Operator::Pow)]);
    assert_tokens("e", &[op(Operator::Sci)]);
    assert_tokens("+-*/",
                  &[op(Operator::Add), op(Operator::Sub), op(Operator::Mul), op(Operator::Div)]);
}

#[test]
fn minus_runs_collapse_by_parity() {
    assert_tokens("--5", &[op(Operator::Add), number("5")]);
    assert_tokens("---5", &[op(Operator::Sub), number("5")]);
    assert_tokens("----", &[op(Operator::Add)]);
    assert_tokens("2---3", &[number("2"), op(Operator::Sub), number("3")]);
}

#[test]
fn separated_minus_signs_stay_separate() {
    assert_tokens("- -5", &[op(Operator::Sub), op(Operator::Sub), number("5")]);
    assert_tokens("-(-5)",
                  &[op(Operator::Sub),
                    Token::Paren(Paren::Open),
                    op(Operator::Sub),
                    number("5"),
                    Token::Paren(Paren::Close)]);
}

#[test]
fn parentheses_need_not_balance() {
    let expected = "((()()((()))))))("
        .chars()
        .map(|c| Token::Paren(if c == '(' { Paren::Open } else { Paren::Close }))
        .collect::<Vec<_>>();
    assert_tokens("((()()((()))))))(", &expected);
}

#[test]
fn every_function_name() {
    for function in Function::ALL {
        assert_tokens(function.name(), &[Token::Function(function)]);
    }
    assert_tokens("sin cos tan",
                  &[Token::Function(Function::Sin),
                    Token::Function(Function::Cos),
                    Token::Function(Function::Tan)]);
}

#[test]
fn scientific_operator_and_exp_function() {
    assert_tokens("2e3", &[number("2"), op(Operator::Sci), number("3")]);
    assert_tokens("1.5e-4", &[number("1.5"), op(Operator::Sci), op(Operator::Sub), number("4")]);
    assert_tokens("exp(1)",
                  &[Token::Function(Function::Exp),
                    Token::Paren(Paren::Open),
                    number("1"),
                    Token::Paren(Paren::Close)]);
}

#[test]
fn lone_e_is_an_operator_and_longer_runs_are_names() {
    assert_tokens("e", &[op(Operator::Sci)]);
    assert_tokens("exp", &[Token::Function(Function::Exp)]);
    assert_tokens("e exp", &[op(Operator::Sci), Token::Function(Function::Exp)]);
    assert_lex_error("esin", "Invalid function: esin at position 4");
    assert_lex_error("ee", "Invalid function: ee at position 2");
}

#[test]
fn unknown_function_names() {
    assert_lex_error("abc", "Invalid function: abc at position 3");
    assert_lex_error("2 * sine(1)", "Invalid function: sine at position 8");
    assert_eq!(tokenize("x"),
               Err(LexError::InvalidFunctionName { name:     "x".to_string(),
                                                   position: 1, }));
}

#[test]
fn characters_outside_the_grammar() {
    assert_lex_error("2+$", "Invalid character: $ at position 2");
    assert_lex_error("2 + $", "Invalid character: $ at position 4");
    assert_lex_error("SIN(1)", "Invalid character: S at position 0");
    assert_lex_error("3 % 2", "Invalid character: % at position 2");
}

#[test]
fn error_positions_are_character_offsets() {
    let positions = [("2+$", 2),
                     ("é+1", 0),
                     ("1 + é", 4),
                     ("π * sin(1)", 0),
                     ("1 + abc", 7)];

    for (src, expected) in positions {
        let err = tokenize(src).unwrap_err();
        assert_eq!(err.position(), expected, "position of error in {src:?}");
    }

    // Non-breaking spaces are whitespace but take two bytes each.
    assert_eq!(tokenize("1\u{a0}+\u{a0}$"),
               Err(LexError::InvalidCharacter { character: '$',
                                                position:  4, }));
}

#[test]
fn complex_expressions() {
    assert_tokens("2 + 3 * (4 - 5)",
                  &[number("2"),
                    op(Operator::Add),
                    number("3"),
                    op(Operator::Mul),
                    Token::Paren(Paren::Open),
                    number("4"),
                    op(Operator::Sub),
                    number("5"),
                    Token::Paren(Paren::Close)]);
    assert_tokens("6 + -(4)",
                  &[number("6"),
                    op(Operator::Add),
                    op(Operator::Sub),
                    Token::Paren(Paren::Open),
                    number("4"),
                    Token::Paren(Paren::Close)]);
    assert_tokens(" \t2\n^\r\n2 ", &[number("2"), op(Operator::Pow), number("2")]);
    assert_tokens("", &[]);
}

#[test]
fn kinds_and_text() {
    let tokens = tokenize("sqrt(2.5) --").unwrap();
    let kinds = tokens.iter().map(Token::kind).collect::<Vec<_>>();
    let text = tokens.iter().map(Token::text).collect::<Vec<_>>();

    assert_eq!(kinds,
               [TokenKind::Function,
                TokenKind::Paren,
                TokenKind::Number,
                TokenKind::Paren,
                TokenKind::Operator]);
    assert_eq!(text, ["sqrt", "(", "2.5", ")", "+"]);
}
