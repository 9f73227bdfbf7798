use super::super::token::*;
use super::*;

fn significant(s: &str) -> Vec<Token> {
    lex(s)
        .into_iter()
        .filter(|t| !matches!(t, Token::Whitespace(_)))
        .collect()
}

#[test]
fn test_numbers() {
    assert_eq!(
        significant("12 .5 3. 1e3 2.5E-2"),
        vec![
            Token::Number("12".to_string()),
            Token::Number("0.5".to_string()),
            Token::Number("3.0".to_string()),
            Token::Number("1e3".to_string()),
            Token::Number("2.5e-2".to_string()),
        ]
    );
}

#[test]
fn test_exponent_needs_digit() {
    assert_eq!(
        significant("2e"),
        vec![Token::Number("2".to_string()), Token::Ident("e".to_string())]
    );
    assert_eq!(
        significant("2ex"),
        vec![Token::Number("2".to_string()), Token::Ident("ex".to_string())]
    );
}

#[test]
fn test_longest_operator() {
    assert_eq!(
        significant("a<<b<=c!=d^|e"),
        vec![
            Token::Ident("a".to_string()),
            Token::Operator(Operator::ShiftLeft),
            Token::Ident("b".to_string()),
            Token::Operator(Operator::LessEqual),
            Token::Ident("c".to_string()),
            Token::Operator(Operator::NotEqual),
            Token::Ident("d".to_string()),
            Token::Operator(Operator::BitXor),
            Token::Ident("e".to_string()),
        ]
    );
}

#[test]
fn test_words() {
    assert_eq!(
        significant("7 mod 2"),
        vec![
            Token::Number("7".to_string()),
            Token::Operator(Operator::Modulus),
            Token::Number("2".to_string()),
        ]
    );
    assert_eq!(
        significant("modx"),
        vec![Token::Ident("modx".to_string())]
    );
}

#[test]
fn test_text() {
    assert_eq!(
        significant(r#""a\"b" 'c'"#),
        vec![Token::Text("a\"b".to_string()), Token::Text("c".to_string())]
    );
    assert_eq!(significant("\"open"), vec![Token::Unknown("\"open".to_string())]);
}

#[test]
fn test_comment() {
    assert_eq!(
        significant("1 # one"),
        vec![
            Token::Number("1".to_string()),
            Token::Comment(" one".to_string())
        ]
    );
}

#[test]
fn test_whitespace_counted() {
    assert_eq!(lex("  x")[0], Token::Whitespace(2));
}

#[test]
fn test_token_from_string() {
    assert_eq!(Token::from_string("="), Some(Token::Assign));
    assert_eq!(Token::from_string("+"), Some(Token::Operator(Operator::Plus)));
    assert_eq!(Token::from_string("<<"), Some(Token::Operator(Operator::ShiftLeft)));
    assert_eq!(Token::from_string("?"), None);
}
