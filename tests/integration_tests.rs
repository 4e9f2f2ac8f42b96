//! Integration tests for the full analysis pipeline.
//!
//! These tests drive source text through tokenization and parsing together,
//! checking the end-to-end accept/reject behavior and the hand-off contract
//! between the two passes.

use minic::{
    errors::errors::ErrorKind,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    Position,
};

#[test]
fn test_token_stream_contract() {
    let tokens = tokenize("int x = 5;".to_string()).unwrap();

    let expected = [
        (TokenKind::Int, Some("int"), 1, 1),
        (TokenKind::Identifier, Some("x"), 1, 5),
        (TokenKind::Assignment, Some("="), 1, 7),
        (TokenKind::Number, Some("5"), 1, 9),
        (TokenKind::Semicolon, Some(";"), 1, 10),
        (TokenKind::EOF, None, 1, 11),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value, line, column)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.value.as_deref(), value);
        assert_eq!(token.position, Position { line, column });
    }
}

#[test]
fn test_token_positions_are_monotonic() {
    let source = "int main(){\n    /* filler */ int x = 5; // note\n    return x;\n}";
    let tokens = tokenize(source.to_string()).unwrap();

    let mut previous = (0u32, 0u32);
    for token in &tokens {
        let current = (token.position.line, token.position.column);
        assert!(
            current >= previous,
            "token {} goes backwards: {:?} after {:?}",
            token,
            current,
            previous
        );
        previous = current;
    }
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_accept_simple_program() {
    let tokens = tokenize("int main(){int x=5;}".to_string()).unwrap();
    assert!(parse(tokens).is_ok());
}

#[test]
fn test_accept_program_with_control_flow() {
    let source = r#"
int fib(int n){
    if(n <= 1){
        return n;
    }
    return fib(n - 1) + fib(n - 2);
}

void main(){
    int total = 0;
    for(int i = 0; i < 10; i = i + 1){
        total = total + fib(i);
    }
    while(total > 100){
        total = total - 100;
    }
    print(total, "done");
}
"#;
    let tokens = tokenize(source.to_string()).unwrap();
    assert!(parse(tokens).is_ok());
}

#[test]
fn test_reject_lexical_error() {
    let error = tokenize("int x = $;".to_string()).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lex);
    assert_eq!(*error.get_position(), Position { line: 1, column: 9 });
}

#[test]
fn test_reject_unclosed_function_body() {
    let tokens = tokenize("int main(){".to_string()).unwrap();
    let error = parse(tokens).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert_eq!(error.to_string(), "expected CloseCurly, found EOF");
    assert_eq!(*error.get_position(), Position { line: 1, column: 12 });
}

#[test]
fn test_less_equals_is_one_token() {
    let tokens = tokenize("if(x<=5){}else{}".to_string()).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::If,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Else,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );

    // and the same construct parses inside a function body
    let tokens = tokenize("void main(){if(x<=5){}else{}}".to_string()).unwrap();
    assert!(parse(tokens).is_ok());
}

#[test]
fn test_call_and_assignment_disambiguation() {
    let tokens = tokenize("void main(){foo();}".to_string()).unwrap();
    assert!(parse(tokens).is_ok());

    let tokens = tokenize("void main(){foo = 1;}".to_string()).unwrap();
    assert!(parse(tokens).is_ok());
}

#[test]
fn test_adjacent_token_column_arithmetic() {
    // without filler in between, a token of length n starting at column c
    // puts its successor exactly at column c + n
    let tokens = tokenize("foo(bar)".to_string()).unwrap();

    assert_eq!(tokens[0].position, Position { line: 1, column: 1 });
    assert_eq!(tokens[1].position, Position { line: 1, column: 4 });
    assert_eq!(tokens[2].position, Position { line: 1, column: 5 });
    assert_eq!(tokens[3].position, Position { line: 1, column: 8 });
    assert_eq!(tokens[4].kind, TokenKind::EOF);
    assert_eq!(tokens[4].position, Position { line: 1, column: 9 });
}
