use paint::{
    error::Reporter,
    interpreter::lexer::{Token, tokenize},
    run,
};

fn expect_diagnostic(src: &str) -> paint::error::Diagnostic {
    match run(src) {
        Ok(value) => panic!("expected a diagnostic, got value `{value}` for: {src}"),
        Err(diagnostic) => diagnostic,
    }
}

#[test]
fn division_by_zero_cites_its_line() {
    let diagnostic = expect_diagnostic("let x = 10 / 0;");

    assert_eq!(diagnostic.line, 1);
    assert!(diagnostic.message.contains("Division by zero"));

    let rendered = diagnostic.to_string();
    assert!(rendered.starts_with("Error on line: 1\n"));
    assert!(rendered.contains("1 | let x = 10 / 0"));
}

#[test]
fn const_reassignment_cites_the_assignment_line() {
    let diagnostic = expect_diagnostic("const c = 5;\nc = 6;");

    assert_eq!(diagnostic.line, 2);
    assert!(diagnostic.message.contains("Cannot reassign constant variable `c`"));
    assert!(diagnostic.to_string().contains("2 | c = 6"));
}

#[test]
fn unknown_variable_diagnostic() {
    let diagnostic = expect_diagnostic("let a = 1;\nlet b = a + missing;");

    assert_eq!(diagnostic.line, 2);
    assert!(diagnostic.message.contains("`missing` was never declared"));
}

#[test]
fn invalid_character_is_a_lexical_error() {
    let diagnostic = expect_diagnostic("let @ = 1;");
    assert!(diagnostic.message.contains("Invalid character"));

    // An embedded NUL byte is invalid input, not an end-of-file marker.
    let diagnostic = expect_diagnostic("let a = 1; \0 let b = 2;");
    assert!(diagnostic.message.contains("Invalid character"));
}

#[test]
fn unterminated_strings_fail_to_lex() {
    assert!(run("let s = \"abc").is_err());
}

#[test]
fn parse_error_messages() {
    assert!(expect_diagnostic("if (1 { }").message.contains("closing parenthesis"));
    assert!(expect_diagnostic("const c;").message.contains("Must assign value"));
    assert!(expect_diagnostic("fn f(1) { }").message
                                            .contains("must be of type Identifier"));
    assert!(expect_diagnostic("let y = 1.x;").message.contains("Dot operator"));
}

#[test]
fn arity_mismatch_reports_the_expected_count() {
    let diagnostic = expect_diagnostic("fn add(a, b) { return a + b; }\nadd(2);");

    assert_eq!(diagnostic.line, 2);
    assert!(diagnostic.message.contains("expects 2 arguments, found 1"));
}

#[test]
fn type_errors_cite_both_operand_types() {
    let diagnostic = expect_diagnostic("1 + \"a\";");
    assert!(diagnostic.message.contains("`number` + `string`"));
}

#[test]
fn reconstructed_lines_retokenize_to_the_same_stream() {
    let source = "let total = (1 + 2.5) * foo;";
    let tokens = tokenize(source).unwrap();

    let reporter = Reporter::new(tokens.clone());
    let rebuilt = reporter.reconstruct_line(1);
    let again = tokenize(&rebuilt).unwrap();

    let strip = |tokens: &[(Token, usize)]| {
        tokens.iter()
              .map(|(tok, _)| tok.clone())
              .filter(|tok| !matches!(tok, Token::EndOfFile))
              .collect::<Vec<_>>()
    };

    assert_eq!(strip(&tokens), strip(&again));
}

#[test]
fn token_lines_are_monotonic_with_one_eof() {
    let tokens = tokenize("let a = 1\nlet b = 2\n\nlet c = 3").unwrap();

    let mut previous = 0;
    for (_, line) in &tokens {
        assert!(*line >= previous);
        previous = *line;
    }

    let sentinels = tokens.iter().filter(|(tok, _)| matches!(tok, Token::EndOfFile)).count();
    assert_eq!(sentinels, 1);
    assert_eq!(tokens.last().unwrap().1, 4);
}
