//! End-to-end scenarios driving a full `Lexer` through a realistic catalog.

use pretty_assertions::assert_eq;

use statelex::{defaults, LexerBuilder};

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Name(String),
    If,
    Eq,
    Lt,
    Le,
    Shl,
    Greeting(String),
    Dot,
    StrChars(String),
    StrEnd,
    Eof,
}

#[test]
fn keyword_wins_over_identifier_when_declared_first() {
    let mut lexer = LexerBuilder::<(), Token>::new()
        .rule("if", |_, _, _| Some(Token::If))
        .rule("[A-Za-z_][A-Za-z_0-9]*", |_, text, _| {
            Some(Token::Name(text.to_owned()))
        })
        .rule("[ ]+", |_, _, _| {})
        .default_eof(defaults::simple_return(Token::Eof))
        .default_no_match(defaults::fail_on_no_match())
        .build_default()
        .unwrap();

    lexer.push_str_source("ifx if");

    assert_eq!(lexer.lex().unwrap(), Token::Name("ifx".into()));
    assert_eq!(lexer.lex().unwrap(), Token::If);
    assert_eq!(lexer.lex().unwrap(), Token::Eof);
}

#[test]
fn longest_match_wins_over_earlier_declared_shorter_rule() {
    let mut lexer = LexerBuilder::<(), Token>::new()
        .rule("<", |_, _, _| Some(Token::Lt))
        .rule("<=", |_, _, _| Some(Token::Le))
        .rule("<<", |_, _, _| Some(Token::Shl))
        .rule("=", |_, _, _| Some(Token::Eq))
        .default_eof(defaults::simple_return(Token::Eof))
        .default_no_match(defaults::fail_on_no_match())
        .build_default()
        .unwrap();

    lexer.push_str_source("<<=");

    assert_eq!(lexer.lex().unwrap(), Token::Shl);
    assert_eq!(lexer.lex().unwrap(), Token::Eq);
    assert_eq!(lexer.lex().unwrap(), Token::Eof);
}

#[test]
fn more_appends_the_next_match_to_the_accumulated_lexeme() {
    let mut lexer = LexerBuilder::<(), Token>::new()
        .rule("yes", |lexer, _, _| {
            lexer.more();
        })
        .rule(" please", |lexer, _, _| Some(Token::Greeting(lexer.text().to_owned())))
        .default_eof(defaults::simple_return(Token::Eof))
        .default_no_match(defaults::fail_on_no_match())
        .build_default()
        .unwrap();

    lexer.push_str_source("yes please");

    assert_eq!(lexer.lex().unwrap(), Token::Greeting("yes please".into()));
    assert_eq!(lexer.lex().unwrap(), Token::Eof);
}

#[test]
fn less_returns_one_character_and_is_seen_again_on_the_next_call() {
    let mut lexer = LexerBuilder::<(), Token>::new()
        .rule(r"\.\.", |lexer, _, _| {
            lexer.less(1);
            Some(Token::Dot)
        })
        .rule(r"\.", |_, _, _| Some(Token::Dot))
        .default_eof(defaults::simple_return(Token::Eof))
        .default_no_match(defaults::fail_on_no_match())
        .build_default()
        .unwrap();

    lexer.push_str_source("..");

    assert_eq!(lexer.lex().unwrap(), Token::Dot);
    assert_eq!(lexer.text(), ".");
    assert_eq!(lexer.lex().unwrap(), Token::Dot);
    assert_eq!(lexer.lex().unwrap(), Token::Eof);
}

#[test]
fn exclusive_state_switch_isolates_the_string_body_rules() {
    const STRBODY: u32 = statelex::RESERVED;

    let mut lexer = LexerBuilder::<(), Token>::new()
        .state(STRBODY, true)
        .rule("\"", |lexer, _, _| {
            lexer.set_state(STRBODY);
        })
        .rule_in("[^\"]*", &[STRBODY], |_, text, _| {
            Some(Token::StrChars(text.to_owned()))
        })
        .rule_in("\"", &[STRBODY], |lexer, _, _| {
            lexer.set_state(statelex::INITIAL);
            Some(Token::StrEnd)
        })
        .default_eof(defaults::simple_return(Token::Eof))
        .default_no_match(defaults::fail_on_no_match())
        .build_default()
        .unwrap();

    lexer.push_str_source("\"abc\"");

    assert_eq!(lexer.lex().unwrap(), Token::StrChars("abc".into()));
    assert_eq!(lexer.lex().unwrap(), Token::StrEnd);
    assert_eq!(lexer.lex().unwrap(), Token::Eof);
}

#[test]
fn include_directive_pushes_a_nested_source_and_resumes_the_outer_one_on_its_eof() {
    let mut lexer = LexerBuilder::<(), Token>::new()
        .rule("#include \"([^\"]+)\"", |lexer, _, captures| {
            let included = captures.get(0).expect("capture group for the quoted body");
            lexer.push_str_source(included.to_owned());
        })
        .rule("[A-Za-z]+", |_, text, _| Some(Token::Name(text.to_owned())))
        .rule("[ ]+", |_, _, _| {})
        .default_eof(defaults::pop_or_eof(Token::Eof))
        .default_no_match(defaults::fail_on_no_match())
        .build_default()
        .unwrap();

    lexer.push_str_source("a #include \"x\" b");

    assert_eq!(lexer.lex().unwrap(), Token::Name("a".into()));
    assert_eq!(lexer.lex().unwrap(), Token::Name("x".into()));
    assert_eq!(lexer.lex().unwrap(), Token::Name("b".into()));
    assert_eq!(lexer.lex().unwrap(), Token::Eof);
}

#[test]
fn set_state_to_the_current_state_is_a_no_op_and_reports_success() {
    let mut lexer = LexerBuilder::<(), Token>::new()
        .rule("a", |_, _, _| Some(Token::Name("a".into())))
        .default_eof(defaults::simple_return(Token::Eof))
        .default_no_match(defaults::fail_on_no_match())
        .build_default()
        .unwrap();

    assert!(lexer.set_state(statelex::INITIAL));
    assert_eq!(lexer.current_state(), statelex::INITIAL);
}

#[test]
fn empty_input_invokes_the_eof_handler_on_the_first_call() {
    let mut lexer = LexerBuilder::<(), Token>::new()
        .rule("a", |_, _, _| Some(Token::Name("a".into())))
        .default_eof(defaults::simple_return(Token::Eof))
        .default_no_match(defaults::fail_on_no_match())
        .build_default()
        .unwrap();

    lexer.push_str_source("");

    assert_eq!(lexer.lex().unwrap(), Token::Eof);
}

#[test]
fn unrecognized_input_invokes_the_no_match_handler() {
    let mut lexer = LexerBuilder::<(), Token>::new()
        .rule("a", |_, _, _| Some(Token::Name("a".into())))
        .default_eof(defaults::simple_return(Token::Eof))
        .default_no_match(defaults::fail_on_no_match())
        .build_default()
        .unwrap();

    lexer.push_str_source("z");

    let err = lexer.lex().unwrap_err();
    assert!(matches!(err, statelex::LexError::NoMatch));
}
