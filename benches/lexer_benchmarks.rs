use criterion::{black_box, criterion_group, criterion_main, Criterion};

use statelex::{defaults, LexerBuilder};

#[derive(Clone)]
enum Token {
    Name,
    Number,
    Eof,
}

fn build() -> statelex::Lexer<(), Token> {
    LexerBuilder::<(), Token>::new()
        .rule("[ \t\n]+", |_, _, _| {})
        .rule("[A-Za-z_][A-Za-z0-9_]*", |_, _, _| Some(Token::Name))
        .rule("[0-9]+", |_, _, _| Some(Token::Number))
        .default_eof(defaults::simple_return(Token::Eof))
        .default_no_match(defaults::fail_on_no_match())
        .build_default()
        .unwrap()
}

fn lex_all(input: &str) {
    let mut lexer = build();
    lexer.push_str_source(input);
    loop {
        match lexer.lex().unwrap() {
            Token::Eof => break,
            _ => {}
        }
    }
}

fn bench_identifiers(c: &mut Criterion) {
    let input = "foo bar 42 baz_qux 17 quux ".repeat(200);
    c.bench_function("lex identifiers and numbers", |b| {
        b.iter(|| lex_all(black_box(&input)))
    });
}

criterion_group!(benches, bench_identifiers);
criterion_main!(benches);
