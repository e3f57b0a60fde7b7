//! Action wrapper: normalizes a user action's heterogeneous return type — unit,
//! a bare token, or an optional token — into a single internal contract,
//! [`Outcome`].

use std::rc::Rc;

use crate::captures::Captures;
use crate::lexer::Lexer;

/// What happened after running an action.
pub enum Outcome<Token> {
    /// The action did not produce a token; the match loop continues immediately.
    Continue,
    /// The action produced a token; `lex()` returns it.
    Token(Token),
}

/// Adapts an action's declared return type to [`Outcome`]. The three impls below
/// cover the shapes an action may return — `()`, a bare token, or `Option<Token>`;
/// an action whose return type implements none of them simply fails to
/// type-check at the call site.
pub trait IntoOutcome<Token> {
    fn into_outcome(self) -> Outcome<Token>;
}

impl<Token> IntoOutcome<Token> for Outcome<Token> {
    fn into_outcome(self) -> Outcome<Token> {
        self
    }
}

impl<Token> IntoOutcome<Token> for () {
    fn into_outcome(self) -> Outcome<Token> {
        Outcome::Continue
    }
}

impl<Token> IntoOutcome<Token> for Option<Token> {
    fn into_outcome(self) -> Outcome<Token> {
        match self {
            Some(token) => Outcome::Token(token),
            None => Outcome::Continue,
        }
    }
}

/// Action invoked after a rule matches: `(lexer, whole match, captures) -> Outcome`.
pub(crate) type RuleAction<Env, Token> =
    Box<dyn Fn(&mut Lexer<Env, Token>, &str, &Captures) -> Outcome<Token>>;

/// Action invoked on end-of-input or no-match: `(lexer) -> Outcome`.
///
/// `Rc`, not `Box`: several states commonly fall back to the same lexer-level
/// default handler, so this needs to be cheaply shareable rather than owned by
/// a single matcher entry.
pub(crate) type StateAction<Env, Token> = Rc<dyn Fn(&mut Lexer<Env, Token>) -> Outcome<Token>>;

/// Reusable handlers, analogous to the default-action helpers a lex-generated
/// scanner ships alongside its rule table.
pub mod defaults {
    use super::*;
    use crate::error::LexError;

    /// Ignores all arguments, always emits `value`. Use as a rule action.
    pub fn return_constant<Env, Token>(
        value: Token,
    ) -> impl Fn(&mut Lexer<Env, Token>, &str, &Captures) -> Outcome<Token>
    where
        Token: Clone,
    {
        move |_lexer, _text, _captures| Outcome::Token(value.clone())
    }

    /// Ignores all arguments, always emits `value`. Use as a state's EOF or
    /// no-match handler.
    pub fn simple_return<Env, Token>(value: Token) -> impl Fn(&mut Lexer<Env, Token>) -> Outcome<Token>
    where
        Token: Clone,
    {
        move |_lexer| Outcome::Token(value.clone())
    }

    /// Writes the lexeme (and any captures) to stdout and continues lexing.
    pub fn echo<Env, Token>() -> impl Fn(&mut Lexer<Env, Token>, &str, &Captures) -> Outcome<Token> {
        |_lexer, text, captures| {
            print!("{text}");
            for i in 0..captures.len() {
                if let Some(group) = captures.get(i) {
                    print!(" {group}");
                }
            }
            println!();
            Outcome::Continue
        }
    }

    /// Pops the current source. Emits `eof_token` once the input stack is empty;
    /// otherwise lexing resumes in the frame that was uncovered. Intended as a
    /// state's EOF handler.
    pub fn pop_or_eof<Env, Token>(eof_token: Token) -> impl Fn(&mut Lexer<Env, Token>) -> Outcome<Token>
    where
        Token: Clone,
    {
        move |lexer| {
            lexer.pop_source();
            if lexer.is_empty() {
                Outcome::Token(eof_token.clone())
            } else {
                Outcome::Continue
            }
        }
    }

    /// Aborts lexing with [`LexError::Eof`]. Intended as a lexer-level default
    /// EOF handler for configurations where an unhandled end-of-input is a bug.
    pub fn fail_on_eof<Env, Token>() -> impl Fn(&mut Lexer<Env, Token>) -> Outcome<Token> {
        |lexer| {
            lexer.fail_with(LexError::Eof);
            Outcome::Continue
        }
    }

    /// Aborts lexing with [`LexError::NoMatch`]. Intended as a lexer-level
    /// default no-match handler.
    pub fn fail_on_no_match<Env, Token>() -> impl Fn(&mut Lexer<Env, Token>) -> Outcome<Token> {
        |lexer| {
            lexer.fail_with(LexError::NoMatch);
            Outcome::Continue
        }
    }
}
