//! Error taxonomy: configuration errors are fatal at build time, lexing errors
//! are only produced when a user action or default handler explicitly aborts
//! via [`crate::Lexer::fail`] / [`crate::Lexer::fail_with`].

use crate::state::StateId;

/// Errors raised while assembling a [`crate::LexerBuilder`] into a [`crate::Lexer`].
///
/// All variants are fatal at construction time; none of them can occur once a
/// lexer has been built.
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("pattern for rule #{index} was rejected by the regex compiler: {source}")]
    InvalidPattern {
        index: usize,
        #[source]
        source: regex::Error,
    },

    #[error(
        "state {0} is below the reserved threshold ({threshold}); user-declared states must start there",
        threshold = crate::state::RESERVED
    )]
    StateIdTooSmall(StateId),

    #[error("state {0} was declared more than once")]
    DuplicateState(StateId),

    #[error("rule #{index} references undeclared state {state}")]
    UnknownState { index: usize, state: StateId },

    #[error("no lexer-level default end-of-input handler was configured")]
    MissingDefaultEof,

    #[error("no lexer-level default no-match handler was configured")]
    MissingDefaultNoMatch,
}

/// Errors that can surface from [`crate::Lexer::lex`].
///
/// `Eof` and `NoMatch` are not raised by the core match loop itself — it always
/// routes those conditions to a handler — they exist so that a handler which
/// *chooses* to treat an unhandled EOF or no-match as fatal has a ready-made
/// error to report, via [`crate::action::defaults::fail_on_eof`] and
/// [`crate::action::defaults::fail_on_no_match`].
#[derive(thiserror::Error, Debug)]
pub enum LexError {
    #[error("unexpected end of input")]
    Eof,

    #[error("no rule matched the input")]
    NoMatch,

    #[error(transparent)]
    Fatal(#[from] Box<dyn std::error::Error + Send + Sync>),
}
