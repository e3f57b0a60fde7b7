//! A lex/flex-style lexer built from a statically declared rule catalog.
//!
//! A [`LexerBuilder`] collects patterns, the states they're active in, and the
//! actions they run, then [`LexerBuilder::build`] compiles the catalog into a
//! [`Lexer`] that can be driven one token at a time via [`Lexer::lex`].
//!
//! Rules are tried in declaration order at the current input position; among
//! the rules that match, the longest match wins, and ties go to whichever rule
//! was declared first. Start conditions (declared with [`LexerBuilder::state`])
//! let a subset of rules become active only in a particular mode, the way a
//! lexer switches into a "string body" or "comment" state. [`Lexer::more`] and
//! [`Lexer::less`] give an action control over how much of the input the
//! current lexeme actually covers, and [`Lexer::push_str_source`] /
//! [`Lexer::push_file_source`] / [`Lexer::pop_source`] support transparently
//! switching to a nested input, the way an `#include` directive would.
//!
//! ```no_run
//! use statelex::{LexerBuilder, defaults};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Token {
//!     Ident(String),
//!     Number(i64),
//!     Eof,
//! }
//!
//! let mut lexer = LexerBuilder::<(), Token>::new()
//!     .rule(r"[ \t\n]+", |_lexer, _text, _caps| {})
//!     .rule(r"[A-Za-z_][A-Za-z0-9_]*", |_lexer, text, _caps| {
//!         Some(Token::Ident(text.to_owned()))
//!     })
//!     .rule(r"[0-9]+", |_lexer, text, _caps| {
//!         Some(Token::Number(text.parse().unwrap()))
//!     })
//!     .default_eof(defaults::simple_return(Token::Eof))
//!     .default_no_match(defaults::fail_on_no_match())
//!     .build_default()
//!     .expect("rule catalog is valid");
//!
//! lexer.push_str_source("foo 42");
//! assert_eq!(lexer.lex().unwrap(), Token::Ident("foo".into()));
//! assert_eq!(lexer.lex().unwrap(), Token::Number(42));
//! assert_eq!(lexer.lex().unwrap(), Token::Eof);
//! ```

mod action;
mod builder;
mod captures;
mod error;
mod input;
mod lexer;
mod matcher;
mod rule;
mod state;
mod util;

pub use action::{defaults, IntoOutcome, Outcome};
pub use builder::LexerBuilder;
pub use captures::Captures;
pub use error::{BuildError, LexError};
pub use input::{Source, StrSource};
pub use lexer::Lexer;
pub use state::{StateId, ALL_STATES, INITIAL, RESERVED};
