//! The lexer core: the match loop, longest-match selection, `more`/`less`, mode
//! switching and EOF/no-match routing.

use std::path::Path;
use std::rc::Rc;

use crate::action::Outcome;
use crate::error::LexError;
use crate::input::{InputStack, Source, StrSource};
use crate::matcher::MatcherTable;
use crate::rule::Rule;
use crate::state::StateId;

/// The lexer. `Env` is a user-supplied extension point reachable from every
/// action; `Token` is the type actions may emit.
pub struct Lexer<Env, Token> {
    env: Env,
    rules: Rc<Vec<Rule<Env, Token>>>,
    matcher_table: Rc<MatcherTable<Env, Token>>,
    state: StateId,
    input: InputStack,
    cursor: usize,
    text: String,
    more: bool,
    pending_fatal: Option<LexError>,
}

impl<Env, Token> Lexer<Env, Token> {
    pub(crate) fn new(
        env: Env,
        rules: Rc<Vec<Rule<Env, Token>>>,
        matcher_table: Rc<MatcherTable<Env, Token>>,
    ) -> Self {
        Lexer {
            env,
            rules,
            matcher_table,
            state: crate::state::INITIAL,
            input: InputStack::new(),
            cursor: 0,
            text: String::new(),
            more: false,
            pending_fatal: None,
        }
    }

    // -- input stack -----------------------------------------------------

    /// Pushes an in-memory buffer as the new active source. Always succeeds.
    pub fn push_str_source(&mut self, text: impl Into<String>) -> bool {
        self.push_source(Box::new(StrSource::new(text.into())))
    }

    /// Reads `path` fully into memory and pushes it as the new active source.
    /// Returns `false`, leaving the lexer unchanged, if the file can't be read.
    pub fn push_file_source(&mut self, path: impl AsRef<Path>) -> bool {
        match StrSource::from_file(path.as_ref()) {
            Ok(source) => self.push_source(Box::new(source)),
            Err(err) => {
                log::warn!("failed to push file source {:?}: {err}", path.as_ref());
                false
            }
        }
    }

    fn push_source(&mut self, source: Box<dyn Source>) -> bool {
        self.input.push(source, self.cursor);
        self.cursor = 0;
        log::debug!("pushed input source, stack depth now includes the new frame");
        true
    }

    /// Drops the current source. Returns `true` iff another source remains.
    pub fn pop_source(&mut self) -> bool {
        if !self.input.pop() {
            return false;
        }
        self.cursor = self.input.current_saved_offset();
        let remain = !self.input.is_empty();
        log::debug!(
            "popped input source; {}",
            if remain { "sources remain" } else { "stack is now empty" }
        );
        remain
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    // -- state machine ----------------------------------------------------

    /// Switches the active state. Returns `false` (no change) if `id` has no
    /// matcher; `true` on success, including when `id` is already current.
    pub fn set_state(&mut self, id: StateId) -> bool {
        if self.matcher_table.get(id).is_none() {
            return false;
        }
        if id != self.state {
            log::debug!("lexer state {} -> {}", self.state, id);
        }
        self.state = id;
        true
    }

    pub fn current_state(&self) -> StateId {
        self.state
    }

    // -- more/less ----------------------------------------------------------

    /// The next successful match's lexeme is appended to [`Self::text`] rather
    /// than replacing it.
    pub fn more(&mut self) {
        self.more = true;
    }

    /// Returns the last `n` characters of the current lexeme to the input. With
    /// `n == 0`, the whole lexeme is returned and `text` becomes empty.
    ///
    /// Passing `n` greater than the lexeme's character count is a caller bug;
    /// this panics rather than silently clamping.
    pub fn less(&mut self, n: usize) {
        let char_count = self.text.chars().count();
        let n = if n == 0 { char_count } else { n };
        assert!(
            n <= char_count,
            "less({n}): current lexeme only has {char_count} characters"
        );

        let keep = char_count - n;
        let byte_idx = self
            .text
            .char_indices()
            .nth(keep)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());

        let returned = self.text.split_off(byte_idx);
        self.cursor -= returned.len();
    }

    /// The current lexeme, valid until the next call to [`Self::lex`].
    pub fn text(&self) -> &str {
        &self.text
    }

    // -- user extension point ----------------------------------------------

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Env {
        &mut self.env
    }

    // -- fatal errors ---------------------------------------------------------

    /// Aborts the current `lex()` call with a custom fatal error.
    pub fn fail(&mut self, err: impl Into<Box<dyn std::error::Error + Send + Sync>>) {
        self.pending_fatal = Some(LexError::Fatal(err.into()));
    }

    pub(crate) fn fail_with(&mut self, err: LexError) {
        self.pending_fatal = Some(err);
    }

    // -- the match loop -------------------------------------------------------

    fn at_eof(&self) -> bool {
        match self.input.top() {
            None => true,
            Some(s) => self.cursor >= s.len(),
        }
    }

    fn remaining(&self) -> &str {
        self.input.top().map(|s| &s[self.cursor..]).unwrap_or("")
    }

    fn advance(&mut self, length: usize, lexeme: &str) {
        self.cursor += length;
        if self.more {
            self.text.push_str(lexeme);
            self.more = false;
        } else {
            self.text = lexeme.to_owned();
        }
    }

    fn finish(&mut self, outcome: Outcome<Token>) -> Option<Token> {
        match outcome {
            Outcome::Token(token) => Some(token),
            Outcome::Continue => None,
        }
    }

    /// Runs the match loop until an action, or an EOF/no-match handler, yields a
    /// token, or a fatal error is raised.
    pub fn lex(&mut self) -> Result<Token, LexError> {
        loop {
            if let Some(err) = self.pending_fatal.take() {
                return Err(err);
            }

            let table = Rc::clone(&self.matcher_table);
            let state = self.state;
            let entry = table
                .get(state)
                .expect("current state always has a matcher built for it");

            if self.at_eof() {
                log::trace!("state {state}: end of input");
                let outcome = (*entry.eof_action)(self);
                if let Some(token) = self.finish(outcome) {
                    return Ok(token);
                }
                continue;
            }

            let rules = Rc::clone(&self.rules);
            let best = {
                let haystack = self.remaining();
                let mut best: Option<(usize, crate::rule::RuleMatch)> = None;
                for &rule_idx in &entry.rules {
                    if let Some(candidate) = rules[rule_idx].try_match(haystack) {
                        if candidate.length == 0 {
                            continue;
                        }
                        let replace = match &best {
                            None => true,
                            Some((_, current)) => candidate.length > current.length,
                        };
                        if replace {
                            best = Some((rule_idx, candidate));
                        }
                    }
                }
                best
            };

            match best {
                None => {
                    log::trace!("state {state}: no rule matched at byte {}", self.cursor);
                    let outcome = (*entry.no_match_action)(self);
                    if let Some(token) = self.finish(outcome) {
                        return Ok(token);
                    }
                }
                Some((rule_idx, m)) => {
                    log::trace!(
                        "state {state}: rule #{rule_idx} matched {} byte(s)",
                        m.length
                    );
                    self.advance(m.length, &m.text);
                    let outcome = (rules[rule_idx].action)(self, &m.text, &m.captures);
                    if let Some(token) = self.finish(outcome) {
                        return Ok(token);
                    }
                }
            }
        }
    }
}
