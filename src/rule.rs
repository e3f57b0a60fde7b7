//! A pattern, the action it runs, and the states it is live in.

use regex::Regex;

use crate::action::RuleAction;
use crate::captures::Captures;
use crate::state::{StateId, ALL_STATES};

pub(crate) struct Rule<Env, Token> {
    pattern: Regex,
    capture_count: usize,
    states: Vec<StateId>,
    pub(crate) action: RuleAction<Env, Token>,
}

/// A successful, anchored match of one rule.
pub(crate) struct RuleMatch {
    pub(crate) text: String,
    pub(crate) length: usize,
    pub(crate) captures: Captures,
}

impl<Env, Token> Rule<Env, Token> {
    pub(crate) fn compile(
        pattern: &str,
        states: Vec<StateId>,
        action: RuleAction<Env, Token>,
    ) -> Result<Self, regex::Error> {
        let anchored = crate::util::anchor_pattern(pattern);
        let compiled = Regex::new(&anchored)?;
        let capture_count = compiled.captures_len().saturating_sub(1);
        Ok(Rule {
            pattern: compiled,
            capture_count,
            states,
            action,
        })
    }

    pub(crate) fn is_valid_in(&self, state: StateId) -> bool {
        self.states
            .iter()
            .any(|&declared| declared == ALL_STATES || declared == state)
    }

    /// Attempt an anchored match at the start of `haystack`. `None` means no
    /// match; `Some` with `length == 0` is a valid, empty match.
    pub(crate) fn try_match(&self, haystack: &str) -> Option<RuleMatch> {
        let caps = self.pattern.captures(haystack)?;
        let whole = caps.get(0).expect("group 0 always present on a match");
        debug_assert_eq!(whole.start(), 0, "rule patterns are anchored at position 0");

        let groups = (1..=self.capture_count)
            .map(|i| caps.get(i).map(|m| m.as_str().to_owned()))
            .collect();

        Some(RuleMatch {
            text: whole.as_str().to_owned(),
            length: whole.end(),
            captures: Captures::new(groups),
        })
    }
}
