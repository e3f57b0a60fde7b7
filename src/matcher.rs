//! Per-state matcher construction and lookup.

use crate::action::StateAction;
use crate::rule::Rule;
use crate::state::StateId;
use crate::util::sort_by_key;

/// The subset of rules active in one state, plus that state's EOF and no-match
/// handlers (already resolved against the lexer-level defaults — see
/// `LexerBuilder::build`).
pub(crate) struct StateMatcher<Env, Token> {
    pub(crate) id: StateId,
    /// Indices into the lexer's rule catalog, preserving declaration order so
    /// that tie-breaking by "earliest declared" falls out of a linear scan.
    pub(crate) rules: Vec<usize>,
    pub(crate) eof_action: StateAction<Env, Token>,
    pub(crate) no_match_action: StateAction<Env, Token>,
}

/// All per-state matchers, sorted by state id for binary-search lookup.
pub(crate) struct MatcherTable<Env, Token> {
    entries: Vec<StateMatcher<Env, Token>>,
}

impl<Env, Token> MatcherTable<Env, Token> {
    pub(crate) fn new(entries: Vec<StateMatcher<Env, Token>>) -> Self {
        MatcherTable {
            entries: sort_by_key(entries, |e| e.id),
        }
    }

    pub(crate) fn get(&self, id: StateId) -> Option<&StateMatcher<Env, Token>> {
        self.entries
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|i| &self.entries[i])
    }
}

/// Computes the rule-catalog indices active in a state:
///
/// - a rule listing `ALL_STATES` is always included;
/// - a rule listing this state's id is included;
/// - for a non-exclusive state, rules active in the initial state are included too.
pub(crate) fn active_rule_indices<Env, Token>(
    rules: &[Rule<Env, Token>],
    state: StateId,
    exclusive: bool,
) -> Vec<usize> {
    use crate::state::INITIAL;

    rules
        .iter()
        .enumerate()
        .filter(|(_, rule)| {
            rule.is_valid_in(state)
                || (!exclusive && state != INITIAL && rule.is_valid_in(INITIAL))
        })
        .map(|(idx, _)| idx)
        .collect()
}
