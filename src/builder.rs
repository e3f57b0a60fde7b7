//! Assembles a statically declared rule/state catalog into a [`Lexer`]. This is
//! the "compile-time lexer generator" surface: the catalog is fixed before any
//! input is seen, and every per-state rule subset and matcher is computed once,
//! here.

use std::rc::Rc;

use crate::action::{IntoOutcome, RuleAction, StateAction};
use crate::captures::Captures;
use crate::error::BuildError;
use crate::lexer::Lexer;
use crate::matcher::{active_rule_indices, MatcherTable, StateMatcher};
use crate::rule::Rule;
use crate::state::{StateId, ALL_STATES, INITIAL, RESERVED};

struct RuleSpec<Env, Token> {
    pattern: String,
    states: Vec<StateId>,
    action: RuleAction<Env, Token>,
}

struct StateSpec<Env, Token> {
    id: StateId,
    exclusive: bool,
    eof: Option<StateAction<Env, Token>>,
    no_match: Option<StateAction<Env, Token>>,
}

/// Builds a [`Lexer`] from an ordered rule catalog and a set of states.
pub struct LexerBuilder<Env, Token> {
    rules: Vec<RuleSpec<Env, Token>>,
    states: Vec<StateSpec<Env, Token>>,
    default_eof: Option<StateAction<Env, Token>>,
    default_no_match: Option<StateAction<Env, Token>>,
}

impl<Env, Token> Default for LexerBuilder<Env, Token> {
    fn default() -> Self {
        LexerBuilder {
            rules: Vec::new(),
            states: Vec::new(),
            default_eof: None,
            default_no_match: None,
        }
    }
}

impl<Env, Token> LexerBuilder<Env, Token>
where
    Env: 'static,
    Token: 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new lexing mode. `id` must be `>= RESERVED`; `exclusive`
    /// controls whether this state's rule subset excludes the initial state's
    /// rules.
    pub fn state(mut self, id: StateId, exclusive: bool) -> Self {
        self.states.push(StateSpec {
            id,
            exclusive,
            eof: None,
            no_match: None,
        });
        self
    }

    /// Overrides the EOF handler for a previously declared state. Panics if
    /// `id` was not declared via [`Self::state`] first — this is a builder-usage
    /// bug, not a runtime condition.
    pub fn state_eof<F, R>(mut self, id: StateId, action: F) -> Self
    where
        F: Fn(&mut Lexer<Env, Token>) -> R + 'static,
        R: IntoOutcome<Token> + 'static,
    {
        let spec = self
            .states
            .iter_mut()
            .find(|s| s.id == id)
            .unwrap_or_else(|| panic!("state {id} must be declared with .state() before configuring its EOF handler"));
        spec.eof = Some(Rc::new(move |lexer: &mut Lexer<Env, Token>| action(lexer).into_outcome()));
        self
    }

    /// Overrides the no-match handler for a previously declared state.
    pub fn state_no_match<F, R>(mut self, id: StateId, action: F) -> Self
    where
        F: Fn(&mut Lexer<Env, Token>) -> R + 'static,
        R: IntoOutcome<Token> + 'static,
    {
        let spec = self
            .states
            .iter_mut()
            .find(|s| s.id == id)
            .unwrap_or_else(|| panic!("state {id} must be declared with .state() before configuring its no-match handler"));
        spec.no_match = Some(Rc::new(move |lexer: &mut Lexer<Env, Token>| action(lexer).into_outcome()));
        self
    }

    /// The lexer-level default EOF handler, used by any state that doesn't
    /// override it. Required — [`Self::build`] fails without one.
    pub fn default_eof<F, R>(mut self, action: F) -> Self
    where
        F: Fn(&mut Lexer<Env, Token>) -> R + 'static,
        R: IntoOutcome<Token> + 'static,
    {
        self.default_eof = Some(Rc::new(move |lexer: &mut Lexer<Env, Token>| action(lexer).into_outcome()));
        self
    }

    /// The lexer-level default no-match handler. Required.
    pub fn default_no_match<F, R>(mut self, action: F) -> Self
    where
        F: Fn(&mut Lexer<Env, Token>) -> R + 'static,
        R: IntoOutcome<Token> + 'static,
    {
        self.default_no_match = Some(Rc::new(move |lexer: &mut Lexer<Env, Token>| action(lexer).into_outcome()));
        self
    }

    /// A rule active only in the initial state.
    pub fn rule<F, R>(self, pattern: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut Lexer<Env, Token>, &str, &Captures) -> R + 'static,
        R: IntoOutcome<Token> + 'static,
    {
        self.rule_in(pattern, &[INITIAL], action)
    }

    /// A rule active in every declared state, including the initial one.
    pub fn rule_all_states<F, R>(self, pattern: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut Lexer<Env, Token>, &str, &Captures) -> R + 'static,
        R: IntoOutcome<Token> + 'static,
    {
        self.rule_in(pattern, &[ALL_STATES], action)
    }

    /// A rule active in exactly the given states.
    pub fn rule_in<F, R>(mut self, pattern: impl Into<String>, states: &[StateId], action: F) -> Self
    where
        F: Fn(&mut Lexer<Env, Token>, &str, &Captures) -> R + 'static,
        R: IntoOutcome<Token> + 'static,
    {
        self.rules.push(RuleSpec {
            pattern: pattern.into(),
            states: states.to_vec(),
            action: Box::new(move |lexer, text, captures| action(lexer, text, captures).into_outcome()),
        });
        self
    }

    /// Validates and compiles the catalog, building the per-state matcher table
    /// once.
    pub fn build(self, env: Env) -> Result<Lexer<Env, Token>, BuildError> {
        let mut seen_ids: fxhash::FxHashSet<StateId> = fxhash::FxHashSet::default();
        for spec in &self.states {
            if spec.id < RESERVED {
                return Err(BuildError::StateIdTooSmall(spec.id));
            }
            if !seen_ids.insert(spec.id) {
                return Err(BuildError::DuplicateState(spec.id));
            }
        }

        let declared: fxhash::FxHashSet<StateId> = self.states.iter().map(|s| s.id).collect();
        for (index, rule) in self.rules.iter().enumerate() {
            for &state in &rule.states {
                if state != ALL_STATES && state != INITIAL && !declared.contains(&state) {
                    return Err(BuildError::UnknownState { index, state });
                }
            }
        }

        let default_eof = self.default_eof.ok_or(BuildError::MissingDefaultEof)?;
        let default_no_match = self
            .default_no_match
            .ok_or(BuildError::MissingDefaultNoMatch)?;

        let mut rules = Vec::with_capacity(self.rules.len());
        for (index, spec) in self.rules.into_iter().enumerate() {
            let rule = Rule::compile(&spec.pattern, spec.states, spec.action).map_err(|source| {
                BuildError::InvalidPattern { index, source }
            })?;
            rules.push(rule);
        }

        let mut entries = Vec::with_capacity(self.states.len() + 1);
        entries.push(StateMatcher {
            id: INITIAL,
            rules: active_rule_indices(&rules, INITIAL, false),
            eof_action: Rc::clone(&default_eof),
            no_match_action: Rc::clone(&default_no_match),
        });

        for spec in self.states {
            let eof = spec.eof.unwrap_or_else(|| Rc::clone(&default_eof));
            let no_match = spec.no_match.unwrap_or_else(|| Rc::clone(&default_no_match));
            entries.push(StateMatcher {
                id: spec.id,
                rules: active_rule_indices(&rules, spec.id, spec.exclusive),
                eof_action: eof,
                no_match_action: no_match,
            });
        }

        let matcher_table = MatcherTable::new(entries);
        Ok(Lexer::new(env, Rc::new(rules), Rc::new(matcher_table)))
    }
}

impl<Env, Token> LexerBuilder<Env, Token>
where
    Env: Default + 'static,
    Token: 'static,
{
    /// Convenience for `Env: Default`.
    pub fn build_default(self) -> Result<Lexer<Env, Token>, BuildError> {
        self.build(Env::default())
    }
}
