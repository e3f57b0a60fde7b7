//! State identifiers and descriptors.

/// Identifier of the predefined initial state. Always active at lexer construction.
pub const INITIAL: StateId = 0;

/// Reserved sentinel meaning "this rule is active in every state". Never a real,
/// schedulable state.
pub const ALL_STATES: StateId = 1;

/// Threshold below which a user-declared state id is rejected at build time (see
/// [`crate::error::BuildError::StateIdTooSmall`]). Keeps user ids clear of
/// [`INITIAL`] and [`ALL_STATES`] with room to spare for future sentinels.
pub const RESERVED: StateId = 256;

/// A lexing mode. States are small integers; at most one is active at a time.
pub type StateId = u32;
