//! Error types for session operations.
//!
//! `NameError::Empty`, `GuessError::NotANumber` and `GuessError::OutOfRange`
//! are user mistakes: recoverable, and the session is left untouched.
//! `InvalidPhase` means the caller invoked an operation the current phase does
//! not support. That is a defect in the caller, not something to show a player.

use crate::phase::Phase;
use crate::secret::{MAX_NUMBER, MIN_NUMBER};

/// An operation was invoked in a phase that does not support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{operation} is not valid while {phase}")]
pub struct PhaseError {
    /// Name of the rejected operation.
    pub operation: &'static str,
    /// Phase the session was in.
    pub phase: Phase,
}

impl PhaseError {
    /// Creates a new phase error.
    pub fn new(operation: &'static str, phase: Phase) -> Self {
        Self { operation, phase }
    }
}

impl std::error::Error for PhaseError {}

/// Error returned by [`GameSession::submit_name`](crate::GameSession::submit_name).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NameError {
    /// The name was blank or whitespace only.
    #[display("Name cannot be empty")]
    Empty,

    /// The session was not waiting for a name.
    #[display("{}", _0)]
    InvalidPhase(PhaseError),
}

impl std::error::Error for NameError {}

impl From<PhaseError> for NameError {
    fn from(err: PhaseError) -> Self {
        NameError::InvalidPhase(err)
    }
}

/// Error returned by [`GameSession::submit_guess`](crate::GameSession::submit_guess).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The text was not a base-10 integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// The integer was outside the playable range.
    #[display("{} is outside {}..={}", _0, MIN_NUMBER, MAX_NUMBER)]
    OutOfRange(i64),

    /// The session was not accepting guesses.
    #[display("{}", _0)]
    InvalidPhase(PhaseError),
}

impl GuessError {
    /// Returns true if this error is the player's mistake rather than a
    /// caller defect.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, GuessError::InvalidPhase(_))
    }
}

impl std::error::Error for GuessError {}

impl From<PhaseError> for GuessError {
    fn from(err: PhaseError) -> Self {
        GuessError::InvalidPhase(err)
    }
}
