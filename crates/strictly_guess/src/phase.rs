//! Coarse session phases.
//!
//! The phase gates which operations a [`GameSession`](crate::GameSession)
//! accepts. Phase-specific data lives in the session's internal stages; this
//! enum is the field-free view handed to callers.

use serde::{Deserialize, Serialize};

/// Stage of a play session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Phase {
    /// Waiting for the player to enter a name.
    #[strum(to_string = "awaiting name")]
    AwaitingName,
    /// A secret number has been drawn and guesses are accepted.
    #[strum(to_string = "playing")]
    Playing,
    /// The secret number was guessed; only a restart is accepted.
    #[strum(to_string = "won")]
    Won,
}

impl Phase {
    /// Returns true if guesses are accepted in this phase.
    pub fn accepts_guesses(self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Returns true if the session has a player name in this phase.
    pub fn has_player(self) -> bool {
        !matches!(self, Phase::AwaitingName)
    }
}
