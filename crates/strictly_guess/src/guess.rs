//! Guess validation.
//!
//! Raw text from the player becomes a [`Guess`] only if it is a base-10
//! integer (optional leading sign) inside the playable range.

use crate::error::GuessError;
use crate::secret::{MAX_NUMBER, MIN_NUMBER, SecretNumber};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::num::IntErrorKind;
use tracing::{instrument, warn};

/// A validated, in-range guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Guess(u8);

impl Guess {
    /// Parses raw input into a guess.
    ///
    /// Surrounding whitespace is ignored. Integers too large to represent are
    /// reported as out of range with the saturated value.
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        let text = raw.trim();
        let value = match text.parse::<i64>() {
            Ok(value) => value,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => {
                    warn!(error = %e, "Guess is not a number");
                    return Err(GuessError::NotANumber(raw.to_string()));
                }
            },
        };

        Self::from_value(value)
    }

    /// Range-checks an integer.
    pub fn from_value(value: i64) -> Result<Self, GuessError> {
        if value < i64::from(MIN_NUMBER) || value > i64::from(MAX_NUMBER) {
            warn!(value, "Guess out of range");
            return Err(GuessError::OutOfRange(value));
        }
        // Range checked above, the cast cannot truncate.
        Ok(Self(value as u8))
    }

    /// Returns the guessed number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Compares this guess against the secret.
    pub fn against(self, secret: SecretNumber) -> Ordering {
        self.0.cmp(&secret.value())
    }
}

impl TryFrom<i64> for Guess {
    type Error = GuessError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Guess> for u8 {
    fn from(guess: Guess) -> Self {
        guess.0
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
