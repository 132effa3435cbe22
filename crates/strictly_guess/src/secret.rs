//! Secret number generation.
//!
//! A [`SecretSource`] is seeded once, when the process starts, and then owned
//! by the session for its whole lifetime. Every round start draws from the
//! same source, so quick restarts never replay a sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest number the game will pick or accept as a guess.
pub const MIN_NUMBER: u8 = 1;

/// Largest number the game will pick or accept as a guess.
pub const MAX_NUMBER: u8 = 100;

/// A number in `[MIN_NUMBER, MAX_NUMBER]`.
///
/// The range check happens on construction, so holding a `SecretNumber`
/// is proof the value is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SecretNumber(u8);

impl SecretNumber {
    /// Creates a secret number, or `None` if `value` is out of range.
    pub fn new(value: u8) -> Option<Self> {
        (MIN_NUMBER..=MAX_NUMBER)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Returns the number.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SecretNumber {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
            .ok_or_else(|| format!("{value} is outside {MIN_NUMBER}..={MAX_NUMBER}"))
    }
}

impl From<SecretNumber> for u8 {
    fn from(secret: SecretNumber) -> Self {
        secret.0
    }
}

/// Supplies a fresh secret number at every round start.
pub trait SecretSource {
    /// Draws the next secret number.
    fn draw(&mut self) -> SecretNumber;
}

impl<S: SecretSource + ?Sized> SecretSource for Box<S> {
    fn draw(&mut self) -> SecretNumber {
        (**self).draw()
    }
}

/// Uniform draws over `[MIN_NUMBER, MAX_NUMBER]` from any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomSecrets<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomSecrets<R> {
    /// Wraps an already seeded generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSecrets<StdRng> {
    /// Seeds a generator from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        debug!("Seeding secret source from OS entropy");
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Seeds a generator from a fixed value, for reproducible sessions.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        debug!("Seeding secret source from fixed seed");
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SecretSource for RandomSecrets<R> {
    fn draw(&mut self) -> SecretNumber {
        SecretNumber(self.rng.random_range(MIN_NUMBER..=MAX_NUMBER))
    }
}

/// Replays a fixed sequence of secrets, cycling when it runs out.
///
/// Also counts how many draws were made, which lets callers check that a
/// round start really asked for a new number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSecrets {
    script: Vec<SecretNumber>,
    draws: usize,
}

impl ScriptedSecrets {
    /// Creates a script from secret numbers. Returns `None` if empty.
    pub fn new(script: impl IntoIterator<Item = SecretNumber>) -> Option<Self> {
        let script: Vec<_> = script.into_iter().collect();
        if script.is_empty() {
            return None;
        }
        Some(Self { script, draws: 0 })
    }

    /// Creates a script from raw values. Returns `None` if empty or any
    /// value is out of range.
    pub fn from_values(values: &[u8]) -> Option<Self> {
        let script = values
            .iter()
            .map(|&v| SecretNumber::new(v))
            .collect::<Option<Vec<_>>>()?;
        Self::new(script)
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl SecretSource for ScriptedSecrets {
    fn draw(&mut self) -> SecretNumber {
        let secret = self.script[self.draws % self.script.len()];
        self.draws += 1;
        secret
    }
}
