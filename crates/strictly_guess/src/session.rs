//! The game session state machine.
//!
//! A [`GameSession`] moves through three stages:
//!
//! ```text
//! AwaitingName --submit_name--> Playing --correct guess--> Won
//!                                  ^                        |
//!                                  +--------restart---------+
//! ```
//!
//! Each stage carries only the data valid for it: a `Won` stage always holds
//! its rating, an `AwaitingName` stage holds no secret. Rejected input never
//! changes the stage.

use crate::error::{GuessError, NameError, PhaseError};
use crate::guess::Guess;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::phase::Phase;
use crate::rating::RatingTable;
use crate::secret::{RandomSecrets, SecretNumber, SecretSource};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, error, info, instrument, warn};

/// Result of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guess was below the secret; the player should go higher.
    TooLow {
        /// The guessed number.
        guess: Guess,
    },
    /// The guess was above the secret; the player should go lower.
    TooHigh {
        /// The guessed number.
        guess: Guess,
    },
    /// The guess matched and the round is won.
    Correct {
        /// The guessed number (equal to the secret).
        guess: Guess,
        /// Valid guesses taken this round, including this one.
        guess_count: u32,
        /// Performance rating for `guess_count`.
        rating: String,
    },
}

impl GuessOutcome {
    /// Returns the guess this outcome answers.
    pub fn guess(&self) -> Guess {
        match self {
            GuessOutcome::TooLow { guess }
            | GuessOutcome::TooHigh { guess }
            | GuessOutcome::Correct { guess, .. } => *guess,
        }
    }

    /// Returns true if the round was won.
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct { .. })
    }
}

/// A round in progress.
#[derive(Debug, Clone)]
pub(crate) struct Round {
    pub(crate) player_name: String,
    pub(crate) secret: SecretNumber,
    pub(crate) guess_count: u32,
}

/// A round whose secret was guessed. The rating is never optional.
#[derive(Debug, Clone)]
pub(crate) struct FinishedRound {
    pub(crate) player_name: String,
    pub(crate) secret: SecretNumber,
    pub(crate) guess_count: u32,
    pub(crate) rating: String,
}

#[derive(Debug, Clone)]
pub(crate) enum Stage {
    AwaitingName,
    Playing(Round),
    Won(FinishedRound),
}

impl Stage {
    fn phase(&self) -> Phase {
        match self {
            Stage::AwaitingName => Phase::AwaitingName,
            Stage::Playing(_) => Phase::Playing,
            Stage::Won(_) => Phase::Won,
        }
    }
}

/// One player's play session.
///
/// The session owns its [`SecretSource`], which should be seeded once at
/// process start. Restarting reuses that source rather than reseeding.
/// The `Debug` output leaves out the secret and the source state.
#[derive(Clone)]
pub struct GameSession<S = RandomSecrets> {
    source: S,
    ratings: RatingTable,
    rounds_started: u32,
    pub(crate) stage: Stage,
}

impl<S> std::fmt::Debug for GameSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (player_name, guess_count) = match &self.stage {
            Stage::AwaitingName => (None, 0),
            Stage::Playing(round) => (Some(&round.player_name), round.guess_count),
            Stage::Won(round) => (Some(&round.player_name), round.guess_count),
        };
        f.debug_struct("GameSession")
            .field("phase", &self.stage.phase())
            .field("player_name", &player_name)
            .field("guess_count", &guess_count)
            .field("rounds_started", &self.rounds_started)
            .finish_non_exhaustive()
    }
}

impl<S: SecretSource> GameSession<S> {
    /// Creates a session waiting for a player name, rated by the reference
    /// table.
    #[instrument(skip(source))]
    pub fn new(source: S) -> Self {
        Self::with_ratings(source, RatingTable::default())
    }

    /// Creates a session waiting for a player name, rated by `ratings`.
    #[instrument(skip(source, ratings))]
    pub fn with_ratings(source: S, ratings: RatingTable) -> Self {
        info!("Creating new game session");
        Self {
            source,
            ratings,
            rounds_started: 0,
            stage: Stage::AwaitingName,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.stage.phase()
    }

    /// Player name, once one has been accepted.
    pub fn player_name(&self) -> Option<&str> {
        match &self.stage {
            Stage::AwaitingName => None,
            Stage::Playing(round) => Some(&round.player_name),
            Stage::Won(round) => Some(&round.player_name),
        }
    }

    /// Valid guesses made in the current round.
    pub fn guess_count(&self) -> u32 {
        match &self.stage {
            Stage::AwaitingName => 0,
            Stage::Playing(round) => round.guess_count,
            Stage::Won(round) => round.guess_count,
        }
    }

    /// Rating of the won round, if the session is in [`Phase::Won`].
    pub fn rating(&self) -> Option<&str> {
        match &self.stage {
            Stage::Won(round) => Some(&round.rating),
            _ => None,
        }
    }

    /// The table used to rate won rounds.
    pub fn rating_table(&self) -> &RatingTable {
        &self.ratings
    }

    /// Rounds started so far, one per secret drawn.
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Rates a guess count with this session's table.
    pub fn performance_rating(&self, guess_count: u32) -> &str {
        self.ratings.rate(guess_count)
    }

    pub(crate) fn secret(&self) -> Option<SecretNumber> {
        match &self.stage {
            Stage::AwaitingName => None,
            Stage::Playing(round) => Some(round.secret),
            Stage::Won(round) => Some(round.secret),
        }
    }

    /// Accepts the player's name and starts the first round.
    ///
    /// The name is stored trimmed. Blank names are rejected with
    /// [`NameError::Empty`] and the session stays in
    /// [`Phase::AwaitingName`].
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn submit_name(&mut self, name: &str) -> Result<(), NameError> {
        if !matches!(self.stage, Stage::AwaitingName) {
            let err = PhaseError::new("submit_name", self.phase());
            error!(%err, "Name submitted outside AwaitingName");
            return Err(err.into());
        }

        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected empty player name");
            return Err(NameError::Empty);
        }

        self.stage = Stage::Playing(self.start_round(name.to_string()));
        info!(player = name, "Player named, round started");
        self.check_invariants();
        Ok(())
    }

    /// Evaluates a guess.
    ///
    /// Invalid text and out-of-range numbers are rejected without counting.
    /// Every accepted guess increments the count; a match moves the session
    /// to [`Phase::Won`].
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        let round = match &mut self.stage {
            Stage::Playing(round) => round,
            other => {
                let err = PhaseError::new("submit_guess", other.phase());
                error!(%err, "Guess submitted outside Playing");
                return Err(err.into());
            }
        };

        let guess = Guess::parse(raw)?;
        round.guess_count = round.guess_count.saturating_add(1);
        let guess_count = round.guess_count;
        debug!(guess = guess.value(), guess_count, "Evaluating guess");

        let outcome = match guess.against(round.secret) {
            Ordering::Less => GuessOutcome::TooLow { guess },
            Ordering::Greater => GuessOutcome::TooHigh { guess },
            Ordering::Equal => {
                let rating = self.ratings.rate(guess_count).to_string();
                self.stage = Stage::Won(FinishedRound {
                    player_name: std::mem::take(&mut round.player_name),
                    secret: round.secret,
                    guess_count,
                    rating: rating.clone(),
                });
                info!(guess_count, rating = %rating, "Round won");
                GuessOutcome::Correct {
                    guess,
                    guess_count,
                    rating,
                }
            }
        };

        self.check_invariants();
        Ok(outcome)
    }

    /// Starts a new round for the same player.
    ///
    /// Only valid from [`Phase::Won`]. Draws a fresh secret and resets the
    /// guess count.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn restart(&mut self) -> Result<(), PhaseError> {
        let player_name = match &mut self.stage {
            Stage::Won(round) => std::mem::take(&mut round.player_name),
            other => {
                let err = PhaseError::new("restart", other.phase());
                error!(%err, "Restart requested outside Won");
                return Err(err);
            }
        };

        self.stage = Stage::Playing(self.start_round(player_name));
        info!("Round restarted");
        self.check_invariants();
        Ok(())
    }

    fn start_round(&mut self, player_name: String) -> Round {
        self.rounds_started = self.rounds_started.saturating_add(1);
        Round {
            player_name,
            secret: self.source.draw(),
            guess_count: 0,
        }
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = SessionInvariants::check_all(self)
        {
            for violation in &violations {
                error!(description = %violation.description, "Session invariant violated");
            }
            debug_assert!(violations.is_empty(), "Session invariants violated");
        }
    }
}
