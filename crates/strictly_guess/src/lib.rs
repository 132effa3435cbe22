//! Strictly Guess - type-safe number guessing game logic.
//!
//! This crate holds the game state machine and nothing else: no rendering,
//! no event loop, no formatted text. A presentation layer owns one
//! [`GameSession`], forwards the player's input to it and renders the plain
//! data it returns.
//!
//! # Architecture
//!
//! - **Session**: the [`GameSession`] state machine (`AwaitingName` →
//!   `Playing` → `Won`, with restart back to `Playing`)
//! - **Guess**: validation of raw input into an in-range [`Guess`]
//! - **Rating**: data-driven [`RatingTable`] lookups
//! - **Secret**: [`SecretSource`] implementations, seeded once per process
//! - **Invariants**: composable checks run after every transition
//!
//! # Example
//!
//! ```
//! use strictly_guess::{GameSession, GuessOutcome, Phase, ScriptedSecrets};
//!
//! let secrets = ScriptedSecrets::from_values(&[70]).unwrap();
//! let mut session = GameSession::new(secrets);
//!
//! session.submit_name("Rae").unwrap();
//! assert!(matches!(session.submit_guess("50"), Ok(GuessOutcome::TooLow { .. })));
//!
//! let outcome = session.submit_guess("70").unwrap();
//! assert!(outcome.is_correct());
//! assert_eq!(session.phase(), Phase::Won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod guess;
mod invariants;
mod phase;
mod rating;
mod secret;
mod session;

// Crate-level exports - Errors
pub use error::{GuessError, NameError, PhaseError};

// Crate-level exports - Guess validation
pub use guess::Guess;

// Crate-level exports - Invariants
pub use invariants::{
    CountMatchesPhase, Invariant, InvariantSet, InvariantViolation, PlayerNamed, SecretInRange,
    SessionInvariants,
};

// Crate-level exports - Phases
pub use phase::Phase;

// Crate-level exports - Ratings
pub use rating::{RatingTable, RatingTableError, RatingTier, performance_rating};

// Crate-level exports - Secret sources
pub use secret::{MAX_NUMBER, MIN_NUMBER, RandomSecrets, ScriptedSecrets, SecretNumber, SecretSource};

// Crate-level exports - Session
pub use session::{GameSession, GuessOutcome};
