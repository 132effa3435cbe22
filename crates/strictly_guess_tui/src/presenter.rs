//! User-facing text for session outcomes.
//!
//! The core returns plain data; every sentence the player reads is composed
//! here. Renderers pick colors from the [`Tone`].

use derive_getters::Getters;
use strictly_guess::{GuessError, GuessOutcome, MAX_NUMBER, MIN_NUMBER, NameError};
use tracing::{error, instrument};

/// How a message should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Tone {
    /// Neutral status text.
    Info,
    /// Directional feedback on a wrong guess.
    Warning,
    /// Rejected input.
    Error,
    /// A won round.
    Success,
}

/// A message for the player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct Feedback {
    /// Message text, possibly spanning several lines.
    text: String,
    /// Styling hint.
    tone: Tone,
}

/// Title shown above every screen.
pub const TITLE: &str = "Number Guessing Game";

/// Greeting shown when a round starts.
pub fn welcome(player_name: &str) -> String {
    format!(
        "Hello {player_name}! I've picked a number ({MIN_NUMBER}-{MAX_NUMBER}). Try to guess it!"
    )
}

/// Feedback shown before the first guess of a round.
pub fn idle() -> Feedback {
    Feedback::new("It's your turn...".to_string(), Tone::Info)
}

/// Feedback for a rejected name, or `None` for caller defects.
#[instrument]
pub fn name_rejected(err: &NameError) -> Option<Feedback> {
    match err {
        NameError::Empty => Some(Feedback::new(
            "NAME CANNOT BE EMPTY. ENTER YOUR NAME:".to_string(),
            Tone::Error,
        )),
        NameError::InvalidPhase(defect) => {
            error!(%defect, "Name error is a caller defect, not shown");
            None
        }
    }
}

/// Feedback for an accepted guess.
pub fn guess_accepted(outcome: &GuessOutcome) -> Feedback {
    match outcome {
        GuessOutcome::TooLow { guess } => Feedback::new(
            format!("Too low! Try a higher number than {guess}."),
            Tone::Warning,
        ),
        GuessOutcome::TooHigh { guess } => Feedback::new(
            format!("Too high! Try a lower number than {guess}."),
            Tone::Warning,
        ),
        GuessOutcome::Correct {
            guess,
            guess_count,
            rating,
        } => Feedback::new(
            format!(
                "Congratulations!!\nYou guessed the number {guess} in {guess_count} {}.\nYour performance is: {rating}",
                if *guess_count == 1 { "guess" } else { "guesses" }
            ),
            Tone::Success,
        ),
    }
}

/// Feedback for a rejected guess, or `None` for caller defects.
#[instrument]
pub fn guess_rejected(raw: &str, err: &GuessError) -> Option<Feedback> {
    if !err.is_user_error() {
        error!(%err, "Guess error is a caller defect, not shown");
        return None;
    }

    let range_hint = format!("Please enter a number from {MIN_NUMBER} to {MAX_NUMBER}.");
    let text = if raw.trim().is_empty() {
        range_hint
    } else {
        format!("You entered {}. This is invalid!\n{range_hint}", raw.trim())
    };
    Some(Feedback::new(text, Tone::Error))
}

/// Prompt shown under a won round.
pub const PLAY_AGAIN: &str = "Play Again? (Enter/r to restart, q to quit)";
