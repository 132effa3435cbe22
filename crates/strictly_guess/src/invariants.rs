//! First-class invariants for game sessions.
//!
//! Each invariant is a unit type implementing [`Invariant`]. They compose into
//! an [`InvariantSet`] that the session checks after every transition in debug
//! builds, and that tests can check directly.

use crate::phase::Phase;
use crate::secret::{MAX_NUMBER, MIN_NUMBER, SecretSource};
use crate::session::GameSession;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// Invariant: once drawn, the secret is in `[MIN_NUMBER, MAX_NUMBER]`, and no
/// secret exists before a name is accepted.
pub struct SecretInRange;

impl<S: SecretSource> Invariant<GameSession<S>> for SecretInRange {
    fn holds(session: &GameSession<S>) -> bool {
        match session.secret() {
            Some(secret) => (MIN_NUMBER..=MAX_NUMBER).contains(&secret.value()),
            None => session.phase() == Phase::AwaitingName,
        }
    }

    fn description() -> &'static str {
        "Secret number is drawn and within range outside AwaitingName"
    }
}

/// Invariant: the player name is non-empty whenever the phase has a player.
pub struct PlayerNamed;

impl<S: SecretSource> Invariant<GameSession<S>> for PlayerNamed {
    fn holds(session: &GameSession<S>) -> bool {
        match session.player_name() {
            Some(name) => session.phase().has_player() && !name.trim().is_empty(),
            None => !session.phase().has_player(),
        }
    }

    fn description() -> &'static str {
        "Player name is present and non-empty outside AwaitingName"
    }
}

/// Invariant: the guess count matches the phase. Nothing is counted before a
/// name, and a won round took at least one guess.
pub struct CountMatchesPhase;

impl<S: SecretSource> Invariant<GameSession<S>> for CountMatchesPhase {
    fn holds(session: &GameSession<S>) -> bool {
        match session.phase() {
            Phase::AwaitingName => session.guess_count() == 0,
            Phase::Playing => true,
            Phase::Won => session.guess_count() >= 1 && session.rating().is_some(),
        }
    }

    fn description() -> &'static str {
        "Guess count is zero before naming and positive once won"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (SecretInRange, PlayerNamed, CountMatchesPhase);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::ScriptedSecrets;
    use crate::session::Stage;

    fn playing_session() -> GameSession<ScriptedSecrets> {
        let mut session = GameSession::new(ScriptedSecrets::from_values(&[40]).unwrap());
        session.submit_name("Ada").unwrap();
        session
    }

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::new(ScriptedSecrets::from_values(&[40]).unwrap());
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_win() {
        let mut session = playing_session();
        session.submit_guess("20").unwrap();
        session.submit_guess("40").unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_detects_blank_name() {
        let mut session = playing_session();
        if let Stage::Playing(round) = &mut session.stage {
            round.player_name = "  ".to_string();
        }
        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(
                <PlayerNamed as Invariant<GameSession<ScriptedSecrets>>>::description()
            )]
        );
    }

    #[test]
    fn test_detects_zero_count_win() {
        let mut session = playing_session();
        session.submit_guess("40").unwrap();
        if let Stage::Won(round) = &mut session.stage {
            round.guess_count = 0;
        }
        assert!(!CountMatchesPhase::holds(&session));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = playing_session();
        type TwoInvariants = (SecretInRange, PlayerNamed);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
