//! Controller that adapts player input into session operations.
//!
//! The controller owns the [`GameSession`], the text being typed and the
//! feedback on screen. Key events (TUI) and whole lines (line mode) are
//! routed to `submit_name`, `submit_guess` or `restart` depending on the
//! session phase.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_guess::{GameSession, Phase, SecretSource};
use tracing::{debug, error, info, instrument};

use crate::presenter::{self, Feedback};

/// Longest name or guess the input field accepts, in characters.
pub const MAX_INPUT_CHARS: usize = 49;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep handling input.
    Continue,
    /// The player asked to quit.
    Quit,
}

/// Drives one [`GameSession`] from player input.
#[derive(Debug)]
pub struct GuessController<S> {
    session: GameSession<S>,
    input: String,
    feedback: Feedback,
    name_error: Option<Feedback>,
}

impl<S: SecretSource> GuessController<S> {
    /// Creates a controller for a session waiting for a name.
    #[instrument(skip(session))]
    pub fn new(session: GameSession<S>) -> Self {
        Self {
            session,
            input: String::new(),
            feedback: presenter::idle(),
            name_error: None,
        }
    }

    /// The session being driven.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Text typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Latest feedback for the game screen.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Error under the name field, if the last name was rejected.
    pub fn name_error(&self) -> Option<&Feedback> {
        self.name_error.as_ref()
    }

    /// Greeting for the current player, once named.
    pub fn welcome(&self) -> Option<String> {
        self.session.player_name().map(presenter::welcome)
    }

    /// Label for the input field in the current phase.
    pub fn prompt(&self) -> &'static str {
        match self.session.phase() {
            Phase::AwaitingName => "Enter your name:",
            Phase::Playing => "Your Guess:",
            Phase::Won => presenter::PLAY_AGAIN,
        }
    }

    /// Handles a key press from the terminal.
    #[instrument(skip(self), fields(phase = %self.session.phase()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            info!("Player quit");
            return Flow::Quit;
        }

        if self.session.phase() == Phase::Won {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('y') => {
                    self.restart();
                    Flow::Continue
                }
                KeyCode::Char('q') | KeyCode::Char('n') => {
                    info!("Player quit after win");
                    Flow::Quit
                }
                _ => Flow::Continue,
            };
        }

        match key.code {
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.submit(&line)
            }
            KeyCode::Backspace => {
                self.input.pop();
                Flow::Continue
            }
            KeyCode::Char(c) if !c.is_control() => {
                if self.input.chars().count() < MAX_INPUT_CHARS {
                    self.input.push(c);
                }
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    /// Submits a complete line of input for the current phase.
    #[instrument(skip(self), fields(phase = %self.session.phase()))]
    pub fn submit(&mut self, line: &str) -> Flow {
        match self.session.phase() {
            Phase::AwaitingName => self.submit_name(line),
            Phase::Playing => self.submit_guess(line),
            Phase::Won => match line.trim().to_ascii_lowercase().as_str() {
                "" | "r" | "y" | "yes" => self.restart(),
                "q" | "n" | "no" => {
                    info!("Player quit after win");
                    return Flow::Quit;
                }
                other => debug!(input = other, "Ignoring input after win"),
            },
        }
        Flow::Continue
    }

    fn submit_name(&mut self, line: &str) {
        let name: String = line.trim().chars().take(MAX_INPUT_CHARS).collect();
        match self.session.submit_name(&name) {
            Ok(()) => {
                self.name_error = None;
                self.feedback = presenter::idle();
            }
            Err(err) => self.name_error = presenter::name_rejected(&err),
        }
    }

    fn submit_guess(&mut self, line: &str) {
        match self.session.submit_guess(line) {
            Ok(outcome) => self.feedback = presenter::guess_accepted(&outcome),
            Err(err) => {
                if let Some(feedback) = presenter::guess_rejected(line, &err) {
                    self.feedback = feedback;
                }
            }
        }
        debug!(tone = %self.feedback.tone(), "Feedback updated");
    }

    fn restart(&mut self) {
        match self.session.restart() {
            Ok(()) => {
                self.input.clear();
                self.feedback = presenter::idle();
            }
            Err(defect) => error!(%defect, "Restart rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::Tone;
    use strictly_guess::ScriptedSecrets;

    fn controller(secret: u8) -> GuessController<ScriptedSecrets> {
        GuessController::new(GameSession::new(
            ScriptedSecrets::from_values(&[secret, secret]).unwrap(),
        ))
    }

    fn type_line(controller: &mut GuessController<ScriptedSecrets>, text: &str) -> Flow {
        for c in text.chars() {
            controller.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        controller.handle_key(KeyEvent::from(KeyCode::Enter))
    }

    #[test]
    fn test_blank_name_shows_error() {
        let mut controller = controller(70);
        type_line(&mut controller, "   ");
        assert_eq!(controller.session().phase(), Phase::AwaitingName);
        assert_eq!(*controller.name_error().unwrap().tone(), Tone::Error);
    }

    #[test]
    fn test_name_then_guesses() {
        let mut controller = controller(70);
        type_line(&mut controller, "Rae");
        assert_eq!(controller.name_error(), None);
        assert_eq!(
            controller.welcome().as_deref(),
            Some("Hello Rae! I've picked a number (1-100). Try to guess it!")
        );
        assert_eq!(controller.prompt(), "Your Guess:");

        type_line(&mut controller, "50");
        assert_eq!(controller.feedback().text(), "Too low! Try a higher number than 50.");
        assert_eq!(controller.input(), "");

        type_line(&mut controller, "70");
        assert_eq!(controller.session().phase(), Phase::Won);
        assert_eq!(*controller.feedback().tone(), Tone::Success);
        assert_eq!(controller.prompt(), presenter::PLAY_AGAIN);
    }

    #[test]
    fn test_typing_disabled_after_win() {
        let mut controller = controller(70);
        type_line(&mut controller, "Rae");
        type_line(&mut controller, "70");

        controller.handle_key(KeyEvent::from(KeyCode::Char('5')));
        assert_eq!(controller.input(), "");
        assert_eq!(controller.session().phase(), Phase::Won);
    }

    #[test]
    fn test_restart_and_quit_keys() {
        let mut controller = controller(70);
        type_line(&mut controller, "Rae");
        type_line(&mut controller, "70");

        assert_eq!(
            controller.handle_key(KeyEvent::from(KeyCode::Char('r'))),
            Flow::Continue
        );
        assert_eq!(controller.session().phase(), Phase::Playing);
        assert_eq!(controller.session().guess_count(), 0);
        assert_eq!(controller.feedback(), &presenter::idle());

        type_line(&mut controller, "70");
        assert_eq!(
            controller.handle_key(KeyEvent::from(KeyCode::Char('q'))),
            Flow::Quit
        );
    }

    #[test]
    fn test_escape_quits_anywhere() {
        let mut controller = controller(70);
        assert_eq!(controller.handle_key(KeyEvent::from(KeyCode::Esc)), Flow::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(controller.handle_key(ctrl_c), Flow::Quit);
    }

    #[test]
    fn test_padded_name_is_trimmed_before_capping() {
        let mut controller = controller(70);
        controller.submit(&format!("{}Ada{}", " ".repeat(MAX_INPUT_CHARS), " ".repeat(5)));
        assert_eq!(controller.name_error(), None);
        assert_eq!(controller.session().phase(), Phase::Playing);
        assert_eq!(controller.session().player_name(), Some("Ada"));
    }

    #[test]
    fn test_long_name_is_capped() {
        let mut controller = controller(70);
        controller.submit(&"x".repeat(MAX_INPUT_CHARS + 20));
        let name = controller.session().player_name().unwrap();
        assert_eq!(name.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_backspace_and_length_cap() {
        let mut controller = controller(70);
        for _ in 0..(MAX_INPUT_CHARS + 10) {
            controller.handle_key(KeyEvent::from(KeyCode::Char('a')));
        }
        assert_eq!(controller.input().chars().count(), MAX_INPUT_CHARS);

        controller.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(controller.input().chars().count(), MAX_INPUT_CHARS - 1);
    }

    #[test]
    fn test_invalid_guess_feedback() {
        let mut controller = controller(70);
        controller.submit("Rae");
        controller.submit("abc");
        assert_eq!(*controller.feedback().tone(), Tone::Error);
        assert_eq!(controller.session().guess_count(), 0);
    }

    #[test]
    fn test_submit_lines_after_win() {
        let mut controller = controller(70);
        controller.submit("Rae");
        controller.submit("70");
        assert_eq!(controller.submit("maybe"), Flow::Continue);
        assert_eq!(controller.session().phase(), Phase::Won);
        assert_eq!(controller.submit("yes"), Flow::Continue);
        assert_eq!(controller.session().phase(), Phase::Playing);
        controller.submit("70");
        assert_eq!(controller.submit("q"), Flow::Quit);
    }
}
