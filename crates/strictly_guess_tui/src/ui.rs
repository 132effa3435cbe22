//! Stateless rendering of the controller's state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strictly_guess::{Phase, SecretSource};

use crate::controller::GuessController;
use crate::presenter::{Feedback, TITLE, Tone};

/// Width of the centered card holding the game.
const CARD_WIDTH: u16 = 60;

/// Height of the centered card holding the game.
const CARD_HEIGHT: u16 = 16;

/// Renders the whole screen for the current phase.
pub fn draw<S: SecretSource>(frame: &mut Frame, controller: &GuessController<S>) {
    let card = center_rect(frame.area(), CARD_WIDTH, CARD_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(TITLE).alignment(Alignment::Center))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    match controller.session().phase() {
        Phase::AwaitingName => draw_name_screen(frame, inner, controller),
        Phase::Playing | Phase::Won => draw_game_screen(frame, inner, controller),
    }
}

fn draw_name_screen<S: SecretSource>(frame: &mut Frame, area: Rect, controller: &GuessController<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input
            Constraint::Min(1),    // Error
        ])
        .split(area);

    frame.render_widget(Paragraph::new(controller.prompt()), rows[0]);
    draw_input(frame, rows[1], controller.input());

    if let Some(error) = controller.name_error() {
        draw_feedback(frame, rows[2], error);
    }
}

fn draw_game_screen<S: SecretSource>(frame: &mut Frame, area: Rect, controller: &GuessController<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Welcome
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Feedback
        ])
        .split(area);

    let welcome = controller.welcome().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(welcome)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let accepts_guesses = controller.session().phase().accepts_guesses();
    let prompt_style = if !accepts_guesses {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(controller.prompt(), prompt_style)),
        rows[1],
    );

    // The guess field is hidden once the round is won.
    if accepts_guesses {
        draw_input(frame, rows[2], controller.input());
    }

    draw_feedback(frame, rows[3], controller.feedback());
}

fn draw_input(frame: &mut Frame, area: Rect, text: &str) {
    let input = Paragraph::new(Line::from(vec![
        Span::raw(text.to_string()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(input, area);
}

fn draw_feedback(frame: &mut Frame, area: Rect, feedback: &Feedback) {
    let paragraph = Paragraph::new(feedback.text().as_str())
        .style(tone_style(*feedback.tone()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Maps a message tone to its color.
pub fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Info => Style::default().fg(Color::Gray),
        Tone::Warning => Style::default().fg(Color::Yellow),
        Tone::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Tone::Success => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_guess::{GameSession, ScriptedSecrets};

    fn screen_text(controller: &GuessController<ScriptedSecrets>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, controller)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn controller() -> GuessController<ScriptedSecrets> {
        GuessController::new(GameSession::new(ScriptedSecrets::from_values(&[70]).unwrap()))
    }

    #[test]
    fn test_name_screen_renders_prompt() {
        let text = screen_text(&controller());
        assert!(text.contains(TITLE));
        assert!(text.contains("Enter your name:"));
    }

    #[test]
    fn test_game_screen_renders_feedback() {
        let mut controller = controller();
        controller.submit("Rae");
        controller.submit("50");

        let text = screen_text(&controller);
        assert!(text.contains("Hello Rae!"));
        assert!(text.contains("Your Guess:"));
        assert!(text.contains("Too low!"));
    }

    #[test]
    fn test_won_screen_hides_input() {
        let mut controller = controller();
        controller.submit("Rae");
        controller.submit("70");

        let text = screen_text(&controller);
        assert!(text.contains("Congratulations!!"));
        assert!(text.contains("Play Again?"));
        assert!(!text.contains("Your Guess:"));
    }
}
