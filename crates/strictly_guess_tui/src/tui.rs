//! Full-screen terminal UI.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_guess::SecretSource;
use tracing::{error, info, instrument};

use crate::controller::{Flow, GuessController};
use crate::ui;

/// How long to wait for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the TUI until the player quits, restoring the terminal afterwards.
#[instrument(skip_all)]
pub fn run_tui<S: SecretSource>(controller: GuessController<S>) -> Result<()> {
    info!("Starting Strictly Guess TUI");

    enable_raw_mode()?;
    let mut terminal = undo_on_error(enter_screen(), disable_raw_mode)?;

    let res = run_loop(&mut terminal, controller);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// Runs `undo` if `result` failed, then hands back `result`.
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if let Err(err) = &result {
        error!(error = ?err, "Terminal setup failed, restoring terminal");
        undo()?;
    }
    result
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Draw, poll, dispatch. Runs on the calling thread only.
#[instrument(skip_all)]
fn run_loop<S: SecretSource>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut controller: GuessController<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &controller))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            if controller.handle_key(key) == Flow::Quit {
                info!(
                    guess_count = controller.session().guess_count(),
                    "TUI quitting"
                );
                return Ok(());
            }
        }
    }
}
