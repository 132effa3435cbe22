//! Strictly Guess - number guessing game for the terminal.

use anyhow::Result;
use clap::Parser;
use strictly_guess::GameSession;
use strictly_guess_tui::{AppConfig, Cli, Command, GuessController, init_file_logging, run_lines, run_tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?.with_seed(cli.seed);
    init_file_logging(config.log_file())?;

    info!(mode = ?cli.mode(), "Starting Strictly Guess");
    run(cli.mode(), &config)
}

/// Builds the session once and hands it to the selected front end.
#[instrument(skip(config))]
fn run(mode: Command, config: &AppConfig) -> Result<()> {
    // Seeded exactly once per process; restarts reuse this source.
    let session = GameSession::with_ratings(config.secret_source(), config.ratings().clone());
    let mut controller = GuessController::new(session);

    match mode {
        Command::Tui => run_tui(controller),
        Command::Line { name } => {
            if let Some(name) = name {
                controller.submit(&name);
            }
            let stdin = std::io::stdin();
            run_lines(controller, stdin.lock(), std::io::stdout())?;
            Ok(())
        }
    }
}
