//! Line-oriented mode for plain terminals and pipes.
//!
//! Each input line is one submission: a name, a guess, or the play-again
//! answer. End of input quits.

use std::io::{BufRead, Write};
use strictly_guess::{Phase, SecretSource};
use tracing::{debug, info, instrument};

use crate::controller::{Flow, GuessController};
use crate::presenter::TITLE;

/// Plays through `input`, writing prompts and feedback to `output`.
///
/// Returns the controller so callers can inspect the final session.
#[instrument(skip_all)]
pub fn run_lines<S, R, W>(
    mut controller: GuessController<S>,
    input: R,
    mut output: W,
) -> std::io::Result<GuessController<S>>
where
    S: SecretSource,
    R: BufRead,
    W: Write,
{
    info!("Starting line mode");
    writeln!(output, "{TITLE}")?;
    if controller.session().phase() != Phase::AwaitingName {
        announce_round(&controller, &mut output)?;
    } else if let Some(error) = controller.name_error() {
        writeln!(output, "{}", error.text())?;
    }
    write!(output, "{} ", controller.prompt())?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let phase = controller.session().phase();
        debug!(%phase, "Read input line");

        if controller.submit(&line) == Flow::Quit {
            break;
        }

        let now = controller.session().phase();
        match (phase, now) {
            (Phase::AwaitingName, Phase::AwaitingName) => {
                if let Some(error) = controller.name_error() {
                    writeln!(output, "{}", error.text())?;
                }
            }
            (Phase::AwaitingName, Phase::Playing) | (Phase::Won, Phase::Playing) => {
                announce_round(&controller, &mut output)?;
            }
            (Phase::Playing, _) => writeln!(output, "{}", controller.feedback().text())?,
            _ => {}
        }

        write!(output, "{} ", controller.prompt())?;
        output.flush()?;
    }

    writeln!(output)?;
    info!("Line mode finished");
    Ok(controller)
}

fn announce_round<S: SecretSource, W: Write>(
    controller: &GuessController<S>,
    output: &mut W,
) -> std::io::Result<()> {
    if let Some(welcome) = controller.welcome() {
        writeln!(output, "{welcome}")?;
    }
    writeln!(output, "{}", controller.feedback().text())
}
