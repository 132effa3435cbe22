//! End-to-end tests driving the controller through line mode.

use std::io::Cursor;
use strictly_guess::{GameSession, Phase, ScriptedSecrets};
use strictly_guess_tui::{GuessController, run_lines};

fn play(secrets: &[u8], script: &str) -> (GuessController<ScriptedSecrets>, String) {
    let session = GameSession::new(ScriptedSecrets::from_values(secrets).expect("valid script"));
    let mut output = Vec::new();
    let controller = run_lines(
        GuessController::new(session),
        Cursor::new(script.to_string()),
        &mut output,
    )
    .expect("in-memory io");
    (controller, String::from_utf8(output).expect("utf8 output"))
}

#[test]
fn test_full_game_transcript() {
    let (controller, output) = play(&[70], "\nRae\n50\nabc\n101\n80\n70\nq\n");

    assert!(output.starts_with("Number Guessing Game\nEnter your name: "));
    assert!(output.contains("NAME CANNOT BE EMPTY. ENTER YOUR NAME:"));
    assert!(output.contains("Hello Rae! I've picked a number (1-100). Try to guess it!"));
    assert!(output.contains("It's your turn..."));
    assert!(output.contains("Too low! Try a higher number than 50."));
    assert!(output.contains("You entered abc. This is invalid!"));
    assert!(output.contains("You entered 101. This is invalid!"));
    assert!(output.contains("Too high! Try a lower number than 80."));
    assert!(output.contains(
        "You guessed the number 70 in 3 guesses.\nYour performance is: Outstanding!"
    ));

    let session = controller.session();
    assert_eq!(session.phase(), Phase::Won);
    assert_eq!(session.guess_count(), 3);
}

#[test]
fn test_restart_from_line_mode() {
    let (controller, output) = play(&[70, 20], "Rae\n70\nr\n10\n");

    assert_eq!(output.matches("Hello Rae!").count(), 2);
    assert!(output.contains("Too low! Try a higher number than 10."));

    let session = controller.session();
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.guess_count(), 1);
    assert_eq!(session.rounds_started(), 2);
}

#[test]
fn test_end_of_input_quits_cleanly() {
    let (controller, output) = play(&[70], "Rae\n");

    assert!(output.ends_with("Your Guess: \n"));
    assert_eq!(controller.session().phase(), Phase::Playing);
    assert_eq!(controller.session().guess_count(), 0);
}

#[test]
fn test_prenamed_session_skips_prompt() {
    let session = GameSession::new(ScriptedSecrets::from_values(&[5]).expect("valid script"));
    let mut controller = GuessController::new(session);
    controller.submit("Rae");

    let mut output = Vec::new();
    run_lines(controller, Cursor::new("5\n".to_string()), &mut output).expect("in-memory io");
    let output = String::from_utf8(output).expect("utf8 output");

    assert!(!output.contains("Enter your name:"));
    assert!(output.contains("Hello Rae!"));
    assert!(output.contains("You guessed the number 5 in 1 guess."));
}

#[test]
fn test_controller_debug_hides_secret() {
    let (controller, _) = play(&[73], "Rae\n50\n");

    let debug = format!("{controller:?}");

    assert!(debug.contains("Rae"));
    assert!(!debug.contains("73"), "{debug}");
}
