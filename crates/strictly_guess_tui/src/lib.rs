//! Terminal front end for Strictly Guess.
//!
//! This crate is the presentation layer around [`strictly_guess`]: it owns
//! one [`GameSession`](strictly_guess::GameSession) through a
//! [`GuessController`], turns key presses or input lines into session
//! operations, and composes every message the player reads.
//!
//! # Architecture
//!
//! - **Controller**: routes input to the session by phase
//! - **Presenter**: outcome data to user-facing text and tone
//! - **UI / TUI**: ratatui rendering and the crossterm event loop
//! - **Line**: the same controller over `BufRead`/`Write`
//! - **Config / CLI / Logging**: TOML settings, clap arguments, tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod controller;
mod line;
mod logging;
mod presenter;
mod tui;
mod ui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Controller
pub use controller::{Flow, GuessController, MAX_INPUT_CHARS};

// Crate-level exports - Front ends
pub use line::run_lines;
pub use logging::init_file_logging;
pub use tui::run_tui;
pub use ui::{draw, tone_style};

// Crate-level exports - Presenter
pub use presenter::{
    Feedback, PLAY_AGAIN, TITLE, Tone, guess_accepted, guess_rejected, idle, name_rejected,
    welcome,
};
