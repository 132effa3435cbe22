//! Command-line interface for strictly_guess.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Guess - guess the secret number between 1 and 100
#[derive(Parser, Debug)]
#[command(name = "strictly_guess")]
#[command(about = "Number guessing game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_guess.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fixed seed for the secret numbers, overriding the config file
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Tui,

    /// Play one line at a time on stdin/stdout
    Line {
        /// Player name; skips the name prompt
        #[arg(long)]
        name: Option<String>,
    },
}

impl Cli {
    /// The command to run, `tui` when none was given.
    pub fn mode(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}
