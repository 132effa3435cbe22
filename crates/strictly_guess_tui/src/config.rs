//! Application configuration loaded from TOML.
//!
//! ```toml
//! seed = 1234                     # optional; OS entropy otherwise
//! log_file = "strictly_guess.log"
//!
//! [ratings]                       # optional; reference table otherwise
//! fallback = "Bad!"
//! [[ratings.tiers]]
//! min = 1
//! max = 3
//! label = "Outstanding!"
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_guess::{RandomSecrets, RatingTable};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_guess.toml";

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Fixed seed for the secret source.
    #[serde(default)]
    seed: Option<u64>,

    /// File that receives log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Table used to rate won rounds.
    #[serde(default)]
    ratings: RatingTable,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_guess.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_file: default_log_file(),
            ratings: RatingTable::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(path, format!("Failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(path, format!("Failed to parse config: {e}")))?;

        info!(seeded = config.seed.is_some(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] if present, else
    /// the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the seed, e.g. from the command line.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds the process-wide secret source. Called once, at start-up.
    #[instrument(skip(self))]
    pub fn secret_source(&self) -> RandomSecrets {
        match self.seed {
            Some(seed) => RandomSecrets::from_seed(seed),
            None => RandomSecrets::from_entropy(),
        }
    }
}

/// A config file that could not be read or parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("{}: {} at {}:{}", config_path.display(), message, file, line)]
pub struct ConfigError {
    /// Config file being loaded.
    pub config_path: PathBuf,
    /// What went wrong.
    pub message: String,
    /// Line of the loader that raised the error.
    pub line: u32,
    /// Source file of the loader that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Records a failure loading `config_path`, tagged with the caller's
    /// location.
    #[track_caller]
    pub fn new(config_path: &Path, message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            config_path: config_path.to_path_buf(),
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
