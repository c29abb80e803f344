//! Game configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use ttt_core::{DEFAULT_TARGET_SCORE, Mark};

/// Who takes the first move of each round.
///
/// Defaults to [`FirstMover::PromptEachRound`], asking before every round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FirstMover {
    /// The human always opens.
    #[value(name = "human")]
    HumanFirst,
    /// The computer always opens.
    #[value(name = "computer")]
    ComputerFirst,
    /// The human is asked before each round.
    #[default]
    #[value(name = "prompt")]
    PromptEachRound,
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Who opens each round.
    first_mover: FirstMover,

    /// Round wins needed to take a set.
    target_score: u32,

    /// Marker the human plays; the computer plays the other one.
    human_mark: Mark,

    /// Clear the terminal between boards.
    clear_screen: bool,

    /// Seed for the computer's random fallback moves.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_mover: FirstMover::default(),
            target_score: DEFAULT_TARGET_SCORE,
            human_mark: Mark::X,
            clear_screen: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(first_mover = %config.first_mover, target_score = config.target_score, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no game could be played with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_score == 0 {
            return Err(ConfigError::new(
                "target_score must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Overrides who opens each round.
    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides screen clearing.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Overrides the set target.
    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Overrides the human's marker.
    pub fn with_human_mark(mut self, human_mark: Mark) -> Self {
        self.human_mark = human_mark;
        self
    }

    /// Marker the computer plays.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
