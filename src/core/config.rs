//! Game configuration types.
//!
//! - `Difficulty`: the fixed set of difficulty labels
//! - `DifficultyProfile`: guess-range ceiling and timer duration for a label
//! - `DifficultyTable`: one profile per label
//! - `GameConfig`: combines all configuration
//!
//! Configs are plain serde structs. `GameConfig::from_json_str` and
//! `GameConfig::from_json_file` validate after parsing.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Score every round set starts from.
pub const STARTING_SCORE: u32 = 20;

/// Errors raised while building or loading a `GameConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
    UnknownDifficulty(String),
    #[error("difficulty {difficulty} has a zero {field}")]
    ZeroField {
        difficulty: Difficulty,
        field: &'static str,
    },
    #[error("starting score must be positive")]
    ZeroStartingScore,
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("could not read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON")]
    Json(#[from] serde_json::Error),
}

/// Difficulty label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All labels, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase label used in input and config files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| ConfigError::UnknownDifficulty(label.to_string()))
    }
}

/// Range ceiling and countdown for one difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Targets are drawn from `1..=max_number`.
    pub max_number: u32,
    /// Seconds on the clock when a round starts.
    pub timer_seconds: u32,
}

impl DifficultyProfile {
    #[must_use]
    pub const fn new(max_number: u32, timer_seconds: u32) -> Self {
        Self {
            max_number,
            timer_seconds,
        }
    }

    /// Check if `n` is a possible target.
    #[must_use]
    pub fn contains(&self, n: u32) -> bool {
        (1..=self.max_number).contains(&n)
    }
}

/// One profile per difficulty label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    pub easy: DifficultyProfile,
    pub medium: DifficultyProfile,
    pub hard: DifficultyProfile,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultyProfile::new(20, 45),
            medium: DifficultyProfile::new(50, 30),
            hard: DifficultyProfile::new(100, 15),
        }
    }
}

impl DifficultyTable {
    /// Get the profile for a difficulty.
    #[must_use]
    pub fn profile(&self, difficulty: Difficulty) -> DifficultyProfile {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for difficulty in Difficulty::ALL {
            let profile = self.profile(difficulty);
            if profile.max_number == 0 {
                return Err(ConfigError::ZeroField {
                    difficulty,
                    field: "max_number",
                });
            }
            if profile.timer_seconds == 0 {
                return Err(ConfigError::ZeroField {
                    difficulty,
                    field: "timer_seconds",
                });
            }
        }
        Ok(())
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Score at the start of every fresh game.
    pub starting_score: u32,

    /// Difficulty selected at startup.
    pub difficulty: Difficulty,

    /// Profile per difficulty.
    pub difficulties: DifficultyTable,

    /// Wall-clock length of one timer tick, in milliseconds.
    pub tick_millis: u64,

    /// Seed for target generation. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_score: STARTING_SCORE,
            difficulty: Difficulty::default(),
            difficulties: DifficultyTable::default(),
            tick_millis: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check every profile and the global settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_score == 0 {
            return Err(ConfigError::ZeroStartingScore);
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        self.difficulties.validate()
    }

    /// Profile for a difficulty.
    #[must_use]
    pub fn profile(&self, difficulty: Difficulty) -> DifficultyProfile {
        self.difficulties.profile(difficulty)
    }

    /// Length of one timer tick.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Set the startup difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the target seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tick length in milliseconds.
    #[must_use]
    pub fn with_tick_millis(mut self, millis: u64) -> Self {
        self.tick_millis = millis;
        self
    }

    /// Set the starting score.
    #[must_use]
    pub fn with_starting_score(mut self, score: u32) -> Self {
        self.starting_score = score;
        self
    }
}
