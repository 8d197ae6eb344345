//! Rules configuration.
//!
//! Payouts for the flat-score categories, straight detection mode and turn
//! length. Loaded from YAML; every field is optional and falls back to the
//! standard game.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::rule::StraightMode;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Flat payouts for pattern categories.
    #[serde(default)]
    pub payouts: PayoutConfig,
    /// Straight detection.
    #[serde(default)]
    pub straights: StraightConfig,
    /// Turn structure.
    #[serde(default)]
    pub game: GameConfig,
}

/// Flat payouts for full house, straights and Yahtzee.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PayoutConfig {
    #[serde(default = "default_full_house")]
    pub full_house: u32,
    #[serde(default = "default_small_straight")]
    pub small_straight: u32,
    #[serde(default = "default_large_straight")]
    pub large_straight: u32,
    #[serde(default = "default_yahtzee")]
    pub yahtzee: u32,
}

fn default_full_house() -> u32 {
    25
}

fn default_small_straight() -> u32 {
    30
}

fn default_large_straight() -> u32 {
    40
}

fn default_yahtzee() -> u32 {
    50
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            full_house: default_full_house(),
            small_straight: default_small_straight(),
            large_straight: default_large_straight(),
            yahtzee: default_yahtzee(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StraightConfig {
    /// `consecutive` (default) or `legacy`.
    #[serde(default)]
    pub mode: StraightMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    /// Rolls allowed per turn, including the first.
    #[serde(default = "default_rolls_per_turn")]
    pub rolls_per_turn: u8,
}

fn default_rolls_per_turn() -> u8 {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rolls_per_turn: default_rolls_per_turn(),
        }
    }
}

impl RulesConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.rolls_per_turn == 0 {
            return Err(ConfigError::Invalid("game.rolls_per_turn must be >= 1"));
        }
        Ok(())
    }
}
