//! Tunable engine constants.
//!
//! Defaults reproduce the classic game: a 4×4 board, a 2048 target and a
//! one-in-ten chance that a spawned tile is a 4.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SIZE: usize = 4;
pub const DEFAULT_TARGET: u32 = 2048;
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board size must be at least 2, got {0}")]
    InvalidSize(usize),
    #[error("win target must be a power of two >= 4, got {0}")]
    InvalidTarget(u32),
    #[error("spawn probability for 4 must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Board size, win target and spawn odds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub size: usize,
    pub target: u32,
    pub four_probability: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            target: DEFAULT_TARGET,
            four_probability: DEFAULT_FOUR_PROBABILITY,
        }
    }
}

impl EngineConfig {
    /// Check every field against the ranges the engine can honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if self.target < 4 || !self.target.is_power_of_two() {
            return Err(ConfigError::InvalidTarget(self.target));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::InvalidProbability(self.four_probability));
        }
        Ok(())
    }

    /// Parse a JSON document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_game() {
        let config = EngineConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.target, 2048);
        assert!((config.four_probability - 0.1).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "target": 512 }"#).unwrap();
        assert_eq!(config.size, 4);
        assert_eq!(config.target, 512);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "size": 1 }"#),
            Err(ConfigError::InvalidSize(1))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "target": 1000 }"#),
            Err(ConfigError::InvalidTarget(1000))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "four_probability": 1.5 }"#),
            Err(ConfigError::InvalidProbability(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EngineConfig::from_json_str("{ size: "),
            Err(ConfigError::Json(_))
        ));
    }
}
