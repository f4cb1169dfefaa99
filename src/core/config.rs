//! Game configuration.
//!
//! A `GameConfig` is built once at startup, either from defaults, from a JSON
//! file, or both (file first, then command-line overrides). Every field has a
//! default, so a config file only needs to name the fields it changes:
//!
//! ```json
//! { "size": 5, "seed": 7 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::DEFAULT_SIZE;

/// Largest supported side length.
pub const MAX_SIZE: usize = 16;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length (default: 4).
    pub size: usize,

    /// Tiles placed on the empty board at the start of a game (default: 2).
    pub start_tiles: usize,

    /// Probability that a spawned tile is a 4 rather than a 2 (default: 0.5).
    pub four_probability: f64,

    /// Spawn a tile after every accepted move, even one that changed nothing
    /// (default: true). `false` only spawns after moves that changed the board.
    pub spawn_on_noop: bool,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            start_tiles: 2,
            four_probability: 0.5,
            spawn_on_noop: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file and validate it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::Invalid {
                field: "size",
                reason: format!("must be between 2 and {MAX_SIZE}, got {}", self.size),
            });
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::Invalid {
                field: "four_probability",
                reason: format!("must be within [0, 1], got {}", self.four_probability),
            });
        }
        if self.start_tiles > self.size * self.size {
            return Err(ConfigError::Invalid {
                field: "start_tiles",
                reason: format!(
                    "{} tiles do not fit on a {}x{} board",
                    self.start_tiles, self.size, self.size
                ),
            });
        }
        Ok(())
    }

    /// Set the board side length.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of starting tiles.
    pub fn with_start_tiles(mut self, count: usize) -> Self {
        self.start_tiles = count;
        self
    }

    /// Set the probability of spawning a 4.
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Choose whether moves that change nothing still spawn a tile.
    pub fn with_spawn_on_noop(mut self, spawn: bool) -> Self {
        self.spawn_on_noop = spawn;
        self
    }
}
