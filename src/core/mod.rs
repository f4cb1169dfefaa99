//! Core types: the board, move directions, RNG, configuration.
//!
//! Nothing in this module knows about sessions or terminals. The board
//! transforms are pure; randomness only enters through `GameRng`.

pub mod board;
pub mod direction;
pub mod rng;
pub mod config;

pub use board::{Board, EmptyCells, Score, Tile, DEFAULT_SIZE, MAX_TILE};
pub use direction::Direction;
pub use rng::GameRng;
pub use config::{ConfigError, GameConfig, MAX_SIZE};
