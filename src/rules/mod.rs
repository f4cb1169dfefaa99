//! Game rules for 2048.
//!
//! Pure functions over [`Board`](crate::core::Board):
//! - Tile placement
//! - Directional moves, all built on one left-shift primitive
//! - Terminal detection (no win condition is checked)

pub mod engine;

pub use engine::{
    initialize, is_terminal, legal_directions, place_random_tile, shift, shift_left, MoveOutcome,
    Placement,
};
