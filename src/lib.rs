//! # rust-2048
//!
//! The 2048 sliding-tile puzzle: a pure board engine, a session state
//! machine, and a terminal front end.
//!
//! ## Design Principles
//!
//! 1. **One primitive**: every move is "compress, merge, compress" toward the
//!    left on a rotated board. The four directions cannot drift apart.
//!
//! 2. **Pure engine**: board transforms take a `&Board` and return a new one.
//!    Randomness only enters through an explicitly passed `GameRng`.
//!
//! 3. **Reproducible**: a seed plus the sequence of key presses determines
//!    the whole game.
//!
//! ## Modules
//!
//! - `core`: board, directions, RNG, configuration
//! - `rules`: tile placement, moves, terminal detection
//! - `session`: score, move count and the Active/Terminal state machine
//! - `ui`: terminal rendering and input (feature `tui`)
//!
//! ```
//! use rust_2048::{Direction, GameConfig, Session};
//!
//! let mut session = Session::new(GameConfig::default().with_seed(7))?;
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     session.apply(dir);
//! }
//! assert_eq!(session.moves(), 4);
//! # Ok::<(), rust_2048::ConfigError>(())
//! ```

pub mod core;
pub mod rules;
pub mod session;
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use crate::core::{Board, ConfigError, Direction, GameConfig, GameRng, Score, Tile};

pub use crate::rules::{is_terminal, place_random_tile, shift, MoveOutcome, Placement};

pub use crate::session::{Session, SessionStatus, TurnReport};
