//! A single game: board, score, RNG and the Active/Terminal state machine.
//!
//! ```
//! use rust_2048::core::{Direction, GameConfig};
//! use rust_2048::session::Session;
//!
//! let mut session = Session::new(GameConfig::default().with_seed(42))?;
//! if let Some(report) = session.apply(Direction::Left) {
//!     assert_eq!(session.score(), report.score_delta);
//! }
//! # Ok::<(), rust_2048::core::ConfigError>(())
//! ```
//!
//! Every accepted key press spawns a tile, even when the move changed
//! nothing. `GameConfig::spawn_on_noop = false` switches to the usual rule
//! of spawning only after a move that changed the board.

use log::{debug, info, trace};

use crate::core::{Board, ConfigError, Direction, GameConfig, GameRng, Score};
use crate::rules::{self, Placement};

/// Session state. `Terminal` is absorbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Terminal,
}

/// What one accepted move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub direction: Direction,
    /// Points scored by this move's merges.
    pub score_delta: Score,
    /// Whether the slide itself moved or merged any tile.
    pub changed: bool,
    /// Tile spawned after the move, if any.
    pub placement: Option<Placement>,
    /// Status after the move and spawn.
    pub status: SessionStatus,
}

/// One game of 2048.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    board: Board,
    score: Score,
    moves: u32,
    status: SessionStatus,
    rng: GameRng,
}

impl Session {
    /// Start a game: seed the RNG and place the starting tiles.
    ///
    /// Without `config.seed` a seed is drawn from OS entropy; it is logged and
    /// available through [`Session::seed`]. Fails if `config` does not pass
    /// [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = seeded_rng(&config);
        let board = rules::initialize(&config, &mut rng);

        info!("new game: {0}x{0} board, seed {1}", config.size, rng.seed());
        trace!("initial board:\n{board}");

        Ok(Self {
            config,
            board,
            score: 0,
            moves: 0,
            status: SessionStatus::Active,
            rng,
        })
    }

    /// Resume from a known board and score. The session is `Terminal` right
    /// away if the board is.
    ///
    /// Fails if `config` is invalid or the board's side length differs from
    /// `config.size`.
    pub fn from_board(config: GameConfig, board: Board, score: Score) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.size() != config.size {
            return Err(ConfigError::Invalid {
                field: "size",
                reason: format!("board is {0}x{0} but config says {1}", board.size(), config.size),
            });
        }
        let rng = seeded_rng(&config);
        let status = if rules::is_terminal(&board) {
            SessionStatus::Terminal
        } else {
            SessionStatus::Active
        };

        Ok(Self {
            config,
            board,
            score,
            moves: 0,
            status,
            rng,
        })
    }

    /// Apply one directional key press.
    ///
    /// Returns `None` once the game is over; nothing changes in that case.
    pub fn apply(&mut self, direction: Direction) -> Option<TurnReport> {
        if self.status == SessionStatus::Terminal {
            debug!("ignoring {direction}: game is over");
            return None;
        }

        let outcome = rules::shift(&self.board, direction);
        self.board = outcome.board;
        self.score += outcome.score_delta;
        self.moves += 1;

        let placement = if outcome.changed || self.config.spawn_on_noop {
            let (board, placement) = rules::place_random_tile(&self.board, &self.config, &mut self.rng);
            self.board = board;
            placement
        } else {
            None
        };

        if rules::is_terminal(&self.board) {
            self.status = SessionStatus::Terminal;
        }

        debug!(
            "move {} {direction}: +{} (changed: {}, spawned: {:?})",
            self.moves, outcome.score_delta, outcome.changed, placement
        );
        trace!("board:\n{}", self.board);
        if self.status == SessionStatus::Terminal {
            info!(
                "game over after {} moves: score {}, highest tile {}",
                self.moves,
                self.score,
                self.board.highest_tile()
            );
        }

        Some(TurnReport {
            direction,
            score_delta: outcome.score_delta,
            changed: outcome.changed,
            placement,
            status: self.status,
        })
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Running score.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Accepted moves so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// True once no move can change the board.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::Terminal
    }

    /// Seed of this session's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

fn seeded_rng(config: &GameConfig) -> GameRng {
    match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    }
}
