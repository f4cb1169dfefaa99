//! Board engine: tile placement, directional moves, terminal detection.
//!
//! All four moves share one primitive. The board is rotated so the requested
//! direction points left, then each row goes through
//! compress → merge → compress, then the board is rotated back:
//!
//! | Direction | turns in | turns out |
//! |-----------|----------|-----------|
//! | Left      | 0        | 0         |
//! | Down      | 1        | 3         |
//! | Right     | 2        | 2         |
//! | Up        | 3        | 1         |
//!
//! The second compress re-packs the gaps merges leave behind
//! (`[2, 2, 2, 2]` merges to `[4, 0, 4, 0]`, which packs to `[4, 4, 0, 0]`).
//!
//! These functions hold no state. A [`crate::session::Session`] owns the
//! board, score and RNG they operate on.

use crate::core::{Board, Direction, GameConfig, GameRng, Score, Tile};

/// Result of sliding a board in one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after the move.
    pub board: Board,
    /// Points scored by merges during the move.
    pub score_delta: Score,
    /// Whether any tile moved or merged.
    pub changed: bool,
}

/// A tile dropped onto the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Create a new board: all empty, then `config.start_tiles` random tiles.
#[must_use]
pub fn initialize(config: &GameConfig, rng: &mut GameRng) -> Board {
    (0..config.start_tiles).fold(Board::new(config.size), |board, _| {
        place_random_tile(&board, config, rng).0
    })
}

/// Place a 2 or 4 on a uniformly chosen empty cell.
///
/// The value is drawn independently of the cell: 4 with probability
/// `config.four_probability`, otherwise 2. A full board is returned unchanged
/// with no placement.
#[must_use]
pub fn place_random_tile(
    board: &Board,
    config: &GameConfig,
    rng: &mut GameRng,
) -> (Board, Option<Placement>) {
    let empty = board.empty_cells();
    let Some(&(row, col)) = rng.choose(empty.as_slice()) else {
        return (board.clone(), None);
    };
    let value = if rng.gen_bool(config.four_probability) { 4 } else { 2 };

    let mut next = board.clone();
    next.set(row, col, value);
    (next, Some(Placement { row, col, value }))
}

/// Slide and merge every row toward the left edge.
#[must_use]
pub fn shift_left(board: &Board) -> (Board, Score) {
    let (merged, score) = board.compress_left().merge_left();
    (merged.compress_left(), score)
}

/// Slide and merge tiles in `direction`. No tile is spawned.
///
/// ```
/// use rust_2048::core::{Board, Direction};
/// use rust_2048::rules::shift;
///
/// let board = Board::from_rows(&[[2, 2], [0, 4]]);
/// let outcome = shift(&board, Direction::Left);
/// assert_eq!(outcome.board, Board::from_rows(&[[4, 0], [4, 0]]));
/// assert_eq!(outcome.score_delta, 4);
/// ```
#[must_use]
pub fn shift(board: &Board, direction: Direction) -> MoveOutcome {
    let aligned = board.rotate_n(direction.quarter_turns());
    let (moved, score_delta) = shift_left(&aligned);
    let moved = moved.rotate_n(direction.inverse_turns());
    let changed = moved != *board;

    MoveOutcome {
        board: moved,
        score_delta,
        changed,
    }
}

/// True iff the board is full and no two adjacent cells are equal, i.e. no
/// move can change it.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    board.is_full() && !board.has_adjacent_pair()
}

/// Directions that would change the board.
#[must_use]
pub fn legal_directions(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| shift(board, dir).changed)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_move(row: [Tile; 4]) -> ([Tile; 4], Score) {
        let board = Board::from_rows(&[row, [0; 4], [0; 4], [0; 4]]);
        let outcome = shift(&board, Direction::Left);
        let mut out = [0; 4];
        out.copy_from_slice(outcome.board.row(0));
        (out, outcome.score_delta)
    }

    #[test]
    fn test_merge_examples() {
        assert_eq!(row_move([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
        assert_eq!(row_move([2, 2, 4, 4]), ([4, 8, 0, 0], 12));
        assert_eq!(row_move([2, 0, 2, 0]), ([4, 0, 0, 0], 4));
        assert_eq!(row_move([4, 4, 4, 0]), ([8, 4, 0, 0], 8));
        assert_eq!(row_move([2, 4, 8, 16]), ([2, 4, 8, 16], 0));
    }

    #[test]
    fn test_each_direction() {
        let board = Board::from_rows(&[[0, 0, 0, 0], [2, 0, 0, 2], [0, 0, 0, 0], [0, 4, 0, 0]]);

        let left = shift(&board, Direction::Left);
        assert_eq!(left.board.row(1), &[4, 0, 0, 0]);
        assert_eq!(left.board.row(3), &[4, 0, 0, 0]);
        assert_eq!(left.score_delta, 4);

        let right = shift(&board, Direction::Right);
        assert_eq!(right.board.row(1), &[0, 0, 0, 4]);
        assert_eq!(right.board.row(3), &[0, 0, 0, 4]);

        let up = shift(&board, Direction::Up);
        assert_eq!(up.board.row(0), &[2, 4, 0, 2]);
        assert_eq!(up.board.count_tiles(), 3);
        assert_eq!(up.score_delta, 0);

        let down = shift(&board, Direction::Down);
        assert_eq!(down.board.row(3), &[2, 4, 0, 2]);
        assert_eq!(down.board.count_tiles(), 3);
    }

    #[test]
    fn test_vertical_merge() {
        let board = Board::from_rows(&[[2, 0], [2, 0]]);

        let up = shift(&board, Direction::Up);
        assert_eq!(up.board, Board::from_rows(&[[4, 0], [0, 0]]));
        assert_eq!(up.score_delta, 4);

        let down = shift(&board, Direction::Down);
        assert_eq!(down.board, Board::from_rows(&[[0, 0], [4, 0]]));
    }

    #[test]
    fn test_unchanged_move() {
        let board = Board::from_rows(&[[2, 4], [0, 0]]);
        let outcome = shift(&board, Direction::Left);
        assert!(!outcome.changed);
        assert_eq!(outcome.board, board);
        assert_eq!(outcome.score_delta, 0);
    }

    #[test]
    fn test_is_terminal() {
        assert!(is_terminal(&Board::from_rows(&[[2, 4], [4, 2]])));
        assert!(!is_terminal(&Board::from_rows(&[[2, 2], [4, 8]])));
        assert!(!is_terminal(&Board::from_rows(&[[2, 4], [2, 8]])));
        assert!(!is_terminal(&Board::from_rows(&[[2, 4], [0, 2]])));
    }

    #[test]
    fn test_max_tiles_do_not_merge() {
        use crate::core::MAX_TILE;

        let board = Board::from_rows(&[[MAX_TILE, MAX_TILE], [0, 0]]);
        let outcome = shift(&board, Direction::Left);
        assert!(!outcome.changed);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(outcome.board, board);

        let full = Board::from_rows(&[[MAX_TILE; 2]; 2]);
        assert!(is_terminal(&full));
        assert!(legal_directions(&full).is_empty());
    }

    #[test]
    fn test_legal_directions() {
        assert!(legal_directions(&Board::from_rows(&[[2, 4], [4, 2]])).is_empty());

        let legal = legal_directions(&Board::from_rows(&[[2, 0], [0, 0]]));
        assert_eq!(legal, vec![Direction::Down, Direction::Right]);
    }

    #[test]
    fn test_place_random_tile() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);
        let board = Board::from_rows(&[[2, 0], [4, 8]]);

        let (next, placement) = place_random_tile(&board, &config, &mut rng);
        let placement = placement.unwrap();
        assert_eq!((placement.row, placement.col), (0, 1));
        assert!(placement.value == 2 || placement.value == 4);
        assert_eq!(next.get(0, 1), placement.value);
        assert_eq!(next.get(0, 0), 2);
        assert_eq!(next.get(1, 0), 4);
        assert_eq!(next.get(1, 1), 8);
    }

    #[test]
    fn test_place_random_tile_on_full_board() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);
        let board = Board::from_rows(&[[2, 4], [4, 2]]);

        let (next, placement) = place_random_tile(&board, &config, &mut rng);
        assert_eq!(next, board);
        assert!(placement.is_none());
    }

    #[test]
    fn test_spawn_value_follows_probability() {
        let mut rng = GameRng::new(5);
        let board = Board::new(4);

        let twos = GameConfig::default().with_four_probability(0.0);
        let fours = GameConfig::default().with_four_probability(1.0);
        for _ in 0..20 {
            assert_eq!(place_random_tile(&board, &twos, &mut rng).1.unwrap().value, 2);
            assert_eq!(place_random_tile(&board, &fours, &mut rng).1.unwrap().value, 4);
        }
    }

    #[test]
    fn test_spawn_values_both_occur() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(11);
        let board = Board::new(4);

        let values: Vec<Tile> = (0..200)
            .map(|_| place_random_tile(&board, &config, &mut rng).1.unwrap().value)
            .collect();
        assert!(values.contains(&2));
        assert!(values.contains(&4));
    }

    #[test]
    fn test_initialize() {
        let mut rng = GameRng::new(1);
        let board = initialize(&GameConfig::default(), &mut rng);
        assert_eq!(board.size(), 4);
        assert_eq!(board.count_tiles(), 2);
        assert!(board.cells().iter().all(|&v| v == 0 || v == 2 || v == 4));

        let config = GameConfig::default().with_size(3).with_start_tiles(9);
        let board = initialize(&config, &mut rng);
        assert!(board.is_full());
    }
}
