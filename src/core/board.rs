//! The square tile grid and its pure transforms.
//!
//! A `Board` is an N×N grid stored row-major. `0` is an empty cell, every
//! other value is a power of two. All transforms return a new board; the
//! only in-place mutation is [`Board::set`], used by tile placement.
//!
//! ## Transforms
//!
//! - `rotate`: one clockwise quarter-turn
//! - `compress_left`: pack each row's tiles to the left
//! - `merge_left`: one left-to-right merge pass per row
//! - `mirror` / `transpose`: reflections, used to state symmetry laws
//!
//! Moves in the other three directions are built from these in
//! [`crate::rules::engine::shift`].

use std::fmt;

use smallvec::SmallVec;

/// A tile value: `0` for empty, otherwise a power of two.
pub type Tile = u32;

/// Score accumulated from merges.
pub type Score = u64;

/// Largest tile a merge can produce. Two tiles of this value stay apart,
/// since doubling them would not fit in a `Tile`.
pub const MAX_TILE: Tile = 1 << 31;

/// Side length of the classic board.
pub const DEFAULT_SIZE: usize = 4;

/// Empty cell coordinates, inline for boards up to 4×4.
pub type EmptyCells = SmallVec<[(usize, usize); 16]>;

/// Square grid of tiles.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// Create an all-empty `size`×`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a board from rows.
    ///
    /// ```
    /// use rust_2048::core::Board;
    ///
    /// let board = Board::from_rows(&[[2, 4], [4, 2]]);
    /// assert_eq!(board.get(1, 0), 4);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a non-empty square.
    #[must_use]
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Self {
        let size = rows.len();
        assert!(size > 0, "Board must have at least one row");

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), size, "Board must be square");
            cells.extend_from_slice(row);
        }

        Self { size, cells }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size)
    }

    /// Copy out the rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Tile at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row * self.size + col]
    }

    /// Overwrite the tile at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        self.cells[row * self.size + col] = value;
    }

    /// Coordinates of every empty cell, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn count_tiles(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Largest tile on the board (0 when empty).
    #[must_use]
    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if two horizontally or vertically adjacent cells hold the same
    /// mergeable value (nonzero and below [`MAX_TILE`]).
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for i in 0..n {
            for j in 0..n {
                let v = self.get(i, j);
                if v == 0 || v >= MAX_TILE {
                    continue;
                }
                if i + 1 < n && self.get(i + 1, j) == v {
                    return true;
                }
                if j + 1 < n && self.get(i, j + 1) == v {
                    return true;
                }
            }
        }
        false
    }

    /// Rotate one quarter-turn clockwise: `out[i][j] = in[n-1-j][i]`.
    #[must_use]
    pub fn rotate(&self) -> Self {
        let n = self.size;
        let mut out = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                out.set(i, j, self.get(n - 1 - j, i));
            }
        }
        out
    }

    /// Rotate `turns` clockwise quarter-turns.
    #[must_use]
    pub fn rotate_n(&self, turns: u8) -> Self {
        (0..turns % 4).fold(self.clone(), |board, _| board.rotate())
    }

    /// Reflect left to right.
    #[must_use]
    pub fn mirror(&self) -> Self {
        let mut out = self.clone();
        for row in out.cells.chunks_mut(self.size) {
            row.reverse();
        }
        out
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let n = self.size;
        let mut out = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                out.set(j, i, self.get(i, j));
            }
        }
        out
    }

    /// Pack every row's tiles to the left, keeping their order.
    #[must_use]
    pub fn compress_left(&self) -> Self {
        let mut out = self.clone();
        for row in out.cells.chunks_mut(self.size) {
            compress_row(row);
        }
        out
    }

    /// Run one merge pass over every row; returns the board and the points
    /// scored.
    #[must_use]
    pub fn merge_left(&self) -> (Self, Score) {
        let mut out = self.clone();
        let score: Score = out
            .cells
            .chunks_mut(self.size)
            .map(merge_row)
            .sum();
        (out, score)
    }
}

/// Move a row's nonzero tiles to the front in order, zero-filling the rest.
pub fn compress_row(row: &mut [Tile]) {
    let mut pos = 0;
    for j in 0..row.len() {
        if row[j] != 0 {
            row[pos] = row[j];
            pos += 1;
        }
    }
    for cell in &mut row[pos..] {
        *cell = 0;
    }
}

/// Merge equal neighbours left to right in a single pass.
///
/// The right tile of each merged pair becomes 0, so a tile produced by a
/// merge cannot merge again in the same pass. Tiles at [`MAX_TILE`] never
/// merge. Returns the sum of merged values.
pub fn merge_row(row: &mut [Tile]) -> Score {
    let mut score = 0;
    for j in 0..row.len().saturating_sub(1) {
        if row[j] != 0 && row[j] < MAX_TILE && row[j] == row[j + 1] {
            row[j] *= 2;
            row[j + 1] = 0;
            score += Score::from(row[j]);
        }
    }
    score
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("rows", &self.to_rows())
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.highest_tile().max(1).to_string().len();
        for row in self.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{v:>width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
