//! Pure rendering of a board into styled text lines.
//!
//! Nothing here touches the terminal; [`super::terminal`] flushes the
//! resulting [`Frame`]s.

use std::time::Duration;

use super::palette::{Palette, Rgb};
use crate::core::{Board, Score, Tile};

/// A run of text with one foreground and background colour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: Rgb,
    pub bg: Rgb,
}

/// One screen line.
pub type Line = Vec<Span>;

/// A full screen of lines, top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    /// The frame's characters without colour, one `\n` per line.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect::<String>() + "\n")
            .collect()
    }

    /// Width of the widest line in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.chars().count()).sum())
            .max()
            .unwrap_or(0)
    }
}

/// Presentation context, built once at startup.
#[derive(Clone, Debug)]
pub struct Presentation {
    pub palette: Palette,
    /// Tile width in terminal columns.
    pub tile_width: usize,
    /// Tile height in terminal rows.
    pub tile_height: usize,
    /// How long the game-over screen stays up before the program exits.
    pub game_over_pause: Duration,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            palette: Palette::classic(),
            tile_width: 8,
            tile_height: 3,
            game_over_pause: Duration::from_secs(2),
        }
    }
}

impl Presentation {
    /// Render the score header and the board.
    #[must_use]
    pub fn render(&self, board: &Board, score: Score) -> Frame {
        let bg = self.palette.background;
        let width = self.board_width(board);

        let mut lines = vec![self.padded(&format!(" Score: {score}"), width), self.gap_line(width)];

        for row in board.rows() {
            for line_idx in 0..self.tile_height {
                let mut line = vec![self.span(" ", bg)];
                for &value in row {
                    line.push(self.tile_span(value, line_idx));
                    line.push(self.span(" ", bg));
                }
                lines.push(line);
            }
            lines.push(self.gap_line(width));
        }

        Frame { lines }
    }

    /// Render the final board with the game-over message below it.
    #[must_use]
    pub fn render_game_over(&self, board: &Board, score: Score) -> Frame {
        let mut frame = self.render(board, score);
        let width = frame.width();

        frame.lines.push(self.centered("Game over!", width));
        frame.lines.push(self.centered(&format!("Final score: {score}"), width));
        frame.lines.push(self.gap_line(width));
        frame
    }

    fn board_width(&self, board: &Board) -> usize {
        board.size() * (self.tile_width + 1) + 1
    }

    fn tile_span(&self, value: Tile, line_idx: usize) -> Span {
        let text = if value != 0 && line_idx == self.tile_height / 2 {
            format!("{:^width$}", value, width = self.tile_width)
        } else {
            " ".repeat(self.tile_width)
        };
        Span {
            text,
            fg: self.palette.text(value),
            bg: self.palette.tile(value),
        }
    }

    fn span(&self, text: &str, bg: Rgb) -> Span {
        Span {
            text: text.to_string(),
            fg: self.palette.dark_text,
            bg,
        }
    }

    fn gap_line(&self, width: usize) -> Line {
        vec![self.span(&" ".repeat(width), self.palette.background)]
    }

    fn padded(&self, text: &str, width: usize) -> Line {
        vec![self.span(&format!("{text:<width$}"), self.palette.background)]
    }

    fn centered(&self, text: &str, width: usize) -> Line {
        vec![self.span(&format!("{text:^width$}"), self.palette.background)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presentation() -> Presentation {
        Presentation {
            tile_width: 4,
            tile_height: 1,
            ..Presentation::default()
        }
    }

    #[test]
    fn test_render_layout() {
        let board = Board::from_rows(&[[2, 0], [16, 2048]]);
        let frame = presentation().render(&board, 36);

        let expected = concat!(
            " Score: 36 \n",
            "           \n",
            "  2        \n",
            "           \n",
            "  16  2048 \n",
            "           \n",
        );
        assert_eq!(frame.text(), expected);
        assert_eq!(frame.width(), 11);
    }

    #[test]
    fn test_render_colours() {
        let palette = Palette::classic();
        let board = Board::from_rows(&[[2, 0], [16, 2048]]);
        let frame = presentation().render(&board, 0);

        // Header, gap, then the first tile row: gap, tile, gap, tile, gap.
        let row = &frame.lines[2];
        assert_eq!(row.len(), 5);
        assert_eq!(row[1].bg, palette.tile(2));
        assert_eq!(row[1].fg, palette.dark_text);
        assert_eq!(row[3].bg, palette.tile(0));

        let row = &frame.lines[4];
        assert_eq!(row[1].fg, palette.light_text);
        assert_eq!(row[3].bg, palette.tile(2048));
    }

    #[test]
    fn test_value_on_middle_line() {
        let presentation = Presentation::default();
        let board = Board::from_rows(&[[8, 0], [0, 0]]);
        let frame = presentation.render(&board, 0);

        // Header and gap, then three lines for the first tile row.
        assert!(!frame.lines[2][1].text.contains('8'));
        assert_eq!(frame.lines[3][1].text, "   8    ");
        assert!(!frame.lines[4][1].text.contains('8'));
    }

    #[test]
    fn test_render_game_over() {
        let board = Board::from_rows(&[[2, 4], [4, 2]]);
        let frame = presentation().render_game_over(&board, 120);
        let text = frame.text();

        assert!(text.contains("Game over!"));
        assert!(text.contains("Final score: 120"));
        assert!(text.starts_with(" Score: 120"));
    }
}
