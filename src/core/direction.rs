//! Move directions.
//!
//! Every direction is executed as "move left" on a rotated board. A direction
//! therefore only needs to know how many clockwise quarter-turns bring it to
//! the left edge.

use serde::{Deserialize, Serialize};

/// A direction to slide and merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Clockwise quarter-turns that align this direction with `Left`.
    ///
    /// A clockwise turn brings the bottom row to the left edge, so `Down`
    /// takes one turn and `Up` takes three.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Clockwise quarter-turns that undo [`Direction::quarter_turns`].
    #[must_use]
    pub const fn inverse_turns(self) -> u8 {
        (4 - self.quarter_turns()) % 4
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_round_trip() {
        for dir in Direction::ALL {
            assert_eq!((dir.quarter_turns() + dir.inverse_turns()) % 4, 0);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Direction::Down).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::Down);
    }
}
