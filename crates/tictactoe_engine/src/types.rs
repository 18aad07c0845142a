//! Core domain types: sides, squares and the board.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player. Plays `X` and always moves first.
    Player,
    /// The computer opponent. Plays `O`.
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Occupancy value this side writes into a cell.
    pub fn value(self) -> i8 {
        match self {
            Side::Player => 1,
            Side::Computer => -1,
        }
    }

    /// Mark drawn for this side.
    pub fn mark(self) -> char {
        match self {
            Side::Player => 'X',
            Side::Computer => 'O',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square taken by a side.
    Occupied(Side),
}

impl Square {
    /// Occupancy value: 0 for empty, otherwise the owner's value.
    pub fn value(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(side) => side.value(),
        }
    }
}

/// 3x3 board.
///
/// Squares only ever go from empty to occupied; there is no way to clear
/// or overwrite a taken square.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Occupancy value at the given position (-1, 0 or 1).
    pub fn value(&self, pos: Position) -> i8 {
        self.get(pos).value()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Writes `side`'s mark to an empty square.
    ///
    /// Returns `false` and leaves the board untouched if the square is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, side: Side) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.squares[pos.index()] = Square::Occupied(side);
        true
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of squares held by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(side))
            .count()
    }

    /// Formats the board as text, showing keypad digits on empty squares.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (pos, square) in Position::ALL.iter().zip(self.squares.iter()) {
            let (row, col) = pos.coords();
            match square {
                Square::Empty => result.push_str(&format!(" {} ", pos.digit())),
                Square::Occupied(side) => result.push_str(&format!(" {} ", side.mark())),
            }
            if col < 2 {
                result.push('|');
            } else if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}
