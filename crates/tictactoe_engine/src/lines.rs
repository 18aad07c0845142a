//! Static table of the eight winning lines.

use super::position::Position;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// Orientation of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Horizontal.
    Row,
    /// Vertical.
    Column,
    /// Corner to corner.
    Diagonal,
}

/// A row, column or diagonal of three positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Orientation.
    pub kind: LineKind,
    /// Cells in the line, in board order.
    pub cells: [Position; 3],
}

impl Line {
    const fn new(kind: LineKind, cells: [Position; 3]) -> Self {
        Self { kind, cells }
    }

    /// Sum of occupancy values along the line, in `-3..=3`.
    pub fn sum(&self, board: &Board) -> i8 {
        self.cells.iter().map(|pos| board.value(*pos)).sum()
    }

    /// First empty cell of the line, if any.
    pub fn empty_cell(&self, board: &Board) -> Option<Position> {
        self.cells.iter().copied().find(|pos| board.is_empty(*pos))
    }

    /// Checks whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// All lines: rows top to bottom, columns left to right, then both diagonals.
///
/// Every scan over the board walks this table in order, so the first
/// qualifying line is always the one reported.
pub const LINES: [Line; 8] = [
    Line::new(LineKind::Row, [Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line::new(LineKind::Row, [Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line::new(LineKind::Row, [Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    Line::new(LineKind::Column, [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line::new(LineKind::Column, [Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line::new(LineKind::Column, [Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    Line::new(LineKind::Diagonal, [Position::TopLeft, Position::Center, Position::BottomRight]),
    Line::new(LineKind::Diagonal, [Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Line sums for the whole board, in table order.
pub fn line_sums(board: &Board) -> [i8; 8] {
    LINES.map(|line| line.sum(board))
}

/// First line whose sum equals `target`.
pub fn find_line_with_sum(board: &Board, target: i8) -> Option<Line> {
    LINES.iter().copied().find(|line| line.sum(board) == target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn test_every_position_is_on_a_line() {
        for pos in Position::ALL {
            assert!(LINES.iter().any(|line| line.contains(pos)));
        }
        let center_lines = LINES.iter().filter(|l| l.contains(Position::Center)).count();
        assert_eq!(center_lines, 4);
    }

    #[test]
    fn test_sum_and_empty_cell() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Side::Player);
        board.place(Position::TopRight, Side::Player);

        let top = LINES[0];
        assert_eq!(top.sum(&board), 2);
        assert_eq!(top.empty_cell(&board), Some(Position::TopCenter));
        assert_eq!(find_line_with_sum(&board, 2), Some(top));
        assert_eq!(find_line_with_sum(&board, -2), None);
    }

    #[test]
    fn test_line_sums_follow_table_order() {
        let mut board = Board::new();
        board.place(Position::Center, Side::Computer);

        assert_eq!(line_sums(&board), [0, -1, 0, 0, -1, 0, -1, -1]);
    }
}
