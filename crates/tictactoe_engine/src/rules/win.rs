//! Win detection for tic-tac-toe.

use super::super::lines::find_line_with_sum;
use super::super::phases::GameEnd;
use super::super::types::{Board, Side};
use tracing::instrument;

/// Line sum of a completed line for `side`.
pub fn winning_sum(side: Side) -> i8 {
    side.value() * 3
}

/// Checks if a side has three in a row.
///
/// Player lines are searched before computer lines, so a board where both
/// sides hold a line (unreachable in play) reports the player.
#[instrument]
pub fn check_winner(board: &Board) -> Option<GameEnd> {
    [Side::Player, Side::Computer].into_iter().find_map(|side| {
        find_line_with_sum(board, winning_sum(side)).map(|line| GameEnd::Win { winner: side, line })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::LineKind;
    use crate::Position;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Side::Player);
        board.place(Position::TopCenter, Side::Player);
        board.place(Position::TopRight, Side::Player);

        let end = check_winner(&board).expect("top row complete");
        assert_eq!(end.winner(), Some(Side::Player));
        assert_eq!(end.line().map(|l| l.kind), Some(LineKind::Row));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(Position::TopRight, Side::Computer);
        board.place(Position::Center, Side::Computer);
        board.place(Position::BottomLeft, Side::Computer);

        let end = check_winner(&board).expect("diagonal complete");
        assert_eq!(end.winner(), Some(Side::Computer));
        assert_eq!(
            end.line().map(|l| l.cells),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_player_reported_when_both_complete() {
        let mut board = Board::new();
        for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
            board.place(pos, Side::Player);
        }
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.place(pos, Side::Computer);
        }

        assert_eq!(check_winner(&board).and_then(|e| e.winner()), Some(Side::Player));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Side::Player);
        board.place(Position::TopCenter, Side::Player);
        assert_eq!(check_winner(&board), None);
    }
}
