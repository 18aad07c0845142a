//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine calls these after each
//! placed mark; front-ends may call [`evaluate`] to derive the result of
//! any board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::phases::{GameEnd, GameResult};
use super::types::Board;
use tracing::{instrument, trace};

/// Fewest moves after which a line can be complete.
pub const MIN_TURNS_FOR_WIN: u8 = 5;

/// Moves in a game that fills the board.
pub const MAX_TURNS: u8 = 9;

/// End-of-game check gated by the number of moves made.
///
/// Below [`MIN_TURNS_FOR_WIN`] nothing is scanned. From there on a
/// completed line ends the game; with [`MAX_TURNS`] moves and no line it
/// is a draw.
#[instrument(skip(board))]
pub fn check_for_game_end(board: &Board, total_turns: u8) -> Option<GameEnd> {
    if total_turns < MIN_TURNS_FOR_WIN {
        trace!(total_turns, "Too few moves for a win");
        return None;
    }

    if let Some(end) = check_winner(board) {
        return Some(end);
    }

    (total_turns >= MAX_TURNS).then_some(GameEnd::Draw)
}

/// Derives the result of any board without the turn gate.
#[instrument]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(end) = check_winner(board) {
        end.result()
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Side};

    #[test]
    fn test_gate_skips_sparse_boards() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.place(pos, Side::Player);
        }
        // A completed line is ignored until five moves have been made.
        assert_eq!(check_for_game_end(&board, 4), None);
        assert!(check_for_game_end(&board, 5).is_some());
        assert_eq!(evaluate(&board), GameResult::PlayerWin);
    }

    #[test]
    fn test_nine_moves_without_line_is_draw() {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.iter().zip("XOXXOOOXX".chars()) {
            let side = if mark == 'X' { Side::Player } else { Side::Computer };
            board.place(*pos, side);
        }
        assert_eq!(check_for_game_end(&board, 8), None);
        assert_eq!(check_for_game_end(&board, 9), Some(GameEnd::Draw));
        assert_eq!(evaluate(&board), GameResult::Draw);
    }

    #[test]
    fn test_ninth_move_win_is_not_draw() {
        let mut board = Board::new();
        // X O X / O X O / O X X: the last X completes the main diagonal.
        for (pos, mark) in Position::ALL.iter().zip("XOXOXOOXX".chars()) {
            let side = if mark == 'X' { Side::Player } else { Side::Computer };
            board.place(*pos, side);
        }
        let end = check_for_game_end(&board, 9).expect("game over");
        assert_eq!(end.winner(), Some(Side::Player));
    }

    #[test]
    fn test_evaluate_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameResult::InProgress);
    }
}
