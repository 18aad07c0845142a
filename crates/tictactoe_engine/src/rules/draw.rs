//! Draw detection for tic-tac-toe.

use super::super::types::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if every square is occupied.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.filled() == board.squares().len()
}

/// A full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
