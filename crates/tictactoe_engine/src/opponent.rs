//! Heuristic computer opponent.
//!
//! Not a perfect player. It takes a win when one is on the board, blocks
//! the player's open two-in-a-row, and otherwise picks any empty square
//! uniformly at random.

use super::lines::{Line, find_line_with_sum};
use super::position::Position;
use super::types::{Board, Side};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Moves made before the player can have two in a line.
pub const MIN_TURNS_FOR_BLOCK: u8 = 3;

/// Why the computer picked its square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ChoiceReason {
    /// Completes a computer line.
    #[display("win")]
    Win,
    /// Fills the gap in a player line.
    #[display("block")]
    Block,
    /// No threat either way.
    #[display("random")]
    Random,
}

/// A square picked by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerChoice {
    /// Square to take.
    pub position: Position,
    /// Which tier produced it.
    pub reason: ChoiceReason,
}

/// Line where `side` holds two squares and the third is empty.
///
/// A sum of `2 * value` can only come from two marks and one gap.
pub fn open_two(board: &Board, side: Side) -> Option<Line> {
    find_line_with_sum(board, side.value() * 2)
}

/// Picks the computer's next square.
///
/// `total_turns` is the number of moves already on the board and gates the
/// tiers:
/// - fewer than [`MIN_TURNS_FOR_BLOCK`]: random;
/// - exactly [`MIN_TURNS_FOR_BLOCK`]: block, else random;
/// - more: win, else block, else random.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn select_computer_move<R: Rng + ?Sized>(
    board: &Board,
    total_turns: u8,
    rng: &mut R,
) -> Option<ComputerChoice> {
    let threat = if total_turns < MIN_TURNS_FOR_BLOCK {
        None
    } else if total_turns == MIN_TURNS_FOR_BLOCK {
        open_two(board, Side::Player).map(|line| (line, ChoiceReason::Block))
    } else {
        open_two(board, Side::Computer)
            .map(|line| (line, ChoiceReason::Win))
            .or_else(|| open_two(board, Side::Player).map(|line| (line, ChoiceReason::Block)))
    };

    let choice = match threat.and_then(|(line, reason)| {
        line.empty_cell(board).map(|position| ComputerChoice { position, reason })
    }) {
        Some(choice) => Some(choice),
        None => random_empty(board, rng).map(|position| ComputerChoice {
            position,
            reason: ChoiceReason::Random,
        }),
    };

    if let Some(choice) = &choice {
        debug!(
            position = %choice.position,
            reason = %choice.reason,
            total_turns,
            "Computer chose square"
        );
    }
    choice
}

/// Uniformly random empty square.
#[instrument(skip(board, rng))]
pub fn random_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_with(player: &[Position], computer: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in player {
            board.place(*pos, Side::Player);
        }
        for pos in computer {
            board.place(*pos, Side::Computer);
        }
        board
    }

    #[test]
    fn test_early_moves_are_random_and_legal() {
        let board = board_with(&[Position::TopLeft], &[]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let choice = select_computer_move(&board, 1, &mut rng).expect("squares left");
            assert_eq!(choice.reason, ChoiceReason::Random);
            assert_ne!(choice.position, Position::TopLeft);
        }
    }

    #[test]
    fn test_random_covers_every_empty_square() {
        let board = board_with(&[Position::Center], &[]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_empty(&board, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_third_turn_blocks() {
        let board = board_with(&[Position::TopLeft, Position::TopRight], &[Position::Center]);
        let mut rng = StdRng::seed_from_u64(1);
        let choice = select_computer_move(&board, 3, &mut rng).unwrap();
        assert_eq!(choice.position, Position::TopCenter);
        assert_eq!(choice.reason, ChoiceReason::Block);
    }

    #[test]
    fn test_third_turn_ignores_computer_two() {
        // Only reachable on a hand-built board: the win tier does not run at turn 3.
        let board = board_with(&[Position::BottomRight], &[Position::TopLeft, Position::TopCenter]);
        let mut rng = StdRng::seed_from_u64(3);
        let choice = select_computer_move(&board, 3, &mut rng).unwrap();
        assert_eq!(choice.reason, ChoiceReason::Random);
    }

    #[test]
    fn test_win_beats_block() {
        let board = board_with(
            &[Position::TopLeft, Position::TopRight, Position::BottomCenter],
            &[Position::MiddleLeft, Position::Center],
        );
        let mut rng = StdRng::seed_from_u64(2);
        let choice = select_computer_move(&board, 5, &mut rng).unwrap();
        assert_eq!(choice.position, Position::MiddleRight);
        assert_eq!(choice.reason, ChoiceReason::Win);
    }

    #[test]
    fn test_block_when_no_win() {
        let mut rng = StdRng::seed_from_u64(2);
        let board = board_with(
            &[Position::TopLeft, Position::TopRight, Position::BottomCenter],
            &[Position::Center, Position::BottomLeft],
        );
        // Computer's Center + BottomLeft is the anti-diagonal but TopRight is taken.
        let choice = select_computer_move(&board, 5, &mut rng).unwrap();
        assert_eq!(choice.position, Position::TopCenter);
        assert_eq!(choice.reason, ChoiceReason::Block);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_with(
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::Center,
                Position::MiddleRight,
                Position::BottomCenter,
            ],
            &[
                Position::TopCenter,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::BottomRight,
            ],
        );
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select_computer_move(&board, 9, &mut rng), None);
    }
}
