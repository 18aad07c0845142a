//! Moves and the reasons a move can be turned away.

use super::position::Position;
use super::types::Side;
use serde::{Deserialize, Serialize};

/// A side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The square taken.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.side, self.side.mark(), self.position.label())
    }
}

/// Why a move request was ignored.
///
/// Rejected requests never touch the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The square is already taken.
    #[display("{} is already taken", _0)]
    Occupied(Position),

    /// The game has ended.
    #[display("Game is already over")]
    GameOver,

    /// The computer is to move.
    #[display("It's not the player's turn")]
    NotPlayersTurn,
}

/// Result of asking the engine to play a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played. Holds one update per mark placed, in order:
    /// the player's mark, then the computer's reply if the game went on.
    Applied(Vec<super::presenter::BoardUpdate>),
    /// The request was a no-op.
    Ignored(MoveRejection),
}

impl MoveOutcome {
    /// Returns true if the board changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    /// Updates produced by the move, empty when ignored.
    pub fn updates(&self) -> &[super::presenter::BoardUpdate] {
        match self {
            MoveOutcome::Applied(updates) => updates,
            MoveOutcome::Ignored(_) => &[],
        }
    }
}
