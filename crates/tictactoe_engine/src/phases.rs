//! Game phases and outcomes.

use super::lines::Line;
use super::types::Side;
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEnd {
    /// A side completed a line.
    Win {
        /// Side that owns the line.
        winner: Side,
        /// Completed line, for highlighting.
        line: Line,
    },
    /// All nine squares filled without a completed line.
    Draw,
}

impl GameEnd {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameEnd::Win { winner, .. } => Some(*winner),
            GameEnd::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            GameEnd::Win { line, .. } => Some(*line),
            GameEnd::Draw => None,
        }
    }

    /// Result this ending corresponds to.
    pub fn result(&self) -> GameResult {
        match self {
            GameEnd::Win { winner: Side::Player, .. } => GameResult::PlayerWin,
            GameEnd::Win { winner: Side::Computer, .. } => GameResult::ComputerWin,
            GameEnd::Draw => GameResult::Draw,
        }
    }
}

impl std::fmt::Display for GameEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEnd::Win { winner, .. } => write!(f, "{} wins", winner),
            GameEnd::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of a game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameResult {
    /// No line completed and squares remain.
    #[default]
    InProgress,
    /// The player completed a line.
    PlayerWin,
    /// The computer completed a line.
    ComputerWin,
    /// Board full without a completed line.
    Draw,
}

impl GameResult {
    /// Returns true once the game can no longer accept moves.
    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }
}

/// Externally observable engine state.
///
/// The computer's reply happens inside the player's move call, so there
/// is no phase in which the computer is "thinking".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to pick a square.
    AwaitingPlayerMove,
    /// A side completed a line.
    GameOverWin,
    /// Board filled without a winner.
    GameOverDraw,
}
