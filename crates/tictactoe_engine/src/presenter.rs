//! Seam between the engine and whatever draws the game.
//!
//! The engine never renders anything itself. After each mark it builds a
//! [`BoardUpdate`] and hands it to a [`Presenter`], which is expected to
//! draw the mark, disable the square and show the message.

use super::lines::Line;
use super::phases::GameResult;
use super::position::Position;
use super::types::Side;
use serde::{Deserialize, Serialize};

/// Shown before the first move.
pub const WELCOME_MESSAGE: &str = "Click any available space to start the game.";

/// Shown while a game is under way.
pub const PLAYING_MESSAGE: &str = "Good luck! You are X.";

/// End-of-game message attached to an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndMessage {
    /// The game goes on.
    #[default]
    None,
    /// The player completed a line.
    PlayerWin,
    /// The computer completed a line.
    ComputerWin,
    /// Board filled without a line.
    Draw,
}

impl EndMessage {
    /// Text for the message area, `None` while the game continues.
    pub fn text(self) -> Option<&'static str> {
        match self {
            EndMessage::None => None,
            EndMessage::PlayerWin => Some("Great job! You did it."),
            EndMessage::ComputerWin => Some("So close! Try again."),
            EndMessage::Draw => Some("Looks like a draw game. Try again!"),
        }
    }
}

impl From<GameResult> for EndMessage {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress => EndMessage::None,
            GameResult::PlayerWin => EndMessage::PlayerWin,
            GameResult::ComputerWin => EndMessage::ComputerWin,
            GameResult::Draw => EndMessage::Draw,
        }
    }
}

/// One mark placed on the board, plus how the game stands afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardUpdate {
    /// Square that now holds a mark.
    pub position: Position,
    /// Owner of the mark.
    pub side: Side,
    /// Number of moves made including this one.
    pub turn: u8,
    /// Set when this mark ended the game.
    pub message: EndMessage,
    /// Winning line to highlight, if any.
    pub highlight: Option<Line>,
}

impl BoardUpdate {
    /// Returns true if this update ends the game.
    pub fn is_final(&self) -> bool {
        self.message != EndMessage::None
    }
}

/// Receives board updates from the engine.
pub trait Presenter {
    /// Called once per placed mark, in play order.
    fn present(&mut self, update: &BoardUpdate);
}

impl Presenter for Vec<BoardUpdate> {
    fn present(&mut self, update: &BoardUpdate) {
        self.push(*update);
    }
}
