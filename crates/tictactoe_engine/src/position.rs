//! Position identifiers for the nine board cells.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the 3x3 board.
///
/// Positions are listed in row-major order, so the declaration order
/// matches [`Position::index`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left corner (`top-l`).
    #[serde(rename = "top-l")]
    TopLeft,
    /// Top edge (`top-c`).
    #[serde(rename = "top-c")]
    TopCenter,
    /// Top-right corner (`top-r`).
    #[serde(rename = "top-r")]
    TopRight,
    /// Left edge (`mid-l`).
    #[serde(rename = "mid-l")]
    MiddleLeft,
    /// Center (`mid-c`).
    #[serde(rename = "mid-c")]
    Center,
    /// Right edge (`mid-r`).
    #[serde(rename = "mid-r")]
    MiddleRight,
    /// Bottom-left corner (`bot-l`).
    #[serde(rename = "bot-l")]
    BottomLeft,
    /// Bottom edge (`bot-c`).
    #[serde(rename = "bot-c")]
    BottomCenter,
    /// Bottom-right corner (`bot-r`).
    #[serde(rename = "bot-r")]
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Short identifier used on the wire and in console input.
    pub fn id(self) -> &'static str {
        match self {
            Position::TopLeft => "top-l",
            Position::TopCenter => "top-c",
            Position::TopRight => "top-r",
            Position::MiddleLeft => "mid-l",
            Position::Center => "mid-c",
            Position::MiddleRight => "mid-r",
            Position::BottomLeft => "bot-l",
            Position::BottomCenter => "bot-c",
            Position::BottomRight => "bot-r",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based `(row, column)` of this position.
    pub fn coords(self) -> (usize, usize) {
        (self.index() / 3, self.index() % 3)
    }

    /// Creates a position from zero-based `(row, column)`.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Keypad digit (1-9) shown on empty cells.
    pub fn digit(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Parses an id (`mid-c`), a label (`center`, case-insensitive) or a digit (1-9).
    #[instrument]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Ok(digit) = input.parse::<usize>() {
            return digit.checked_sub(1).and_then(Self::from_index);
        }

        Self::iter().find(|pos| {
            pos.id().eq_ignore_ascii_case(input) || pos.label().eq_ignore_ascii_case(input)
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Input that does not name any board position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown position {:?} (use an id like top-l, a label, or 1-9)", input)]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::parse(s).ok_or_else(|| ParsePositionError {
            input: s.to_string(),
        })
    }
}
