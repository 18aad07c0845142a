//! Tic-tac-toe against a heuristic computer opponent.
//!
//! The crate holds the game logic only. Front-ends feed player moves to an
//! [`Engine`] and draw the [`BoardUpdate`]s it produces.
//!
//! # Architecture
//!
//! - **Board**: nine squares holding `+1` (player), `-1` (computer) or `0`.
//! - **Lines**: a static table of the 8 rows, columns and diagonals; every
//!   decision is made from line sums.
//! - **Rules**: move-count-gated win and draw detection.
//! - **Opponent**: win, else block, else a uniformly random square.
//! - **Engine**: owns one game and plays the computer's reply inside the
//!   player's move.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, Position, Side};
//!
//! let mut engine = Engine::seeded(7);
//! let outcome = engine.apply_move(Position::TopLeft);
//!
//! assert!(outcome.is_applied());
//! assert_eq!(engine.board().value(Position::TopLeft), Side::Player.value());
//! assert_eq!(engine.total_turns(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod lines;
mod opponent;
mod phases;
mod position;
mod presenter;
pub mod rules;
mod types;

pub use action::{Move, MoveOutcome, MoveRejection};
pub use engine::Engine;
pub use lines::{LINES, Line, LineKind, find_line_with_sum, line_sums};
pub use opponent::{ChoiceReason, ComputerChoice, open_two, random_empty, select_computer_move};
pub use phases::{GameEnd, GameResult, Phase};
pub use position::{ParsePositionError, Position};
pub use presenter::{BoardUpdate, EndMessage, PLAYING_MESSAGE, Presenter, WELCOME_MESSAGE};
pub use types::{Board, Side, Square};
