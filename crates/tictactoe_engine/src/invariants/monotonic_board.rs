//! Monotonic board invariant: squares never change once set.

use super::super::engine::Engine;
use super::super::types::Board;
use super::Invariant;

/// Invariant: the board is exactly the replay of the move history.
///
/// Replaying fails if any move targets a square that was already taken,
/// so a board that passes has never had a square overwritten.
pub struct MonotonicBoardInvariant;

impl<R> Invariant<Engine<R>> for MonotonicBoardInvariant {
    fn holds(engine: &Engine<R>) -> bool {
        let mut replayed = Board::new();

        for mov in engine.history() {
            if !replayed.place(mov.position, mov.side) {
                return false;
            }
        }

        replayed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position, Side};

    #[test]
    fn test_empty_game_holds() {
        let engine = Engine::seeded(0);
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_mark_without_history_violates() {
        let mut engine = Engine::seeded(0);
        engine.apply_move(Position::Center);

        let stray = engine.board().empty_positions()[0];
        engine.board.place(stray, Side::Computer);
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_repeated_square_in_history_violates() {
        let mut engine = Engine::seeded(0);
        engine.apply_move(Position::Center);
        engine.history.push(Move::new(Side::Player, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
