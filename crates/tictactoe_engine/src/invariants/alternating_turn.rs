//! Turn bookkeeping invariant: the counter matches the board and the
//! sides alternate starting with the player.

use super::super::engine::Engine;
use super::super::types::Side;
use super::Invariant;
use tracing::warn;

/// Invariant: the player moves on odd turns, the computer on even ones,
/// and the turn counter equals the number of filled squares.
pub struct AlternatingTurnInvariant;

impl<R> Invariant<Engine<R>> for AlternatingTurnInvariant {
    fn holds(engine: &Engine<R>) -> bool {
        let filled = engine.board().filled();
        if filled != usize::from(engine.total_turns()) || filled != engine.history().len() {
            warn!(filled, turns = engine.total_turns(), "Turn counter out of step with board");
            return false;
        }

        engine.history().iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Side::Player } else { Side::Computer };
            mov.side == expected
        })
    }

    fn description() -> &'static str {
        "Turns alternate starting with the player and match the filled squares"
    }
}
