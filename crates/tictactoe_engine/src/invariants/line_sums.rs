//! Line sums stay within the range a 3-cell line allows.

use super::super::engine::Engine;
use super::super::lines::line_sums;
use super::Invariant;

/// Invariant: every line sums to a value in `-3..=3`.
pub struct LineSumRangeInvariant;

impl<R> Invariant<Engine<R>> for LineSumRangeInvariant {
    fn holds(engine: &Engine<R>) -> bool {
        line_sums(engine.board()).iter().all(|sum| (-3..=3).contains(sum))
    }

    fn description() -> &'static str {
        "Every line sums to a value between -3 and 3"
    }
}
