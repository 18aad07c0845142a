//! Board state engine: the player's move, the computer's reply, and the
//! end-of-game check between them.

use super::action::{Move, MoveOutcome, MoveRejection};
use super::invariants::assert_invariants;
use super::lines::Line;
use super::opponent::{self, ComputerChoice};
use super::phases::{GameEnd, GameResult, Phase};
use super::position::Position;
use super::presenter::{BoardUpdate, EndMessage, PLAYING_MESSAGE, Presenter, WELCOME_MESSAGE};
use super::rules;
use super::types::{Board, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// One game of player versus computer.
///
/// The player always moves first. [`Engine::apply_move`] places the
/// player's mark and, unless that ended the game, the computer's reply
/// before returning, so callers only ever see the engine waiting for the
/// player or finished.
///
/// `R` is the random source used when the computer has no win or block to
/// play. Tests pass a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    pub(crate) board: Board,
    pub(crate) total_turns: u8,
    pub(crate) to_move: Side,
    pub(crate) game_over: bool,
    pub(crate) history: Vec<Move>,
    rng: R,
}

impl Engine<StdRng> {
    /// Creates a game with an entropy-seeded random source.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a game whose random choices repeat for the same seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Engine<R> {
    /// Creates a game drawing random choices from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: Board::new(),
            total_turns: 0,
            to_move: Side::Player,
            game_over: false,
            history: Vec::new(),
            rng,
        }
    }

    /// Plays the player's mark at `position`, then the computer's reply.
    ///
    /// Ignored without touching the board when the game is over, when it
    /// is not the player's turn, or when the square is taken.
    #[instrument(skip(self), fields(turn = self.total_turns))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        if let Err(rejection) = self.check_player_move(position) {
            debug!(%rejection, "Move ignored");
            return MoveOutcome::Ignored(rejection);
        }

        let mut updates = Vec::with_capacity(2);
        let mut next = Some(position);

        while let Some(position) = next.take() {
            updates.push(self.place(position));

            if self.game_over {
                break;
            }

            self.to_move = self.to_move.opponent();
            if self.to_move == Side::Computer {
                match self.select_computer_move() {
                    Some(choice) => next = Some(choice.position),
                    None => {
                        warn!(turn = self.total_turns, "Computer has no square to play");
                        self.to_move = Side::Player;
                    }
                }
            }
        }

        assert_invariants(self);

        MoveOutcome::Applied(updates)
    }

    /// Applies a move and hands every resulting update to `presenter`.
    #[instrument(skip(self, presenter))]
    pub fn play<P: Presenter + ?Sized>(
        &mut self,
        position: Position,
        presenter: &mut P,
    ) -> MoveOutcome {
        let outcome = self.apply_move(position);
        for update in outcome.updates() {
            presenter.present(update);
        }
        outcome
    }

    /// Picks the computer's next square for the current board.
    ///
    /// Advances the random source but leaves the board alone.
    pub fn select_computer_move(&mut self) -> Option<ComputerChoice> {
        opponent::select_computer_move(&self.board, self.total_turns, &mut self.rng)
    }

    /// Runs the move-count-gated end-of-game check on the current board.
    pub fn check_for_game_end(&self) -> Option<GameEnd> {
        rules::check_for_game_end(&self.board, self.total_turns)
    }

    /// Clears the board for a new game, keeping the random source.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(previous_turns = self.total_turns, "Starting new game");
        self.board = Board::new();
        self.total_turns = 0;
        self.to_move = Side::Player;
        self.game_over = false;
        self.history.clear();
    }

    fn check_player_move(&self, position: Position) -> Result<(), MoveRejection> {
        if self.game_over {
            Err(MoveRejection::GameOver)
        } else if self.to_move != Side::Player {
            Err(MoveRejection::NotPlayersTurn)
        } else if !self.board.is_empty(position) {
            Err(MoveRejection::Occupied(position))
        } else {
            Ok(())
        }
    }

    fn place(&mut self, position: Position) -> BoardUpdate {
        let side = self.to_move;
        self.board.place(position, side);
        self.history.push(Move::new(side, position));
        self.total_turns += 1;
        debug!(%position, %side, turn = self.total_turns, "Mark placed");

        let end = self.check_for_game_end();
        if let Some(end) = &end {
            info!(outcome = %end, turn = self.total_turns, "Game over");
            self.game_over = true;
        }

        BoardUpdate {
            position,
            side,
            turn: self.total_turns,
            message: end.map(|e| EndMessage::from(e.result())).unwrap_or_default(),
            highlight: end.and_then(|e| e.line()),
        }
    }
}

impl<R> Engine<R> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves made so far (0-9).
    pub fn total_turns(&self) -> u8 {
        self.total_turns
    }

    /// Side to move next.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks if the player may take `position` right now.
    pub fn is_available(&self, position: Position) -> bool {
        !self.game_over && self.board.is_empty(position)
    }

    /// Result derived from the board.
    pub fn result(&self) -> GameResult {
        rules::evaluate(&self.board)
    }

    /// Completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        rules::check_winner(&self.board).and_then(|end| end.line())
    }

    /// Current state-machine phase.
    pub fn phase(&self) -> Phase {
        match self.result() {
            GameResult::PlayerWin | GameResult::ComputerWin => Phase::GameOverWin,
            GameResult::Draw => Phase::GameOverDraw,
            GameResult::InProgress => Phase::AwaitingPlayerMove,
        }
    }

    /// Message for the status area.
    pub fn status_message(&self) -> &'static str {
        if let Some(text) = EndMessage::from(self.result()).text() {
            text
        } else if self.total_turns == 0 {
            WELCOME_MESSAGE
        } else {
            PLAYING_MESSAGE
        }
    }
}
