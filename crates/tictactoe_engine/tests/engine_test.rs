//! End-to-end tests for the board state engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::rules::check_for_game_end;
use tictactoe_engine::{
    Board, BoardUpdate, ChoiceReason, EndMessage, Engine, GameEnd, GameResult, LINES, MoveOutcome,
    MoveRejection, Phase, Position, Side, select_computer_move,
};

fn board_from(layout: &str) -> Board {
    let mut board = Board::new();
    for (pos, mark) in Position::ALL.iter().zip(layout.chars()) {
        match mark {
            'X' => board.place(*pos, Side::Player),
            'O' => board.place(*pos, Side::Computer),
            _ => true,
        };
    }
    board
}

#[test]
fn test_first_move_example() {
    let mut engine = Engine::seeded(2024);
    let outcome = engine.apply_move(Position::TopLeft);

    let updates = outcome.updates();
    assert_eq!(updates.len(), 2);
    assert_eq!(engine.board().value(Position::TopLeft), 1);
    assert_eq!(engine.total_turns(), 2);
    assert_eq!(updates[1].side, Side::Computer);
    assert_eq!(updates[1].turn, 2);
    assert_ne!(updates[1].position, Position::TopLeft);
    assert_eq!(engine.board().count(Side::Computer), 1);
}

#[test]
fn test_random_reply_varies_with_seed() {
    let replies: std::collections::HashSet<_> = (0..100)
        .map(|seed| {
            let mut engine = Engine::seeded(seed);
            engine.apply_move(Position::Center).updates()[1].position
        })
        .collect();
    assert!(replies.len() > 1);
    assert!(!replies.contains(&Position::Center));
}

#[test]
fn test_computer_blocks_on_third_turn() {
    for seed in 0..100 {
        let mut engine = Engine::seeded(seed);
        engine.apply_move(Position::TopLeft);

        // Pick a line through TopLeft the computer has not touched.
        let line = LINES
            .iter()
            .find(|line| {
                line.contains(Position::TopLeft)
                    && line
                        .cells
                        .iter()
                        .all(|pos| *pos == Position::TopLeft || engine.board().is_empty(*pos))
            })
            .expect("computer can only spoil one line through a corner");
        let free: Vec<_> = line.cells.iter().copied().filter(|p| *p != Position::TopLeft).collect();

        let outcome = engine.apply_move(free[0]);
        let reply = outcome.updates()[1];
        assert_eq!(reply.position, free[1], "seed {seed}");
        assert_eq!(reply.turn, 4);
    }
}

#[test]
fn test_block_then_win_priority() {
    let mut rng = StdRng::seed_from_u64(0);

    // X _ X / _ O _ / _ _ O : player threatens the top row.
    let board = board_from("X.X.O...O");
    let choice = select_computer_move(&board, 4, &mut rng).unwrap();
    assert_eq!(choice.position, Position::TopCenter);
    assert_eq!(choice.reason, ChoiceReason::Block);

    // X _ X / O O _ / X _ _ : the computer can finish the middle row instead.
    let board = board_from("X.XOO.X..");
    let choice = select_computer_move(&board, 5, &mut rng).unwrap();
    assert_eq!(choice.position, Position::MiddleRight);
    assert_eq!(choice.reason, ChoiceReason::Win);
}

#[test]
fn test_full_board_is_draw_not_false_win() {
    let board = board_from("XOXXOOOXX");
    assert_eq!(check_for_game_end(&board, 9), Some(GameEnd::Draw));
}

#[test]
fn test_line_sums_decide_winner() {
    let player = board_from("XXXOO....");
    let end = check_for_game_end(&player, 5).unwrap();
    assert_eq!(end.result(), GameResult::PlayerWin);

    let computer = board_from("XX.OOOX..");
    let end = check_for_game_end(&computer, 6).unwrap();
    assert_eq!(end.result(), GameResult::ComputerWin);

    // Both lines complete: not reachable in play, reported as a player win.
    let both = board_from("XXXOOO...");
    let end = check_for_game_end(&both, 6).unwrap();
    assert_eq!(end.result(), GameResult::PlayerWin);
    assert_eq!(end.line(), Some(LINES[0]));
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let mut engine = Engine::seeded(17);
    let mut last = Vec::<BoardUpdate>::new();
    for pos in Position::ALL {
        if engine.is_over() {
            break;
        }
        engine.play(pos, &mut last);
    }
    assert!(engine.is_over());
    assert_ne!(engine.phase(), Phase::AwaitingPlayerMove);

    let final_update = last.last().copied().unwrap();
    assert!(final_update.is_final());
    assert_eq!(final_update.message, EndMessage::from(engine.result()));
    assert_eq!(final_update.highlight, engine.winning_line());

    let before = engine.board().clone();
    for pos in Position::ALL {
        let outcome = engine.apply_move(pos);
        assert_eq!(outcome, MoveOutcome::Ignored(MoveRejection::GameOver));
    }
    assert_eq!(engine.board(), &before);
}

#[test]
fn test_presenter_sees_every_mark_in_order() {
    let mut engine = Engine::seeded(99);
    let mut seen: Vec<BoardUpdate> = Vec::new();

    engine.play(Position::Center, &mut seen);
    engine.play(Position::Center, &mut seen);

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].position, Position::Center);
    assert_eq!(seen[0].turn, 1);
    assert_eq!(seen[1].turn, 2);
    assert_eq!(seen[0].message, EndMessage::None);
}

#[test]
fn test_restart_after_finished_game() {
    let mut engine = Engine::seeded(5);
    for pos in Position::ALL {
        engine.apply_move(pos);
    }
    assert!(engine.is_over());

    engine.restart();
    assert_eq!(engine.phase(), Phase::AwaitingPlayerMove);
    assert!(engine.apply_move(Position::Center).is_applied());
}
