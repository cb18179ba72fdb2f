//! Concrete game scenarios.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictac_core::strategy::search::score_moves;
use tictac_core::{
    Board, Cell, GameError, GameMode, GameSession, IllegalAction, Outcome, Player, SearchStrategy,
    Strategy, WIN_LINES, available_moves, evaluate,
};

#[test]
fn test_empty_board_is_ongoing_with_every_move() {
    let board = Board::empty();
    assert_eq!(evaluate(&board), Outcome::Ongoing);
    assert_eq!(available_moves(&board), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_top_row_win() {
    let board: Board = "XXXOO....".parse().unwrap();
    assert_eq!(
        evaluate(&board),
        Outcome::Won {
            player: Player::First,
            line: WIN_LINES[0],
        }
    );
    assert_eq!(WIN_LINES[0].indices(), [0, 1, 2]);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOXOXOOXO".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_search_never_walks_into_forced_loss() {
    // X in the corner, O in the center, X to move.
    let board: Board = "X...O....".parse().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let index = SearchStrategy::exhaustive()
        .choose_move(&board, Player::First, &mut rng)
        .unwrap();

    let scores = score_moves(&board, Player::First).unwrap();
    let chosen = scores.iter().find(|(i, _)| *i == index).unwrap().1;
    assert_eq!(chosen, 0, "the position is a draw with best play");
    assert!(scores.iter().all(|(_, value)| *value <= chosen));
}

#[test]
fn test_with_move_then_occupied() {
    let board = Board::empty().with_move(4, Player::First).unwrap();
    for index in 0..9 {
        let expected = if index == 4 {
            Cell::Mark(Player::First)
        } else {
            Cell::Empty
        };
        assert_eq!(board.cell_at(index), Ok(expected));
    }
    assert_eq!(
        board.with_move(4, Player::First),
        Err(GameError::InvalidMove { index: 4 })
    );
}

#[test]
fn test_won_session_rejects_moves_and_stays_put() {
    let mut session = GameSession::with_seed(GameMode::TwoHuman, 3);
    for index in [0, 3, 1, 4, 2] {
        session.apply_move(index).unwrap();
    }
    assert_eq!(session.outcome().winner(), Some(Player::First));
    assert_eq!(session.status_message(), "Player X wins!");

    let before = session.snapshot();
    assert_eq!(
        session.apply_move(8),
        Err(GameError::IllegalAction(IllegalAction::GameOver))
    );
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_draw_between_humans() {
    let mut session = GameSession::with_seed(GameMode::TwoHuman, 3);
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.apply_move(index).unwrap();
    }
    assert_eq!(session.outcome(), &Outcome::Draw);
    assert_eq!(session.status_message(), "It's a draw!");
}

#[test]
fn test_optimal_opponent_never_loses_to_naive_play() {
    let mut session = GameSession::with_seed(GameMode::VsOptimal, 8);
    // X always takes the lowest free cell and ignores every threat.
    session.apply_move(1).unwrap();
    while !session.outcome().is_terminal() {
        if session.is_opponent_turn() {
            session.play_opponent_turn().unwrap();
        } else {
            let index = available_moves(session.board())[0];
            session.apply_move(index).unwrap();
        }
    }
    assert_ne!(session.outcome().winner(), Some(Player::First));
}

#[test]
fn test_snapshot_serializes() {
    let mut session = GameSession::with_seed(GameMode::VsRandom, 3);
    session.apply_move(4).unwrap();
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["mode"], "vs-random-opponent");
    assert_eq!(json["player_to_move"], "O");
    assert_eq!(json["outcome"]["status"], "ongoing");
    assert_eq!(json["message"], "Player O's turn");
}
