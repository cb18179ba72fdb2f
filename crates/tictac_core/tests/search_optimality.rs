//! Exhaustive checks that the minimax opponent plays perfectly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictac_core::{Board, Outcome, Player, SearchStrategy, Strategy, available_moves, evaluate};

/// Plays the engine as `engine` against every possible sequence of
/// opponent replies and returns the number of finished games.
///
/// Panics if any line ends in a loss for the engine.
fn never_loses(board: Board, to_move: Player, engine: Player) -> usize {
    match evaluate(&board) {
        Outcome::Won { player, .. } => {
            assert_eq!(player, engine, "engine lost on\n{board}");
            return 1;
        }
        Outcome::Draw => return 1,
        Outcome::Ongoing => {}
    }

    if to_move == engine {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let index = SearchStrategy::exhaustive()
            .choose_move(&board, engine, &mut rng)
            .unwrap();
        let next = board.with_move(index, engine).unwrap();
        never_loses(next, to_move.opponent(), engine)
    } else {
        available_moves(&board)
            .into_iter()
            .map(|index| {
                let next = board.with_move(index, to_move).unwrap();
                never_loses(next, to_move.opponent(), engine)
            })
            .sum()
    }
}

#[test]
fn test_engine_never_loses_as_x() {
    let games = never_loses(Board::empty(), Player::First, Player::First);
    assert!(games > 0);
}

#[test]
fn test_engine_never_loses_as_o() {
    let games = never_loses(Board::empty(), Player::First, Player::Second);
    assert!(games > 0);
}

#[test]
fn test_self_play_always_draws() {
    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let engine = SearchStrategy::new();
        let mut board = Board::empty();
        let mut player = Player::First;
        while !evaluate(&board).is_terminal() {
            let index = engine.choose_move(&board, player, &mut rng).unwrap();
            board = board.with_move(index, player).unwrap();
            player = player.opponent();
        }
        assert_eq!(evaluate(&board), Outcome::Draw, "seed {seed}:\n{board}");
    }
}

#[test]
fn test_every_opening_draws_under_self_play() {
    let engine = SearchStrategy::exhaustive();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for opening in 0..9 {
        let mut board = Board::empty().with_move(opening, Player::First).unwrap();
        let mut player = Player::Second;
        while !evaluate(&board).is_terminal() {
            let index = engine.choose_move(&board, player, &mut rng).unwrap();
            board = board.with_move(index, player).unwrap();
            player = player.opponent();
        }
        assert_eq!(evaluate(&board), Outcome::Draw, "opening {opening}");
    }
}
