//! Full games through the engine

mod common;

use common::seeded_engine;
use noughts::{
    Board, Engine, EngineConfig, Error, GameOutcome, LearningTables, Mark, RewardConfig, Strategy,
    tictactoe::{Coord, Game, GameStatus},
};

#[test]
fn test_random_games_terminate_with_a_valid_outcome() {
    let mut engine = seeded_engine(2024);
    let mut draws = 0;
    for _ in 0..1000 {
        let mut board = Board::new();
        let outcome = engine
            .play_game(&mut board, Strategy::Random, Strategy::Random)
            .unwrap();
        assert!(board.occupied_count() <= 9);
        match outcome {
            GameOutcome::Win(mark) => assert_eq!(board.winner(), Some(mark)),
            GameOutcome::Draw => {
                assert!(board.is_full());
                assert_eq!(board.winner(), None);
                draws += 1;
            }
        }
    }
    assert!(draws < 1000);
    // Neither table moves without a learner at the board.
    assert_eq!(engine.tables(), &LearningTables::default());
}

#[test]
fn test_player1_moves_first_and_marks_alternate() {
    let mut engine = seeded_engine(5);
    for _ in 0..50 {
        let mut board = Board::new();
        engine
            .play_game(&mut board, Strategy::DynamicProbability, Strategy::Random)
            .unwrap();
        let o = board.cells().iter().filter(|c| c.mark() == Some(Mark::O)).count();
        let x = board.cells().iter().filter(|c| c.mark() == Some(Mark::X)).count();
        assert!(o == x || o == x + 1, "O={o} X={x}");
    }
}

#[test]
fn test_swapped_marks_let_x_move_first() {
    let config = EngineConfig::new()
        .with_seed(8)
        .with_marks(Mark::X, Mark::O);
    let mut engine = Engine::new(config).unwrap();
    let mut board = Board::new();
    engine
        .play_game(&mut board, Strategy::Random, Strategy::Random)
        .unwrap();
    let x = board.cells().iter().filter(|c| c.mark() == Some(Mark::X)).count();
    let o = board.cells().iter().filter(|c| c.mark() == Some(Mark::O)).count();
    assert!(x == o || x == o + 1);
}

#[test]
fn test_identical_marks_are_rejected() {
    let config = EngineConfig::new().with_marks(Mark::O, Mark::O);
    assert!(matches!(
        Engine::new(config),
        Err(Error::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_same_seed_replays_the_same_learning() {
    let mut first = seeded_engine(77);
    let mut second = seeded_engine(77);
    for _ in 0..300 {
        let a = first
            .play_new_game(Strategy::ReinforcedLearning1, Strategy::ReinforcedLearning2)
            .unwrap();
        let b = second
            .play_new_game(Strategy::ReinforcedLearning1, Strategy::ReinforcedLearning2)
            .unwrap();
        assert_eq!(a, b);
    }
    assert_eq!(first.tables(), second.tables());
}

#[test]
fn test_scores_never_drop_below_one() {
    let rewards = RewardConfig {
        cell_loss_penalty: 40,
        state_loss_penalty: 60,
        ..RewardConfig::default()
    };
    let mut engine = Engine::new(EngineConfig::new().with_seed(3).with_rewards(rewards)).unwrap();
    for _ in 0..2000 {
        engine
            .play_new_game(Strategy::ReinforcedLearning1, Strategy::BlockRandom)
            .unwrap();
        engine
            .play_new_game(Strategy::BlockRandom, Strategy::ReinforcedLearning2)
            .unwrap();
    }
    let tables = engine.tables();
    assert!(tables.cell_scores.scores().iter().all(|&s| s >= 1));
    assert!(tables.state_values.min_value() >= 1);
    assert!(tables.state_values.touched(rewards.initial_state_value) > 0);
}

#[test]
fn test_moves_after_the_end_are_rejected() {
    let mut game = Game::new(Mark::O, Mark::X);
    for coord in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        game.play(Coord::new(coord.0, coord.1)).unwrap();
    }
    assert_eq!(game.play(Coord::new(0, 2)).unwrap(), GameStatus::Won(Mark::O));
    assert!(matches!(game.play(Coord::new(2, 2)), Err(Error::GameOver)));
    assert_eq!(game.move_list().len(), 5);
}

#[test]
fn test_occupied_cell_is_an_invalid_move() {
    let mut game = Game::new(Mark::O, Mark::X);
    game.play(Coord::new(1, 1)).unwrap();
    assert!(matches!(
        game.play(Coord::new(1, 1)),
        Err(Error::InvalidMove { row: 1, col: 1 })
    ));
}
