//! Game runner: plays one game between two strategies and feeds the
//! outcome back into the learning tables.

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Error, Result,
    app::EngineConfig,
    learning::LearningTables,
    ports::Observer,
    strategy::{Strategy, select_move},
    tictactoe::{Board, Game, GameOutcome},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Owns the learning tables and one random source per seat.
///
/// Seat 0 (player 1) draws from a generator seeded with `seed`, seat 1
/// from `seed + 1`, so each side's randomness can be replayed on its own.
pub struct Engine {
    config: EngineConfig,
    tables: LearningTables,
    rngs: [StdRng; 2],
    observers: Vec<Box<dyn Observer>>,
}

impl Engine {
    /// Create an engine with fresh learning tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let tables = LearningTables::new(&config.rewards);
        let rngs = Self::seat_rngs(config.seed);
        Ok(Self {
            config,
            tables,
            rngs,
            observers: Vec::new(),
        })
    }

    fn seat_rngs(seed: Option<u64>) -> [StdRng; 2] {
        [
            build_rng(seed),
            build_rng(seed.map(|s| s.wrapping_add(1))),
        ]
    }

    /// Add an observer
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tables(&self) -> &LearningTables {
        &self.tables
    }

    /// Play a game from `board` to completion.
    ///
    /// Player 1 moves first with `player1`'s strategy. The board is updated
    /// in place. When either side used a learning strategy the matching
    /// table is updated before the outcome is returned.
    ///
    /// # Errors
    ///
    /// Propagates selector and placement errors. A selector choosing an
    /// occupied cell is a bug and aborts the game with
    /// [`Error::InvalidMove`].
    pub fn play_game(
        &mut self,
        board: &mut Board,
        player1: Strategy,
        player2: Strategy,
    ) -> Result<GameOutcome> {
        let mut game = Game::from_board(*board, self.config.player1, self.config.player2);

        while !game.status().is_terminal() {
            let seat = game.ply() % 2;
            let (strategy, me) = if seat == 0 {
                (player1, game.player1())
            } else {
                (player2, game.player2())
            };

            let coord = select_move(
                strategy,
                game.board(),
                me,
                me.opponent(),
                &self.tables,
                &mut self.rngs[seat],
            )?;
            game.play(coord)?;

            let ply = game.ply() - 1;
            let key = game.move_list()[ply];
            for observer in &mut self.observers {
                observer.on_move(ply, game.board(), key)?;
            }
        }

        let outcome = game.status().outcome().ok_or(Error::GameOver)?;
        let (final_board, move_list) = game.into_parts();

        if !move_list.is_empty() {
            self.learn(player1, player2, &final_board, &move_list, outcome);
        }

        log::debug!(
            "{player1} vs {player2}: {outcome} after {} plies",
            move_list.len()
        );

        for observer in &mut self.observers {
            observer.on_game_end(outcome, &final_board)?;
        }

        *board = final_board;
        Ok(outcome)
    }

    /// Play a game on a fresh board
    pub fn play_new_game(&mut self, player1: Strategy, player2: Strategy) -> Result<GameOutcome> {
        let mut board = Board::new();
        self.play_game(&mut board, player1, player2)
    }

    fn learn(
        &mut self,
        player1: Strategy,
        player2: Strategy,
        board: &Board,
        move_list: &[crate::tictactoe::StateKey],
        outcome: GameOutcome,
    ) {
        let uses = |strategy: Strategy| player1 == strategy || player2 == strategy;

        if uses(Strategy::ReinforcedLearning1) {
            self.tables.cell_scores.update(board, outcome);
        }
        if uses(Strategy::ReinforcedLearning2) {
            self.tables.state_values.update(
                move_list,
                self.config.player1,
                self.config.player2,
                outcome,
            );
        }
    }

    /// Forward a phase start to every observer
    pub fn begin_phase(&mut self, label: &str, total_games: usize) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_phase_start(label, total_games)?;
        }
        Ok(())
    }

    /// Forward a phase end to every observer
    pub fn end_phase(&mut self) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_phase_end()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        learning::{CellScores, StateValues},
        tictactoe::{Coord, Mark, StateKey},
    };

    fn engine(seed: u64) -> Engine {
        Engine::new(EngineConfig::new().with_seed(seed)).unwrap()
    }

    #[test]
    fn test_random_games_terminate() {
        let mut engine = engine(42);
        for _ in 0..1000 {
            let mut board = Board::new();
            let outcome = engine
                .play_game(&mut board, Strategy::Random, Strategy::Random)
                .unwrap();
            let plies = board.occupied_count();
            assert!(plies <= 9);
            match outcome {
                GameOutcome::Win(mark) => assert_eq!(board.winner(), Some(mark)),
                GameOutcome::Draw => {
                    assert!(board.is_full());
                    assert_eq!(board.winner(), None);
                }
            }
        }
    }

    #[test]
    fn test_seeded_engines_replay_identically() {
        let mut a = engine(7);
        let mut b = engine(7);
        for _ in 0..50 {
            let mut board_a = Board::new();
            let mut board_b = Board::new();
            a.play_game(&mut board_a, Strategy::DynamicProbability, Strategy::Random)
                .unwrap();
            b.play_game(&mut board_b, Strategy::DynamicProbability, Strategy::Random)
                .unwrap();
            assert_eq!(board_a, board_b);
        }
    }

    #[test]
    fn test_non_learning_games_leave_tables_alone() {
        let mut engine = engine(1);
        for _ in 0..20 {
            engine
                .play_new_game(Strategy::BlockRandom, Strategy::WinRandom)
                .unwrap();
        }
        assert_eq!(engine.tables(), &LearningTables::default());
    }

    #[test]
    fn test_score_learner_updates_only_cell_scores() {
        let mut engine = engine(3);
        let mut decisive = false;
        for _ in 0..50 {
            let outcome = engine
                .play_new_game(Strategy::ReinforcedLearning1, Strategy::WinRandom)
                .unwrap();
            decisive |= outcome != GameOutcome::Draw;
        }
        assert!(decisive);
        assert_ne!(engine.tables().cell_scores, CellScores::default());
        assert_eq!(engine.tables().state_values, StateValues::default());
    }

    #[test]
    fn test_state_learner_updates_only_state_values() {
        let mut engine = engine(4);
        for _ in 0..50 {
            engine
                .play_new_game(Strategy::Random, Strategy::ReinforcedLearning2)
                .unwrap();
        }
        assert_eq!(engine.tables().cell_scores, CellScores::default());
        assert!(engine.tables().state_values.touched(100) > 0);
    }

    #[test]
    fn test_finished_board_is_returned_unchanged() {
        let mut engine = engine(0);
        let mut board = Board::from_string("OOO XX. ...").unwrap();
        let outcome = engine
            .play_game(&mut board, Strategy::Random, Strategy::Random)
            .unwrap();
        assert_eq!(outcome, GameOutcome::Win(Mark::O));
        assert_eq!(board, Board::from_string("OOO XX. ...").unwrap());
        assert_eq!(engine.tables(), &LearningTables::default());
    }

    #[test]
    fn test_win_random_finishes_prepared_line() {
        let mut engine = engine(0);
        let mut board = Board::from_string("OO. XX. ...").unwrap();
        let outcome = engine
            .play_game(&mut board, Strategy::WinRandom, Strategy::Random)
            .unwrap();
        assert_eq!(outcome, GameOutcome::Win(Mark::O));
        assert_eq!(board.get(Coord::new(0, 2)), crate::tictactoe::Cell::O);
    }

    #[test]
    fn test_observers_see_every_ply() {
        struct Recorder(Arc<Mutex<Vec<(usize, StateKey)>>>);

        impl Observer for Recorder {
            fn on_move(&mut self, ply: usize, board: &Board, key: StateKey) -> Result<()> {
                assert_eq!(board.key(), key);
                self.0.lock().unwrap().push((ply, key));
                Ok(())
            }
        }

        let log = Arc::new(Mutex::new(Vec::new()));
        let mut engine = engine(11).with_observer(Box::new(Recorder(Arc::clone(&log))));
        let mut board = Board::new();
        engine
            .play_game(&mut board, Strategy::Random, Strategy::Random)
            .unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log.len(), board.occupied_count());
        assert!(log.iter().enumerate().all(|(i, (ply, _))| i == *ply));
        assert_eq!(log.last().map(|(_, key)| *key), Some(board.key()));
    }
}
