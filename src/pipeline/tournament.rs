//! Training and evaluation over every ordered pair of strategies

use serde::{Deserialize, Serialize};

use super::results::{Record, ResultsTable};
use crate::{Error, Result, engine::Engine, strategy::Strategy};

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Games played per pairing before counting starts (outcomes discarded)
    pub training_games: usize,

    /// Games counted per pairing
    pub evaluation_games: usize,

    /// Warm-up games per learning strategy; defaults to `training_games`
    pub warmup_games: Option<usize>,

    /// Opponent the learning strategies face during warm-up
    pub warmup_opponent: Strategy,

    /// Strategies taking part, in table order
    pub strategies: Vec<Strategy>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            training_games: 1000,
            evaluation_games: 1000,
            warmup_games: None,
            warmup_opponent: Strategy::DynamicProbability,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl TournamentConfig {
    pub fn warmup_games(&self) -> usize {
        self.warmup_games.unwrap_or(self.training_games)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an empty or repeated
    /// strategy list.
    pub fn validate(&self) -> Result<()> {
        if self.strategies.is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "tournament needs at least one strategy".to_string(),
            });
        }
        for (i, strategy) in self.strategies.iter().enumerate() {
            if self.strategies[..i].contains(strategy) {
                return Err(Error::InvalidConfiguration {
                    message: format!("strategy '{strategy}' listed twice"),
                });
            }
        }
        Ok(())
    }
}

/// Round-robin driver: warm-up, then train and evaluate each pairing
pub struct Tournament {
    config: TournamentConfig,
}

impl Tournament {
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: TournamentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Play every learning strategy in the list as player 1 against the
    /// warm-up opponent. Outcomes are discarded; only the tables change.
    pub fn warm_up(&self, engine: &mut Engine) -> Result<()> {
        let games = self.config.warmup_games();
        if games == 0 {
            return Ok(());
        }
        let opponent = self.config.warmup_opponent;

        for &learner in self.config.strategies.iter().filter(|s| s.is_learning()) {
            log::info!("warm-up: {learner} vs {opponent} ({games} games)");
            engine.begin_phase(&format!("warm-up {learner} vs {opponent}"), games)?;
            for _ in 0..games {
                engine.play_new_game(learner, opponent)?;
            }
            engine.end_phase()?;
        }
        Ok(())
    }

    /// Train then evaluate one ordered pairing
    pub fn run_pairing(
        &self,
        engine: &mut Engine,
        player1: Strategy,
        player2: Strategy,
    ) -> Result<Record> {
        let training = self.config.training_games;
        let evaluation = self.config.evaluation_games;

        engine.begin_phase(&format!("{player1} vs {player2}"), training + evaluation)?;
        for _ in 0..training {
            engine.play_new_game(player1, player2)?;
        }

        let mark = engine.config().player1;
        let mut record = Record::default();
        for _ in 0..evaluation {
            let outcome = engine.play_new_game(player1, player2)?;
            record.record(outcome, mark);
        }
        engine.end_phase()?;

        log::info!("{player1} vs {player2}: {record}");
        Ok(record)
    }

    /// Warm up, then run every ordered pairing (including self-play)
    pub fn run(&self, engine: &mut Engine) -> Result<ResultsTable> {
        self.warm_up(engine)?;

        let strategies = self.config.strategies.clone();
        let mut table = ResultsTable::new(strategies.clone());
        for (i, &player1) in strategies.iter().enumerate() {
            for (j, &player2) in strategies.iter().enumerate() {
                let record = self.run_pairing(engine, player1, player2)?;
                table.set(i, j, record);
            }
        }
        Ok(table)
    }
}
