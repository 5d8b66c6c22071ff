//! Move-selection strategies
//!
//! Seven interchangeable policies, in increasing sophistication:
//!
//! | Strategy | Win | Block | Fallback |
//! |----------|-----|-------|----------|
//! | `Random` | - | - | uniform rejection sampling |
//! | `WinRandom` | yes | - | uniform |
//! | `BlockRandom` | yes | yes | uniform |
//! | `StaticProbability` | yes | yes | fixed line-count distribution |
//! | `DynamicProbability` | yes | yes | open-line distribution for the board |
//! | `ReinforcedLearning1` | - | - | learned cell scores |
//! | `ReinforcedLearning2` | - | - | greedy on learned state values |
//!
//! The two learning strategies read the [`LearningTables`](crate::learning::LearningTables)
//! passed to [`select_move`]; everything random draws from the injected RNG.

pub mod probability;
pub mod selector;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use probability::CumulativeTable;
pub use selector::{lookahead_values, select_move};

/// Strategy tag bound to a player for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Random,
    WinRandom,
    BlockRandom,
    StaticProbability,
    DynamicProbability,
    /// Samples cells in proportion to the learned cell scores
    ReinforcedLearning1,
    /// Picks the move leading to the highest learned state value
    ReinforcedLearning2,
}

impl Strategy {
    /// Every strategy, in table order
    pub const ALL: [Strategy; 7] = [
        Strategy::Random,
        Strategy::WinRandom,
        Strategy::BlockRandom,
        Strategy::StaticProbability,
        Strategy::DynamicProbability,
        Strategy::ReinforcedLearning1,
        Strategy::ReinforcedLearning2,
    ];

    /// Strategies whose moves depend on a learning table
    pub const LEARNING: [Strategy; 2] = [Strategy::ReinforcedLearning1, Strategy::ReinforcedLearning2];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "Random",
            Strategy::WinRandom => "WinRandom",
            Strategy::BlockRandom => "BlockRandom",
            Strategy::StaticProbability => "StaticProbability",
            Strategy::DynamicProbability => "DynamicProbability",
            Strategy::ReinforcedLearning1 => "ReinforcedLearning1",
            Strategy::ReinforcedLearning2 => "ReinforcedLearning2",
        }
    }

    pub fn is_learning(self) -> bool {
        Self::LEARNING.contains(&self)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = crate::Error;

    /// Parse a strategy name, ignoring case, `-` and `_`.
    ///
    /// `rl1`/`ml-score` and `rl2`/`ml-state` are accepted as short forms
    /// of the two learners.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        let parsed = match normalized.as_str() {
            "rl1" | "mlscore" => Some(Strategy::ReinforcedLearning1),
            "rl2" | "mlstate" => Some(Strategy::ReinforcedLearning2),
            other => Strategy::ALL
                .into_iter()
                .find(|strategy| strategy.name().to_lowercase() == other),
        };

        parsed.ok_or_else(|| crate::Error::UnknownStrategy {
            name: s.to_string(),
            expected: Strategy::ALL.map(Strategy::name).join(", "),
        })
    }
}
