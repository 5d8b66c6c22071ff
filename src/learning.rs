//! Learning tables fed back into move selection across games
//!
//! Two independent tables are kept:
//!
//! - [`CellScores`]: a 3x3 score per cell, read by the score learner
//!   (`ReinforcedLearning1`)
//! - [`StateValues`]: a value per board state key, read by the state-value
//!   learner (`ReinforcedLearning2`)
//!
//! Both are plain values owned by the caller (normally the
//! [`Engine`](crate::engine::Engine)) and passed by reference to the
//! selectors. Nothing here is persisted between runs.

pub mod cell_scores;
pub mod state_values;

use serde::{Deserialize, Serialize};

pub use cell_scores::CellScores;
pub use state_values::StateValues;

/// Rewards, penalties and starting values for both tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Starting score of every cell
    pub initial_cell_score: u32,
    /// Added to each cell held by the winner
    pub cell_win_reward: u32,
    /// Removed from each cell held by the loser
    pub cell_loss_penalty: u32,
    /// Starting value of every state
    pub initial_state_value: u32,
    /// Added to states reached by the winner
    pub state_win_reward: u32,
    /// Removed from states reached by the loser
    pub state_loss_penalty: u32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            initial_cell_score: 100,
            cell_win_reward: 5,
            cell_loss_penalty: 1,
            initial_state_value: 100,
            state_win_reward: 11,
            state_loss_penalty: 5,
        }
    }
}

/// Both learning tables together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTables {
    pub cell_scores: CellScores,
    pub state_values: StateValues,
}

impl LearningTables {
    pub fn new(rewards: &RewardConfig) -> Self {
        Self {
            cell_scores: CellScores::new(
                rewards.initial_cell_score,
                rewards.cell_win_reward,
                rewards.cell_loss_penalty,
            ),
            state_values: StateValues::new(
                rewards.initial_state_value,
                rewards.state_win_reward,
                rewards.state_loss_penalty,
            ),
        }
    }
}

impl Default for LearningTables {
    fn default() -> Self {
        Self::new(&RewardConfig::default())
    }
}
