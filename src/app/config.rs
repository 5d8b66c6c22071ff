//! Configuration types for engine creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, learning::RewardConfig, tictactoe::Mark};

/// Configuration for creating an [`Engine`](crate::engine::Engine).
///
/// # Examples
///
/// ```
/// use noughts::app::EngineConfig;
/// use noughts::tictactoe::Mark;
///
/// let config = EngineConfig::new()
///     .with_seed(42)
///     .with_marks(Mark::X, Mark::O);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Mark of the player moving on even plies
    pub player1: Mark,
    /// Mark of the player moving on odd plies
    pub player2: Mark,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Learning table rewards and starting values
    pub rewards: RewardConfig,
}

impl EngineConfig {
    /// Default configuration: player 1 is `O`, player 2 is `X`, no seed.
    pub fn new() -> Self {
        Self {
            player1: Mark::O,
            player2: Mark::X,
            seed: None,
            rewards: RewardConfig::default(),
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the marks used by player 1 and player 2.
    pub fn with_marks(mut self, player1: Mark, player2: Mark) -> Self {
        self.player1 = player1;
        self.player2 = player2;
        self
    }

    /// Set the learning rewards.
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if both players share a mark.
    pub fn validate(&self) -> Result<()> {
        if self.player1 == self.player2 {
            return Err(Error::InvalidConfiguration {
                message: format!("both players use mark '{}'", self.player1),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
