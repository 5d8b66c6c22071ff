//! Per-cell score table used by the score-driven learner

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Cell, Coord, GameOutcome};

/// Score for each of the nine cells.
///
/// Scores never drop below 1, so every cell keeps a non-zero chance of
/// being chosen and the total over any set of empty cells is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellScores {
    scores: [u32; 9],
    win_reward: u32,
    loss_penalty: u32,
}

impl CellScores {
    /// Create a table with every cell at `initial` (at least 1)
    pub fn new(initial: u32, win_reward: u32, loss_penalty: u32) -> Self {
        Self {
            scores: [initial.max(1); 9],
            win_reward,
            loss_penalty,
        }
    }

    pub fn get(&self, coord: Coord) -> u32 {
        self.scores[coord.index()]
    }

    /// Scores in row-major order
    pub fn scores(&self) -> &[u32; 9] {
        &self.scores
    }

    /// Reward the winner's cells and penalise the loser's.
    ///
    /// Draws leave the table unchanged. Empty cells are never touched.
    pub fn update(&mut self, board: &Board, outcome: GameOutcome) {
        let GameOutcome::Win(winner) = outcome else {
            return;
        };
        let loser = winner.opponent();

        for (score, &cell) in self.scores.iter_mut().zip(board.cells()) {
            if cell == winner.to_cell() {
                *score = score.saturating_add(self.win_reward);
            } else if cell == loser.to_cell() {
                *score = score.saturating_sub(self.loss_penalty).max(1);
            }
        }
    }

    /// Weights for the empty cells of `board`, zero elsewhere
    pub fn weights_for(&self, board: &Board) -> [f64; 9] {
        let mut weights = [0.0; 9];
        for (i, (&score, &cell)) in self.scores.iter().zip(board.cells()).enumerate() {
            if cell == Cell::Empty {
                weights[i] = f64::from(score);
            }
        }
        weights
    }
}

impl Default for CellScores {
    fn default() -> Self {
        Self::new(100, 5, 1)
    }
}
