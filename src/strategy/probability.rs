//! Cumulative probability tables and the shared sampling routine

use std::sync::LazyLock;

use rand::Rng;

use crate::{
    Error, Result,
    learning::CellScores,
    tictactoe::{Board, Cell, Coord, LineAnalyzer, Mark},
};

/// Cumulative distribution over the nine cells in row-major order.
///
/// Entries are non-decreasing and the last one is 1.0 up to rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeTable {
    cumulative: [f64; 9],
}

/// Line-count distribution, independent of the board
static STATIC_TABLE: LazyLock<CumulativeTable> = LazyLock::new(|| {
    let weights: [f64; 9] = std::array::from_fn(|i| LineAnalyzer::lines_through(i) as f64);
    // every cell lies on at least two lines, so the total is never zero
    CumulativeTable::from_weights(weights).unwrap_or(CumulativeTable {
        cumulative: [1.0; 9],
    })
});

impl CumulativeTable {
    /// Normalise `weights` and accumulate them in scan order.
    ///
    /// Returns `None` when the weights sum to zero.
    pub fn from_weights(weights: [f64; 9]) -> Option<Self> {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return None;
        }

        let mut cumulative = [0.0; 9];
        let mut running = 0.0;
        for (slot, weight) in cumulative.iter_mut().zip(weights) {
            running += weight / total;
            *slot = running;
        }
        Some(Self { cumulative })
    }

    /// Fixed table weighting each cell by the winning lines through it
    /// (3 per corner, 2 per edge, 4 for the centre, out of 24).
    pub fn static_lines() -> &'static CumulativeTable {
        &STATIC_TABLE
    }

    /// Table for the current board: each empty cell weighted by the lines
    /// through it that `enemy` has not entered yet.
    ///
    /// Returns `None` when no empty cell lies on an open line.
    pub fn open_lines(board: &Board, enemy: Mark) -> Option<Self> {
        let cells = board.cells();
        let weights: [f64; 9] = std::array::from_fn(|i| {
            if cells[i] == Cell::Empty {
                LineAnalyzer::open_lines_through(cells, i, enemy) as f64
            } else {
                0.0
            }
        });
        Self::from_weights(weights)
    }

    /// Table proportional to the cell scores of the empty cells
    pub fn cell_scores(board: &Board, scores: &CellScores) -> Option<Self> {
        Self::from_weights(scores.weights_for(board))
    }

    pub fn values(&self) -> &[f64; 9] {
        &self.cumulative
    }

    /// Draw a cell from the table.
    ///
    /// Draws `u` in `[0, 1)` and returns the first empty cell in scan order
    /// whose cumulative value exceeds it. When rounding leaves no such cell
    /// the draw is repeated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] on a full board and
    /// [`Error::DegenerateDistribution`] when no empty cell can ever be hit.
    pub fn sample<R: Rng>(&self, board: &Board, rng: &mut R) -> Result<Coord> {
        let reach = board
            .empty_cells()
            .last()
            .map(|c| self.cumulative[c.index()])
            .ok_or(Error::NoValidMoves)?;
        if reach <= 0.0 {
            return Err(Error::DegenerateDistribution);
        }

        loop {
            let draw: f64 = rng.random();
            let hit = Coord::all()
                .find(|&c| self.cumulative[c.index()] > draw && board.is_empty(c));
            if let Some(coord) = hit {
                log::trace!("sampled {coord} with draw {draw:.4}");
                return Ok(coord);
            }
            log::trace!("draw {draw:.4} missed every empty cell, redrawing");
        }
    }
}
