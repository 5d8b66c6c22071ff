//! Move selection for every strategy

use rand::Rng;

use super::{Strategy, probability::CumulativeTable};
use crate::{
    Error, Result,
    learning::{LearningTables, StateValues},
    tictactoe::{Board, Coord, LineAnalyzer, Mark},
};

/// Choose an empty cell for `me` according to `strategy`.
///
/// `enemy` is the opposing mark; it decides which lines count as blocked
/// and which completing moves must be blocked. The board is not modified.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`] if the board is full, and
/// [`Error::DegenerateDistribution`] if a probability table has no mass
/// on any empty cell.
pub fn select_move<R: Rng>(
    strategy: Strategy,
    board: &Board,
    me: Mark,
    enemy: Mark,
    tables: &LearningTables,
    rng: &mut R,
) -> Result<Coord> {
    if board.is_full() {
        return Err(Error::NoValidMoves);
    }

    let coord = match strategy {
        Strategy::Random => random_cell(board, rng),
        Strategy::WinRandom => match winning_cell(board, me, enemy) {
            Some(coord) => coord,
            None => random_cell(board, rng),
        },
        Strategy::BlockRandom => match win_or_block(board, me, enemy) {
            Some(coord) => coord,
            None => random_cell(board, rng),
        },
        Strategy::StaticProbability => match win_or_block(board, me, enemy) {
            Some(coord) => coord,
            None => CumulativeTable::static_lines().sample(board, rng)?,
        },
        Strategy::DynamicProbability => match win_or_block(board, me, enemy) {
            Some(coord) => coord,
            None => match CumulativeTable::open_lines(board, enemy) {
                Some(table) => table.sample(board, rng)?,
                None => {
                    log::trace!("no open lines left for {me}, playing at random");
                    random_cell(board, rng)
                }
            },
        },
        Strategy::ReinforcedLearning1 => {
            CumulativeTable::cell_scores(board, &tables.cell_scores)
                .ok_or(Error::DegenerateDistribution)?
                .sample(board, rng)?
        }
        Strategy::ReinforcedLearning2 => best_state_value(board, me, &tables.state_values)?,
    };

    log::trace!("{strategy} playing {me} chose {coord}");
    Ok(coord)
}

/// Uniform rejection sampling over the 3x3 grid.
///
/// The board must have at least one empty cell.
fn random_cell<R: Rng>(board: &Board, rng: &mut R) -> Coord {
    loop {
        let coord = Coord::new(rng.random_range(0..3), rng.random_range(0..3));
        if board.is_empty(coord) {
            return coord;
        }
    }
}

fn winning_cell(board: &Board, me: Mark, enemy: Mark) -> Option<Coord> {
    let coord = LineAnalyzer::completing_move(board.cells(), me, enemy)?;
    log::trace!("winning move for {me} at {coord}");
    Some(coord)
}

fn blocking_cell(board: &Board, me: Mark, enemy: Mark) -> Option<Coord> {
    let coord = LineAnalyzer::completing_move(board.cells(), enemy, me)?;
    log::trace!("{me} must block {enemy} at {coord}");
    Some(coord)
}

fn win_or_block(board: &Board, me: Mark, enemy: Mark) -> Option<Coord> {
    winning_cell(board, me, enemy).or_else(|| blocking_cell(board, me, enemy))
}

/// Greedy one-ply lookahead over the state-value table.
///
/// Ties keep the earliest cell in scan order.
fn best_state_value(board: &Board, me: Mark, values: &StateValues) -> Result<Coord> {
    let mut best: Option<(Coord, u32)> = None;
    for coord in board.empty_cells() {
        let value = values.get(board.with_mark(coord, me).key());
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((coord, value));
        }
    }
    best.map(|(coord, _)| coord).ok_or(Error::NoValidMoves)
}

/// State value of every legal move for `me`, in scan order
pub fn lookahead_values(board: &Board, me: Mark, values: &StateValues) -> Vec<(Coord, Board, u32)> {
    board
        .empty_cells()
        .into_iter()
        .map(|coord| {
            let next = board.with_mark(coord, me);
            (coord, next, values.get(next.key()))
        })
        .collect()
}
