//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Coord, Mark};

/// Winning line indices on the 3x3 board, in detection order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Mark owning the first complete line, scanning rows, columns, then
    /// the two diagonals. Lines of empty cells never count.
    pub fn winner(cells: &[Cell; 9]) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|line| {
            let first = cells[line[0]];
            if line.iter().all(|&idx| cells[idx] == first) {
                first.mark()
            } else {
                None
            }
        })
    }

    /// First cell that completes a line for `me`.
    ///
    /// A line qualifies when it holds exactly two of `me` and none of
    /// `enemy`; lines are scanned in [`WINNING_LINES`] order. Passing the
    /// marks swapped finds the cell that blocks `enemy`.
    pub fn completing_move(cells: &[Cell; 9], me: Mark, enemy: Mark) -> Option<Coord> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::completing_move_in_line(cells, me, enemy, line))
    }

    fn completing_move_in_line(
        cells: &[Cell; 9],
        me: Mark,
        enemy: Mark,
        line: &[usize; 3],
    ) -> Option<Coord> {
        let mine = line.iter().filter(|&&i| cells[i] == me.to_cell()).count();
        let theirs = line.iter().filter(|&&i| cells[i] == enemy.to_cell()).count();
        if mine != 2 || theirs != 0 {
            return None;
        }
        line.iter()
            .copied()
            .find(|&i| cells[i] == Cell::Empty)
            .map(Coord::from_index)
    }

    /// Lines through `index` that hold no `enemy` mark
    pub fn open_lines_through(cells: &[Cell; 9], index: usize, enemy: Mark) -> usize {
        WINNING_LINES
            .iter()
            .filter(|line| line.contains(&index))
            .filter(|line| line.iter().all(|&i| cells[i] != enemy.to_cell()))
            .count()
    }

    /// Number of winning lines through each cell (3 corners, 2 edges, 4 centre)
    pub fn lines_through(index: usize) -> usize {
        WINNING_LINES
            .iter()
            .filter(|line| line.contains(&index))
            .count()
    }
}
