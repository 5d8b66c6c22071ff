//! Integer encoding of board configurations
//!
//! Each cell contributes `v * 3^i` where `i` is its row-major index and `v`
//! is 0 for empty, 1 for O and 2 for X. The mapping is a bijection between
//! boards and keys in `0..STATE_COUNT`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Board, Cell};

/// Number of distinct keys (3^9)
pub const STATE_COUNT: usize = 19_683;

/// Key of a board configuration in the state-value table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey(u16);

impl StateKey {
    pub fn encode(board: &Board) -> StateKey {
        let key = board
            .cells()
            .iter()
            .rev()
            .fold(0u16, |acc, &cell| acc * 3 + digit(cell));
        StateKey(key)
    }

    /// Board for a key, or `None` if the key is out of range
    pub fn decode(self) -> Option<Board> {
        if self.index() >= STATE_COUNT {
            return None;
        }
        let mut rest = self.0;
        let mut cells = [Cell::Empty; 9];
        for cell in &mut cells {
            *cell = match rest % 3 {
                0 => Cell::Empty,
                1 => Cell::O,
                _ => Cell::X,
            };
            rest /= 3;
        }
        Some(Board::from_cells(cells))
    }

    /// Key from a raw value, rejecting out-of-range values
    pub fn from_raw(raw: u16) -> Option<StateKey> {
        ((raw as usize) < STATE_COUNT).then_some(StateKey(raw))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn raw(self) -> u16 {
        self.0
    }
}

fn digit(cell: Cell) -> u16 {
    match cell {
        Cell::Empty => 0,
        Cell::O => 1,
        Cell::X => 2,
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::tictactoe::{Coord, Mark};

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(Board::new().key().raw(), 0);
    }

    #[test]
    fn test_digit_weights() {
        let board = Board::new().with_mark(Coord::new(0, 0), Mark::O);
        assert_eq!(board.key().raw(), 1);

        let board = Board::new().with_mark(Coord::new(0, 1), Mark::X);
        assert_eq!(board.key().raw(), 2 * 3);

        let board = Board::new().with_mark(Coord::new(2, 2), Mark::X);
        assert_eq!(board.key().raw(), 2 * 3u16.pow(8));
    }

    #[test]
    fn test_all_ones_and_twos() {
        let all_x = Board::from_string("XXXXXXXXX").unwrap();
        assert_eq!(all_x.key().index(), STATE_COUNT - 1);
    }

    #[test]
    fn test_decode_encode_bijection() {
        let mut seen = HashSet::new();
        for raw in 0..STATE_COUNT as u16 {
            let key = StateKey::from_raw(raw).unwrap();
            let board = key.decode().unwrap();
            assert_eq!(board.key(), key);
            assert!(seen.insert(board));
        }
        assert_eq!(seen.len(), STATE_COUNT);
    }

    #[test]
    fn test_out_of_range() {
        assert!(StateKey::from_raw(STATE_COUNT as u16).is_none());
    }
}
