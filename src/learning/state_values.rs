//! Value table indexed by board state key

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameOutcome, Mark, STATE_COUNT, StateKey};

/// Learned value of every board configuration.
///
/// Values start at a neutral constant and never fall below 1 on decrement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateValues {
    values: Vec<u32>,
    win_reward: u32,
    loss_penalty: u32,
}

impl StateValues {
    pub fn new(initial: u32, win_reward: u32, loss_penalty: u32) -> Self {
        Self {
            values: vec![initial.max(1); STATE_COUNT],
            win_reward,
            loss_penalty,
        }
    }

    pub fn get(&self, key: StateKey) -> u32 {
        self.values[key.index()]
    }

    /// Back-propagate a finished game over its move list.
    ///
    /// Ply `i` belongs to `player1` when `i` is even and to `player2`
    /// otherwise. The state reached by each ply gains `win_reward` when
    /// its player won and loses `loss_penalty` when it lost.
    pub fn update(
        &mut self,
        move_list: &[StateKey],
        player1: Mark,
        player2: Mark,
        outcome: GameOutcome,
    ) {
        let GameOutcome::Win(winner) = outcome else {
            return;
        };

        for (ply, key) in move_list.iter().enumerate() {
            let mover = if ply.is_multiple_of(2) {
                player1
            } else {
                player2
            };
            let value = &mut self.values[key.index()];
            if mover == winner {
                *value = value.saturating_add(self.win_reward);
            } else {
                *value = value.saturating_sub(self.loss_penalty).max(1);
            }
        }
    }

    /// Number of states whose value moved away from `initial`
    pub fn touched(&self, initial: u32) -> usize {
        self.values.iter().filter(|&&v| v != initial).count()
    }

    pub fn min_value(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or(1)
    }
}

impl Default for StateValues {
    fn default() -> Self {
        Self::new(100, 11, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Coord};

    fn keys(boards: &[&str]) -> Vec<StateKey> {
        boards
            .iter()
            .map(|b| Board::from_string(b).unwrap().key())
            .collect()
    }

    #[test]
    fn test_player1_win_rewards_even_plies() {
        let mut table = StateValues::default();
        let list = keys(&["O........", "O...X....", "OO..X....", "OO..X..X.", "OOO.X..X."]);
        table.update(&list, Mark::O, Mark::X, GameOutcome::Win(Mark::O));

        assert_eq!(table.get(list[0]), 111);
        assert_eq!(table.get(list[1]), 95);
        assert_eq!(table.get(list[2]), 111);
        assert_eq!(table.get(list[3]), 95);
        assert_eq!(table.get(list[4]), 111);
    }

    #[test]
    fn test_player2_win_rewards_odd_plies() {
        let mut table = StateValues::default();
        let list = keys(&["O........", "O...X...."]);
        table.update(&list, Mark::O, Mark::X, GameOutcome::Win(Mark::X));
        assert_eq!(table.get(list[0]), 95);
        assert_eq!(table.get(list[1]), 111);
    }

    #[test]
    fn test_draw_leaves_values() {
        let mut table = StateValues::default();
        let list = keys(&["O........", "O...X...."]);
        table.update(&list, Mark::O, Mark::X, GameOutcome::Draw);
        assert_eq!(table, StateValues::default());
    }

    #[test]
    fn test_floor_at_one() {
        let mut table = StateValues::new(3, 11, 5);
        let key = Board::new().with_mark(Coord::new(1, 1), Mark::O).key();
        for _ in 0..10 {
            table.update(&[key], Mark::O, Mark::X, GameOutcome::Win(Mark::X));
        }
        assert_eq!(table.get(key), 1);
        assert_eq!(table.min_value(), 1);
    }

    #[test]
    fn test_touched() {
        let mut table = StateValues::default();
        assert_eq!(table.touched(100), 0);
        let list = keys(&["O........"]);
        table.update(&list, Mark::O, Mark::X, GameOutcome::Win(Mark::O));
        assert_eq!(table.touched(100), 1);
    }
}
