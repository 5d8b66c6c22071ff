//! Observer port - abstraction for watching games as they are played
//!
//! Console rendering, progress bars and metrics hook into the engine
//! through this trait, so the game loop never formats output itself.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, StateKey},
};

/// Observer trait for monitoring games
///
/// # Event Sequence
///
/// 1. `on_phase_start(label, total_games)` - Once per batch of games
/// 2. For each game:
///    - `on_move(...)` - After every ply
///    - `on_game_end(...)` - After learning updates were applied
/// 3. `on_phase_end()` - Once the batch is done
///
/// Games played outside a phase (for example a single `play_game` call)
/// only produce the per-game events.
///
/// # Examples
///
/// ```no_run
/// use noughts::{
///     ports::Observer,
///     tictactoe::{Board, GameOutcome},
/// };
///
/// struct CountingObserver {
///     games: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_game_end(&mut self, _outcome: GameOutcome, _board: &Board) -> noughts::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called before a batch of games.
    ///
    /// # Parameters
    ///
    /// * `label` - Human-readable description of the batch
    /// * `total_games` - Number of games that will be played
    fn on_phase_start(&mut self, _label: &str, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each ply.
    ///
    /// # Parameters
    ///
    /// * `ply` - Ply index within the game (0-based)
    /// * `board` - Board after the mark was placed
    /// * `key` - State key of `board`
    fn on_move(&mut self, _ply: usize, _board: &Board, _key: StateKey) -> Result<()> {
        Ok(())
    }

    /// Called when a game ends, with its final board.
    fn on_game_end(&mut self, _outcome: GameOutcome, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called after the last game of a batch.
    fn on_phase_end(&mut self) -> Result<()> {
        Ok(())
    }
}
