//! Observer implementations for console output and progress bars
//!
//! Each console printout is its own observer so the CLI can switch them on
//! independently.

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, StateKey},
};

/// Prints the board after every ply
#[derive(Debug, Default)]
pub struct BoardPrinter;

impl Observer for BoardPrinter {
    fn on_move(&mut self, ply: usize, board: &Board, key: StateKey) -> Result<()> {
        println!("Move: {ply} ({key})\n");
        println!("{}\n", board.render());
        Ok(())
    }
}

/// Prints the outcome and final position of every game
#[derive(Debug, Default)]
pub struct ResultPrinter;

impl Observer for ResultPrinter {
    fn on_game_end(&mut self, outcome: GameOutcome, board: &Board) -> Result<()> {
        match outcome {
            GameOutcome::Win(mark) => println!("{mark} won! Final position: "),
            GameOutcome::Draw => println!("No Winner! Final position: "),
        }
        println!("{}\n", board.render());
        Ok(())
    }
}

/// Progress bar observer - one bar per phase
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    games: u64,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            games: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_phase_start(&mut self, label: &str, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        pb.set_message(label.to_string());
        self.progress_bar = Some(pb);
        self.games = 0;
        Ok(())
    }

    fn on_game_end(&mut self, _outcome: GameOutcome, _board: &Board) -> Result<()> {
        self.games += 1;
        if let Some(pb) = &self.progress_bar {
            pb.set_position(self.games);
        }
        Ok(())
    }

    fn on_phase_end(&mut self) -> Result<()> {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_observer_lifecycle() {
        let mut progress = ProgressObserver::new();
        progress.on_phase_start("test", 2).unwrap();
        progress
            .on_game_end(GameOutcome::Draw, &Board::new())
            .unwrap();
        assert_eq!(progress.games, 1);
        progress.on_phase_end().unwrap();
        assert!(progress.progress_bar.is_none());
    }
}
