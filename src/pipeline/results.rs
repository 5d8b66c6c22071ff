//! Win/draw/loss tallies per strategy pairing and their rendering

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};
use tabled::{builder::Builder, settings::Style};

use crate::{
    Result,
    strategy::Strategy,
    tictactoe::{GameOutcome, Mark},
};

/// Header of the corner cell of the results table
pub const CORNER_HEADER: &str = "P1 / D / P2";

/// Tally of evaluation games for one ordered pairing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Games won by player 1 (the row strategy)
    pub player1_wins: usize,
    pub draws: usize,
    /// Games won by player 2 (the column strategy)
    pub player2_wins: usize,
}

impl Record {
    /// Count one outcome, given the marks the two players used
    pub fn record(&mut self, outcome: GameOutcome, player1: Mark) {
        match outcome {
            GameOutcome::Win(mark) if mark == player1 => self.player1_wins += 1,
            GameOutcome::Win(_) => self.player2_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.player1_wins + self.draws + self.player2_wins
    }

    /// Player 1 win rate, 0 when no games were recorded
    pub fn win_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.player1_wins as f64 / self.total() as f64
        }
    }
}

impl fmt::Display for Record {
    /// `PPP / DDD / QQQ`, each count zero-padded to three digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03} / {:03} / {:03}",
            self.player1_wins, self.draws, self.player2_wins
        )
    }
}

/// Records for every ordered pair of strategies.
///
/// Row `i`, column `j` holds the games where `strategies[i]` played first
/// against `strategies[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsTable {
    strategies: Vec<Strategy>,
    records: Vec<Vec<Record>>,
}

/// One flattened table cell, as exported to CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingRow {
    pub player1: String,
    pub player2: String,
    pub player1_wins: usize,
    pub draws: usize,
    pub player2_wins: usize,
}

impl ResultsTable {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        let n = strategies.len();
        Self {
            strategies,
            records: vec![vec![Record::default(); n]; n],
        }
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn get(&self, row: usize, col: usize) -> Record {
        self.records[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, record: Record) {
        self.records[row][col] = record;
    }

    /// Record for a pair of strategies, if both are in the table
    pub fn lookup(&self, player1: Strategy, player2: Strategy) -> Option<Record> {
        let row = self.strategies.iter().position(|&s| s == player1)?;
        let col = self.strategies.iter().position(|&s| s == player2)?;
        Some(self.get(row, col))
    }

    /// All pairings in row-major order
    pub fn rows(&self) -> Vec<PairingRow> {
        let mut rows = Vec::with_capacity(self.strategies.len().pow(2));
        for (i, player1) in self.strategies.iter().enumerate() {
            for (j, player2) in self.strategies.iter().enumerate() {
                let record = self.records[i][j];
                rows.push(PairingRow {
                    player1: player1.to_string(),
                    player2: player2.to_string(),
                    player1_wins: record.player1_wins,
                    draws: record.draws,
                    player2_wins: record.player2_wins,
                });
            }
        }
        rows
    }

    /// Render as a grid with strategy names on both axes
    pub fn render(&self) -> String {
        let mut builder = Builder::default();

        let mut header = vec![CORNER_HEADER.to_string()];
        header.extend(self.strategies.iter().map(|s| s.to_string()));
        builder.push_record(header);

        for (strategy, records) in self.strategies.iter().zip(&self.records) {
            let mut row = vec![strategy.to_string()];
            row.extend(records.iter().map(Record::to_string));
            builder.push_record(row);
        }

        let mut table = builder.build();
        table.with(Style::ascii());
        table.to_string()
    }

    /// Write the table to `path` as CSV, or as JSON when the extension is
    /// `.json`.
    pub fn export(&self, path: &Path) -> Result<()> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let file = std::fs::File::create(path)?;
            serde_json::to_writer_pretty(file, self)?;
        } else {
            let mut writer = csv::Writer::from_path(path)?;
            for row in self.rows() {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        log::info!("exported results to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for ResultsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_format() {
        let record = Record {
            player1_wins: 7,
            draws: 42,
            player2_wins: 951,
        };
        assert_eq!(record.to_string(), "007 / 042 / 951");
        assert_eq!(record.total(), 1000);
    }

    #[test]
    fn test_record_counts_by_mark() {
        let mut record = Record::default();
        record.record(GameOutcome::Win(Mark::O), Mark::O);
        record.record(GameOutcome::Win(Mark::X), Mark::O);
        record.record(GameOutcome::Draw, Mark::O);
        record.record(GameOutcome::Win(Mark::O), Mark::O);
        assert_eq!(
            record,
            Record {
                player1_wins: 2,
                draws: 1,
                player2_wins: 1
            }
        );
        assert!((record.win_rate() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_render_contains_labels() {
        let mut table = ResultsTable::new(vec![Strategy::Random, Strategy::WinRandom]);
        table.set(
            0,
            1,
            Record {
                player1_wins: 1,
                draws: 2,
                player2_wins: 3,
            },
        );
        let rendered = table.render();
        assert!(rendered.contains(CORNER_HEADER));
        assert!(rendered.contains("WinRandom"));
        assert!(rendered.contains("001 / 002 / 003"));
        assert!(rendered.contains("000 / 000 / 000"));
    }

    #[test]
    fn test_lookup() {
        let mut table = ResultsTable::new(vec![Strategy::Random, Strategy::BlockRandom]);
        let record = Record {
            player1_wins: 5,
            draws: 0,
            player2_wins: 0,
        };
        table.set(1, 0, record);
        assert_eq!(table.lookup(Strategy::BlockRandom, Strategy::Random), Some(record));
        assert_eq!(table.lookup(Strategy::WinRandom, Strategy::Random), None);
        assert_eq!(table.rows().len(), 4);
    }
}
