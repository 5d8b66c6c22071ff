//! Tournament pipeline
//!
//! This module provides:
//! - The round-robin driver that trains and evaluates every strategy pairing
//! - Result tallies and their table/CSV/JSON output
//! - Observers for console printouts and progress bars

pub mod observers;
pub mod results;
pub mod tournament;

pub use observers::{BoardPrinter, ProgressObserver, ResultPrinter};
pub use results::{CORNER_HEADER, PairingRow, Record, ResultsTable};
pub use tournament::{Tournament, TournamentConfig};

pub use crate::ports::Observer;
