//! Shared configuration for CLI commands
//!
//! Settings come from an optional JSON file and are then overridden by
//! whatever flags were given on the command line.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    app::EngineConfig,
    engine::Engine,
    pipeline::{BoardPrinter, ProgressObserver, ResultPrinter, TournamentConfig},
    tictactoe::Mark,
};

/// Console output toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print the board after every move
    pub print_board: bool,
    /// Print the outcome and final board of every game
    pub print_result: bool,
    /// Show progress bars
    pub progress: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            print_board: false,
            print_result: false,
            progress: true,
        }
    }
}

/// Contents of a `--config` file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub engine: EngineConfig,
    pub tournament: TournamentConfig,
    pub display: DisplayConfig,
}

impl FileConfig {
    /// Load a configuration file; missing sections keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file '{}'", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }
}

/// Flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mark used by player 1 (player 2 takes the other)
    #[arg(long)]
    pub player1: Option<Mark>,

    /// Print the board after every move
    #[arg(long)]
    pub print_board: bool,

    /// Print the result of every game
    #[arg(long)]
    pub print_result: bool,

    /// Hide progress bars
    #[arg(long)]
    pub no_progress: bool,
}

impl CommonArgs {
    /// File configuration (or defaults) with these flags applied on top
    pub fn resolve(&self) -> Result<FileConfig> {
        let mut config = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.engine.seed = Some(seed);
        }
        if let Some(mark) = self.player1 {
            config.engine.player1 = mark;
            config.engine.player2 = mark.opponent();
        }
        config.display.print_board |= self.print_board;
        config.display.print_result |= self.print_result;
        if self.no_progress {
            config.display.progress = false;
        }

        Ok(config)
    }
}

/// Build an engine with the observers the display settings ask for
pub fn build_engine(engine: &EngineConfig, display: &DisplayConfig) -> Result<Engine> {
    let mut built = Engine::new(engine.clone())?;
    if display.print_board {
        built.add_observer(Box::new(BoardPrinter));
    }
    if display.print_result {
        built.add_observer(Box::new(ResultPrinter));
    }
    if display.progress {
        built.add_observer(Box::new(ProgressObserver::new()));
    }
    Ok(built)
}
