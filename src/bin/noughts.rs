//! noughts CLI - tic-tac-toe strategy tournaments with two learning players
//!
//! Subcommands:
//! - `tournament`: warm up the learners, then train and evaluate every pairing
//! - `play`: print games between two strategies
//! - `values`: inspect learned state values one move ahead

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe strategy tournaments", long_about = None)]
struct Cli {
    /// Log more (repeat for trace output); RUST_LOG takes precedence
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the round-robin tournament and print the results table
    Tournament(noughts::cli::commands::tournament::TournamentArgs),

    /// Play games between two strategies
    Play(noughts::cli::commands::play::PlayArgs),

    /// Show state values for every move from a board
    Values(noughts::cli::commands::values::ValuesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Tournament(args) => noughts::cli::commands::tournament::execute(args),
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Values(args) => noughts::cli::commands::values::execute(args),
    }
}
