//! Tournament command - warm up the learners, then train and evaluate every
//! ordered pairing of strategies

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::{CommonArgs, build_engine},
        output::{format_number, print_kv, print_section, print_state_values},
    },
    pipeline::Tournament,
    strategy::Strategy,
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Run the round-robin tournament")]
pub struct TournamentArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Training games per pairing (outcomes discarded)
    #[arg(long, short = 't')]
    pub training_games: Option<usize>,

    /// Evaluation games per pairing (outcomes counted)
    #[arg(long, short = 'e')]
    pub evaluation_games: Option<usize>,

    /// Warm-up games per learning strategy (defaults to training games)
    #[arg(long)]
    pub warmup_games: Option<usize>,

    /// Opponent the learners face during warm-up
    #[arg(long)]
    pub warmup_opponent: Option<Strategy>,

    /// Comma-separated strategies, in table order
    #[arg(long, short = 's', value_delimiter = ',')]
    pub strategies: Vec<Strategy>,

    /// Write results to a CSV file (JSON if the path ends in `.json`)
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: TournamentArgs) -> Result<()> {
    let mut config = args.common.resolve()?;
    let tournament_config = &mut config.tournament;
    if let Some(games) = args.training_games {
        tournament_config.training_games = games;
    }
    if let Some(games) = args.evaluation_games {
        tournament_config.evaluation_games = games;
    }
    if args.warmup_games.is_some() {
        tournament_config.warmup_games = args.warmup_games;
    }
    if let Some(opponent) = args.warmup_opponent {
        tournament_config.warmup_opponent = opponent;
    }
    if !args.strategies.is_empty() {
        tournament_config.strategies = args.strategies;
    }

    let tournament = Tournament::new(config.tournament.clone())?;
    let mut engine = build_engine(&config.engine, &config.display)?;

    print_section("Tournament");
    print_kv(
        "Strategies",
        &config
            .tournament
            .strategies
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", "),
    );
    print_kv(
        "Training games",
        &format_number(config.tournament.training_games),
    );
    print_kv(
        "Evaluation games",
        &format_number(config.tournament.evaluation_games),
    );
    print_kv(
        "Warm-up",
        &format!(
            "{} games vs {}",
            format_number(config.tournament.warmup_games()),
            config.tournament.warmup_opponent
        ),
    );
    print_kv(
        "Marks",
        &format!("P1 = {}, P2 = {}", config.engine.player1, config.engine.player2),
    );
    if let Some(seed) = config.engine.seed {
        print_kv("Seed", &seed.to_string());
    }

    let table = tournament.run(&mut engine)?;

    print_section("Results");
    println!("{table}");

    print_section("State values");
    print_state_values(
        &Board::new(),
        engine.config().player1,
        &engine.tables().state_values,
    );

    if let Some(path) = args.export {
        table
            .export(&path)
            .with_context(|| format!("failed to export results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }

    Ok(())
}
