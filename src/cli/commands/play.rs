//! Play command - watch single games between two strategies

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{CommonArgs, build_engine},
        output::{print_kv, print_section},
    },
    pipeline::Record,
    strategy::Strategy,
};

#[derive(Parser, Debug)]
#[command(about = "Play games between two strategies and print them")]
pub struct PlayArgs {
    /// Strategy for player 1 (moves first)
    #[arg(value_name = "STRATEGY1")]
    pub first: Strategy,

    /// Strategy for player 2
    #[arg(value_name = "STRATEGY2")]
    pub second: Strategy,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Only print the summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = args.common.resolve()?;
    if !args.quiet {
        config.display.print_board = true;
        config.display.print_result = true;
    }
    config.display.progress = false;

    let mut engine = build_engine(&config.engine, &config.display)?;
    let mark = engine.config().player1;

    let mut record = Record::default();
    for _ in 0..args.games {
        let outcome = engine.play_new_game(args.first, args.second)?;
        record.record(outcome, mark);
    }

    print_section(&format!("{} vs {}", args.first, args.second));
    print_kv("Games", &record.total().to_string());
    print_kv("P1 / D / P2", &record.to_string());
    print_kv("P1 win rate", &format!("{:.1}%", record.win_rate() * 100.0));

    Ok(())
}
