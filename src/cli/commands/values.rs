//! Values command - show the learned value of every one-move continuation

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{CommonArgs, build_engine},
        output::{print_kv, print_section, print_state_values},
    },
    strategy::Strategy,
    tictactoe::{Board, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Inspect state values one move ahead")]
pub struct ValuesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Board as 9 characters in row-major order (`.` for empty)
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Mark to place (defaults to player 1's mark)
    #[arg(long, short = 'm')]
    pub mark: Option<Mark>,

    /// ReinforcedLearning2 training games to play first
    #[arg(long, short = 't', default_value_t = 0)]
    pub train: usize,

    /// Opponent for the training games
    #[arg(long, default_value = "DynamicProbability")]
    pub opponent: Strategy,
}

pub fn execute(args: ValuesArgs) -> Result<()> {
    let config = args.common.resolve()?;
    let board = match &args.board {
        Some(text) => Board::from_string(text)?,
        None => Board::new(),
    };

    let mut engine = build_engine(&config.engine, &config.display)?;
    if args.train > 0 {
        engine.begin_phase(
            &format!("{} vs {}", Strategy::ReinforcedLearning2, args.opponent),
            args.train,
        )?;
        for _ in 0..args.train {
            engine.play_new_game(Strategy::ReinforcedLearning2, args.opponent)?;
        }
        engine.end_phase()?;
    }

    let mark = args.mark.unwrap_or(engine.config().player1);
    let values = &engine.tables().state_values;

    print_section("State values");
    print_kv("Mark", mark.as_str());
    print_kv("Training games", &args.train.to_string());
    print_kv(
        "States touched",
        &values
            .touched(config.engine.rewards.initial_state_value)
            .to_string(),
    );
    println!("\n{}\n", board.render());
    print_state_values(&board, mark, values);

    Ok(())
}
