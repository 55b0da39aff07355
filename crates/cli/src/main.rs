mod game;
mod parse;
mod ui;

use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use num_format::{Locale, ToFormattedString};
use reversi_rules::disc::Disc;
use reversi_rules::perft::perft_root;

#[derive(Parser, Debug)]
#[command(version, about = "Two-player Reversi in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Color that moves first (black or white)
    #[arg(long, default_value = "black")]
    first: Disc,

    /// Moves to replay before the first prompt, e.g. "d3c5f6"
    #[arg(long)]
    moves: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Count the nodes of the game tree from the initial position
    Perft {
        #[arg(default_value = "6", value_parser = clap::value_parser!(u32).range(1..=10))]
        depth: u32,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Cli::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    match args.command {
        Some(SubCommands::Perft { depth }) => {
            run_perft(depth);
            Ok(())
        }
        None => ui::ui_loop(args.first, args.moves.as_deref()),
    }
}

fn run_perft(depth: u32) {
    info!("running perft to depth {depth}");
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft_root(d);
        let elapsed = start.elapsed();
        println!(
            "depth {d:2}: {:>14} nodes  {:>10.3}s",
            nodes.to_formatted_string(&Locale::en),
            elapsed.as_secs_f64()
        );
    }
}
