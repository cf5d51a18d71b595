mod config;
mod display;
mod match_runner;
mod statistics;
mod ui;

use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use num_format::{Locale, ToFormattedString};
use reversi_rules::perft::perft_root;
use reversi_rules::strategy::Strategy;
use tracing_subscriber::EnvFilter;

use crate::config::GameArgs;
use crate::match_runner::MatchSettings;
use crate::ui::Seat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reversi on hexagonal and square boards")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Log filter, e.g. `debug` or `reversi_rules=trace` (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct PlayArgs {
    #[command(flatten)]
    game: GameArgs,

    /// Who plays First: human, max-capture, capture-corner or avoid-corners
    #[arg(long, default_value = "human")]
    first: Seat,

    /// Who plays Second: human, max-capture, capture-corner or avoid-corners
    #[arg(long, default_value = "capture-corner")]
    second: Seat,
}

impl Default for PlayArgs {
    fn default() -> Self {
        PlayArgs {
            game: GameArgs::default(),
            first: Seat::Human,
            second: Seat::Computer(Strategy::CaptureCorner),
        }
    }
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Play a game in the terminal (default)
    Play(PlayArgs),

    /// Run a series of games between two strategies
    Match {
        #[command(flatten)]
        game: GameArgs,

        #[arg(short = '1', long, default_value = "capture-corner")]
        engine1: Strategy,

        #[arg(short = '2', long, default_value = "max-capture")]
        engine2: Strategy,

        /// Number of games; colors alternate between games
        #[arg(short = 'n', long, default_value = "100")]
        games: u32,

        /// Random legal moves played at the start of each game
        #[arg(long, default_value = "0")]
        random_plies: u32,

        /// Seed for the random opening moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Count move-generation nodes from the starting position
    Perft {
        #[command(flatten)]
        game: GameArgs,

        #[arg(short, long, default_value = "5")]
        depth: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_level.as_deref())?;

    match args.command.unwrap_or(SubCommands::Play(PlayArgs::default())) {
        SubCommands::Play(play) => {
            let config = play.game.resolve()?;
            ui::ui_loop(&config, [play.first, play.second])
        }
        SubCommands::Match {
            game,
            engine1,
            engine2,
            games,
            random_plies,
            seed,
        } => {
            let config = game.resolve()?;
            let settings = MatchSettings {
                games,
                random_plies,
                seed,
            };
            println!(
                "{} board, size {}: {} vs {}, {} games",
                config.topology, config.size, engine1, engine2, games
            );
            let statistics = match_runner::run_match(&config, engine1, engine2, &settings)?;
            statistics.print_final_results(engine1.name(), engine2.name());
            Ok(())
        }
        SubCommands::Perft { game, depth } => {
            let config = game.resolve()?;
            println!("{} board, size {}", config.topology, config.size);
            for d in 1..=depth {
                let start = Instant::now();
                let nodes = perft_root(&config, d)?;
                let elapsed = start.elapsed();
                println!(
                    "depth {d:2}: {:>14} nodes  {}",
                    nodes.to_formatted_string(&Locale::en).bright_white(),
                    format!("{:.3}s", elapsed.as_secs_f64()).bright_black()
                );
            }
            Ok(())
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `--log-level` wins over `RUST_LOG`; without either only warnings are shown.
fn init_tracing(log_level: Option<&str>) -> anyhow::Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter '{level}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
