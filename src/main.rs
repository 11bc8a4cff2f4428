//! bitchess command-line front end
//!
//! ```text
//! bitchess search --fen "<fen>" --depth 8 --time-ms 2000 --config search.json --json
//! bitchess perft --fen "<fen>" --depth 5 --divide
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` to see every completed depth.

mod settings;

use anyhow::{Context, Result};
use chess_engine::constants::START_FEN;
use chess_engine::{MoveGenerator, Position, SearchEngine};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bitchess", version, about = "Bitboard chess engine with alpha-beta search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a position and print the best move
    Search {
        /// Position to search; defaults to the starting position
        #[arg(long, default_value = START_FEN)]
        fen: String,
        /// Maximum depth in plies (overrides the config file)
        #[arg(long)]
        depth: Option<u8>,
        /// Wall-clock limit in milliseconds (overrides the config file)
        #[arg(long)]
        time_ms: Option<u64>,
        /// JSON file holding search settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the whole search result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        #[arg(long, default_value_t = 4)]
        depth: u32,
        /// Break the count down per root move
        #[arg(long)]
        divide: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Search {
            fen,
            depth,
            time_ms,
            config,
            json,
        } => run_search(&fen, depth, time_ms, config, json),
        Command::Perft { fen, depth, divide } => run_perft(&fen, depth, divide),
    }
}

fn parse_position(fen: &str) -> Result<Position> {
    Position::from_fen(fen).with_context(|| format!("could not parse FEN {fen:?}"))
}

fn run_search(
    fen: &str,
    depth: Option<u8>,
    time_ms: Option<u64>,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let position = parse_position(fen)?;
    let mut config = settings::load_search_config(config_path.as_deref());
    if let Some(depth) = depth {
        config.max_depth = depth;
    }
    if time_ms.is_some() {
        config.time_limit_ms = time_ms;
    }

    let mut engine = SearchEngine::new(config);
    let result = engine.go(&position);

    if json {
        let text = serde_json::to_string_pretty(&result).context("serializing search result")?;
        println!("{text}");
        return Ok(());
    }

    match result.best_move {
        Some(mv) => {
            let pv: Vec<String> = result.pv.iter().map(ToString::to_string).collect();
            println!("bestmove {mv}");
            println!("score {} depth {}", result.score, result.depth);
            println!("pv {}", pv.join(" "));
            println!(
                "nodes {} qnodes {} nps {} time {}ms",
                result.stats.nodes,
                result.stats.quiescence_nodes,
                result.stats.nodes_per_second(),
                result.stats.elapsed_ms
            );
        }
        None => {
            let state = engine.generator().game_state(&position);
            println!("bestmove (none) {state:?}");
        }
    }
    Ok(())
}

fn run_perft(fen: &str, depth: u32, divide: bool) -> Result<()> {
    let position = parse_position(fen)?;
    let generator = MoveGenerator::new();
    let start = Instant::now();

    let total = if divide {
        let counts = generator.perft_divide(&position, depth);
        for (mv, nodes) in &counts {
            println!("{mv}: {nodes}");
        }
        counts.iter().map(|(_, nodes)| nodes).sum()
    } else {
        generator.perft(&position, depth)
    };

    println!("perft({depth}) = {total} in {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}
