use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use connect_four_engine::ai::{decide_at_depth, Difficulty};
use connect_four_engine::analysis::{analyze, RecordedMove};
use connect_four_engine::config::EngineConfig;
use connect_four_engine::game::{Board, Player};

/// Pit two Connect Four bot tiers against each other.
#[derive(Parser)]
#[command(name = "selfplay", about = "Run bot-vs-bot Connect Four matches")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "engine.toml")]
    config: PathBuf,

    /// Override number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Override the tier playing red: easy, medium or hard
    #[arg(long)]
    red: Option<String>,

    /// Override the tier playing yellow: easy, medium or hard
    #[arg(long)]
    yellow: Option<String>,

    /// Override the hard-tier search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Emit the summary as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, serde::Serialize)]
struct MatchSummary {
    games: usize,
    red: &'static str,
    yellow: &'static str,
    search_depth: usize,
    red_wins: usize,
    yellow_wins: usize,
    draws: usize,
    missed_wins: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.selfplay.games = games;
    }
    if let Some(red) = &cli.red {
        config.selfplay.red = Difficulty::from_name(red);
    }
    if let Some(yellow) = &cli.yellow {
        config.selfplay.yellow = Difficulty::from_name(yellow);
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.validate().context("invalid configuration")?;

    let summary = run_match(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} games: {} ({}) {} wins, {} ({}) {} wins, {} draws",
            summary.games,
            summary.red,
            Player::Red.name(),
            summary.red_wins,
            summary.yellow,
            Player::Yellow.name(),
            summary.yellow_wins,
            summary.draws,
        );
        println!("missed immediate wins across the match: {}", summary.missed_wins);
    }

    Ok(())
}

fn run_match(config: &EngineConfig) -> Result<MatchSummary> {
    let mut red_wins = 0;
    let mut yellow_wins = 0;
    let mut draws = 0;
    let mut missed_wins = 0;

    for game in 0..config.selfplay.games {
        // Alternate the first mover so neither tier keeps the tempo edge.
        let first = if game % 2 == 0 {
            Player::Red
        } else {
            Player::Yellow
        };
        let (winner, history) = play_game(config, first)?;

        match winner {
            Some(Player::Red) => red_wins += 1,
            Some(Player::Yellow) => yellow_wins += 1,
            None => draws += 1,
        }
        missed_wins += analyze(&history, winner).missed_wins.len();
    }

    Ok(MatchSummary {
        games: config.selfplay.games,
        red: config.selfplay.red.name(),
        yellow: config.selfplay.yellow.name(),
        search_depth: config.search.depth,
        red_wins,
        yellow_wins,
        draws,
        missed_wins,
    })
}

fn play_game(
    config: &EngineConfig,
    first: Player,
) -> Result<(Option<Player>, Vec<RecordedMove>)> {
    let mut board = Board::new();
    let mut turn = first;
    let mut history = Vec::new();

    let winner = loop {
        let tier = match turn {
            Player::Red => config.selfplay.red,
            Player::Yellow => config.selfplay.yellow,
        };

        let Some(column) = decide_at_depth(&board, tier, turn, config.search.depth) else {
            break None; // no legal move: drawn board
        };

        let row = board
            .drop_piece(column, turn.to_cell())
            .map_err(|e| anyhow!("{} chose unplayable column {column}: {e:?}", turn.name()))?;
        history.push(RecordedMove {
            player: turn,
            column,
        });

        if board.is_winning(row, column, turn.to_cell()) {
            break Some(turn);
        }
        if board.is_full() {
            break None;
        }
        turn = turn.other();
    };

    Ok((winner, history))
}
