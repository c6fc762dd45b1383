//! Self-play command - pit two strategies against each other

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::board::{FourInARow, Player, TicTacToe};
use crate::cli::commands::{GameKind, parse_game, parse_strategy};
use crate::cli::config::{CommonConfig, SelfPlayConfig};
use crate::cli::output;
use crate::game::{GameOutcome, play_match};

#[derive(Parser, Debug)]
#[command(about = "Pit two strategies against each other")]
pub struct SelfPlayArgs {
    /// Game to play (tictactoe or fourinarow)
    #[arg(long, short = 'g', default_value = "tictactoe")]
    pub game: String,

    /// Strategy for the first player: random, minimax[:depth], mcts[:iterations]
    #[arg(long)]
    pub x: Option<String>,

    /// Strategy for the second player
    #[arg(long)]
    pub o: Option<String>,

    /// Number of games to play
    #[arg(long, short = 'n')]
    pub games: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SelfPlaySummary {
    game: String,
    x: String,
    o: String,
    games: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let defaults = SelfPlayConfig::default();
    let config = SelfPlayConfig {
        games: args.games.unwrap_or(defaults.games),
        x: args.x.unwrap_or(defaults.x),
        o: args.o.unwrap_or(defaults.o),
    };

    let common = CommonConfig {
        seed: args.seed,
        // The bar would interleave with the JSON document on stdout
        progress: !args.json,
    };

    let kind = parse_game(&args.game)?;
    let mut x = parse_strategy(&config.x, kind)?;
    let mut o = parse_strategy(&config.o, kind)?;

    let mut rng = match common.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let pb = if common.progress {
        output::create_match_progress(config.games as u64)
    } else {
        indicatif::ProgressBar::hidden()
    };
    let (mut x_wins, mut o_wins, mut draws) = (0usize, 0usize, 0usize);
    for _ in 0..config.games {
        // The MCTS memo table carries over moves, not games
        x.reset();
        o.reset();
        let outcome = match kind {
            GameKind::TicTacToe => play_match(TicTacToe::new(), &mut x, &mut o, &mut rng)?,
            GameKind::FourInARow => play_match(FourInARow::new(), &mut x, &mut o, &mut rng)?,
        };
        match outcome {
            GameOutcome::Win(Player::X) => x_wins += 1,
            GameOutcome::Win(Player::O) => o_wins += 1,
            GameOutcome::Draw => draws += 1,
        }
        pb.set_message(format!("X {x_wins} / O {o_wins} / draws {draws}"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let summary = SelfPlaySummary {
        game: args.game,
        x: config.x,
        o: config.o,
        games: config.games,
        x_wins,
        o_wins,
        draws,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        output::print_section("Self-play results");
        output::print_kv("Game", &summary.game);
        output::print_kv("X strategy", &summary.x);
        output::print_kv("O strategy", &summary.o);
        output::print_kv("Games", &summary.games.to_string());
        output::print_kv("X wins", &summary.x_wins.to_string());
        output::print_kv("O wins", &summary.o_wins.to_string());
        output::print_kv("Draws", &summary.draws.to_string());
    }

    Ok(())
}
