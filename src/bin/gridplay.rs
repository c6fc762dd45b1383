//! gridplay CLI - board games with adversarial search opponents
//!
//! This CLI provides a unified interface for:
//! - Running self-play series between search strategies
//! - Playing interactively against a strategy in the terminal

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridplay")]
#[command(version, about = "Four-in-a-row and tic-tac-toe with search opponents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pit two strategies against each other
    SelfPlay(gridplay::cli::commands::selfplay::SelfPlayArgs),

    /// Play interactively against a search opponent
    Play(gridplay::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::SelfPlay(args) => gridplay::cli::commands::selfplay::execute(args),
        Commands::Play(args) => gridplay::cli::commands::play::execute(args),
    }
}
