//! Play command - interactive game against a search opponent

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::board::{Board, FourInARow, Player, TicTacToe};
use crate::cli::commands::{GameKind, parse_game, parse_strategy};
use crate::cli::output;
use crate::game::{Game, GameOutcome};
use crate::search::Strategy;

#[derive(Parser, Debug)]
#[command(about = "Play interactively against a search opponent")]
pub struct PlayArgs {
    /// Game to play (tictactoe or fourinarow)
    #[arg(long, short = 'g', default_value = "tictactoe")]
    pub game: String,

    /// Opponent strategy: random, minimax[:depth], mcts[:iterations]
    #[arg(long, default_value = "minimax")]
    pub ai: String,

    /// Let the opponent make the first move
    #[arg(long)]
    pub second: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let kind = parse_game(&args.game)?;
    let ai = parse_strategy(&args.ai, kind)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match kind {
        GameKind::TicTacToe => run(
            Game::new(TicTacToe::new()),
            ai,
            args.second,
            "Your move (cell 0-8, q to quit): ",
            |_, choice| Ok(choice),
            &mut rng,
        ),
        GameKind::FourInARow => run(
            Game::new(FourInARow::new()),
            ai,
            args.second,
            "Your move (column 0-6, q to quit): ",
            |game, column| game.board.drop_position(column),
            &mut rng,
        ),
    }
}

/// Drive one interactive game; `resolve` maps the typed number to a board
/// position (the identity for tic-tac-toe, the frontier cell of a column
/// for four-in-a-row).
fn run<B: Board>(
    mut game: Game<B>,
    mut ai: Strategy,
    ai_first: bool,
    prompt: &str,
    resolve: impl Fn(&Game<B>, usize) -> crate::Result<usize>,
    rng: &mut StdRng,
) -> Result<()> {
    let human_player = if ai_first { Player::O } else { Player::X };
    let mut human = Strategy::human();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!(
            "\n{}",
            output::render_grid(game.board.grid(), game.winning_line.as_deref())
        );
        if let Some(outcome) = game.outcome {
            announce(outcome, human_player);
            return Ok(());
        }

        let mover = game.board.to_move();
        let position = if mover == human_player {
            print!("{prompt}");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                println!("\nNo more input; leaving the game.");
                return Ok(());
            };
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            let Ok(choice) = trimmed.parse::<usize>() else {
                println!("Enter a number, or q to quit.");
                continue;
            };
            let position = match resolve(&game, choice) {
                Ok(position) => position,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };
            human.provide(position);
            match human.choose_move(&mut game.board, mover, rng) {
                Ok(position) => position,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            }
        } else {
            let position = ai.choose_move(&mut game.board, mover, rng)?;
            println!("Opponent plays position {position}.");
            position
        };

        game.play(position)?;
    }
}

fn announce(outcome: GameOutcome, human_player: Player) {
    match outcome {
        GameOutcome::Draw => println!("Tie!"),
        GameOutcome::Win(winner) if winner == human_player => println!("You won!"),
        GameOutcome::Win(_) => println!("You lost."),
    }
}
