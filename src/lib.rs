//! Four-in-a-row and tic-tac-toe with pluggable adversarial search opponents
//!
//! This crate provides:
//! - Flat-grid boards for both games, with gravity-constrained move
//!   generation for four-in-a-row
//! - Depth-first minimax with alpha-beta pruning and depth-decayed scores
//! - Monte Carlo tree search over a per-game state memo table
//! - A strategy layer and match driver for pitting opponents against each
//!   other

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod search;

pub use board::{Board, Cell, FourInARow, Grid, Outcome, Player, TicTacToe};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move, play_match};
pub use search::{Mcts, MctsConfig, Minimax, MinimaxConfig, Strategy};
