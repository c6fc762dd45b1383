//! 3x3 tic-tac-toe board: any empty cell is playable

use std::fmt;

use serde::{Deserialize, Serialize};

use super::grid::{Board, Grid, Outcome, Player};
use crate::error::{Error, Result};

/// Board edge length
pub const SIZE: usize = 3;

const WIN_LENGTH: usize = 3;

/// 3x3 board where a full row, column, or diagonal wins.
///
/// A run of three through the placed cell is exactly a full line on a board
/// this size, so the shared outward-crawl scoring covers all eight lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    grid: Grid,
}

impl TicTacToe {
    /// Create an empty board with X to move
    pub fn new() -> Self {
        TicTacToe {
            grid: Grid::new(SIZE, SIZE, Player::X),
        }
    }

    /// Build a position from string rows; `to_move` places next.
    ///
    /// # Errors
    ///
    /// Returns an error when the rows do not describe a 3x3 board.
    pub fn from_rows(rows: &[&str], to_move: Player) -> Result<Self> {
        let grid = Grid::from_rows(rows, to_move)?;
        if grid.rows() != SIZE || grid.columns() != SIZE {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "tic-tac-toe board must be {SIZE}x{SIZE}, got {}x{}",
                    grid.rows(),
                    grid.columns()
                ),
            });
        }
        Ok(TicTacToe { grid })
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for TicTacToe {
    fn place(&mut self, pos: usize, player: Player) -> Result<()> {
        self.grid.place(pos, player)
    }

    fn remove(&mut self, pos: usize) -> Result<()> {
        self.grid.remove(pos)
    }

    fn legal_moves(&self) -> Vec<usize> {
        self.grid.empty_positions()
    }

    fn evaluate(&self, pos: usize) -> Outcome {
        if self.grid.run_reaches(pos, WIN_LENGTH) {
            Outcome::Win
        } else if self.grid.is_full() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    fn canonical_key(&self) -> String {
        self.grid.encode()
    }

    fn to_move(&self) -> Player {
        self.grid.to_move()
    }

    fn winning_line(&self, pos: usize) -> Option<Vec<usize>> {
        self.grid.winning_run(pos, WIN_LENGTH)
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.fmt(f)
    }
}
