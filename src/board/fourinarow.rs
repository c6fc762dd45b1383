//! Four-in-a-row board with gravity-constrained moves

use std::fmt;

use serde::{Deserialize, Serialize};

use super::grid::{Board, Cell, Grid, Outcome, Player};
use crate::error::{Error, Result};

/// Default board height
pub const ROWS: usize = 6;
/// Default board width
pub const COLUMNS: usize = 7;

const WIN_LENGTH: usize = 4;

/// Board where pieces drop to the lowest empty cell of a column and a run
/// of four along any axis wins.
///
/// The frontier holds the single playable cell per column and is re-derived
/// from the occupancy on every placement and removal, so it can never drift
/// out of sync with the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourInARow {
    grid: Grid,
    /// Lowest empty position per column, `None` when the column is full
    frontier: Vec<Option<usize>>,
}

impl FourInARow {
    /// Create an empty 6x7 board with X to move
    pub fn new() -> Self {
        let grid = Grid::new(ROWS, COLUMNS, Player::X);
        let mut board = FourInARow {
            frontier: vec![None; grid.columns()],
            grid,
        };
        board.rebuild_frontier();
        board
    }

    /// Build a position from string rows; `to_move` places next.
    ///
    /// # Errors
    ///
    /// Returns an error when the rows do not describe a 6x7 board.
    pub fn from_rows(rows: &[&str], to_move: Player) -> Result<Self> {
        let grid = Grid::from_rows(rows, to_move)?;
        if grid.rows() != ROWS || grid.columns() != COLUMNS {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "four-in-a-row board must be {ROWS}x{COLUMNS}, got {}x{}",
                    grid.rows(),
                    grid.columns()
                ),
            });
        }
        let mut board = FourInARow {
            frontier: vec![None; grid.columns()],
            grid,
        };
        board.rebuild_frontier();
        Ok(board)
    }

    /// Playable cell for a column choice, as entered by a human.
    ///
    /// # Errors
    ///
    /// `InvalidMove` for an out-of-range column, `ColumnFull` when no cell
    /// in the column is empty.
    pub fn drop_position(&self, column: usize) -> Result<usize> {
        if column >= self.grid.columns() {
            return Err(Error::InvalidMove { position: column });
        }
        self.frontier[column].ok_or(Error::ColumnFull { column })
    }

    /// Frontier cells in column order (playable positions)
    pub fn frontier(&self) -> &[Option<usize>] {
        &self.frontier
    }

    fn rebuild_frontier(&mut self) {
        for column in 0..self.grid.columns() {
            self.refresh_column(column);
        }
    }

    /// Re-derive the lowest empty cell of one column from the occupancy
    fn refresh_column(&mut self, column: usize) {
        self.frontier[column] = (0..self.grid.rows())
            .rev()
            .map(|row| self.grid.index(row, column))
            .find(|&pos| self.grid.cell(pos) == Cell::Empty);
    }
}

impl Default for FourInARow {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for FourInARow {
    fn place(&mut self, pos: usize, player: Player) -> Result<()> {
        self.grid.place(pos, player)?;
        self.refresh_column(self.grid.column_of(pos));
        Ok(())
    }

    fn remove(&mut self, pos: usize) -> Result<()> {
        self.grid.remove(pos)?;
        self.refresh_column(self.grid.column_of(pos));
        Ok(())
    }

    fn legal_moves(&self) -> Vec<usize> {
        self.frontier.iter().flatten().copied().collect()
    }

    fn evaluate(&self, pos: usize) -> Outcome {
        if self.grid.run_reaches(pos, WIN_LENGTH) {
            Outcome::Win
        } else if self.frontier.iter().all(Option::is_none) {
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

impl fmt::Display for FourInARow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.fmt(f)
    }
}
