//! Flat-grid board storage and the shared board vocabulary

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Verdict on the cell just placed: the game is won by its owner, drawn, or
/// still undecided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Undecided,
}

/// Board abstraction consumed by the search strategies.
///
/// Both searches explore by mutating a single board in place: every
/// hypothetical `place` is paired with a `remove` before control returns to
/// the caller, so a search leaves the board exactly as it found it.
pub trait Board {
    /// Put `player`'s piece at `pos`. Fails when the cell is occupied.
    fn place(&mut self, pos: usize, player: Player) -> Result<()>;

    /// Take the piece back from `pos`. Fails when the cell is empty.
    fn remove(&mut self, pos: usize) -> Result<()>;

    /// Cells eligible for the next placement.
    fn legal_moves(&self) -> Vec<usize>;

    /// Verdict on the cell just placed at `pos`.
    fn evaluate(&self, pos: usize) -> Outcome;

    /// Key uniquely determined by the occupancy pattern, independent of the
    /// move order that produced it.
    fn canonical_key(&self) -> String;

    /// Whose piece goes down next.
    fn to_move(&self) -> Player;

    /// The completed run through `pos`, when `evaluate` reports a win there.
    fn winning_line(&self, pos: usize) -> Option<Vec<usize>>;

    /// Read access to the underlying grid.
    fn grid(&self) -> &Grid;
}

/// The four line axes through a cell: vertical, horizontal, both diagonals.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Rectangular board stored as a flat row-major array, with the turn pointer
/// for the piece that goes down next.
///
/// The turn pointer toggles on every placement and every removal, so a
/// place-then-remove pair restores the exact pre-move turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    to_move: Player,
}

impl Grid {
    /// Create an empty grid with `first_player` to move
    pub fn new(rows: usize, columns: usize, first_player: Player) -> Self {
        Grid {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
            to_move: first_player,
        }
    }

    /// Build a position from string rows (`X`, `O`, and `.`/`-`/space for
    /// empty cells); `to_move` places next.
    ///
    /// # Errors
    ///
    /// Returns an error when the rows are empty, ragged, or contain an
    /// unrecognized character.
    pub fn from_rows(rows: &[&str], to_move: Player) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if height == 0 || width == 0 {
            return Err(Error::InvalidConfiguration {
                message: "board rows must be non-empty".to_string(),
            });
        }

        let mut cells = Vec::with_capacity(height * width);
        for row in rows {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != width {
                return Err(Error::InvalidBoardLength {
                    expected: width,
                    got: chars.len(),
                    context: (*row).to_string(),
                });
            }
            for c in chars {
                let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                    character: c,
                    position: cells.len(),
                    context: (*row).to_string(),
                })?;
                cells.push(cell);
            }
        }

        Ok(Grid {
            rows: height,
            columns: width,
            cells,
            to_move,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of (row, column)
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    pub fn row_of(&self, pos: usize) -> usize {
        pos / self.columns
    }

    pub fn column_of(&self, pos: usize) -> usize {
        pos % self.columns
    }

    /// Get cell at a flat position
    pub fn cell(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Put `player`'s piece at `pos` and advance the turn pointer.
    ///
    /// # Errors
    ///
    /// `InvalidState` when the cell is already occupied: in correctly paired
    /// explore/undo code this is always a caller bug.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<()> {
        if pos >= self.cells.len() {
            return Err(Error::InvalidMove { position: pos });
        }
        if self.cells[pos] != Cell::Empty {
            return Err(Error::InvalidState {
                operation: "place",
                position: pos,
            });
        }
        self.cells[pos] = player.to_cell();
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Clear the piece at `pos` and advance the turn pointer.
    ///
    /// # Errors
    ///
    /// `InvalidState` when the cell is already empty.
    pub fn remove(&mut self, pos: usize) -> Result<()> {
        if pos >= self.cells.len() {
            return Err(Error::InvalidMove { position: pos });
        }
        if self.cells[pos] == Cell::Empty {
            return Err(Error::InvalidState {
                operation: "remove",
                position: pos,
            });
        }
        self.cells[pos] = Cell::Empty;
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Length of the contiguous same-player run through `pos` along one
    /// axis, crawling outward both ways from `pos` and stopping at the
    /// first mismatch or board edge. Zero for an empty cell.
    pub fn connected_run(&self, pos: usize, axis: (isize, isize)) -> usize {
        let target = self.cells[pos];
        if target == Cell::Empty {
            return 0;
        }
        let forward = self.crawl(pos, axis, target);
        let rearward = self.crawl(pos, (-axis.0, -axis.1), target);
        // `pos` itself is counted by both crawls
        forward + rearward - 1
    }

    /// True when the run through `pos` reaches `target` cells on some axis.
    pub fn run_reaches(&self, pos: usize, target: usize) -> bool {
        AXES.iter().any(|&axis| self.connected_run(pos, axis) >= target)
    }

    /// Cells of the first run through `pos` reaching `target` cells, in
    /// board order along its axis.
    pub fn winning_run(&self, pos: usize, target: usize) -> Option<Vec<usize>> {
        let owner = self.cells[pos];
        for &axis in &AXES {
            if self.connected_run(pos, axis) < target {
                continue;
            }
            let rearward = (-axis.0, -axis.1);
            let mut start = pos;
            while let Some(p) = self.step(start, rearward) {
                if self.cells[p] != owner {
                    break;
                }
                start = p;
            }
            let mut run = Vec::new();
            let mut current = Some(start);
            while let Some(p) = current {
                if self.cells[p] != owner {
                    break;
                }
                run.push(p);
                current = self.step(p, axis);
            }
            return Some(run);
        }
        None
    }

    /// Canonical occupancy key: one character per cell in row-major order.
    /// Depends on the occupancy pattern only, never on move history.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Neighboring position one step along `direction`, if on the board
    fn step(&self, pos: usize, direction: (isize, isize)) -> Option<usize> {
        let row = self.row_of(pos) as isize + direction.0;
        let column = self.column_of(pos) as isize + direction.1;
        if row < 0 || column < 0 || row >= self.rows as isize || column >= self.columns as isize {
            return None;
        }
        Some(self.index(row as usize, column as usize))
    }

    fn crawl(&self, pos: usize, direction: (isize, isize), target: Cell) -> usize {
        let mut count = 0;
        let mut current = Some(pos);
        while let Some(p) = current {
            if self.cells[p] != target {
                break;
            }
            count += 1;
            current = self.step(p, direction);
        }
        count
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                write!(f, "{}", self.cells[self.index(row, column)].to_char())?;
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
