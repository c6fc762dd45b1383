//! Board implementations for the two supported games

pub mod fourinarow;
pub mod grid;
pub mod tictactoe;

pub use fourinarow::FourInARow;
pub use grid::{Board, Cell, Grid, Outcome, Player};
pub use tictactoe::TicTacToe;
