//! Error types for the gridplay crate

use thiserror::Error;

/// Main error type for the gridplay crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is not playable")]
    InvalidMove { position: usize },

    #[error("inconsistent board state: cannot {operation} at position {position}")]
    InvalidState {
        operation: &'static str,
        position: usize,
    },

    #[error("game already over")]
    GameOver,

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("no pending move supplied for the human side")]
    NoPendingMove,

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("board rows must be {expected} characters, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid strategy '{input}'. Expected one of: {expected}")]
    ParseStrategy { input: String, expected: String },

    #[error("invalid game '{input}'. Expected one of: {expected}")]
    ParseGame { input: String, expected: String },

    #[error("internal consistency error: no statistics recorded for state '{key}'")]
    MissingStateStats { key: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
