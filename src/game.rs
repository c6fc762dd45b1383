//! High-level game management

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome, Player};
use crate::error::{Error, Result};
use crate::search::Strategy;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }

    /// +1 / -1 / 0 from `player`'s point of view
    pub fn score_for(self, player: Player) -> i32 {
        match self {
            GameOutcome::Win(winner) if winner == player => 1,
            GameOutcome::Win(_) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

/// A game in progress, with move history and the detected outcome
#[derive(Debug, Clone)]
pub struct Game<B: Board> {
    pub board: B,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    /// Cells of the completed run once somebody has won
    pub winning_line: Option<Vec<usize>>,
}

impl<B: Board> Game<B> {
    /// Start a game from the given position
    pub fn new(board: B) -> Self {
        Game {
            board,
            moves: Vec::new(),
            outcome: None,
            winning_line: None,
        }
    }

    /// Play the next piece at `position` and record the result.
    ///
    /// # Errors
    ///
    /// `GameOver` once an outcome has been reached, or the underlying board
    /// error for an unplayable position.
    pub fn play(&mut self, position: usize) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let player = self.board.to_move();
        self.board.place(position, player)?;
        self.moves.push(Move { position, player });

        match self.board.evaluate(position) {
            Outcome::Win => {
                self.winning_line = self.board.winning_line(position);
                self.outcome = Some(GameOutcome::Win(player));
            }
            Outcome::Draw => self.outcome = Some(GameOutcome::Draw),
            Outcome::Undecided => {}
        }

        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Alternate two strategies from the given position until the game ends.
///
/// `x` answers for [`Player::X`], `o` for [`Player::O`]; whichever side the
/// board's turn pointer names moves first.
pub fn play_match<B: Board>(
    board: B,
    x: &mut Strategy,
    o: &mut Strategy,
    rng: &mut StdRng,
) -> Result<GameOutcome> {
    let mut game = Game::new(board);
    loop {
        if let Some(outcome) = game.outcome {
            return Ok(outcome);
        }
        let mover = game.board.to_move();
        let strategy = match mover {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let position = strategy.choose_move(&mut game.board, mover, rng)?;
        game.play(position)?;
    }
}
