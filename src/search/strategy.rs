//! Pluggable move selection for one side of a game
//!
//! A tagged variant instead of a class hierarchy: the game driver holds one
//! `Strategy` per side and asks it for a move through a single dispatch
//! point.

use rand::{rngs::StdRng, seq::IndexedRandom};

use super::mcts::Mcts;
use super::minimax::Minimax;
use crate::board::{Board, Player};
use crate::error::{Error, Result};

/// Move selection strategy for one side of a game
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Relays a position picked outside the engine (GUI or terminal input);
    /// the pending position is handed over with [`Strategy::provide`]
    Human { chosen: Option<usize> },

    /// Uniformly random legal move (baseline opponent)
    Random,

    /// Depth-first minimax with alpha-beta pruning
    Minimax(Minimax),

    /// Monte Carlo tree search
    Mcts(Mcts),
}

impl Strategy {
    /// Human side with no move pending yet
    pub fn human() -> Self {
        Strategy::Human { chosen: None }
    }

    /// Hand the human side its next move. No-op for engine strategies.
    pub fn provide(&mut self, pos: usize) {
        if let Strategy::Human { chosen } = self {
            *chosen = Some(pos);
        }
    }

    /// Pick the next move for `mover` on `board`.
    ///
    /// Engine strategies explore by mutating the board and restore it before
    /// returning; the human variant validates the pending position against
    /// the current legal moves.
    ///
    /// # Errors
    ///
    /// `NoLegalMoves` on a finished position, `NoPendingMove`/`InvalidMove`
    /// for a missing or illegal human move.
    pub fn choose_move<B: Board>(
        &mut self,
        board: &mut B,
        mover: Player,
        rng: &mut StdRng,
    ) -> Result<usize> {
        match self {
            Strategy::Human { chosen } => {
                let pos = chosen.take().ok_or(Error::NoPendingMove)?;
                if !board.legal_moves().contains(&pos) {
                    return Err(Error::InvalidMove { position: pos });
                }
                Ok(pos)
            }
            Strategy::Random => board
                .legal_moves()
                .choose(rng)
                .copied()
                .ok_or(Error::NoLegalMoves),
            Strategy::Minimax(search) => search.choose_move(board, mover, rng),
            Strategy::Mcts(search) => search.choose_move(board, mover, rng),
        }
    }

    /// Clear per-game memory. The MCTS memo table survives the moves of one
    /// game but not a game reset.
    pub fn reset(&mut self) {
        if let Strategy::Mcts(search) = self {
            search.reset();
        }
    }

    /// Short name for reporting
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Human { .. } => "human",
            Strategy::Random => "random",
            Strategy::Minimax(_) => "minimax",
            Strategy::Mcts(_) => "mcts",
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::board::TicTacToe;

    #[test]
    fn test_human_requires_pending_move() {
        let mut board = TicTacToe::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut human = Strategy::human();

        let result = human.choose_move(&mut board, Player::X, &mut rng);
        assert!(matches!(result, Err(Error::NoPendingMove)));

        human.provide(4);
        let pos = human.choose_move(&mut board, Player::X, &mut rng).unwrap();
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_human_rejects_illegal_position() {
        let mut board = TicTacToe::new();
        board.place(4, Player::X).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let mut human = Strategy::human();
        human.provide(4);
        let result = human.choose_move(&mut board, Player::O, &mut rng);
        assert!(matches!(result, Err(Error::InvalidMove { position: 4 })));
    }

    #[test]
    fn test_random_picks_a_legal_move() {
        let mut board = TicTacToe::new();
        board.place(4, Player::X).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let mut random = Strategy::Random;
        let pos = random.choose_move(&mut board, Player::O, &mut rng).unwrap();
        assert!(board.legal_moves().contains(&pos));
    }
}
