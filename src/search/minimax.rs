//! Depth-first adversarial search with alpha-beta pruning and depth-decayed
//! scores
//!
//! The search walks the full game tree below the current position by
//! tentatively placing a piece, scoring the placement, and removing it again
//! before trying the next candidate. Terminal scores are divided by the ply
//! depth, so a forced win in two moves outranks the same win in four, and a
//! forced loss is deferred as long as possible.

use rand::{rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome, Player};
use crate::error::{Error, Result};

/// Tuning knobs for the minimax search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Maximum recursion depth in plies; `None` searches to the end of the
    /// game. Positions still undecided at the cutoff score `-1/limit`, so
    /// unresolved deep lines are not mistaken for neutral ones.
    pub depth_limit: Option<usize>,

    /// Shuffle the candidate order before scanning, so equally good moves
    /// vary between calls instead of always breaking ties the same way
    pub shuffle: bool,
}

impl MinimaxConfig {
    /// Search to the end of the game (practical for tic-tac-toe)
    pub fn exhaustive() -> Self {
        MinimaxConfig {
            depth_limit: None,
            shuffle: true,
        }
    }

    /// Cut the search off after `limit` plies
    pub fn depth_limited(limit: usize) -> Self {
        MinimaxConfig {
            depth_limit: Some(limit),
            shuffle: true,
        }
    }
}

impl Default for MinimaxConfig {
    /// The four-in-a-row setting: eight plies deep
    fn default() -> Self {
        Self::depth_limited(8)
    }
}

/// Exhaustive depth-first adversarial search with alpha-beta pruning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Minimax {
    config: MinimaxConfig,
}

impl Minimax {
    pub fn new(config: MinimaxConfig) -> Self {
        Minimax { config }
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Pick the best move for `mover` from the current position.
    ///
    /// The board is mutated during the search and restored before returning.
    ///
    /// # Errors
    ///
    /// `NoLegalMoves` when the position has no playable cell; callers are
    /// expected to check for game over before asking for a move.
    pub fn choose_move<B: Board>(
        &self,
        board: &mut B,
        mover: Player,
        rng: &mut StdRng,
    ) -> Result<usize> {
        if board.legal_moves().is_empty() {
            return Err(Error::NoLegalMoves);
        }
        let (_, best) = self.search(board, mover, 1, -2.0, 2.0, rng)?;
        best.ok_or(Error::NoLegalMoves)
    }

    /// Best achievable score for `mover` from this position, from `mover`'s
    /// perspective. Exposed for analysis and tests.
    pub fn evaluate_position<B: Board>(
        &self,
        board: &mut B,
        mover: Player,
        rng: &mut StdRng,
    ) -> Result<f64> {
        let (score, _) = self.search(board, mover, 1, -2.0, 2.0, rng)?;
        Ok(score)
    }

    /// Negamax over `mover`'s legal replies inside the (alpha, beta) window.
    ///
    /// Returns the best score found and the move achieving it; the move is
    /// `None` when every candidate was pruned below `alpha`. Scores outside
    /// the window are bounds, not exact values.
    fn search<B: Board>(
        &self,
        board: &mut B,
        mover: Player,
        depth: usize,
        alpha: f64,
        beta: f64,
        rng: &mut StdRng,
    ) -> Result<(f64, Option<usize>)> {
        let mut moves = board.legal_moves();
        if self.config.shuffle {
            moves.shuffle(rng);
        }

        let mut best_score = alpha;
        let mut best_move = None;

        for pos in moves {
            board.place(pos, mover)?;
            let score = match board.evaluate(pos) {
                Outcome::Win => 1.0 / depth as f64,
                Outcome::Draw => 0.0,
                Outcome::Undecided => match self.config.depth_limit {
                    Some(limit) if depth >= limit => -1.0 / limit as f64,
                    _ => {
                        let (reply, _) = self.search(
                            board,
                            mover.opponent(),
                            depth + 1,
                            -beta,
                            -best_score,
                            rng,
                        )?;
                        -reply
                    }
                },
            };
            board.remove(pos)?;

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
            if beta <= best_score {
                break;
            }
        }

        Ok((best_score, best_move))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::board::TicTacToe;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_takes_immediate_win() {
        // X completes the left column at position 0
        let mut board = TicTacToe::from_rows(&[".X.", "XOO", "XOO"], Player::X).unwrap();
        let minimax = Minimax::new(MinimaxConfig::exhaustive());
        let pos = minimax.choose_move(&mut board, Player::X, &mut rng()).unwrap();
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = TicTacToe::from_rows(&["X..", ".O.", "..."], Player::X).unwrap();
        let before = board.clone();
        let minimax = Minimax::new(MinimaxConfig::exhaustive());
        minimax.choose_move(&mut board, Player::X, &mut rng()).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_legal_moves_is_an_error() {
        let mut board = TicTacToe::from_rows(&["XOX", "XOO", "OXX"], Player::O).unwrap();
        let minimax = Minimax::new(MinimaxConfig::exhaustive());
        let result = minimax.choose_move(&mut board, Player::O, &mut rng());
        assert!(matches!(result, Err(Error::NoLegalMoves)));
    }

    #[test]
    fn test_empty_board_is_drawn() {
        let mut board = TicTacToe::new();
        let minimax = Minimax::new(MinimaxConfig::exhaustive());
        let score = minimax
            .evaluate_position(&mut board, Player::X, &mut rng())
            .unwrap();
        assert_eq!(score, 0.0, "perfect play from the empty board is a draw");
    }

    #[test]
    fn test_faster_win_preferred() {
        // X can win immediately at 2 (top row) or set up slower wins;
        // the depth decay must pick the immediate one.
        let mut board = TicTacToe::from_rows(&["XX.", ".O.", "O.X"], Player::X).unwrap();
        let minimax = Minimax::new(MinimaxConfig::exhaustive());
        let pos = minimax.choose_move(&mut board, Player::X, &mut rng()).unwrap();
        assert_eq!(pos, 2);
    }
}
