//! Monte Carlo tree search over a memo table keyed by canonical board keys
//!
//! Instead of an explicit node tree, the search keeps one statistics entry
//! per visited board state, keyed by the board's canonical occupancy key.
//! Each iteration descends from the real position (expanding one unexplored
//! child or following UCB1), finishes the game with a random playout, and
//! walks the recorded back-links to credit every state on the path while
//! restoring the board move by move.
//!
//! The table persists across the real moves of one game, so exploration done
//! for earlier decisions keeps paying off; [`Mcts::reset`] clears it when a
//! new game starts.

use std::collections::HashMap;

use rand::{rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome, Player};
use crate::error::{Error, Result};

/// Tuning knobs for the Monte Carlo search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Simulations per move decision
    pub iterations: usize,

    /// UCB1 exploration constant
    pub exploration: f64,

    /// Credit losses as 0 instead of -1 when accumulating outcomes
    pub floor_losses: bool,
}

impl MctsConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_exploration(mut self, exploration: f64) -> Self {
        self.exploration = exploration;
        self
    }
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            iterations: 1000,
            exploration: 0.3,
            floor_losses: false,
        }
    }
}

/// Accumulated statistics for one explored board state
#[derive(Debug, Clone, Copy, PartialEq)]
struct NodeStats {
    /// Sum of simulation outcomes that passed through this state
    wins: f64,
    visits: u32,
    /// Move that produced this state when it was last stepped into during
    /// selection or expansion; followed backwards to unwind the board
    /// during backpropagation. `None` marks the root of the current
    /// decision.
    via: Option<usize>,
}

/// Monte Carlo tree search with a per-game state memo table
#[derive(Debug, Clone, Default)]
pub struct Mcts {
    config: MctsConfig,
    table: HashMap<String, NodeStats>,
}

impl Mcts {
    pub fn new(config: MctsConfig) -> Self {
        Mcts {
            config,
            table: HashMap::new(),
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Forget everything learned in the current game
    pub fn reset(&mut self) {
        self.table.clear();
    }

    /// Number of states with recorded statistics
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Recorded (wins, visits) for a canonical key, if the state has been
    /// explored
    pub fn node_stats(&self, key: &str) -> Option<(f64, u32)> {
        self.table.get(key).map(|stats| (stats.wins, stats.visits))
    }

    /// Pick the best move for `mover` from the current position.
    ///
    /// Runs the configured number of simulations, then answers the legal
    /// move whose resulting state has been visited most often (the most
    /// robust choice, not the highest win rate). The board is mutated during
    /// the search and restored before returning.
    ///
    /// # Errors
    ///
    /// `NoLegalMoves` when the position has no playable cell; callers are
    /// expected to check for game over before asking for a move.
    pub fn choose_move<B: Board>(
        &mut self,
        board: &mut B,
        mover: Player,
        rng: &mut StdRng,
    ) -> Result<usize> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }

        // The root entry anchors backpropagation: its back-link is cleared
        // even when the state was first reached as a child of an earlier
        // decision.
        let root = self
            .table
            .entry(board.canonical_key())
            .or_insert(NodeStats {
                wins: 0.0,
                visits: 0,
                via: None,
            });
        root.via = None;

        for _ in 0..self.config.iterations {
            let mut score = self.descend(board, mover, rng)?;
            if self.config.floor_losses && score < 0.0 {
                score = 0.0;
            }
            self.backpropagate(board, score)?;
        }

        self.most_visited_child(board, &moves)
    }

    /// Walk the memo table from the current position: expand one unexplored
    /// child (then play the game out at random), or follow UCB1 one level
    /// down and recurse. The selection and expansion moves stay on the board
    /// for backpropagation to unwind.
    fn descend<B: Board>(&mut self, board: &mut B, mover: Player, rng: &mut StdRng) -> Result<f64> {
        let unexplored = self.unexplored_moves(board)?;
        if let Some(&pos) = unexplored.choose(rng) {
            let player = board.to_move();
            board.place(pos, player)?;
            self.table.insert(
                board.canonical_key(),
                NodeStats {
                    wins: 0.0,
                    visits: 0,
                    via: Some(pos),
                },
            );
            return match score_for(board.evaluate(pos), player, mover) {
                Some(score) => Ok(score),
                None => self.playout(board, mover, rng),
            };
        }

        // Every child has an entry: descend along the UCB1-best one,
        // maximizing on the searcher's turns and minimizing on the
        // opponent's.
        let parent_visits = self
            .table
            .get(&board.canonical_key())
            .map(|stats| stats.visits)
            .unwrap_or(0);
        let maximizing = board.to_move() == mover;
        let pos = self.ucb_choice(board, parent_visits, maximizing)?;
        let player = board.to_move();
        board.place(pos, player)?;
        // Refresh the back-link so the chain always mirrors the path taken
        // this iteration, even when the state was first expanded during an
        // earlier decision and is now reached through a different move
        // order.
        let key = board.canonical_key();
        match self.table.get_mut(&key) {
            Some(stats) => stats.via = Some(pos),
            None => return Err(Error::MissingStateStats { key }),
        }
        match score_for(board.evaluate(pos), player, mover) {
            Some(score) => Ok(score),
            None => self.descend(board, mover, rng),
        }
    }

    /// Legal moves whose resulting state has no entry yet
    fn unexplored_moves<B: Board>(&self, board: &mut B) -> Result<Vec<usize>> {
        let mut unexplored = Vec::new();
        for pos in board.legal_moves() {
            let player = board.to_move();
            board.place(pos, player)?;
            let known = self.table.contains_key(&board.canonical_key());
            board.remove(pos)?;
            if !known {
                unexplored.push(pos);
            }
        }
        Ok(unexplored)
    }

    /// UCB1 over the children recorded in the table
    fn ucb_choice<B: Board>(
        &self,
        board: &mut B,
        parent_visits: u32,
        maximizing: bool,
    ) -> Result<usize> {
        let exploration = self.config.exploration;
        let parent_visits = f64::from(parent_visits);
        let mut best: Option<(f64, usize)> = None;

        for pos in board.legal_moves() {
            let player = board.to_move();
            board.place(pos, player)?;
            let key = board.canonical_key();
            board.remove(pos)?;

            let Some(stats) = self.table.get(&key) else {
                continue;
            };
            let visits = f64::from(stats.visits);
            let score = stats.wins / visits + exploration * (parent_visits.ln() / visits).sqrt();
            let ranked = if maximizing { score } else { -score };
            if best.is_none_or(|(b, _)| ranked >= b) {
                best = Some((ranked, pos));
            }
        }

        best.map(|(_, pos)| pos).ok_or(Error::NoLegalMoves)
    }

    /// Uniformly random continuation to a terminal state; restores every
    /// move it makes before returning.
    fn playout<B: Board>(&self, board: &mut B, mover: Player, rng: &mut StdRng) -> Result<f64> {
        let moves = board.legal_moves();
        let Some(&pos) = moves.choose(rng) else {
            return Err(Error::NoLegalMoves);
        };
        let player = board.to_move();
        board.place(pos, player)?;
        let score = match score_for(board.evaluate(pos), player, mover) {
            Some(score) => Ok(score),
            None => self.playout(board, mover, rng),
        };
        board.remove(pos)?;
        score
    }

    /// Unwind the moves recorded on the path and credit the simulation
    /// result to every state along it, root included.
    fn backpropagate<B: Board>(&mut self, board: &mut B, score: f64) -> Result<()> {
        loop {
            let key = board.canonical_key();
            let Some(stats) = self.table.get_mut(&key) else {
                return Err(Error::MissingStateStats { key });
            };
            stats.wins += score;
            stats.visits += 1;
            match stats.via {
                Some(pos) => board.remove(pos)?,
                None => return Ok(()),
            }
        }
    }

    /// Robust-child rule: the legal move whose resulting state has been
    /// visited most often
    fn most_visited_child<B: Board>(&self, board: &mut B, moves: &[usize]) -> Result<usize> {
        let mut best: Option<(u32, usize)> = None;
        for &pos in moves {
            let player = board.to_move();
            board.place(pos, player)?;
            let key = board.canonical_key();
            board.remove(pos)?;

            if let Some(stats) = self.table.get(&key) {
                if best.is_none_or(|(visits, _)| stats.visits >= visits) {
                    best = Some((stats.visits, pos));
                }
            }
        }
        // With at least one simulation some child has an entry; the
        // fallback only covers a zero-iteration configuration.
        best.map(|(_, pos)| pos)
            .or(moves.first().copied())
            .ok_or(Error::NoLegalMoves)
    }
}

/// Map a placement verdict to a score from `mover`'s point of view:
/// +1 when the placed piece wins for `mover`, -1 when it wins for the
/// opponent, 0 for a draw, `None` while the game is undecided.
fn score_for(outcome: Outcome, placed: Player, mover: Player) -> Option<f64> {
    match outcome {
        Outcome::Win if placed == mover => Some(1.0),
        Outcome::Win => Some(-1.0),
        Outcome::Draw => Some(0.0),
        Outcome::Undecided => None,
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
    fn test_score_for_perspectives() {
        assert_eq!(score_for(Outcome::Win, Player::X, Player::X), Some(1.0));
        assert_eq!(score_for(Outcome::Win, Player::O, Player::X), Some(-1.0));
        assert_eq!(score_for(Outcome::Draw, Player::O, Player::X), Some(0.0));
        assert_eq!(score_for(Outcome::Undecided, Player::X, Player::X), None);
    }

    #[test]
    fn test_single_legal_move_is_chosen() {
        let mut board = TicTacToe::from_rows(&[".OX", "OXX", "OXO"], Player::X).unwrap();
        let mut mcts = Mcts::new(MctsConfig::default().with_iterations(10));
        let pos = mcts.choose_move(&mut board, Player::X, &mut rng()).unwrap();
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = TicTacToe::from_rows(&["X..", ".O.", "..."], Player::X).unwrap();
        let before = board.clone();
        let mut mcts = Mcts::new(MctsConfig::default());
        mcts.choose_move(&mut board, Player::X, &mut rng()).unwrap();
        assert_eq!(board, before, "search must leave the board untouched");
    }

    #[test]
    fn test_no_legal_moves_is_an_error() {
        let mut board = TicTacToe::from_rows(&["XOX", "XOO", "OXX"], Player::O).unwrap();
        let mut mcts = Mcts::new(MctsConfig::default());
        let result = mcts.choose_move(&mut board, Player::O, &mut rng());
        assert!(matches!(result, Err(Error::NoLegalMoves)));
    }

    #[test]
    fn test_table_persists_until_reset() {
        let mut board = TicTacToe::new();
        let mut mcts = Mcts::new(MctsConfig::default().with_iterations(50));
        mcts.choose_move(&mut board, Player::X, &mut rng()).unwrap();
        assert!(!mcts.is_empty());

        mcts.reset();
        assert!(mcts.is_empty());
    }

    #[test]
    fn test_root_visits_match_iteration_budget() {
        let mut board = TicTacToe::new();
        let mut mcts = Mcts::new(MctsConfig::default().with_iterations(200));
        mcts.choose_move(&mut board, Player::X, &mut rng()).unwrap();

        let (_, visits) = mcts.node_stats(&board.canonical_key()).unwrap();
        assert_eq!(visits, 200);
    }
}
