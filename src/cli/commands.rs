//! CLI commands and shared argument parsing

pub mod play;
pub mod selfplay;

use crate::error::{Error, Result};
use crate::search::{Mcts, MctsConfig, Minimax, MinimaxConfig, Strategy};

/// Which game a command operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    TicTacToe,
    FourInARow,
}

/// Parse a game token from the command line
pub fn parse_game(input: &str) -> Result<GameKind> {
    match input.to_lowercase().as_str() {
        "tictactoe" | "ttt" => Ok(GameKind::TicTacToe),
        "fourinarow" | "four" | "connect4" => Ok(GameKind::FourInARow),
        _ => Err(Error::ParseGame {
            input: input.to_string(),
            expected: "tictactoe, fourinarow".to_string(),
        }),
    }
}

/// Parse a strategy token: `random`, `minimax[:depth]`, or
/// `mcts[:iterations]`.
///
/// Minimax without an explicit depth uses the game-appropriate setting:
/// exhaustive for tic-tac-toe, eight plies for four-in-a-row.
pub fn parse_strategy(input: &str, game: GameKind) -> Result<Strategy> {
    let expected = || Error::ParseStrategy {
        input: input.to_string(),
        expected: "random, minimax[:depth], mcts[:iterations]".to_string(),
    };
    let lowered = input.to_lowercase();
    let (name, arg) = match lowered.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (lowered.as_str(), None),
    };
    let parse_count = |value: &str| value.parse::<usize>().map_err(|_| expected());

    match (name, arg) {
        ("random", None) => Ok(Strategy::Random),
        ("minimax", arg) => {
            let config = match (arg, game) {
                (Some(value), _) => MinimaxConfig::depth_limited(parse_count(value)?),
                (None, GameKind::TicTacToe) => MinimaxConfig::exhaustive(),
                (None, GameKind::FourInARow) => MinimaxConfig::default(),
            };
            Ok(Strategy::Minimax(Minimax::new(config)))
        }
        ("mcts", arg) => {
            let config = match arg {
                Some(value) => MctsConfig::default().with_iterations(parse_count(value)?),
                None => MctsConfig::default(),
            };
            Ok(Strategy::Mcts(Mcts::new(config)))
        }
        _ => Err(expected()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game_tokens() {
        assert_eq!(parse_game("tictactoe").unwrap(), GameKind::TicTacToe);
        assert_eq!(parse_game("connect4").unwrap(), GameKind::FourInARow);
        assert!(parse_game("chess").is_err());
    }

    #[test]
    fn test_parse_strategy_defaults() {
        let strategy = parse_strategy("minimax", GameKind::TicTacToe).unwrap();
        assert_eq!(strategy.name(), "minimax");

        let strategy = parse_strategy("mcts", GameKind::TicTacToe).unwrap();
        assert_eq!(strategy.name(), "mcts");

        let strategy = parse_strategy("random", GameKind::FourInARow).unwrap();
        assert_eq!(strategy.name(), "random");
    }

    #[test]
    fn test_parse_strategy_with_arguments() {
        let Strategy::Minimax(search) = parse_strategy("minimax:4", GameKind::FourInARow).unwrap()
        else {
            panic!("expected minimax");
        };
        assert_eq!(search.config().depth_limit, Some(4));

        let Strategy::Mcts(search) = parse_strategy("mcts:500", GameKind::TicTacToe).unwrap()
        else {
            panic!("expected mcts");
        };
        assert_eq!(search.config().iterations, 500);
    }

    #[test]
    fn test_parse_strategy_rejects_unknown_tokens() {
        assert!(parse_strategy("alphazero", GameKind::TicTacToe).is_err());
        assert!(parse_strategy("minimax:deep", GameKind::TicTacToe).is_err());
        assert!(parse_strategy("random:3", GameKind::TicTacToe).is_err());
    }
}
