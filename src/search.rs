//! Adversarial search strategies over the board abstraction

pub mod mcts;
pub mod minimax;
pub mod strategy;

pub use mcts::{Mcts, MctsConfig};
pub use minimax::{Minimax, MinimaxConfig};
pub use strategy::Strategy;
