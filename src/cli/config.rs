//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
        }
    }
}

/// Self-play configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub games: usize,

    /// Strategy token for the first player (X)
    pub x: String,

    /// Strategy token for the second player (O)
    pub o: String,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            x: "minimax".to_string(),
            o: "minimax".to_string(),
        }
    }
}
