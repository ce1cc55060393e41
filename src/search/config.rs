//! Opponent configuration.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameRng};

/// Opponent configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Strength level; each variant maps it to a strategy or depth.
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Seed for the opponent's RNG.
    /// `None` draws from OS entropy; the same seed replays the same choices.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Config for the given difficulty with an unseeded RNG.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    /// Create a new config with custom difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG described by this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::from_seed_or_entropy(self.seed)
    }
}
